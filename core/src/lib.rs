//! # Ticket Gate Core
//!
//! Business rules for ticket purchases at a venue booking service.
//!
//! A purchase names an account and a list of ticket lines (adult, child,
//! infant). The gate checks the request, prices it, and only then hands it
//! to the payment and seat reservation services.
//!
//! ## Rule Order
//!
//! ```text
//! account present ─▶ account positive ─▶ lines well-formed ─▶ count ≤ limit
//!        │                  │                   │                  │
//!  NullAccountId     InvalidAccountId   InvalidTicketDetails  LimitExceeded
//!
//! ─▶ adult present ─▶ price ─▶ make_payment ─▶ reserve_seat
//!         │
//!  AtLeastOneAdultRequired
//! ```
//!
//! ## Architecture Principles
//!
//! - Collaborators are injected as trait objects, never constructed here
//! - Validation returns a checked [`ValidatedPurchase`]; pricing and delegation
//!   only ever see checked data
//! - Errors are values ([`PurchaseError`]), not panics
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ticket_gate_core::{PurchaseRequest, TicketService, TicketType, TicketTypeRequest};
//!
//! let service = TicketService::new(Arc::new(my_payment), Arc::new(my_seats));
//! let receipt = service.purchase_tickets(&PurchaseRequest::new(
//!     Some(6),
//!     vec![
//!         TicketTypeRequest::new(TicketType::Adult, 1),
//!         TicketTypeRequest::new(TicketType::Infant, 1),
//!     ],
//! ))?;
//! assert_eq!(receipt.seats_reserved, 2);
//! ```

pub mod collaborators;
pub mod error;
pub mod metrics;
pub mod pricing;
pub mod service;
pub mod types;
pub mod validation;

pub use collaborators::{PaymentError, SeatReservationError, SeatReservationService, TicketPaymentService};
pub use error::{InvalidPurchaseError, PurchaseError, Result};
pub use pricing::PriceTable;
pub use service::{ParseReservationPolicyError, ReservationPolicy, TicketService};
pub use types::{AccountId, Money, PurchaseReceipt, PurchaseRequest, TicketLine, TicketType, TicketTypeRequest};
pub use validation::{validate, PurchaseLimits, ValidatedPurchase, DEFAULT_MAX_TICKETS_PER_PURCHASE};
