//! # Ticket Gate Testing
//!
//! Testing utilities for the ticket gate.
//!
//! This crate provides:
//! - Recording doubles for the payment and seat reservation services
//! - A Given-When-Then harness for purchases
//! - Request builders
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use ticket_gate_core::Money;
//! use ticket_gate_testing::{adults, assertions, infants, PurchaseTest};
//!
//! PurchaseTest::new()
//!     .when_purchase(Some(6), vec![adults(1), infants(1)])
//!     .then(|outcome| assertions::assert_accepted(outcome, Money::new(20), 2))
//!     .run();
//! ```

pub mod helpers;
pub mod mocks;
pub mod properties;

// Re-export commonly used items
pub use helpers::{adults, children, infants, purchase_for};
pub use mocks::{PaymentCall, RecordingPaymentService, RecordingSeatReservationService, ReservationCall};
pub use purchase_test::{assertions, PurchaseOutcome, PurchaseTest};
