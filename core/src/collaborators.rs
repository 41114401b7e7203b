//! Ports to the external payment and seat booking services.
//!
//! The gate trusts both services: it never re-validates what they accept and
//! never retries or compensates when they fail. Implementations are injected
//! into [`TicketService`](crate::TicketService) as `Arc<dyn …>`.

use crate::types::{AccountId, Money};
use thiserror::Error;

/// Payment service error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Payment declined by the provider
    #[error("Payment declined: {reason}")]
    Declined {
        /// Decline reason
        reason: String,
    },
    /// Provider could not be reached
    #[error("Payment service unavailable")]
    Unavailable,
    /// Other error
    #[error("Payment error: {message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Seat reservation service error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatReservationError {
    /// Not enough seats left
    #[error("Not enough seats available: requested {requested}")]
    InsufficientSeats {
        /// Seats requested
        requested: u64,
    },
    /// Service could not be reached
    #[error("Seat reservation service unavailable")]
    Unavailable,
    /// Other error
    #[error("Seat reservation error: {message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Takes payment for a purchase.
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` to `account_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the payment was not taken.
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), PaymentError>;
}

/// Reserves seats for a purchase.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seat_count` seats for `account_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the seats were not reserved.
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), SeatReservationError>;
}
