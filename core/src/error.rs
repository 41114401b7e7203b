//! Error types for ticket purchases.

use crate::collaborators::{PaymentError, SeatReservationError};
use thiserror::Error;

/// Result type alias for purchase operations.
pub type Result<T> = std::result::Result<T, PurchaseError>;

/// A purchase request broke one of the business rules.
///
/// Variants are listed in the order the rules are checked; a request only
/// ever reports the first rule it breaks.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchaseError {
    /// No account identifier was supplied.
    #[error("Account Id cannot be empty")]
    NullAccountId,

    /// The account identifier is zero or negative.
    #[error("Please enter a valid Account Id")]
    InvalidAccountId,

    /// A line item has no ticket type or a quantity below one.
    #[error("Please fill valid ticket details")]
    InvalidTicketDetails,

    /// More tickets were requested than a single purchase allows.
    #[error("Cannot buy more than {max} tickets")]
    LimitExceeded {
        /// Maximum tickets per purchase
        max: u64,
    },

    /// The purchase contains no adult ticket.
    #[error("At least one adult ticket is required")]
    AtLeastOneAdultRequired,
}

impl InvalidPurchaseError {
    /// Stable reason code, suitable for metric labels and machine output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NullAccountId => "NullAccountId",
            Self::InvalidAccountId => "InvalidAccountId",
            Self::InvalidTicketDetails => "InvalidTicketDetails",
            Self::LimitExceeded { .. } => "LimitExceeded",
            Self::AtLeastOneAdultRequired => "AtLeastOneAdultRequired",
        }
    }
}

/// Everything that can stop a purchase.
///
/// Collaborator failures are passed through untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// The request was rejected before any collaborator was called.
    #[error("Invalid purchase: {0}")]
    Invalid(#[from] InvalidPurchaseError),

    /// The payment service failed.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// The seat reservation service failed after payment was taken.
    #[error(transparent)]
    SeatReservation(#[from] SeatReservationError),
}

impl PurchaseError {
    /// Returns the rule violation, if this is a validation failure.
    #[must_use]
    pub const fn as_invalid(&self) -> Option<&InvalidPurchaseError> {
        match self {
            Self::Invalid(reason) => Some(reason),
            Self::Payment(_) | Self::SeatReservation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            InvalidPurchaseError::NullAccountId.to_string(),
            "Account Id cannot be empty"
        );
        assert_eq!(
            InvalidPurchaseError::LimitExceeded { max: 20 }.to_string(),
            "Cannot buy more than 20 tickets"
        );
    }

    #[test]
    fn test_codes_are_variant_names() {
        assert_eq!(InvalidPurchaseError::InvalidTicketDetails.code(), "InvalidTicketDetails");
        assert_eq!(InvalidPurchaseError::LimitExceeded { max: 3 }.code(), "LimitExceeded");
    }

    #[test]
    fn test_collaborator_error_is_transparent() {
        let err = PurchaseError::from(PaymentError::Declined {
            reason: "insufficient funds".to_string(),
        });
        assert_eq!(err.to_string(), "Payment declined: insufficient funds");
        assert!(err.as_invalid().is_none());
    }
}
