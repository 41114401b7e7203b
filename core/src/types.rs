//! Domain types for ticket purchases.
//!
//! Raw inputs ([`PurchaseRequest`], [`TicketTypeRequest`]) keep every field
//! optional or signed so malformed requests can be represented and rejected
//! with a reason. Everything downstream of validation works on the checked
//! types ([`AccountId`], [`TicketLine`]).

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Ticket type
// ============================================================================

/// Kind of ticket being purchased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Adult ticket
    Adult,
    /// Child ticket
    Child,
    /// Infant ticket
    Infant,
}

impl TicketType {
    /// All ticket types, in price-table order.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Returns the upper-case name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Validated purchasing account identifier (always positive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    /// Creates an `AccountId` if `raw` is a positive integer.
    #[must_use]
    pub fn new(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().filter(|id| *id > 0).map(Self)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object
// ============================================================================

/// An amount in whole currency units.
///
/// The gate never divides or converts amounts, so integer units are enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from whole units
    #[must_use]
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole units
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, saturating at `u64::MAX`
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies by a ticket quantity, saturating at `u64::MAX`
    #[must_use]
    pub const fn saturating_times(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Requests
// ============================================================================

/// One line item of a purchase, as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    /// Ticket type, `None` when the caller left it out
    #[serde(default)]
    pub ticket_type: Option<TicketType>,
    /// Number of tickets of this type
    pub quantity: i64,
}

impl TicketTypeRequest {
    /// Creates a line item for `quantity` tickets of `ticket_type`.
    #[must_use]
    pub const fn new(ticket_type: TicketType, quantity: i64) -> Self {
        Self {
            ticket_type: Some(ticket_type),
            quantity,
        }
    }

    /// Creates a line item with no ticket type.
    #[must_use]
    pub const fn untyped(quantity: i64) -> Self {
        Self {
            ticket_type: None,
            quantity,
        }
    }
}

/// A purchase call: who is buying and what.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Purchasing account, `None` when absent
    #[serde(default)]
    pub account_id: Option<i64>,
    /// Line items, in caller order
    #[serde(default)]
    pub tickets: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    /// Creates a purchase request.
    #[must_use]
    pub fn new(account_id: Option<i64>, tickets: impl Into<Vec<TicketTypeRequest>>) -> Self {
        Self {
            account_id,
            tickets: tickets.into(),
        }
    }
}

// ============================================================================
// Validated purchase
// ============================================================================

/// A line item that passed shape validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TicketLine {
    /// Ticket type
    pub ticket_type: TicketType,
    /// Quantity, at least 1
    pub quantity: u64,
}

/// Outcome of a successful purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    /// Account that was charged
    pub account_id: AccountId,
    /// Amount passed to the payment service
    pub total_price: Money,
    /// Seat count passed to the reservation service
    pub seats_reserved: u64,
    /// Number of reservation calls made
    pub reservation_calls: usize,
}
