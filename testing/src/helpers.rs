//! Request builders for tests.

use ticket_gate_core::{PurchaseRequest, TicketType, TicketTypeRequest};

/// `quantity` adult tickets
#[must_use]
pub const fn adults(quantity: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Adult, quantity)
}

/// `quantity` child tickets
#[must_use]
pub const fn children(quantity: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Child, quantity)
}

/// `quantity` infant tickets
#[must_use]
pub const fn infants(quantity: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Infant, quantity)
}

/// Purchase for a known-good account
#[must_use]
pub fn purchase_for(account_id: i64, tickets: &[TicketTypeRequest]) -> PurchaseRequest {
    PurchaseRequest::new(Some(account_id), tickets.to_vec())
}
