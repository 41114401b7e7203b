//! # Ticket Gate
//!
//! Application shell around [`ticket_gate_core`]: configuration, stand-in
//! collaborators, and service wiring for the `ticket-gate` binary.

pub mod config;
pub mod gateways;

pub use config::{Config, ConfigError};
pub use gateways::{LoggingPaymentGateway, LoggingSeatBooking};

use std::sync::Arc;
use ticket_gate_core::{SeatReservationService, TicketPaymentService, TicketService};

/// Build a [`TicketService`] from `config` and the given collaborators.
#[must_use]
pub fn build_service(
    config: &Config,
    payment: Arc<dyn TicketPaymentService>,
    reservation: Arc<dyn SeatReservationService>,
) -> TicketService {
    TicketService::new(payment, reservation)
        .with_price_table(config.prices)
        .with_limits(config.limits)
        .with_reservation_policy(config.reservation_policy)
}
