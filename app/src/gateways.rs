//! Stand-in payment and seat booking services.
//!
//! Both adapters accept every call and log it. Replace them with real
//! integrations by implementing the core collaborator traits.

use std::sync::Arc;
use ticket_gate_core::{
    AccountId, Money, PaymentError, SeatReservationError, SeatReservationService, TicketPaymentService,
};

/// Payment gateway that always succeeds.
#[derive(Clone, Debug, Default)]
pub struct LoggingPaymentGateway;

impl LoggingPaymentGateway {
    /// Creates a new logging payment gateway
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn TicketPaymentService> {
        Arc::new(Self::new())
    }
}

impl TicketPaymentService for LoggingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), PaymentError> {
        tracing::info!(
            %account_id,
            amount = amount.units(),
            "Payment taken"
        );
        Ok(())
    }
}

/// Seat booking service that always succeeds.
#[derive(Clone, Debug, Default)]
pub struct LoggingSeatBooking;

impl LoggingSeatBooking {
    /// Creates a new logging seat booking service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationService> {
        Arc::new(Self::new())
    }
}

impl SeatReservationService for LoggingSeatBooking {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), SeatReservationError> {
        tracing::info!(%account_id, seat_count, "Seats reserved");
        Ok(())
    }
}
