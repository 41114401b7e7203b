//! Recording collaborator doubles.
//!
//! Both doubles remember every call they receive and can be told to fail.
//! Clones share the same call log, so a test can keep one handle and give
//! another to the service.

use std::sync::{Arc, Mutex};
use ticket_gate_core::{
    AccountId, Money, PaymentError, SeatReservationError, SeatReservationService, TicketPaymentService,
};

/// A `make_payment` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentCall {
    /// Account charged
    pub account_id: AccountId,
    /// Amount charged
    pub amount: Money,
}

/// A `reserve_seat` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReservationCall {
    /// Account the seats are for
    pub account_id: AccountId,
    /// Seats requested
    pub seat_count: u64,
}

/// Payment service that records calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingPaymentService {
    calls: Arc<Mutex<Vec<PaymentCall>>>,
    failure: Option<PaymentError>,
}

impl RecordingPaymentService {
    /// Payment service that accepts every call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Payment service that records every call and then fails with `error`.
    #[must_use]
    pub fn failing(error: PaymentError) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some(error),
        }
    }

    /// Calls received so far
    #[must_use]
    pub fn calls(&self) -> Vec<PaymentCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), PaymentError> {
        self.calls
            .lock()
            .map_err(|_| PaymentError::Other {
                message: "Mutex lock failed".to_string(),
            })?
            .push(PaymentCall { account_id, amount });

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Seat reservation service that records calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingSeatReservationService {
    calls: Arc<Mutex<Vec<ReservationCall>>>,
    failure: Option<SeatReservationError>,
}

impl RecordingSeatReservationService {
    /// Reservation service that accepts every call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reservation service that records every call and then fails with `error`.
    #[must_use]
    pub fn failing(error: SeatReservationError) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some(error),
        }
    }

    /// Calls received so far
    #[must_use]
    pub fn calls(&self) -> Vec<ReservationCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl SeatReservationService for RecordingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), SeatReservationError> {
        self.calls
            .lock()
            .map_err(|_| SeatReservationError::Other {
                message: "Mutex lock failed".to_string(),
            })?
            .push(ReservationCall {
                account_id,
                seat_count,
            });

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
