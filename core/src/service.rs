//! The purchase gate.
//!
//! [`TicketService::purchase_tickets`] validates a request, prices it, takes
//! payment and reserves seats, in that order. Nothing is sent to a
//! collaborator unless every rule passes.

use crate::collaborators::{SeatReservationService, TicketPaymentService};
use crate::error::Result;
use crate::metrics;
use crate::pricing::PriceTable;
use crate::types::{PurchaseReceipt, PurchaseRequest};
use crate::validation::{self, PurchaseLimits, ValidatedPurchase};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// How many times the seat reservation service is called per purchase.
///
/// Both policies pass the full ticket count (infants included) on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationPolicy {
    /// One call for the whole purchase.
    #[default]
    Aggregate,
    /// One call per request line, each with the whole-purchase seat count.
    /// Matches the behaviour of the legacy booking gate.
    PerLineItem,
}

impl ReservationPolicy {
    /// Name used in configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aggregate => "aggregate",
            Self::PerLineItem => "per-line-item",
        }
    }

    fn reservation_calls(self, purchase: &ValidatedPurchase) -> usize {
        match self {
            Self::Aggregate => 1,
            Self::PerLineItem => purchase.lines().len(),
        }
    }
}

impl fmt::Display for ReservationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown reservation policy name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown reservation policy: {0} (expected aggregate or per-line-item)")]
pub struct ParseReservationPolicyError(String);

impl FromStr for ReservationPolicy {
    type Err = ParseReservationPolicyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggregate" => Ok(Self::Aggregate),
            "per-line-item" | "per_line_item" => Ok(Self::PerLineItem),
            other => Err(ParseReservationPolicyError(other.to_string())),
        }
    }
}

/// Validates ticket purchases and hands accepted ones to payment and seat booking.
///
/// Holds no mutable state; share it behind an `Arc` if needed.
#[derive(Clone)]
pub struct TicketService {
    payment: Arc<dyn TicketPaymentService>,
    reservation: Arc<dyn SeatReservationService>,
    prices: PriceTable,
    limits: PurchaseLimits,
    policy: ReservationPolicy,
}

impl TicketService {
    /// Create a service with default prices, limits and reservation policy.
    #[must_use]
    pub fn new(
        payment: Arc<dyn TicketPaymentService>,
        reservation: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            payment,
            reservation,
            prices: PriceTable::default(),
            limits: PurchaseLimits::default(),
            policy: ReservationPolicy::default(),
        }
    }

    /// Use `prices` instead of the default price table.
    #[must_use]
    pub const fn with_price_table(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    /// Use `limits` instead of the default limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: PurchaseLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Use `policy` for seat reservation calls.
    #[must_use]
    pub const fn with_reservation_policy(mut self, policy: ReservationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active price table
    #[must_use]
    pub const fn price_table(&self) -> &PriceTable {
        &self.prices
    }

    /// Active limits
    #[must_use]
    pub const fn limits(&self) -> &PurchaseLimits {
        &self.limits
    }

    /// Active reservation policy
    #[must_use]
    pub const fn reservation_policy(&self) -> ReservationPolicy {
        self.policy
    }

    /// Validate `request`, take payment, then reserve seats.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::Invalid`](crate::PurchaseError::Invalid) if a business rule is broken; no collaborator is called.
    /// - [`PurchaseError::Payment`](crate::PurchaseError::Payment) if payment fails; seats are not reserved.
    /// - [`PurchaseError::SeatReservation`](crate::PurchaseError::SeatReservation) if a reservation call fails. Payment
    ///   has already been taken at that point and is not refunded.
    #[tracing::instrument(
        skip(self, request),
        name = "purchase_tickets",
        fields(account_id = ?request.account_id, lines = request.tickets.len())
    )]
    pub fn purchase_tickets(&self, request: &PurchaseRequest) -> Result<PurchaseReceipt> {
        let purchase = match validation::validate(request, &self.limits) {
            Ok(purchase) => purchase,
            Err(reason) => {
                tracing::warn!(reason = reason.code(), "Purchase rejected: {reason}");
                metrics::record_purchase_rejected(&reason);
                return Err(reason.into());
            }
        };

        self.complete(&purchase).inspect_err(|error| {
            tracing::error!(%error, "Purchase failed in collaborator");
            metrics::record_purchase_failed();
        })
    }

    fn complete(&self, purchase: &ValidatedPurchase) -> Result<PurchaseReceipt> {
        let account_id = purchase.account_id();
        let total_price = self.prices.total(purchase.lines());
        let seats = purchase.ticket_count();

        self.payment.make_payment(account_id, total_price)?;
        tracing::debug!(%account_id, amount = total_price.units(), "Payment taken");

        let reservation_calls = self.policy.reservation_calls(purchase);
        for _ in 0..reservation_calls {
            self.reservation.reserve_seat(account_id, seats)?;
        }

        tracing::info!(
            %account_id,
            amount = total_price.units(),
            seats,
            reservation_calls,
            "Purchase accepted"
        );
        metrics::record_purchase_accepted(seats, total_price);

        Ok(PurchaseReceipt {
            account_id,
            total_price,
            seats_reserved: seats,
            reservation_calls,
        })
    }
}
