//! Business metrics for the purchase gate.
//!
//! # Exported Metrics
//!
//! - `ticket_gate_purchases_total{outcome}` - Purchases by outcome (accepted, rejected, failed)
//! - `ticket_gate_rejections_total{reason}` - Rejected purchases by reason code
//! - `ticket_gate_tickets_sold_total` - Tickets in accepted purchases
//! - `ticket_gate_revenue_total` - Amount charged for accepted purchases
//!
//! Recording goes through the `metrics` facade and is a no-op until the host
//! installs a recorder.

use crate::error::InvalidPurchaseError;
use crate::types::Money;
use metrics::describe_counter;

/// Register descriptions for every purchase metric.
///
/// Call once at startup, before any purchase is handled.
pub fn register_purchase_metrics() {
    describe_counter!(
        "ticket_gate_purchases_total",
        "Total number of purchase attempts by outcome (accepted, rejected, failed)"
    );
    describe_counter!(
        "ticket_gate_rejections_total",
        "Total number of rejected purchases by reason code"
    );
    describe_counter!(
        "ticket_gate_tickets_sold_total",
        "Total number of tickets in accepted purchases"
    );
    describe_counter!(
        "ticket_gate_revenue_total",
        "Total amount charged for accepted purchases"
    );

    tracing::debug!("Purchase metrics registered");
}

/// Record an accepted purchase.
pub fn record_purchase_accepted(tickets: u64, amount: Money) {
    metrics::counter!("ticket_gate_purchases_total", "outcome" => "accepted").increment(1);
    metrics::counter!("ticket_gate_tickets_sold_total").increment(tickets);
    metrics::counter!("ticket_gate_revenue_total").increment(amount.units());
}

/// Record a purchase that broke a business rule.
pub fn record_purchase_rejected(reason: &InvalidPurchaseError) {
    metrics::counter!("ticket_gate_purchases_total", "outcome" => "rejected").increment(1);
    metrics::counter!("ticket_gate_rejections_total", "reason" => reason.code()).increment(1);
}

/// Record a purchase that failed in a collaborator.
pub fn record_purchase_failed() {
    metrics::counter!("ticket_gate_purchases_total", "outcome" => "failed").increment(1);
}
