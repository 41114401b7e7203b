//! Integration tests for the purchase gate
//!
//! Each test wires a `TicketService` to recording doubles and checks both the
//! result and what reached the payment and seat reservation services.

#![allow(clippy::unwrap_used)] // Test code can use unwrap

use std::sync::Arc;
use ticket_gate_core::{
    InvalidPurchaseError, Money, PaymentError, PriceTable, PurchaseError, PurchaseLimits,
    ReservationPolicy, SeatReservationError, TicketService, TicketTypeRequest,
};
use ticket_gate_testing::{
    adults, assertions, children, infants, purchase_for, PurchaseTest, RecordingPaymentService,
    RecordingSeatReservationService,
};

fn reject(account_id: Option<i64>, tickets: Vec<TicketTypeRequest>, expected: InvalidPurchaseError) {
    PurchaseTest::new()
        .when_purchase(account_id, tickets)
        .then(move |outcome| assertions::assert_rejected(outcome, expected))
        .run();
}

// ============================================================================
// Account rules
// ============================================================================

#[test]
fn test_null_account_id() {
    reject(None, vec![adults(11)], InvalidPurchaseError::NullAccountId);
}

#[test]
fn test_zero_account_id() {
    reject(Some(0), vec![adults(11)], InvalidPurchaseError::InvalidAccountId);
}

#[test]
fn test_negative_account_id() {
    reject(Some(-2), vec![adults(11)], InvalidPurchaseError::InvalidAccountId);
}

#[test]
fn test_null_account_id_with_no_tickets() {
    reject(None, vec![], InvalidPurchaseError::NullAccountId);
}

// ============================================================================
// Ticket rules
// ============================================================================

#[test]
fn test_zero_quantity() {
    reject(Some(6), vec![adults(0)], InvalidPurchaseError::InvalidTicketDetails);
}

#[test]
fn test_missing_ticket_type() {
    reject(
        Some(6),
        vec![TicketTypeRequest::untyped(1)],
        InvalidPurchaseError::InvalidTicketDetails,
    );
}

#[test]
fn test_more_than_twenty_tickets() {
    reject(Some(6), vec![adults(21)], InvalidPurchaseError::LimitExceeded { max: 20 });
}

#[test]
fn test_infants_count_toward_the_limit() {
    reject(
        Some(6),
        vec![adults(10), children(5), infants(6)],
        InvalidPurchaseError::LimitExceeded { max: 20 },
    );
}

#[test]
fn test_exactly_twenty_tickets_is_allowed() {
    PurchaseTest::new()
        .when_purchase(Some(6), vec![adults(20)])
        .then(|outcome| assertions::assert_accepted(outcome, Money::new(400), 20))
        .run();
}

#[test]
fn test_child_and_infant_without_adult() {
    reject(
        Some(6),
        vec![children(1), infants(1)],
        InvalidPurchaseError::AtLeastOneAdultRequired,
    );
}

#[test]
fn test_only_one_child() {
    reject(Some(6), vec![children(1)], InvalidPurchaseError::AtLeastOneAdultRequired);
}

#[test]
fn test_only_one_infant() {
    reject(Some(6), vec![infants(1)], InvalidPurchaseError::AtLeastOneAdultRequired);
}

// ============================================================================
// Accepted purchases
// ============================================================================

#[test]
fn test_one_adult_one_child_one_infant() {
    PurchaseTest::new()
        .when_purchase(Some(6), vec![adults(1), children(1), infants(1)])
        .then(|outcome| {
            assertions::assert_accepted(outcome, Money::new(30), 3);
            assert_eq!(outcome.reservations.len(), 1);
            assert_eq!(outcome.payments[0].account_id.get(), 6);

            let receipt = outcome.result.as_ref().unwrap();
            assert_eq!(receipt.total_price, Money::new(30));
            assert_eq!(receipt.seats_reserved, 3);
            assert_eq!(receipt.reservation_calls, 1);
        })
        .run();
}

#[test]
fn test_multiple_adult_lines_are_summed() {
    PurchaseTest::new()
        .when_purchase(Some(6), vec![adults(2), adults(2)])
        .then(|outcome| assertions::assert_accepted(outcome, Money::new(80), 4))
        .run();
}

#[test]
fn test_custom_price_table() {
    PurchaseTest::new()
        .given_prices(PriceTable::new(Money::new(25), Money::new(15), Money::new(0)))
        .when_purchase(Some(6), vec![adults(2), children(3), infants(2)])
        .then(|outcome| assertions::assert_accepted(outcome, Money::new(95), 7))
        .run();
}

#[test]
fn test_custom_limit() {
    PurchaseTest::new()
        .given_limits(PurchaseLimits {
            max_tickets_per_purchase: 5,
        })
        .when_purchase(Some(6), vec![adults(3), children(3)])
        .then(|outcome| {
            assertions::assert_rejected(outcome, InvalidPurchaseError::LimitExceeded { max: 5 });
        })
        .run();
}

// ============================================================================
// Reservation policy
// ============================================================================

#[test]
fn test_aggregate_policy_reserves_once() {
    PurchaseTest::new()
        .given_policy(ReservationPolicy::Aggregate)
        .when_purchase(Some(6), vec![adults(2), children(1), infants(1)])
        .then(|outcome| {
            assertions::assert_accepted(outcome, Money::new(50), 4);
            assert_eq!(outcome.reservations.len(), 1);
        })
        .run();
}

#[test]
fn test_per_line_item_policy_repeats_the_full_count() {
    PurchaseTest::new()
        .given_policy(ReservationPolicy::PerLineItem)
        .when_purchase(Some(6), vec![adults(2), children(1), infants(1)])
        .then(|outcome| {
            assertions::assert_accepted(outcome, Money::new(50), 4);
            assert_eq!(outcome.reservations.len(), 3);
            assert_eq!(outcome.result.as_ref().unwrap().reservation_calls, 3);
        })
        .run();
}

// ============================================================================
// Collaborator failures
// ============================================================================

#[test]
fn test_payment_failure_propagates_and_skips_reservation() {
    let declined = PaymentError::Declined {
        reason: "card expired".to_string(),
    };
    let expected = declined.clone();

    PurchaseTest::new()
        .given_payment_failure(declined)
        .when_purchase(Some(6), vec![adults(1)])
        .then(move |outcome| {
            assert_eq!(outcome.result, Err(PurchaseError::Payment(expected)));
            assert_eq!(outcome.payments.len(), 1);
            assert!(outcome.reservations.is_empty());
        })
        .run();
}

#[test]
fn test_reservation_failure_propagates_after_payment() {
    PurchaseTest::new()
        .given_reservation_failure(SeatReservationError::InsufficientSeats { requested: 2 })
        .when_purchase(Some(6), vec![adults(1), children(1)])
        .then(|outcome| {
            assert_eq!(
                outcome.result,
                Err(PurchaseError::SeatReservation(
                    SeatReservationError::InsufficientSeats { requested: 2 }
                ))
            );
            assert_eq!(outcome.payments.len(), 1);
            assert_eq!(outcome.reservations.len(), 1);
        })
        .run();
}

#[test]
fn test_per_line_item_stops_at_first_reservation_failure() {
    PurchaseTest::new()
        .given_policy(ReservationPolicy::PerLineItem)
        .given_reservation_failure(SeatReservationError::Unavailable)
        .when_purchase(Some(6), vec![adults(1), children(1), infants(1)])
        .then(|outcome| {
            assert!(matches!(outcome.result, Err(PurchaseError::SeatReservation(_))));
            assert_eq!(outcome.reservations.len(), 1);
        })
        .run();
}

// ============================================================================
// Service wiring
// ============================================================================

#[test]
fn test_service_is_reusable_across_purchases() {
    let payment = RecordingPaymentService::new();
    let seats = RecordingSeatReservationService::new();
    let service = TicketService::new(Arc::new(payment.clone()), Arc::new(seats.clone()));

    assert!(service.purchase_tickets(&purchase_for(1, &[adults(1)])).is_ok());
    assert!(service.purchase_tickets(&purchase_for(0, &[adults(1)])).is_err());
    assert!(service.purchase_tickets(&purchase_for(2, &[adults(1), infants(2)])).is_ok());

    let charged: Vec<u64> = payment.calls().iter().map(|call| call.amount.units()).collect();
    assert_eq!(charged, vec![20, 20]);
    let reserved: Vec<u64> = seats.calls().iter().map(|call| call.seat_count).collect();
    assert_eq!(reserved, vec![1, 3]);
}

#[test]
fn test_service_is_shareable_across_threads() {
    let payment = RecordingPaymentService::new();
    let service = Arc::new(TicketService::new(
        Arc::new(payment.clone()),
        Arc::new(RecordingSeatReservationService::new()),
    ));

    let handles: Vec<_> = (1..=4)
        .map(|account_id| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                service.purchase_tickets(&purchase_for(account_id, &[adults(1)]))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    assert_eq!(payment.calls().len(), 4);
}

#[test]
fn test_invalid_purchase_message_reaches_caller() {
    let outcome = PurchaseTest::new()
        .when_purchase(Some(6), vec![adults(21)])
        .outcome();

    let message = outcome.result.unwrap_err().to_string();
    assert_eq!(message, "Invalid purchase: Cannot buy more than 20 tickets");
}
