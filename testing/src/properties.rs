//! Property-based testing utilities using proptest.
//!
//! Strategies generate raw [`TicketTypeRequest`]s on either side of each
//! rule so properties can target one rule at a time.

use proptest::collection::vec;
use proptest::prelude::*;
use ticket_gate_core::{TicketType, TicketTypeRequest};

/// Any ticket type
pub fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// Child or infant, never adult
pub fn non_adult_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![Just(TicketType::Child), Just(TicketType::Infant)]
}

/// Account ids that pass validation
pub fn valid_account_id() -> impl Strategy<Value = i64> {
    1..=i64::MAX
}

/// Account ids that are present but zero or negative
pub fn non_positive_account_id() -> impl Strategy<Value = i64> {
    i64::MIN..=0
}

/// A well-formed line with a quantity in `1..=max_quantity`
pub fn well_formed_line(max_quantity: i64) -> impl Strategy<Value = TicketTypeRequest> {
    (ticket_type(), 1..=max_quantity).prop_map(|(ticket_type, quantity)| {
        TicketTypeRequest::new(ticket_type, quantity)
    })
}

/// A malformed line: no type, or a quantity below one
pub fn malformed_line() -> impl Strategy<Value = TicketTypeRequest> {
    prop_oneof![
        (ticket_type(), i64::MIN..=0)
            .prop_map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity)),
        any::<i64>().prop_map(TicketTypeRequest::untyped),
    ]
}

/// Well-formed lines whose quantities sum to at most `max_total`, with at
/// least one adult line
pub fn purchasable_lines(max_total: i64) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    vec(well_formed_line(max_total), 0..6).prop_map(move |others| {
        let mut lines = vec![TicketTypeRequest::new(TicketType::Adult, 1)];
        let mut total = 1;
        for line in others {
            if total + line.quantity <= max_total {
                total += line.quantity;
                lines.push(line);
            }
        }
        lines
    })
}

/// Well-formed lines without any adult, summing to at most `max_total`
pub fn adultless_lines(max_total: i64) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    vec((non_adult_type(), 1..=max_total.max(1)), 0..6).prop_map(move |candidates| {
        let mut lines = Vec::new();
        let mut total = 0;
        for (ticket_type, quantity) in candidates {
            if total + quantity <= max_total {
                total += quantity;
                lines.push(TicketTypeRequest::new(ticket_type, quantity));
            }
        }
        lines
    })
}

/// Well-formed lines whose quantities sum to more than `max_total`
pub fn oversized_lines(max_total: i64) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    (vec(well_formed_line(max_total), 0..4), ticket_type(), 1..=max_total).prop_map(
        move |(mut lines, ticket_type, extra)| {
            let total: i64 = lines.iter().map(|line| line.quantity).sum();
            let needed = (max_total + extra - total).max(1);
            lines.push(TicketTypeRequest::new(ticket_type, needed));
            lines
        },
    )
}

/// Any lines with at least one malformed entry, at any position
pub fn lines_with_malformed_entry() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    (vec(well_formed_line(30), 0..5), malformed_line(), any::<prop::sample::Index>()).prop_map(
        |(mut lines, bad, index)| {
            let position = index.index(lines.len() + 1);
            lines.insert(position, bad);
            lines
        },
    )
}
