//! Ticket prices.

use crate::types::{Money, TicketLine, TicketType};
use serde::{Deserialize, Serialize};

/// Default adult ticket price
pub const DEFAULT_ADULT_PRICE: Money = Money::new(20);
/// Default child ticket price
pub const DEFAULT_CHILD_PRICE: Money = Money::new(10);
/// Default infant ticket price
pub const DEFAULT_INFANT_PRICE: Money = Money::new(0);

/// Unit price for every ticket type.
///
/// One field per [`TicketType`], so a lookup can never miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Adult ticket price
    pub adult: Money,
    /// Child ticket price
    pub child: Money,
    /// Infant ticket price
    pub infant: Money,
}

impl PriceTable {
    /// Creates a price table
    #[must_use]
    pub const fn new(adult: Money, child: Money, infant: Money) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    /// Unit price of `ticket_type`
    #[must_use]
    pub const fn price_of(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Total price of `lines`: the sum of unit price times quantity.
    #[must_use]
    pub fn total(&self, lines: &[TicketLine]) -> Money {
        lines.iter().fold(Money::ZERO, |total, line| {
            total.saturating_add(self.price_of(line.ticket_type).saturating_times(line.quantity))
        })
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new(DEFAULT_ADULT_PRICE, DEFAULT_CHILD_PRICE, DEFAULT_INFANT_PRICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(ticket_type: TicketType, quantity: u64) -> TicketLine {
        TicketLine {
            ticket_type,
            quantity,
        }
    }

    #[test]
    fn test_default_prices() {
        let prices = PriceTable::default();
        assert_eq!(prices.price_of(TicketType::Adult), Money::new(20));
        assert_eq!(prices.price_of(TicketType::Child), Money::new(10));
        assert!(prices.price_of(TicketType::Infant).is_zero());
    }

    #[test]
    fn test_total_sums_every_line() {
        let prices = PriceTable::default();
        let lines = [
            line(TicketType::Adult, 2),
            line(TicketType::Child, 3),
            line(TicketType::Infant, 1),
            line(TicketType::Adult, 1),
        ];
        assert_eq!(prices.total(&lines), Money::new(90));
    }

    #[test]
    fn test_total_of_nothing_is_zero() {
        assert_eq!(PriceTable::default().total(&[]), Money::ZERO);
    }

    #[test]
    fn test_custom_prices() {
        let prices = PriceTable::new(Money::new(25), Money::new(15), Money::new(5));
        let lines = [line(TicketType::Adult, 1), line(TicketType::Infant, 2)];
        assert_eq!(prices.total(&lines), Money::new(35));
    }
}
