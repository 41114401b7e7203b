//! Purchase rules.
//!
//! Rules run in a fixed order and the first broken rule wins:
//!
//! 1. account id present
//! 2. account id positive
//! 3. every line has a type and a quantity of at least one
//! 4. total tickets within the per-purchase limit
//! 5. at least one adult line
//!
//! Infants count toward the ticket total like every other type.

use crate::error::InvalidPurchaseError;
use crate::types::{AccountId, PurchaseRequest, TicketLine, TicketType, TicketTypeRequest};
use serde::{Deserialize, Serialize};

/// Default maximum number of tickets in one purchase
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u64 = 20;

/// Per-purchase limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLimits {
    /// Maximum tickets per purchase (inclusive)
    pub max_tickets_per_purchase: u64,
}

impl Default for PurchaseLimits {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
        }
    }
}

/// A request that passed every rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedPurchase {
    account_id: AccountId,
    lines: Vec<TicketLine>,
    ticket_count: u64,
}

impl ValidatedPurchase {
    /// Account making the purchase
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Line items in request order
    #[must_use]
    pub fn lines(&self) -> &[TicketLine] {
        &self.lines
    }

    /// Sum of quantities across all lines, infants included
    #[must_use]
    pub const fn ticket_count(&self) -> u64 {
        self.ticket_count
    }
}

/// Check `request` against every rule.
///
/// # Errors
///
/// Returns the first rule the request breaks.
pub fn validate(
    request: &PurchaseRequest,
    limits: &PurchaseLimits,
) -> Result<ValidatedPurchase, InvalidPurchaseError> {
    let account_id = validate_account(request.account_id)?;
    let lines = validate_lines(&request.tickets)?;

    let ticket_count = lines
        .iter()
        .fold(0_u64, |count, line| count.saturating_add(line.quantity));
    if ticket_count > limits.max_tickets_per_purchase {
        return Err(InvalidPurchaseError::LimitExceeded {
            max: limits.max_tickets_per_purchase,
        });
    }

    if !lines.iter().any(|line| line.ticket_type == TicketType::Adult) {
        return Err(InvalidPurchaseError::AtLeastOneAdultRequired);
    }

    Ok(ValidatedPurchase {
        account_id,
        lines,
        ticket_count,
    })
}

fn validate_account(raw: Option<i64>) -> Result<AccountId, InvalidPurchaseError> {
    let raw = raw.ok_or(InvalidPurchaseError::NullAccountId)?;
    AccountId::new(raw).ok_or(InvalidPurchaseError::InvalidAccountId)
}

fn validate_lines(tickets: &[TicketTypeRequest]) -> Result<Vec<TicketLine>, InvalidPurchaseError> {
    tickets
        .iter()
        .map(|request| {
            let ticket_type = request
                .ticket_type
                .ok_or(InvalidPurchaseError::InvalidTicketDetails)?;
            let quantity = u64::try_from(request.quantity)
                .ok()
                .filter(|quantity| *quantity >= 1)
                .ok_or(InvalidPurchaseError::InvalidTicketDetails)?;
            Ok(TicketLine {
                ticket_type,
                quantity,
            })
        })
        .collect()
}
