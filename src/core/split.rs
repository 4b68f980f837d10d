//! Expense split model
//!
//! One expense divides its amount evenly across every member it applies to.
//! The quotient is kept as an exact decimal; rounding happens once, at
//! settlement time, so error never compounds across expenses.

use crate::types::SettlementError;
use rust_decimal::Decimal;

/// Compute the per-member share of an expense
///
/// Validates the inputs an expense must satisfy before it can be stored:
/// a positive amount and at least one applied member. Returns the exact
/// decimal quotient `amount / applied_count`.
pub fn split_amount(amount: i64, applied_count: usize) -> Result<Decimal, SettlementError> {
    if amount <= 0 {
        return Err(SettlementError::invalid_amount(amount));
    }
    if applied_count == 0 {
        return Err(SettlementError::EmptyAppliedTo {
            description: String::new(),
        });
    }
    Ok(Decimal::from(amount) / Decimal::from(applied_count as u64))
}
