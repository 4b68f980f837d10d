//! Balance calculator
//!
//! Walks every expense once and accumulates, per roster member, what they
//! paid and what share of the costs applies to them. The table is rebuilt
//! from scratch on every call; nothing is cached between edits.

use crate::types::{Expense, MemberBalance, MemberName};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Per-member balances plus the two totals the consistency check compares
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport {
    /// One row per roster member, in roster order
    pub per_member: Vec<MemberBalance>,

    /// Sum of all expense amounts, including expenses whose payer is no
    /// longer on the roster
    pub total_expenses: Decimal,

    /// Sum of the shares actually applied to roster members
    pub total_splits: Decimal,
}

/// Compute paid/owed/balance for each roster member
///
/// Names on an expense that are not on the roster are skipped without
/// complaint: the aggregate validates new expenses against the roster, but a
/// later roster edit can leave stored expenses referencing departed members,
/// and those stale references must not distort anyone else's balance.
/// `total_expenses` still counts the full amount of every expense, so the
/// consistency check surfaces the mismatch such skips create.
pub fn compute_balances(members: &[MemberName], expenses: &[Expense]) -> BalanceReport {
    let mut per_member: Vec<MemberBalance> = members
        .iter()
        .map(|name| MemberBalance::new(name.clone()))
        .collect();
    let index: HashMap<&str, usize> = members
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let mut total_expenses = Decimal::ZERO;
    let mut total_splits = Decimal::ZERO;

    for expense in expenses {
        total_expenses += Decimal::from(expense.amount);

        if let Some(&i) = index.get(expense.payer.as_str()) {
            per_member[i].paid += Decimal::from(expense.amount);
        }

        let share = expense.split_amount();
        for name in &expense.applied_to {
            if let Some(&i) = index.get(name.as_str()) {
                per_member[i].owed += share;
                total_splits += share;
            }
        }
    }

    for entry in &mut per_member {
        entry.balance = entry.paid - entry.owed;
    }

    BalanceReport {
        per_member,
        total_expenses,
        total_splits,
    }
}
