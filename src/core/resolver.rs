//! Transfer resolver
//!
//! Turns per-member net balances into a concrete repayment plan: who pays
//! whom, in whole currency units. Greedy largest-first matching keeps the
//! plan short (at most one fewer transfer than there are members with a
//! non-zero balance) and deterministic.

use crate::types::{MemberBalance, Transfer};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::VecDeque;

struct Party {
    name: String,
    remaining: i64,
}

/// Round a balance to whole units with halves toward positive infinity
///
/// A creditor at 500.5 rounds to 501 while a debtor at -500.5 rounds to
/// -500. The asymmetry can leave the creditor and debtor sums one unit
/// apart on half-unit balances; the drain loop drops that residual.
fn round_balance(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}

/// Resolve net balances into a list of pairwise transfers
///
/// Balances are first rounded to whole units, halves toward positive
/// infinity. Creditors and debtors are each sorted descending by magnitude
/// with ties keeping input
/// order, then the two queues are drained front against front: each step
/// transfers the smaller of the two front magnitudes and pops a party only
/// when its remaining amount reaches exactly zero. Queues are never
/// re-sorted after a partial subtraction, so a large creditor keeps
/// absorbing successive debtors even once its remainder is small. Whatever
/// magnitude is left when one side empties is dropped; it is rounding
/// residue, bounded by the drift the consistency check reports.
pub fn resolve_transfers(per_member: &[MemberBalance]) -> Vec<Transfer> {
    let mut creditors: Vec<Party> = Vec::new();
    let mut debtors: Vec<Party> = Vec::new();

    for entry in per_member {
        let Some(units) = round_balance(entry.balance).to_i64() else {
            continue;
        };
        if units > 0 {
            creditors.push(Party {
                name: entry.name.clone(),
                remaining: units,
            });
        } else if units < 0 {
            debtors.push(Party {
                name: entry.name.clone(),
                remaining: -units,
            });
        }
    }

    // Vec::sort_by is stable, so equal magnitudes keep roster order
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    let mut creditors: VecDeque<Party> = creditors.into();
    let mut debtors: VecDeque<Party> = debtors.into();

    let mut transfers = Vec::new();
    while let (Some(creditor), Some(debtor)) = (creditors.front_mut(), debtors.front_mut()) {
        let amount = creditor.remaining.min(debtor.remaining);
        if amount > 0 {
            transfers.push(Transfer {
                from: debtor.name.clone(),
                to: creditor.name.clone(),
                amount,
            });
        }
        creditor.remaining -= amount;
        debtor.remaining -= amount;
        if creditor.remaining == 0 {
            creditors.pop_front();
        }
        if debtor.remaining == 0 {
            debtors.pop_front();
        }
    }

    transfers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(name: &str, units: i64) -> MemberBalance {
        MemberBalance {
            name: name.to_string(),
            paid: Decimal::ZERO,
            owed: Decimal::ZERO,
            balance: Decimal::from(units),
        }
    }

    fn balance_dec(name: &str, value: Decimal) -> MemberBalance {
        MemberBalance {
            name: name.to_string(),
            paid: Decimal::ZERO,
            owed: Decimal::ZERO,
            balance: value,
        }
    }

    fn transfer(from: &str, to: &str, amount: i64) -> Transfer {
        Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    #[test]
    fn test_two_debtors_pay_one_creditor() {
        let balances = vec![balance("A", 2000), balance("B", -1000), balance("C", -1000)];
        assert_eq!(
            resolve_transfers(&balances),
            vec![transfer("B", "A", 1000), transfer("C", "A", 1000)]
        );
    }

    #[test]
    fn test_all_settled_yields_no_transfers() {
        let balances = vec![balance("A", 0), balance("B", 0)];
        assert!(resolve_transfers(&balances).is_empty());
    }

    #[test]
    fn test_partial_subtraction_does_not_resort() {
        // C:350 covers A:300 fully, leaving C:50 at the front against B:250.
        // Without re-sorting, B collects from C before D even though D's 200
        // is now larger than C's 50.
        let balances = vec![
            balance("A", 300),
            balance("B", 250),
            balance("C", -350),
            balance("D", -200),
        ];
        assert_eq!(
            resolve_transfers(&balances),
            vec![
                transfer("C", "A", 300),
                transfer("C", "B", 50),
                transfer("D", "B", 200),
            ]
        );
    }

    #[test]
    fn test_equal_magnitudes_keep_input_order() {
        let balances = vec![
            balance("B", -500),
            balance("C", -500),
            balance("A", 1000),
        ];
        assert_eq!(
            resolve_transfers(&balances),
            vec![transfer("B", "A", 500), transfer("C", "A", 500)]
        );
    }

    #[test]
    fn test_half_unit_balances_round_toward_positive_infinity() {
        // an odd amount split two ways: A is owed 500.5, B owes 500.5.
        // The creditor rounds up to 501, the debtor to 500; the plan
        // settles 500 and drops the creditor's leftover unit.
        let balances = vec![
            balance_dec("A", Decimal::new(5005, 1)),
            balance_dec("B", Decimal::new(-5005, 1)),
        ];
        assert_eq!(resolve_transfers(&balances), vec![transfer("B", "A", 500)]);
    }

    #[test]
    fn test_fractional_balances_round_to_nearest_unit() {
        // 666.666... rounds to 667; -333.333... rounds to -333 each.
        // The leftover unit on the creditor side is dropped.
        let third = Decimal::from(1000) / Decimal::from(3);
        let balances = vec![
            balance_dec("A", Decimal::from(1000) - third),
            balance_dec("B", -third),
            balance_dec("C", -third),
        ];
        assert_eq!(
            resolve_transfers(&balances),
            vec![transfer("B", "A", 333), transfer("C", "A", 333)]
        );
    }

    #[test]
    fn test_sub_half_balances_round_to_zero_and_drop_out() {
        let balances = vec![
            balance_dec("A", Decimal::new(4, 1)),
            balance_dec("B", Decimal::new(-4, 1)),
        ];
        assert!(resolve_transfers(&balances).is_empty());
    }

    #[test]
    fn test_transfer_count_bounded_by_nonzero_members() {
        let balances = vec![
            balance("A", 1300),
            balance("B", -400),
            balance("C", -250),
            balance("D", -650),
            balance("E", 0),
        ];
        let transfers = resolve_transfers(&balances);
        assert!(transfers.len() <= 3);
        let total: i64 = transfers.iter().map(|t| t.amount).sum();
        assert_eq!(total, 1300);
    }
}
