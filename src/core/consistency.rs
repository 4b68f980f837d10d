//! Consistency verifier
//!
//! Cross-checks the two independently accumulated totals from the balance
//! calculator. They agree algebraically unless division remainders or stale
//! member references crept in; the check tolerates strictly less than one
//! minor currency unit of drift.

use rust_decimal::Decimal;

/// True when the expense total and the applied-splits total agree within
/// one minor currency unit
///
/// Diagnostic only. A mismatch flags the settlement view as inconsistent but
/// never blocks computing or displaying it.
pub fn totals_match(total_expenses: Decimal, total_splits: Decimal) -> bool {
    (total_expenses - total_splits).abs() < Decimal::ONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact(Decimal::from(5450), Decimal::from(5450), true)]
    #[case::sub_unit_drift(Decimal::from(1000), Decimal::new(99967, 2), true)]
    #[case::exactly_one_unit(Decimal::from(1000), Decimal::from(999), false)]
    #[case::large_gap(Decimal::from(3000), Decimal::from(2000), false)]
    #[case::drift_in_either_direction(Decimal::new(99967, 2), Decimal::from(1000), true)]
    #[case::both_zero(Decimal::ZERO, Decimal::ZERO, true)]
    fn test_totals_match(
        #[case] expenses: Decimal,
        #[case] splits: Decimal,
        #[case] expected: bool,
    ) {
        assert_eq!(totals_match(expenses, splits), expected);
    }
}
