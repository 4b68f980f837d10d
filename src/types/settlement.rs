//! Settlement output types
//!
//! These are derived shapes: they are recomputed from the meeting snapshot on
//! every call and never persisted. They form the boundary handed to transport
//! layers (CSV reports here, HTTP/UI in the full system).

use super::expense::MemberName;
use rust_decimal::Decimal;
use serde::Serialize;

/// One member's position within a settlement
///
/// `balance = paid - owed`. Positive means the group owes this member money;
/// negative means this member owes the group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberBalance {
    /// Member name
    pub name: MemberName,

    /// Sum of expense amounts this member paid
    pub paid: Decimal,

    /// Sum of per-member shares applied to this member
    ///
    /// Shares are real-valued (an amount split three ways keeps its
    /// fractional thirds), so `owed` is a Decimal even though expense
    /// amounts are integers.
    pub owed: Decimal,

    /// Net position: `paid - owed`
    pub balance: Decimal,
}

impl MemberBalance {
    /// Create a zeroed balance entry for a member
    pub fn new(name: MemberName) -> Self {
        MemberBalance {
            name,
            paid: Decimal::ZERO,
            owed: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// One recommended payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    /// Debtor: the member who pays
    pub from: MemberName,

    /// Creditor: the member who receives
    pub to: MemberName,

    /// Amount in whole currency units (always positive)
    pub amount: i64,
}

/// Complete settlement view for one meeting
///
/// The single read path the presentation layer needs: per-member balances in
/// roster order, the drift cross-check, and the resolved transfer plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementView {
    /// Per-member paid/owed/balance rows, in roster order
    pub per_member: Vec<MemberBalance>,

    /// Sum of all expense amounts
    pub total_expenses: Decimal,

    /// Sum of every per-member share actually applied
    ///
    /// Algebraically equals `total_expenses` absent division remainders;
    /// the `consistent` flag reports whether the two agree within one minor
    /// currency unit.
    pub total_splits: Decimal,

    /// Drift check result. Diagnostic only — a `false` here never blocks
    /// the settlement from being computed or displayed.
    pub consistent: bool,

    /// Resolved transfer plan, in emission order (largest pairings first)
    pub transfers: Vec<Transfer>,
}
