//! Expense-related types for the go-dutch settlement engine
//!
//! This module defines the expense input/stored shapes and the identifiers
//! used throughout the system for recording and settling shared costs.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Member name
///
/// Members are tracked by name within a meeting; names are unique per roster.
pub type MemberName = String;

/// Expense identifier
///
/// Assigned by the meeting when an expense is added, monotonically increasing.
pub type ExpenseId = u32;

/// Input expense record
///
/// Represents a single expense as handed to the meeting by a caller (CSV
/// transport, API layer, tests). Carries no id; the meeting assigns one on
/// acceptance. All membership and amount validation happens at the meeting
/// boundary before an `Expense` is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Calendar date the cost was incurred (no time component)
    pub date: NaiveDate,

    /// Non-empty description of the expense
    pub description: String,

    /// Amount in the smallest currency unit (must be positive)
    pub amount: i64,

    /// Member who paid; must be on the meeting roster at acceptance time
    pub payer: MemberName,

    /// Members the cost is split across; non-empty subset of the roster
    pub applied_to: Vec<MemberName>,

    /// Optional free-form note
    pub memo: Option<String>,
}

/// Stored expense owned by a meeting
///
/// Created only through the meeting aggregate, which validates the record
/// against the current roster first. The per-member share is derived on every
/// read rather than stored, so it always reflects the current applied list.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Unique id within the owning meeting
    pub id: ExpenseId,

    /// Calendar date the cost was incurred
    pub date: NaiveDate,

    /// Non-empty description
    pub description: String,

    /// Amount in the smallest currency unit (positive)
    pub amount: i64,

    /// Member who paid
    pub payer: MemberName,

    /// Members the cost is split across
    pub applied_to: Vec<MemberName>,

    /// Optional free-form note
    pub memo: Option<String>,
}

impl Expense {
    /// Per-member share of this expense
    ///
    /// Real division, deliberately not rounded or truncated: rounding is
    /// deferred to settlement/display time so error does not compound across
    /// many expenses. Returns zero for an empty applied list, which the
    /// meeting boundary validation makes unreachable for stored expenses.
    pub fn split_amount(&self) -> Decimal {
        if self.applied_to.is_empty() {
            return Decimal::ZERO;
        }
        Decimal::from(self.amount) / Decimal::from(self.applied_to.len() as u64)
    }
}
