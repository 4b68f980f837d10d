//! Meeting aggregate
//!
//! A meeting owns its member roster and its expenses. All structural
//! validation happens here, at the mutation boundary: an expense that enters
//! the collection is guaranteed well-formed against the roster as it stood
//! at acceptance time, so settlement itself never rejects anything.

use crate::core::balance::compute_balances;
use crate::core::consistency::totals_match;
use crate::core::resolver::resolve_transfers;
use crate::core::split::split_amount;
use crate::types::{Expense, ExpenseId, ExpenseRecord, MemberName, SettlementError, SettlementView};
use chrono::NaiveDate;
use std::collections::HashSet;

/// One settlement meeting: a roster, a date range, and the expenses shared
/// within it
///
/// Expenses are owned by the meeting and dropped with it. Roster edits do
/// not cascade into stored expenses; a departed member's stale references
/// are zero-weighted by the balance calculator instead.
#[derive(Debug, Clone)]
pub struct Meeting {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    members: Vec<MemberName>,
    expenses: Vec<Expense>,
    next_expense_id: ExpenseId,
}

impl Meeting {
    /// Create a meeting with a validated date range and roster
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        members: Vec<MemberName>,
    ) -> Result<Self, SettlementError> {
        if start_date > end_date {
            return Err(SettlementError::invalid_date_range(start_date, end_date));
        }
        validate_roster(&members)?;
        Ok(Meeting {
            name: name.into(),
            start_date,
            end_date,
            members,
            expenses: Vec::new(),
            next_expense_id: 1,
        })
    }

    /// Meeting label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First day of the meeting
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the meeting
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Current roster, in insertion order
    pub fn members(&self) -> &[MemberName] {
        &self.members
    }

    /// Stored expenses, in acceptance order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Validate and store a new expense, returning its assigned id
    pub fn add_expense(&mut self, record: ExpenseRecord) -> Result<ExpenseId, SettlementError> {
        self.validate_expense(&record)?;
        let id = self.next_expense_id;
        self.next_expense_id += 1;
        self.expenses.push(Expense {
            id,
            date: record.date,
            description: record.description,
            amount: record.amount,
            payer: record.payer,
            applied_to: record.applied_to,
            memo: record.memo,
        });
        Ok(id)
    }

    /// Replace an existing expense's fields, keeping its id
    ///
    /// The replacement is validated against the current roster, not the
    /// roster as it stood when the expense was first added.
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        record: ExpenseRecord,
    ) -> Result<(), SettlementError> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SettlementError::expense_not_found(id))?;
        self.validate_expense(&record)?;
        self.expenses[position] = Expense {
            id,
            date: record.date,
            description: record.description,
            amount: record.amount,
            payer: record.payer,
            applied_to: record.applied_to,
            memo: record.memo,
        };
        Ok(())
    }

    /// Remove an expense by id
    pub fn remove_expense(&mut self, id: ExpenseId) -> Result<(), SettlementError> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SettlementError::expense_not_found(id))?;
        self.expenses.remove(position);
        Ok(())
    }

    /// Replace the roster
    ///
    /// Existing expenses are left untouched even when they reference removed
    /// members; those references are skipped at settlement time.
    pub fn set_members(&mut self, members: Vec<MemberName>) -> Result<(), SettlementError> {
        validate_roster(&members)?;
        self.members = members;
        Ok(())
    }

    /// Rename the meeting and move its date range
    pub fn set_details(
        &mut self,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<(), SettlementError> {
        if start_date > end_date {
            return Err(SettlementError::invalid_date_range(start_date, end_date));
        }
        self.name = name.into();
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(())
    }

    /// Compute the full settlement view for the current snapshot
    ///
    /// Pure with respect to the meeting: calling it any number of times
    /// without an intervening edit returns the same view.
    pub fn compute_settlement(&self) -> SettlementView {
        let report = compute_balances(&self.members, &self.expenses);
        let consistent = totals_match(report.total_expenses, report.total_splits);
        let transfers = resolve_transfers(&report.per_member);
        SettlementView {
            per_member: report.per_member,
            total_expenses: report.total_expenses,
            total_splits: report.total_splits,
            consistent,
            transfers,
        }
    }

    fn validate_expense(&self, record: &ExpenseRecord) -> Result<(), SettlementError> {
        // the split model rejects non-positive amounts and empty applied lists
        split_amount(record.amount, record.applied_to.len()).map_err(|e| match e {
            SettlementError::EmptyAppliedTo { .. } => {
                SettlementError::empty_applied_to(&record.description)
            }
            other => other,
        })?;
        if record.description.trim().is_empty() {
            return Err(SettlementError::EmptyDescription);
        }
        if !self.members.contains(&record.payer) {
            return Err(SettlementError::unknown_payer(&record.payer));
        }
        let mut seen = HashSet::new();
        for name in &record.applied_to {
            if !self.members.contains(name) {
                return Err(SettlementError::unknown_applied_member(name));
            }
            if !seen.insert(name.as_str()) {
                return Err(SettlementError::duplicate_applied_member(name));
            }
        }
        Ok(())
    }
}

fn validate_roster(members: &[MemberName]) -> Result<(), SettlementError> {
    let mut seen = HashSet::new();
    for name in members {
        if name.trim().is_empty() {
            return Err(SettlementError::BlankMemberName);
        }
        if !seen.insert(name.as_str()) {
            return Err(SettlementError::duplicate_member(name));
        }
    }
    Ok(())
}
