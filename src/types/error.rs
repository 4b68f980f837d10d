//! Error types for the go-dutch settlement engine
//!
//! All variants are structural violations rejected at the meeting boundary,
//! before the aggregate mutates. Everything else the engine reports —
//! rounding drift, residual resolver magnitude, an empty meeting — is a
//! computed value, not an error.

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for the settlement engine
///
/// Each variant carries enough context to produce a descriptive, user-facing
/// message for CLI output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettlementError {
    /// Expense amount must be a positive number of currency units
    #[error("Expense amount must be positive, got {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// Expense must be split across at least one member
    #[error("Expense '{description}' applies to no members")]
    EmptyAppliedTo {
        /// Description of the rejected expense
        description: String,
    },

    /// Expense description must be non-empty text
    #[error("Expense description must not be empty")]
    EmptyDescription,

    /// Payer is not on the meeting roster
    #[error("Payer '{name}' is not a member of the meeting")]
    UnknownPayer {
        /// The unknown payer name
        name: String,
    },

    /// An applied member is not on the meeting roster
    #[error("Applied member '{name}' is not a member of the meeting")]
    UnknownAppliedMember {
        /// The unknown member name
        name: String,
    },

    /// The applied member list names the same member twice
    #[error("Member '{name}' appears more than once in the applied list")]
    DuplicateAppliedMember {
        /// The duplicated member name
        name: String,
    },

    /// The roster would contain the same name twice
    #[error("Member '{name}' is already on the roster")]
    DuplicateMember {
        /// The duplicated member name
        name: String,
    },

    /// Member names must be non-blank
    #[error("Member names must not be blank")]
    BlankMemberName,

    /// No expense with the given id exists in this meeting
    #[error("Expense {id} not found")]
    ExpenseNotFound {
        /// The missing expense id
        id: u32,
    },

    /// Meeting start date must not be after its end date
    #[error("Meeting start date {start} is after end date {end}")]
    InvalidDateRange {
        /// Requested start date
        start: NaiveDate,
        /// Requested end date
        end: NaiveDate,
    },
}

// Helper functions for creating common errors

impl SettlementError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: i64) -> Self {
        SettlementError::InvalidAmount { amount }
    }

    /// Create an EmptyAppliedTo error
    pub fn empty_applied_to(description: &str) -> Self {
        SettlementError::EmptyAppliedTo {
            description: description.to_string(),
        }
    }

    /// Create an UnknownPayer error
    pub fn unknown_payer(name: &str) -> Self {
        SettlementError::UnknownPayer {
            name: name.to_string(),
        }
    }

    /// Create an UnknownAppliedMember error
    pub fn unknown_applied_member(name: &str) -> Self {
        SettlementError::UnknownAppliedMember {
            name: name.to_string(),
        }
    }

    /// Create a DuplicateAppliedMember error
    pub fn duplicate_applied_member(name: &str) -> Self {
        SettlementError::DuplicateAppliedMember {
            name: name.to_string(),
        }
    }

    /// Create a DuplicateMember error
    pub fn duplicate_member(name: &str) -> Self {
        SettlementError::DuplicateMember {
            name: name.to_string(),
        }
    }

    /// Create an ExpenseNotFound error
    pub fn expense_not_found(id: u32) -> Self {
        SettlementError::ExpenseNotFound { id }
    }

    /// Create an InvalidDateRange error
    pub fn invalid_date_range(start: NaiveDate, end: NaiveDate) -> Self {
        SettlementError::InvalidDateRange { start, end }
    }
}
