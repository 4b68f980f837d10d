//! Go-Dutch Settlement Engine Library
//! # Overview
//!
//! This library settles shared expenses: a meeting owns a member roster and
//! a collection of expenses, and the engine computes who owes whom and how
//! to pay it back in as few transfers as possible.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Expense, MemberBalance, Transfer, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - The Meeting aggregate owning roster and expenses
//!   - [`core::balance`] - Per-member paid/owed/balance accumulation
//!   - [`core::consistency`] - Totals cross-check for rounding drift
//!   - [`core::resolver`] - Greedy largest-first transfer resolution
//! - [`io`] - CSV reading and report writing
//! - [`pipeline`] - End-to-end orchestration for the CLI
//!
//! # Settlement Flow
//!
//! 1. Expenses are validated and stored by the [`core::Meeting`] aggregate
//! 2. Each expense splits evenly across the members it applies to, keeping
//!    fractional shares exact
//! 3. Balances are accumulated per roster member; names no longer on the
//!    roster are skipped
//! 4. Totals are cross-checked: expense total vs applied-splits total, with
//!    a one-unit tolerance
//! 5. Net balances are rounded to whole units and resolved into a pairwise
//!    transfer plan

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{compute_balances, resolve_transfers, totals_match, BalanceReport, Meeting};
pub use crate::io::{write_balances_csv, write_summary_csv, write_transfers_csv};
pub use crate::types::{
    Expense, ExpenseId, ExpenseRecord, MemberBalance, MemberName, SettlementError, SettlementView,
    Transfer,
};
