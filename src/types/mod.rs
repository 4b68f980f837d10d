//! Core data types for the go-dutch settlement engine
//!
//! This module contains the plain data structures shared across the engine:
//! expenses and their identifiers, derived settlement output shapes, and the
//! error type.

pub mod error;
pub mod expense;
pub mod settlement;

pub use error::SettlementError;
pub use expense::{Expense, ExpenseId, ExpenseRecord, MemberName};
pub use settlement::{MemberBalance, SettlementView, Transfer};
