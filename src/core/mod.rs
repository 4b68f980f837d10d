//! Core business logic for the settlement engine
//!
//! Pure computation over one in-memory meeting: splitting expenses,
//! accumulating balances, cross-checking totals, and resolving transfers.
//! The only stateful piece is the `Meeting` aggregate, which owns the roster
//! and expenses and guards every mutation.

pub mod balance;
pub mod consistency;
pub mod ledger;
pub mod resolver;
pub mod split;

pub use balance::{compute_balances, BalanceReport};
pub use consistency::totals_match;
pub use ledger::Meeting;
pub use resolver::resolve_transfers;
pub use split::split_amount;
