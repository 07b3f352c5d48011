//! Derived values computed from already-fetched resource lists.
//!
//! Everything here is a pure function of its input snapshot. Views call these
//! on every render; nothing is cached between calls.

pub mod balance;
pub mod categories;
pub mod error;
pub mod expenses;
pub mod investment;
pub mod performance;
pub mod schedule;
pub mod transactions;

#[cfg(test)]
pub(crate) mod testing;

pub use balance::{BalanceSummary, LiabilityDisplay, TypeSubtotal, net_worth, summarize};
pub use categories::{CategoryNode, CategoryTree, build_tree};
pub use error::{ComputeError, Result};
pub use investment::{PortfolioSummary, ReturnTier};
pub use performance::{CurvePoint, simulated_curve};
pub use schedule::DueStatus;
pub use transactions::TransactionFilter;
