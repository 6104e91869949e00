//! Income and expense tracking: the ledger, its counters and read models.

pub mod counter;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;

pub use counter::Counter;
pub use ledger::Ledger;
pub use summary::{RemoveOutcome, Summary, TransactionHistory};
