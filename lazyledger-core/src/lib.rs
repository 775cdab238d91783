//! lazyledger-core: data model shared by the parsing and insight crates

pub mod error;
pub mod report;
pub mod stats;
pub mod transaction;

pub use error::{LedgerError, Result};
pub use report::{Insight, InsightReport};
pub use stats::StatsSnapshot;
pub use transaction::{Category, Transaction, TxnType};
