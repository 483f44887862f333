//! Pure domain models (Ledger, Category, Transaction).
//!
//! No I/O, no services, no storage. Only data types and the derived-metric
//! queries that belong to the aggregate itself.

pub mod category;
pub mod common;
pub mod ledger;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use ledger::*;
pub use transaction::*;
