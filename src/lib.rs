#![doc(test(attr(deny(warnings))))]

//! Pocketbook Core offers the ledger, budgeting, and transaction-query
//! primitives that power the Pocketbook household finance tracker.
//!
//! The [`domain`] module holds the pure value aggregate (categories,
//! transactions, derived metrics); [`core`] layers validated services, the
//! search mini-language, sorting, and presentation helpers on top. Storage
//! and rendering are external collaborators: they push whole replacement
//! snapshots in and read computed aggregates back out.

pub mod core;
pub mod domain;
pub mod sample_data;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocketbook Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
