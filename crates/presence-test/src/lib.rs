//! Presence Test Harness - Law checking for optional values
//!
//! This crate provides:
//! - A call-count spy for mapping functions and fallbacks
//! - Reusable law predicates
//! - A seeded law fuzzer
//! - Test tracing setup

pub mod law_fuzzer;
pub mod spy;

pub use law_fuzzer::*;
pub use spy::*;

use tracing_subscriber::EnvFilter;

/// Install a test-writer tracing subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
