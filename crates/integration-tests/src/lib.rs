//! Integration tests for Verdemar.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p verdemar-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - End-to-end cart lifecycle: add/remove/update, stock
//!   reconciliation, order submission, cross-view events
//!
//! All tests run fully in-process: the cart manager is spawned over in-memory
//! storage and scripted stock/order collaborators, so no backend or network
//! is required. Set `RUST_LOG` to see the manager's tracing output, e.g.
//! `RUST_LOG=verdemar_cart=debug`.

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install the test tracing subscriber once per process.
///
/// Filtered by `RUST_LOG`; output goes through the libtest capture so logs
/// only show for failing tests.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}
