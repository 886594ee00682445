//! Unified error handling for cart operations.
//!
//! Every failure here is recoverable at the point of the failing operation:
//! the collection is left in its last valid state (except the documented
//! reconciliation clamp) and the error is surfaced to the user as a transient
//! notice. Nothing is fatal to the application.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// No valid session token is present (missing or expired).
    #[error("authentication required: no valid session token")]
    AuthenticationRequired,

    /// Checkout was attempted with an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The stock collaborator returned malformed data (e.g., not an array).
    #[error("stock information unavailable: {0}")]
    StockUnavailable(String),

    /// HTTP request failed outright.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend returned a non-2xx response with a message.
    #[error("backend error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable message from the backend's `message` field.
        message: String,
    },

    /// Persisted store read/write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart manager task is gone; the owning view was torn down.
    #[error("cart manager is no longer running")]
    MailboxClosed,
}
