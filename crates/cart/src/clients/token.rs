//! Session token storage.
//!
//! The backend issues a bearer token at login; the storefront keeps it in the
//! same durable client storage as the cart, under the well-known `token` key.
//! A missing or expired token means "not authenticated" - there is no refresh
//! flow here, the user simply signs in again.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Well-known storage key for the session token.
pub const TOKEN_KEY: &str = "token";

/// A persisted session token with optional expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredToken {
    /// The bearer token value.
    pub token: String,
    /// When the token stops being valid; `None` means no recorded expiry.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredToken {
    /// True when the token has a recorded expiry in the past.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Source of the session bearer token.
pub trait TokenStore: Send + Sync {
    /// The current valid bearer token, or `None` when the session is absent
    /// or expired.
    fn bearer_token(&self) -> Option<SecretString>;
}

/// File-backed token store: `token.json` in the data directory.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Token store inside `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{TOKEN_KEY}.json")),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn bearer_token(&self) -> Option<SecretString> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let stored: StoredToken = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                debug!(error = %e, "Stored token did not parse; treating as unauthenticated");
                return None;
            }
        };

        if stored.is_expired(Utc::now()) {
            debug!("Stored token is expired; treating as unauthenticated");
            return None;
        }

        Some(SecretString::from(stored.token))
    }
}

/// In-memory token store for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    stored: Mutex<Option<StoredToken>>,
}

impl MemoryTokenStore {
    /// Create an empty (unauthenticated) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a non-expiring token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(StoredToken {
            token: token.into(),
            expires_at: None,
        });
        store
    }

    /// Replace the stored token.
    pub fn set(&self, token: StoredToken) {
        let mut guard = self.stored.lock().map_or_else(|e| e.into_inner(), |g| g);
        *guard = Some(token);
    }

    /// Drop the stored token (sign out).
    pub fn clear(&self) {
        let mut guard = self.stored.lock().map_or_else(|e| e.into_inner(), |g| g);
        *guard = None;
    }
}

impl TokenStore for MemoryTokenStore {
    fn bearer_token(&self) -> Option<SecretString> {
        let guard = self.stored.lock().map_or_else(|e| e.into_inner(), |g| g);
        guard
            .as_ref()
            .filter(|stored| !stored.is_expired(Utc::now()))
            .map(|stored| SecretString::from(stored.token.clone()))
    }
}
