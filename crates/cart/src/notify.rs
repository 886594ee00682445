//! User-facing notices.
//!
//! Cart operations surface their outcomes as transient notices (the toast
//! layer renders them); none are fatal. Every notice is also emitted as a
//! `tracing` event so diagnostics do not depend on a UI being attached.

use tokio::sync::broadcast;
use tracing::{info, warn};

/// Channel capacity; a lagging UI drops the oldest toasts, never blocks the
/// cart.
const NOTICE_CAPACITY: usize = 32;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Operation completed.
    Success,
    /// Operation adjusted or rejected; nothing lost.
    Warning,
    /// Operation failed.
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Severity, for display styling.
    pub level: NoticeLevel,
    /// Human-readable message.
    pub message: String,
}

/// Broadcast handle for user notices.
///
/// Cheaply cloneable; all clones feed the same subscribers.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    /// Create a notifier with no subscribers yet.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTICE_CAPACITY);
        Self { tx }
    }

    /// Subscribe to notices.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    /// Emit a success notice.
    pub fn success(&self, message: impl Into<String>) {
        self.emit(NoticeLevel::Success, message.into());
    }

    /// Emit a warning notice.
    pub fn warning(&self, message: impl Into<String>) {
        self.emit(NoticeLevel::Warning, message.into());
    }

    /// Emit an error notice.
    pub fn error(&self, message: impl Into<String>) {
        self.emit(NoticeLevel::Error, message.into());
    }

    fn emit(&self, level: NoticeLevel, message: String) {
        match level {
            NoticeLevel::Success => info!(notice = %message, "cart notice"),
            NoticeLevel::Warning | NoticeLevel::Error => warn!(notice = %message, "cart notice"),
        }
        // No subscribers is fine; notices are advisory.
        let _ = self.tx.send(Notice { level, message });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notices_reach_subscribers() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.success("Item added to cart");
        notifier.warning("Only 3 units available");

        let first = rx.recv().await.unwrap();
        assert_eq!(first.level, NoticeLevel::Success);
        assert_eq!(first.message, "Item added to cart");

        let second = rx.recv().await.unwrap();
        assert_eq!(second.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_emit_without_subscribers_is_fine() {
        Notifier::new().error("nobody listening");
    }
}
