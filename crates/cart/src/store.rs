//! Observable write-through store.
//!
//! [`CartStore`] couples the durable storage backend with a change broadcast
//! so every concurrently open view of the application observes mutations
//! without polling. This replaces ambient global state: views receive a
//! cloned handle and subscribe, a navigation badge recomputes its count from
//! the [`CartEvent::Changed`] totals, and nothing reaches into the storage
//! primitive directly.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::debug;

use verdemar_core::Money;

use crate::model::Cart;
use crate::storage::{CartStorage, StorageError};

/// Broadcast channel capacity; lagging subscribers drop oldest events, which
/// is acceptable because every `Changed` event carries full totals.
const EVENT_CAPACITY: usize = 64;

/// A change to the persisted cart, broadcast to all views.
#[derive(Debug, Clone)]
pub enum CartEvent {
    /// The collection changed; carries derived totals so observers need not
    /// re-read the store.
    Changed {
        /// Total units across all line items.
        total_quantity: u32,
        /// Current subtotal.
        subtotal: Money,
    },
    /// The collection and the persisted state were emptied.
    Cleared,
}

/// Observable, write-through cart store.
///
/// Cheaply cloneable; all clones share the same backing storage and event
/// channel.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    storage: Arc<dyn CartStorage>,
    events: broadcast::Sender<CartEvent>,
}

impl CartStore {
    /// Create a store over the given storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(CartStoreInner { storage, events }),
        }
    }

    /// Subscribe to change events.
    ///
    /// Only events sent after this call are observed.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.inner.events.subscribe()
    }

    /// Restore the cart from persisted state; empty when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the persisted state cannot be read or
    /// deserialized.
    pub fn load(&self) -> Result<Cart, StorageError> {
        let items = self.inner.storage.load()?.unwrap_or_default();
        Ok(Cart::from_items(items))
    }

    /// Write the collection through to storage and notify observers.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the write fails; no event is sent in that
    /// case, so observers never see state that was not persisted.
    pub fn persist(&self, cart: &Cart) -> Result<(), StorageError> {
        self.inner.storage.save(cart.items())?;
        let event = CartEvent::Changed {
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        };
        // No receivers is fine; events are advisory.
        let _ = self.inner.events.send(event);
        Ok(())
    }

    /// Remove the persisted state and notify observers.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the delete fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.inner.storage.clear()?;
        debug!("Cleared persisted cart");
        let _ = self.inner.events.send(CartEvent::Cleared);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::LineItem;
    use crate::storage::MemoryStorage;
    use rust_decimal::Decimal;
    use verdemar_core::{CurrencyCode, VariantId};

    fn store() -> CartStore {
        CartStore::new(Arc::new(MemoryStorage::new()))
    }

    fn cart_with(quantity: u32) -> Cart {
        let mut cart = Cart::new();
        cart.add(LineItem::new(
            VariantId::new("A"),
            quantity,
            "Olive Oil 500ml",
            Money::new(Decimal::from(10), CurrencyCode::USD),
            None,
        ));
        cart
    }

    #[test]
    fn test_load_empty() {
        assert!(store().load().unwrap().is_empty());
    }

    #[test]
    fn test_persist_then_load_round_trips() {
        let store = store();
        let cart = cart_with(3);
        store.persist(&cart).unwrap();
        assert_eq!(store.load().unwrap(), cart);
    }

    #[tokio::test]
    async fn test_changed_event_carries_totals() {
        let store = store();
        let mut events = store.subscribe();

        store.persist(&cart_with(3)).unwrap();

        match events.recv().await.unwrap() {
            CartEvent::Changed {
                total_quantity,
                subtotal,
            } => {
                assert_eq!(total_quantity, 3);
                assert_eq!(subtotal.amount, Decimal::from(30));
            }
            CartEvent::Cleared => panic!("expected Changed"),
        }
    }

    #[tokio::test]
    async fn test_clones_share_events() {
        let store = store();
        let view = store.clone();
        let mut badge = view.subscribe();

        store.persist(&cart_with(1)).unwrap();
        store.clear().unwrap();

        assert!(matches!(
            badge.recv().await.unwrap(),
            CartEvent::Changed { total_quantity: 1, .. }
        ));
        assert!(matches!(badge.recv().await.unwrap(), CartEvent::Cleared));
        assert!(view.load().unwrap().is_empty());
    }
}
