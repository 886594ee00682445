//! Cart manager: the single sequential command queue.
//!
//! A [`CartManager`] task owns the collection, the write-through store, the
//! collaborators, and the notifier. Every mutation - user-driven or
//! timer-driven - arrives as a [`CartCommand`] over one mpsc channel and is
//! processed to completion before the next, including the stock fetch inside
//! a reconciliation turn. A stale reconciliation can therefore never
//! overwrite a fresher manual edit; ordering is deterministic.
//!
//! Views hold a cloneable [`CartHandle`]. The periodic reconciliation timer
//! is a [`RefreshGuard`]: the owning view keeps it for as long as it is
//! mounted, and dropping it cancels the timer task. Commands sent to a
//! manager that has shut down fail with [`CartError::MailboxClosed`] and are
//! simply discarded by the timer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use verdemar_core::CustomerId;

use crate::clients::{
    CheckoutSession, OrderGateway, OrderLine, OrderRequest, ShippingAddress, StockLookup,
    TokenStore,
};
use crate::error::CartError;
use crate::model::{AddOutcome, Cart, LineItem, UpdateOutcome};
use crate::notify::{Notice, Notifier};
use crate::store::{CartEvent, CartStore};

/// Command channel depth; commands are short-lived, so a small buffer is
/// plenty before senders start awaiting.
const MAILBOX_CAPACITY: usize = 32;

/// Commands processed by the manager task, one at a time.
enum CartCommand {
    Add {
        item: LineItem,
        reply: oneshot::Sender<Result<(), CartError>>,
    },
    Remove {
        variant_id: verdemar_core::VariantId,
        reply: oneshot::Sender<Result<(), CartError>>,
    },
    UpdateQuantity {
        variant_id: verdemar_core::VariantId,
        quantity: u32,
        reply: oneshot::Sender<Result<(), CartError>>,
    },
    Reconcile {
        reply: oneshot::Sender<Result<(), CartError>>,
    },
    Submit {
        customer_id: CustomerId,
        shipping_address: Option<ShippingAddress>,
        reply: oneshot::Sender<Result<CheckoutSession, CartError>>,
    },
    Snapshot {
        reply: oneshot::Sender<Cart>,
    },
    Clear {
        reply: oneshot::Sender<Result<(), CartError>>,
    },
}

/// Collaborators the manager delegates to.
pub struct CartCollaborators {
    /// Authoritative stock levels.
    pub stock: Arc<dyn StockLookup>,
    /// Order creation / checkout handoff.
    pub orders: Arc<dyn OrderGateway>,
    /// Session bearer token.
    pub tokens: Arc<dyn TokenStore>,
}

/// The actor task owning all cart state.
pub struct CartManager {
    cart: Cart,
    store: CartStore,
    collaborators: CartCollaborators,
    notifier: Notifier,
    rx: mpsc::Receiver<CartCommand>,
}

impl CartManager {
    /// Spawn the manager task and return a handle to it.
    ///
    /// The cart is restored from the persisted store; unreadable state is
    /// logged and treated as an empty cart rather than failing startup. If
    /// the restored collection is non-empty, one reconciliation pass runs
    /// before the first command is processed.
    #[must_use]
    pub fn spawn(
        store: CartStore,
        collaborators: CartCollaborators,
        notifier: Notifier,
        refresh_period: Duration,
    ) -> CartHandle {
        let (tx, rx) = mpsc::channel(MAILBOX_CAPACITY);

        let cart = match store.load() {
            Ok(cart) => cart,
            Err(e) => {
                warn!(error = %e, "Could not restore persisted cart; starting empty");
                notifier.error("Could not load your saved cart");
                Cart::new()
            }
        };

        let manager = Self {
            cart,
            store: store.clone(),
            collaborators,
            notifier: notifier.clone(),
            rx,
        };
        tokio::spawn(manager.run());

        CartHandle {
            tx,
            store,
            notifier,
            refresh_period,
        }
    }

    async fn run(mut self) {
        // Trigger policy: reconcile once on initial load when non-empty.
        if !self.cart.is_empty() {
            if let Err(e) = self.reconcile().await {
                warn!(error = %e, "Initial stock reconciliation failed");
            }
        }

        while let Some(command) = self.rx.recv().await {
            match command {
                CartCommand::Add { item, reply } => {
                    let _ = reply.send(self.add(item));
                }
                CartCommand::Remove { variant_id, reply } => {
                    let _ = reply.send(self.remove(&variant_id));
                }
                CartCommand::UpdateQuantity {
                    variant_id,
                    quantity,
                    reply,
                } => {
                    let _ = reply.send(self.update_quantity(&variant_id, quantity));
                }
                CartCommand::Reconcile { reply } => {
                    let result = self.reconcile().await;
                    if let Err(e) = &result {
                        warn!(error = %e, "Stock reconciliation failed");
                    }
                    let _ = reply.send(result);
                }
                CartCommand::Submit {
                    customer_id,
                    shipping_address,
                    reply,
                } => {
                    let result = self.submit(customer_id, shipping_address).await;
                    let _ = reply.send(result);
                }
                CartCommand::Snapshot { reply } => {
                    let _ = reply.send(self.cart.clone());
                }
                CartCommand::Clear { reply } => {
                    let _ = reply.send(self.clear());
                }
            }
        }

        info!("Cart manager shutting down");
    }

    /// Write-through commit: persist the candidate collection, then adopt it.
    ///
    /// On a persist failure the in-memory collection is left untouched, so
    /// memory and the persisted state never diverge.
    fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        self.store.persist(&next)?;
        self.cart = next;
        Ok(())
    }

    #[instrument(skip(self, item), fields(variant_id = %item.variant_id))]
    fn add(&mut self, item: LineItem) -> Result<(), CartError> {
        let title = item.title.clone();
        let mut next = self.cart.clone();
        let outcome = next.add(item);
        self.commit(next)?;

        match outcome {
            AddOutcome::Merged { new_quantity } => {
                info!(new_quantity, "Merged quantity into existing line item");
            }
            AddOutcome::Appended => info!("Appended new line item"),
        }
        self.notifier.success(format!("{title} added to cart"));
        Ok(())
    }

    #[instrument(skip(self), fields(variant_id = %variant_id))]
    fn remove(&mut self, variant_id: &verdemar_core::VariantId) -> Result<(), CartError> {
        let mut next = self.cart.clone();
        if next.remove(variant_id) {
            self.commit(next)?;
            self.notifier.success("Item removed from cart");
        }
        // Removing an absent variant is a no-op.
        Ok(())
    }

    #[instrument(skip(self), fields(variant_id = %variant_id, quantity))]
    fn update_quantity(
        &mut self,
        variant_id: &verdemar_core::VariantId,
        quantity: u32,
    ) -> Result<(), CartError> {
        let mut next = self.cart.clone();
        match next.update_quantity(variant_id, quantity) {
            UpdateOutcome::Updated => self.commit(next),
            UpdateOutcome::Rejected { available } => {
                let title = self
                    .cart
                    .get(variant_id)
                    .map_or_else(|| variant_id.to_string(), |item| item.title.clone());
                self.notifier
                    .warning(format!("Only {available} units of {title} are available"));
                Ok(())
            }
            UpdateOutcome::BelowMinimum | UpdateOutcome::NotFound => Ok(()),
        }
    }

    /// Reconcile quantities against freshly fetched stock levels.
    #[instrument(skip(self))]
    async fn reconcile(&mut self) -> Result<(), CartError> {
        if self.cart.is_empty() {
            return Ok(());
        }

        let variant_ids: Vec<_> = self
            .cart
            .items()
            .iter()
            .map(|item| item.variant_id.clone())
            .collect();

        let records = match self.collaborators.stock.fetch_stock(&variant_ids).await {
            Ok(records) => records,
            Err(e) => {
                self.notifier.error("Could not verify available stock");
                return Err(e);
            }
        };

        let mut next = self.cart.clone();
        let report = next.apply_stock(&records);

        for variant_id in &report.missing {
            warn!(variant_id = %variant_id, "No stock record for variant; treating as out of stock");
        }
        for adjustment in &report.adjustments {
            if adjustment.clamped_to == 0 {
                self.notifier.warning(format!(
                    "{} is out of stock and was removed from your cart",
                    adjustment.title
                ));
            } else {
                self.notifier.warning(format!(
                    "Insufficient stock for {}; quantity adjusted to {}",
                    adjustment.title, adjustment.clamped_to
                ));
            }
        }

        self.commit(next)?;
        Ok(())
    }

    /// Submit the cart as an order; on success the cart is cleared.
    #[instrument(skip(self, shipping_address), fields(customer_id = %customer_id))]
    async fn submit(
        &mut self,
        customer_id: CustomerId,
        shipping_address: Option<ShippingAddress>,
    ) -> Result<CheckoutSession, CartError> {
        let Some(token) = self.collaborators.tokens.bearer_token() else {
            self.notifier.error("You must sign in to place an order");
            return Err(CartError::AuthenticationRequired);
        };

        if self.cart.is_empty() {
            self.notifier.error("Your cart is empty");
            return Err(CartError::EmptyCart);
        }

        let line_items = self
            .cart
            .items()
            .iter()
            .map(|item| OrderLine {
                variant_id: item.variant_id.to_gid(),
                quantity: item.quantity,
            })
            .collect();

        let request = OrderRequest {
            customer_id,
            line_items,
            shipping_address,
        };

        match self.collaborators.orders.create_checkout(&token, request).await {
            Ok(session) => {
                // The order is placed; the cart's contents now belong to it.
                // A failed storage delete must not make the caller think the
                // submission failed, or they could resubmit an ordered cart.
                self.cart.clear();
                if let Err(e) = self.store.clear() {
                    warn!(error = %e, "Order placed but clearing the persisted cart failed");
                }
                info!(order_reference = ?session.order_reference, "Order created");
                self.notifier.success("Order placed");
                Ok(session)
            }
            Err(e) => {
                // Surface the collaborator's message; the cart is untouched.
                self.notifier.error(e.to_string());
                Err(e)
            }
        }
    }

    fn clear(&mut self) -> Result<(), CartError> {
        self.store.clear()?;
        self.cart.clear();
        Ok(())
    }
}

/// Cloneable handle to a running [`CartManager`].
#[derive(Clone)]
pub struct CartHandle {
    tx: mpsc::Sender<CartCommand>,
    store: CartStore,
    notifier: Notifier,
    refresh_period: Duration,
}

impl CartHandle {
    async fn send<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> CartCommand,
    ) -> Result<T, CartError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(make(reply_tx))
            .await
            .map_err(|_| CartError::MailboxClosed)?;
        reply_rx.await.map_err(|_| CartError::MailboxClosed)
    }

    /// Add an item; merges quantities when the variant is already present.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` when the write-through fails,
    /// `CartError::MailboxClosed` when the manager is gone.
    pub async fn add_item(&self, item: LineItem) -> Result<(), CartError> {
        self.send(|reply| CartCommand::Add { item, reply }).await?
    }

    /// Remove a line item; removing an absent variant is a no-op.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::add_item`].
    pub async fn remove_item(
        &self,
        variant_id: verdemar_core::VariantId,
    ) -> Result<(), CartError> {
        self.send(|reply| CartCommand::Remove { variant_id, reply })
            .await?
    }

    /// Replace a line item's quantity, bounded by last-known availability.
    ///
    /// Out-of-bounds requests are no-ops with a warning notice, not errors.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::add_item`].
    pub async fn update_quantity(
        &self,
        variant_id: verdemar_core::VariantId,
        quantity: u32,
    ) -> Result<(), CartError> {
        self.send(|reply| CartCommand::UpdateQuantity {
            variant_id,
            quantity,
            reply,
        })
        .await?
    }

    /// Run one reconciliation pass now.
    ///
    /// # Errors
    ///
    /// Returns the underlying stock-fetch or storage error; the collection
    /// keeps its last valid state on failure.
    pub async fn reconcile_now(&self) -> Result<(), CartError> {
        self.send(|reply| CartCommand::Reconcile { reply })
            .await?
    }

    /// Submit the cart as an order and hand off to checkout.
    ///
    /// # Errors
    ///
    /// `CartError::AuthenticationRequired` without a valid session token,
    /// `CartError::EmptyCart` on an empty collection, or the order gateway's
    /// failure with the collection untouched.
    pub async fn submit_order(
        &self,
        customer_id: CustomerId,
        shipping_address: Option<ShippingAddress>,
    ) -> Result<CheckoutSession, CartError> {
        self.send(|reply| CartCommand::Submit {
            customer_id,
            shipping_address,
            reply,
        })
        .await?
    }

    /// Current collection contents.
    ///
    /// # Errors
    ///
    /// Returns `CartError::MailboxClosed` when the manager is gone.
    pub async fn snapshot(&self) -> Result<Cart, CartError> {
        self.send(|reply| CartCommand::Snapshot { reply }).await
    }

    /// Empty the collection and the persisted store unconditionally.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::add_item`].
    pub async fn clear(&self) -> Result<(), CartError> {
        self.send(|reply| CartCommand::Clear { reply }).await?
    }

    /// Subscribe to store change events (for badges and other views).
    #[must_use]
    pub fn subscribe_events(&self) -> broadcast::Receiver<CartEvent> {
        self.store.subscribe()
    }

    /// Subscribe to user-facing notices (the toast feed).
    #[must_use]
    pub fn subscribe_notices(&self) -> broadcast::Receiver<Notice> {
        self.notifier.subscribe()
    }

    /// Start the periodic reconciliation timer.
    ///
    /// Runs one pass per period (the initial-load pass already happened at
    /// spawn). The returned guard cancels the timer when dropped - tie it to
    /// the owning view's lifetime.
    #[must_use]
    pub fn start_stock_refresh(&self) -> RefreshGuard {
        let handle = self.clone();
        let period = self.refresh_period;

        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticks = tokio::time::interval_at(start, period);
            ticks.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                ticks.tick().await;
                // Manager gone means the view tree is torn down; stop quietly
                // and let any in-flight result be discarded.
                match handle
                    .send(|reply| CartCommand::Reconcile { reply })
                    .await
                {
                    Err(CartError::MailboxClosed) => break,
                    Ok(_) | Err(_) => {}
                }
            }
        });

        RefreshGuard { task }
    }
}

/// Owns the periodic reconciliation timer task; dropping it cancels the
/// timer (the view-unmount teardown).
#[derive(Debug)]
pub struct RefreshGuard {
    task: JoinHandle<()>,
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::clients::StockRecord;
    use crate::clients::token::MemoryTokenStore;
    use crate::storage::{CartStorage, MemoryStorage, StorageError};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::Mutex;
    use verdemar_core::{CurrencyCode, Money, VariantId};

    /// Storage whose delete always fails, as on a read-only filesystem.
    struct UndeletableStorage(MemoryStorage);

    impl CartStorage for UndeletableStorage {
        fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
            self.0.load()
        }

        fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
            self.0.save(items)
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    struct FixedStock(Vec<StockRecord>);

    #[async_trait]
    impl StockLookup for FixedStock {
        async fn fetch_stock(
            &self,
            _variant_ids: &[VariantId],
        ) -> Result<Vec<StockRecord>, CartError> {
            Ok(self.0.clone())
        }
    }

    struct RecordingGateway {
        requests: Mutex<Vec<OrderRequest>>,
        fail_with: Option<String>,
    }

    impl RecordingGateway {
        fn succeeding() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl OrderGateway for RecordingGateway {
        async fn create_checkout(
            &self,
            _token: &secrecy::SecretString,
            request: OrderRequest,
        ) -> Result<CheckoutSession, CartError> {
            self.requests.lock().unwrap().push(request);
            match &self.fail_with {
                Some(message) => Err(CartError::Api {
                    status: 422,
                    message: message.clone(),
                }),
                None => Ok(CheckoutSession {
                    checkout_url: "https://shop.example/checkout/abc".to_string(),
                    order_reference: Some("order-1".to_string()),
                }),
            }
        }

        async fn payment_url(
            &self,
            _token: &secrecy::SecretString,
            _order_id: &verdemar_core::OrderId,
        ) -> Result<String, CartError> {
            Ok("https://shop.example/checkout/abc".to_string())
        }
    }

    fn usd(amount: i64) -> Money {
        Money::new(Decimal::from(amount), CurrencyCode::USD)
    }

    fn item(variant: &str, quantity: u32, price: i64) -> LineItem {
        LineItem::new(
            VariantId::new(variant),
            quantity,
            format!("Item {variant}"),
            usd(price),
            None,
        )
    }

    fn record(variant: &str, available: u32) -> StockRecord {
        StockRecord {
            id: VariantId::new(variant),
            quantity_available: available,
            title: format!("Item {variant}"),
            price: usd(10),
        }
    }

    fn spawn_manager(
        stock: Vec<StockRecord>,
        orders: RecordingGateway,
        tokens: MemoryTokenStore,
    ) -> CartHandle {
        let store = CartStore::new(Arc::new(MemoryStorage::new()));
        CartManager::spawn(
            store,
            CartCollaborators {
                stock: Arc::new(FixedStock(stock)),
                orders: Arc::new(orders),
                tokens: Arc::new(tokens),
            },
            Notifier::new(),
            Duration::from_secs(30),
        )
    }

    #[tokio::test]
    async fn test_add_merges_and_persists() {
        let handle = spawn_manager(
            vec![],
            RecordingGateway::succeeding(),
            MemoryTokenStore::new(),
        );

        handle.add_item(item("A", 2, 10)).await.unwrap();
        handle.add_item(item("A", 3, 10)).await.unwrap();

        let cart = handle.snapshot().await.unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[tokio::test]
    async fn test_submit_without_token_fails_and_keeps_cart() {
        let handle = spawn_manager(
            vec![],
            RecordingGateway::succeeding(),
            MemoryTokenStore::new(),
        );
        handle.add_item(item("A", 1, 10)).await.unwrap();

        let result = handle
            .submit_order(CustomerId::new("cust-1"), None)
            .await;
        assert!(matches!(result, Err(CartError::AuthenticationRequired)));
        assert_eq!(handle.snapshot().await.unwrap().total_quantity(), 1);
    }

    #[tokio::test]
    async fn test_submit_empty_cart_fails() {
        let handle = spawn_manager(
            vec![],
            RecordingGateway::succeeding(),
            MemoryTokenStore::with_token("tok"),
        );

        let result = handle
            .submit_order(CustomerId::new("cust-1"), None)
            .await;
        assert!(matches!(result, Err(CartError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_submit_normalizes_variant_ids_and_clears() {
        let gateway = RecordingGateway::succeeding();
        let store = CartStore::new(Arc::new(MemoryStorage::new()));
        let gateway = Arc::new(gateway);
        let handle = CartManager::spawn(
            store.clone(),
            CartCollaborators {
                stock: Arc::new(FixedStock(vec![])),
                orders: gateway.clone(),
                tokens: Arc::new(MemoryTokenStore::with_token("tok")),
            },
            Notifier::new(),
            Duration::from_secs(30),
        );

        handle.add_item(item("45791842", 2, 10)).await.unwrap();

        let session = handle
            .submit_order(CustomerId::new("cust-1"), None)
            .await
            .unwrap();
        assert_eq!(session.checkout_url, "https://shop.example/checkout/abc");

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(
            requests[0].line_items[0].variant_id,
            "gid://shopify/ProductVariant/45791842"
        );
        drop(requests);

        assert!(handle.snapshot().await.unwrap().is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_succeeds_when_store_clear_fails() {
        let store = CartStore::new(Arc::new(UndeletableStorage(MemoryStorage::new())));
        let handle = CartManager::spawn(
            store,
            CartCollaborators {
                stock: Arc::new(FixedStock(vec![])),
                orders: Arc::new(RecordingGateway::succeeding()),
                tokens: Arc::new(MemoryTokenStore::with_token("tok")),
            },
            Notifier::new(),
            Duration::from_secs(30),
        );
        handle.add_item(item("A", 1, 10)).await.unwrap();

        // The order exists at the gateway, so the caller must see success and
        // an emptied cart even though the persisted state could not be deleted.
        let session = handle
            .submit_order(CustomerId::new("cust-1"), None)
            .await
            .unwrap();
        assert_eq!(session.checkout_url, "https://shop.example/checkout/abc");
        assert!(handle.snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_surfaces_message_and_keeps_cart() {
        let handle = spawn_manager(
            vec![],
            RecordingGateway::failing("Insufficient inventory"),
            MemoryTokenStore::with_token("tok"),
        );
        handle.add_item(item("A", 2, 10)).await.unwrap();
        let mut notices = handle.subscribe_notices();

        let result = handle
            .submit_order(CustomerId::new("cust-1"), None)
            .await;
        assert!(matches!(result, Err(CartError::Api { status: 422, .. })));
        assert_eq!(handle.snapshot().await.unwrap().total_quantity(), 2);

        let notice = notices.recv().await.unwrap();
        assert!(notice.message.contains("Insufficient inventory"));
    }

    #[tokio::test]
    async fn test_reconcile_clamps_and_notifies() {
        let handle = spawn_manager(
            vec![record("A", 2)],
            RecordingGateway::succeeding(),
            MemoryTokenStore::new(),
        );
        handle.add_item(item("A", 5, 10)).await.unwrap();
        let mut notices = handle.subscribe_notices();

        handle.reconcile_now().await.unwrap();

        let cart = handle.snapshot().await.unwrap();
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().amount, Decimal::from(20));

        let notice = notices.recv().await.unwrap();
        assert!(notice.message.contains("adjusted to 2"));
    }

    #[tokio::test]
    async fn test_update_quantity_rejection_warns() {
        let handle = spawn_manager(
            vec![record("A", 3)],
            RecordingGateway::succeeding(),
            MemoryTokenStore::new(),
        );
        handle.add_item(item("A", 2, 10)).await.unwrap();
        handle.reconcile_now().await.unwrap();
        let mut notices = handle.subscribe_notices();

        handle
            .update_quantity(VariantId::new("A"), 10)
            .await
            .unwrap();

        assert_eq!(handle.snapshot().await.unwrap().total_quantity(), 2);
        let notice = notices.recv().await.unwrap();
        assert!(notice.message.contains("Only 3 units"));
    }

    #[tokio::test]
    async fn test_badge_observes_changes_via_events() {
        let handle = spawn_manager(
            vec![],
            RecordingGateway::succeeding(),
            MemoryTokenStore::new(),
        );
        let mut events = handle.subscribe_events();

        handle.add_item(item("A", 2, 10)).await.unwrap();
        handle.clear().await.unwrap();

        assert!(matches!(
            events.recv().await.unwrap(),
            CartEvent::Changed { total_quantity: 2, .. }
        ));
        assert!(matches!(events.recv().await.unwrap(), CartEvent::Cleared));
    }
}
