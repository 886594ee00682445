//! Backend REST API collaborators.
//!
//! The cart core calls three external collaborators, each behind a trait so
//! tests can script them:
//!
//! - [`StockLookup`] - authoritative stock levels for a set of variants
//! - [`OrderGateway`] - order creation / checkout session handoff
//! - [`TokenStore`] - the bearer token proving an authenticated session
//!
//! [`ApiClient`] implements the first two over the backend REST API;
//! [`token::FileTokenStore`] implements the third over durable client
//! storage.

mod http;
pub mod token;

pub use http::ApiClient;
pub use token::{FileTokenStore, MemoryTokenStore, StoredToken, TokenStore};

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use verdemar_core::{CustomerId, Money, OrderId, VariantId};

use crate::error::CartError;

/// Authoritative stock information for a single variant.
///
/// Wire shape: `{"id", "quantityAvailable", "title", "price"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    /// Variant this record describes.
    pub id: VariantId,
    /// Units currently available for sale.
    pub quantity_available: u32,
    /// Display title (informational; the cart keeps its add-time title).
    pub title: String,
    /// Current price (informational; the cart never re-prices).
    pub price: Money,
}

/// A single line of an order submission: `{"variantId", "quantity"}`.
///
/// `variant_id` is the platform global-identifier form
/// (`gid://shopify/ProductVariant/<id>`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Normalized variant global ID.
    pub variant_id: String,
    /// Units ordered.
    pub quantity: u32,
}

/// Shipping address attached to an order submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub address1: String,
    pub city: String,
    pub province: String,
    pub zip: String,
    pub country: String,
}

/// Order-creation payload sent to the backend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Commerce-platform customer the order belongs to.
    pub customer_id: CustomerId,
    /// Normalized line items.
    pub line_items: Vec<OrderLine>,
    /// Optional shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
}

/// Result of a successful order submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// URL of the hosted checkout to redirect the customer to.
    pub checkout_url: String,
    /// Backend order reference, when the backend returns one.
    #[serde(default)]
    pub order_reference: Option<String>,
}

/// Stock lookup collaborator.
#[async_trait]
pub trait StockLookup: Send + Sync {
    /// Fetch authoritative stock levels for the given variants.
    ///
    /// # Errors
    ///
    /// Returns `CartError::StockUnavailable` when the response is malformed
    /// (e.g., not an array), `CartError::Network`/`CartError::Api` on
    /// transport or backend failures.
    async fn fetch_stock(&self, variant_ids: &[VariantId]) -> Result<Vec<StockRecord>, CartError>;
}

/// Order creation collaborator.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Create an order and checkout session from the given line items.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Api` carrying the backend's human-readable
    /// `message` field on non-2xx responses.
    async fn create_checkout(
        &self,
        token: &SecretString,
        request: OrderRequest,
    ) -> Result<CheckoutSession, CartError>;

    /// Fetch a checkout URL for an order that already exists (the
    /// pending-payments flow).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::create_checkout`].
    async fn payment_url(
        &self,
        token: &SecretString,
        order_id: &OrderId,
    ) -> Result<String, CartError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_record_wire_shape() {
        let json = r#"{
            "id": "45791842",
            "quantityAvailable": 3,
            "title": "Olive Oil 500ml",
            "price": {"amount": "12.50", "currencyCode": "USD"}
        }"#;
        let record: StockRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "45791842");
        assert_eq!(record.quantity_available, 3);
    }

    #[test]
    fn test_order_request_omits_absent_address() {
        let request = OrderRequest {
            customer_id: CustomerId::new("cust-1"),
            line_items: vec![OrderLine {
                variant_id: "gid://shopify/ProductVariant/1".to_string(),
                quantity: 2,
            }],
            shipping_address: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("shippingAddress").is_none());
        assert_eq!(json["lineItems"][0]["variantId"], "gid://shopify/ProductVariant/1");
    }

    #[test]
    fn test_checkout_session_without_reference() {
        let session: CheckoutSession =
            serde_json::from_str(r#"{"checkoutUrl": "https://shop.example/checkout/abc"}"#)
                .unwrap();
        assert_eq!(session.checkout_url, "https://shop.example/checkout/abc");
        assert!(session.order_reference.is_none());
    }
}
