//! Backend REST API client.
//!
//! Implements [`StockLookup`] and [`OrderGateway`] over the backend's JSON
//! endpoints:
//!
//! - `POST /products/stock` with `{"variantIds": [...]}` - authoritative
//!   stock levels
//! - `POST /orders/create-checkout` - order creation + checkout session
//! - `POST /orders/create-checkout/{orderId}` - checkout URL for an existing
//!   order
//!
//! Non-2xx responses carry a human-readable `message` field which is
//! surfaced verbatim to the user. Stock responses are memoized for a few
//! seconds so several views reconciling at once do not stampede the backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use verdemar_core::{OrderId, VariantId};

use crate::clients::{CheckoutSession, OrderGateway, OrderRequest, StockLookup, StockRecord};
use crate::clients::token::TokenStore;
use crate::config::CartConfig;
use crate::error::CartError;

/// Stock memo TTL; well under the 30-second reconciliation period.
const STOCK_MEMO_TTL: Duration = Duration::from_secs(10);

/// Client for the backend REST API.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    stock_memo: Cache<String, Vec<StockRecord>>,
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &CartConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let stock_memo = Cache::builder()
            .max_capacity(64)
            .time_to_live(STOCK_MEMO_TTL)
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_url.as_str().trim_end_matches('/').to_string(),
                tokens,
                stock_memo,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    /// POST a JSON body with a bearer token; returns status and body text.
    async fn post_json<B: serde::Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        token: &SecretString,
        body: &B,
    ) -> Result<(u16, String), CartError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(path))
            .bearer_auth(token.expose_secret())
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        Ok((status, text))
    }
}

#[async_trait]
impl StockLookup for ApiClient {
    #[instrument(skip(self), fields(variants = variant_ids.len()))]
    async fn fetch_stock(&self, variant_ids: &[VariantId]) -> Result<Vec<StockRecord>, CartError> {
        let memo_key = stock_memo_key(variant_ids);
        if let Some(records) = self.inner.stock_memo.get(&memo_key).await {
            debug!("Stock memo hit");
            return Ok(records);
        }

        // The stock endpoint requires an authenticated session.
        let token = self
            .inner
            .tokens
            .bearer_token()
            .ok_or(CartError::AuthenticationRequired)?;

        let body = serde_json::json!({ "variantIds": variant_ids });
        let (status, text) = self.post_json("products/stock", &token, &body).await?;

        if !(200..300).contains(&status) {
            return Err(api_error(status, &text));
        }

        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| CartError::StockUnavailable(format!("unparseable response: {e}")))?;
        if !value.is_array() {
            return Err(CartError::StockUnavailable(
                "response is not an array".to_string(),
            ));
        }

        let records: Vec<StockRecord> = serde_json::from_value(value)
            .map_err(|e| CartError::StockUnavailable(format!("malformed stock record: {e}")))?;

        self.inner
            .stock_memo
            .insert(memo_key, records.clone())
            .await;

        Ok(records)
    }
}

#[async_trait]
impl OrderGateway for ApiClient {
    #[instrument(skip(self, token, request), fields(lines = request.line_items.len()))]
    async fn create_checkout(
        &self,
        token: &SecretString,
        request: OrderRequest,
    ) -> Result<CheckoutSession, CartError> {
        let (status, text) = self
            .post_json("orders/create-checkout", token, &request)
            .await?;

        if !(200..300).contains(&status) {
            return Err(api_error(status, &text));
        }

        serde_json::from_str(&text).map_err(|e| CartError::Api {
            status,
            message: format!("unparseable checkout response: {e}"),
        })
    }

    #[instrument(skip(self, token), fields(order_id = %order_id))]
    async fn payment_url(
        &self,
        token: &SecretString,
        order_id: &OrderId,
    ) -> Result<String, CartError> {
        let path = format!("orders/create-checkout/{order_id}");
        let (status, text) = self
            .post_json(&path, token, &serde_json::Value::Null)
            .await?;

        if !(200..300).contains(&status) {
            return Err(api_error(status, &text));
        }

        let session: CheckoutSession = serde_json::from_str(&text).map_err(|e| CartError::Api {
            status,
            message: format!("unparseable checkout response: {e}"),
        })?;
        Ok(session.checkout_url)
    }
}

/// Build a `CartError::Api` from a non-2xx response, preferring the backend's
/// `message` field.
fn api_error(status: u16, body: &str) -> CartError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"));

    CartError::Api { status, message }
}

/// Memo key for a stock lookup: the variant set, order-insensitive.
fn stock_memo_key(variant_ids: &[VariantId]) -> String {
    let mut ids: Vec<&str> = variant_ids.iter().map(VariantId::as_str).collect();
    ids.sort_unstable();
    ids.join(",")
}
