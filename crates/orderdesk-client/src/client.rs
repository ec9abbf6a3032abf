use std::time::Duration;

use serde_json::Value;

use orderdesk_types::wire::{self, OrderBody};
use orderdesk_types::{Order, OrderBatch, OrderDraft, OrderId};

use crate::error::{Error, Result};

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the order-storage API.
///
/// Cheap to clone (the underlying connection pool is shared). Every call is
/// a single attempt; errors propagate to the caller for notification.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /health. Advisory: callers notify on failure but never block
    /// later calls on it.
    pub async fn check_health(&self) -> Result<()> {
        let resp = self.http.get(self.url("/health")).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    /// GET /pedidos. Yields orders in server response order plus the count
    /// of records the wire boundary rejected.
    pub async fn list_orders(&self) -> Result<OrderBatch> {
        let resp = self.http.get(self.url("/pedidos")).send().await?;
        let resp = check_status(resp).await?;
        let records: Vec<Value> = resp.json().await?;
        Ok(wire::parse_orders(&records))
    }

    /// POST /pedidos. Returns the server's echo of the created order when
    /// the response body contains one.
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<Option<Order>> {
        let resp = self
            .http
            .post(self.url("/pedidos"))
            .json(&OrderBody::from(draft))
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(echoed_order(resp).await)
    }

    /// PUT /pedidos/{id}. Same body shape as create.
    pub async fn update_order(&self, id: &OrderId, draft: &OrderDraft) -> Result<Option<Order>> {
        let resp = self
            .http
            .put(self.url(&format!("/pedidos/{}", id)))
            .json(&OrderBody::from(draft))
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(echoed_order(resp).await)
    }

    /// DELETE /pedidos/{id}. Any 2xx is success; the body is ignored.
    pub async fn delete_order(&self, id: &OrderId) -> Result<()> {
        let resp = self
            .http
            .delete(self.url(&format!("/pedidos/{}", id)))
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Converts a non-2xx response into an Api error carrying the body's
/// `message` field when the server sent one.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|message| !message.is_empty());
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

/// Best-effort parse of the order a mutation response echoes back. The
/// subsequent re-fetch is the source of truth, so an unreadable echo is
/// not an error.
async fn echoed_order(resp: reqwest::Response) -> Option<Order> {
    let body: Value = resp.json().await.ok()?;
    wire::parse_order(&body).ok()
}
