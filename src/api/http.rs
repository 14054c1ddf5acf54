use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;

use crate::api::FoodApi;
use crate::error::{OrderError, Result};
use crate::models::{FoodItem, OrderPayload};

/// [`FoodApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    client: Client,
    base_url: String,
}

impl HttpFoodApi {
    /// Build a client for `base_url`. Request timeouts are enforced here.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Use an already configured client (proxy, TLS, headers).
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Turn a non-2xx response into [`OrderError::Status`].
fn ensure_success(response: Response, path: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(OrderError::Status {
            path: path.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Parse a `GET /favorites` body.
///
/// An empty body or a JSON `null` means the server has no favorites data.
pub fn parse_favorites(body: &str) -> Result<Option<Vec<FoodItem>>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str(body)?)
}

impl FoodApi for HttpFoodApi {
    async fn fetch_food(&self, id: u64) -> Result<FoodItem> {
        let path = format!("/foods/{}", id);
        tracing::debug!(%path, "GET");

        let response = self.client.get(self.url(&path)).send().await?;
        let food: FoodItem = ensure_success(response, &path)?.json().await?;
        Ok(food)
    }

    async fn fetch_favorites(&self) -> Result<Option<Vec<FoodItem>>> {
        let path = "/favorites";
        tracing::debug!(%path, "GET");

        let response = self.client.get(self.url(path)).send().await?;
        let body = ensure_success(response, path)?.text().await?;
        parse_favorites(&body)
    }

    async fn add_favorite(&self, food: &FoodItem) -> Result<()> {
        let path = "/favorites";
        tracing::debug!(%path, food_id = food.id, "POST");

        let response = self.client.post(self.url(path)).json(food).send().await?;
        ensure_success(response, path)?;
        Ok(())
    }

    async fn remove_favorite(&self, id: u64) -> Result<()> {
        let path = format!("/favorites/{}", id);
        tracing::debug!(%path, "DELETE");

        let response = self.client.delete(self.url(&path)).send().await?;
        ensure_success(response, &path)?;
        Ok(())
    }

    async fn create_order(&self, order: &OrderPayload) -> Result<Value> {
        let path = "/orders";
        tracing::debug!(%path, product_id = order.product_id, "POST");

        let response = self.client.post(self.url(path)).json(order).send().await?;
        let body = ensure_success(response, path)?.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
