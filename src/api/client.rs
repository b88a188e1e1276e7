//! HTTP client for the backend API.
//!
//! Wraps the three endpoints the panel uses (customer query, order query,
//! per-customer orders) using [`reqwest`].

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::query::{CustomerQuery, OrderQuery};
use super::types::{ApiResponse, Customer, CustomerOrder, CustomerOrdersResponse, Order};
use crate::error::ApiError;

/// HTTP client for a single backend instance.
///
/// Cheap to clone: the underlying [`reqwest::Client`] is reference counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with the given request timeout.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `https://host`. A trailing slash is
    ///   ignored.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(Self::default_headers())
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /query/customers`.
    pub async fn query_customers(
        &self,
        query: &CustomerQuery,
    ) -> Result<ApiResponse<Customer>, ApiError> {
        self.post_json("/query/customers", query).await
    }

    /// `POST /query/orders`.
    pub async fn query_orders(&self, query: &OrderQuery) -> Result<ApiResponse<Order>, ApiError> {
        self.post_json("/query/orders", query).await
    }

    /// `GET /customers/{id}/orders`. Returns every order of the customer.
    pub async fn customer_orders(&self, customer_id: &str) -> Result<Vec<CustomerOrder>, ApiError> {
        let url = self.customer_orders_url(customer_id)?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        let body: CustomerOrdersResponse = Self::parse_response(response).await?;
        Ok(body.results)
    }

    // ---- private helpers ----

    fn default_headers() -> reqwest::header::HeaderMap {
        use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Customer ids are opaque, so the id goes in as one encoded path segment.
    fn customer_orders_url(&self, customer_id: &str) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["customers", customer_id, "orders"]);
        Ok(url)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or [`ApiError::Status`] with the
    /// body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Check the status, then decode the JSON body into `T`.
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_client(reqwest::Client::new(), "https://example.test/");
        assert_eq!(client.base_url(), "https://example.test");
        assert_eq!(
            client.url("/query/orders"),
            "https://example.test/query/orders"
        );
    }

    #[test]
    fn customer_orders_url_encodes_the_id() {
        let client = ApiClient::with_client(reqwest::Client::new(), "https://example.test/");
        assert_eq!(
            client.customer_orders_url("ALFKI").unwrap().as_str(),
            "https://example.test/customers/ALFKI/orders"
        );
        assert_eq!(
            client.customer_orders_url("A/B ?").unwrap().as_str(),
            "https://example.test/customers/A%2FB%20%3F/orders"
        );

        let nested = ApiClient::with_client(reqwest::Client::new(), "https://example.test/api");
        assert_eq!(
            nested.customer_orders_url("ALFKI").unwrap().as_str(),
            "https://example.test/api/customers/ALFKI/orders"
        );
    }

    #[test]
    fn customer_orders_url_rejects_bad_base() {
        let client = ApiClient::with_client(reqwest::Client::new(), "not a url");
        assert!(matches!(
            client.customer_orders_url("ALFKI"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn status_error_message_includes_body() {
        let err = ApiError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "API error (502): bad gateway");
    }
}
