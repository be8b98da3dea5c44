//! HTTP client for the Shopify Admin API.
//!
//! Wraps the Admin GraphQL endpoint (product lookup by handle) and the
//! Admin REST endpoint (article creation) using [`reqwest`]. One client
//! per process; connections are pooled and every call carries a bounded
//! timeout. No retries -- a failed lookup is reported to the caller,
//! which decides whether to skip or abort.

use std::sync::Arc;
use std::time::Duration;

use kiji_core::product::ProductRecord;

use crate::config::ShopifyConfig;
use crate::types::{CreatedArticle, NewArticle, ProductByHandleResponse, PRODUCT_BY_HANDLE_QUERY};

/// HTTP request timeout for a single Admin API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Errors from the Admin API layer.
#[derive(Debug, thiserror::Error)]
pub enum ShopifyError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Admin API rejected the call or returned an unusable body.
    #[error("Shopify API error ({status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response payload for diagnostics.
        detail: serde_json::Value,
    },
}

/// HTTP client for a single Shopify store.
pub struct ShopifyClient {
    client: reqwest::Client,
    config: Arc<ShopifyConfig>,
}

impl ShopifyClient {
    /// Create a new client for the configured store.
    pub fn new(config: Arc<ShopifyConfig>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: Arc<ShopifyConfig>) -> Self {
        Self { client, config }
    }

    /// Look up one product by handle via GraphQL.
    ///
    /// Returns `Ok(None)` when the platform reports no matching product.
    pub(crate) async fn lookup_product(
        &self,
        handle: &str,
    ) -> Result<Option<ProductRecord>, ShopifyError> {
        let body = serde_json::json!({
            "query": PRODUCT_BY_HANDLE_QUERY,
            "variables": { "handle": handle },
        });

        let response = self
            .client
            .post(self.config.graphql_url())
            .header(ACCESS_TOKEN_HEADER, &self.config.admin_token)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed: ProductByHandleResponse = response.json().await?;

        Ok(parsed
            .data
            .and_then(|d| d.product_by_handle)
            .map(|node| node.into_record(&self.config)))
    }

    /// Create a draft article in the configured blog via REST.
    ///
    /// A non-2xx status or a 2xx body without a well-formed `article`
    /// object both count as a rejection; the raw payload rides along in
    /// the error for diagnostics.
    pub(crate) async fn publish_article(
        &self,
        article: &NewArticle,
    ) -> Result<CreatedArticle, ShopifyError> {
        let body = serde_json::json!({ "article": article });

        let response = self
            .client
            .post(self.config.articles_url())
            .header(ACCESS_TOKEN_HEADER, &self.config.admin_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload = Self::read_json_lossy(response).await;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Article creation rejected");
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                detail: payload,
            });
        }

        match payload.get("article") {
            Some(created) if created.is_object() => Ok(CreatedArticle {
                article: created.clone(),
            }),
            _ => {
                tracing::error!(status = status.as_u16(), "Article missing from creation response");
                Err(ShopifyError::Api {
                    status: status.as_u16(),
                    detail: payload,
                })
            }
        }
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ShopifyError::Api`] with
    /// the status and body on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ShopifyError> {
        let status = response.status();
        if !status.is_success() {
            let detail = Self::read_json_lossy(response).await;
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response)
    }

    /// Read a response body as JSON, falling back to the raw text
    /// wrapped in a JSON string so diagnostics survive non-JSON error
    /// pages.
    async fn read_json_lossy(response: reqwest::Response) -> serde_json::Value {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
    }
}
