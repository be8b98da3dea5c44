use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use kiji_api::config::ServerConfig;
use kiji_api::router::build_app_router;
use kiji_api::state::AppState;
use kiji_core::product::ProductRecord;
use kiji_shopify::client::ShopifyError;
use kiji_shopify::config::ShopifyConfig;
use kiji_shopify::gateway::ShopifyGateway;
use kiji_shopify::types::{CreatedArticle, NewArticle};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build a test `ShopifyConfig` pointing at a fake store.
pub fn test_shopify_config() -> ShopifyConfig {
    ShopifyConfig {
        domain: "edwards-stuff.myshopify.com".to_string(),
        admin_token: "shpat_test_token".to_string(),
        api_version: "2024-10".to_string(),
        blog_id: "987654".to_string(),
    }
}

/// Build the full application router with all middleware layers, backed
/// by the given gateway double.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(gateway: Arc<dyn ShopifyGateway>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        shopify: Arc::new(test_shopify_config()),
        gateway,
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .header("origin", "https://example.com")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build a fully-populated product record for tests.
pub fn product(title: &str) -> ProductRecord {
    ProductRecord {
        title: title.to_string(),
        image: Some(format!("https://cdn.example.com/{title}.jpg")),
        description_html: String::new(),
        price_amount: "12800.0".to_string(),
        currency_code: "JPY".to_string(),
        url: format!("https://edwards-stuff.com/products/{title}"),
    }
}

/// Test double for the Admin API gateway.
///
/// Resolves handles from an in-memory map and records publish calls so
/// tests can assert call counts and the exact payload sent. Handles
/// listed as failing return transport-level errors instead of `None`.
pub struct StubShopify {
    products: HashMap<String, ProductRecord>,
    failing_handles: Vec<String>,
    article_response: serde_json::Value,
    publish_rejection: Option<(u16, serde_json::Value)>,
    pub lookup_calls: AtomicUsize,
    pub publish_calls: AtomicUsize,
    pub last_article: Mutex<Option<NewArticle>>,
}

impl StubShopify {
    /// A stub that knows no products and accepts any publish.
    pub fn empty() -> Self {
        Self {
            products: HashMap::new(),
            failing_handles: Vec::new(),
            article_response: serde_json::json!({
                "id": 558810174,
                "blog_id": 241238572,
                "title": "Sale",
                "handle": "250607",
                "published_at": null,
            }),
            publish_rejection: None,
            lookup_calls: AtomicUsize::new(0),
            publish_calls: AtomicUsize::new(0),
            last_article: Mutex::new(None),
        }
    }

    /// A stub resolving the given handle/record pairs.
    pub fn with_products(entries: &[(&str, ProductRecord)]) -> Self {
        let mut stub = Self::empty();
        stub.products = entries
            .iter()
            .map(|(handle, record)| (handle.to_string(), record.clone()))
            .collect();
        stub
    }

    /// Make a handle fail with a transport-level error.
    pub fn failing_lookup(mut self, handle: &str) -> Self {
        self.failing_handles.push(handle.to_string());
        self
    }

    /// Make every publish attempt fail with the given status and payload.
    pub fn rejecting_publish(mut self, status: u16, detail: serde_json::Value) -> Self {
        self.publish_rejection = Some((status, detail));
        self
    }

    /// Override the article object returned on successful publish.
    pub fn with_article_response(mut self, article: serde_json::Value) -> Self {
        self.article_response = article;
        self
    }
}

#[async_trait]
impl ShopifyGateway for StubShopify {
    async fn product_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<ProductRecord>, ShopifyError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_handles.iter().any(|h| h == handle) {
            return Err(ShopifyError::Api {
                status: 502,
                detail: serde_json::Value::String("upstream unavailable".to_string()),
            });
        }
        Ok(self.products.get(handle).cloned())
    }

    async fn create_article(&self, article: &NewArticle) -> Result<CreatedArticle, ShopifyError> {
        self.publish_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_article.lock().unwrap() = Some(article.clone());

        if let Some((status, detail)) = &self.publish_rejection {
            return Err(ShopifyError::Api {
                status: *status,
                detail: detail.clone(),
            });
        }
        Ok(CreatedArticle {
            article: self.article_response.clone(),
        })
    }
}
