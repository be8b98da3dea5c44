//! Handlers for the article generation endpoint.
//!
//! `POST /api/generate` drives the whole pipeline: validate the request,
//! resolve each product URL against the Admin API, render the article
//! body, and create a draft article in the configured blog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use kiji_core::article::render_article;
use kiji_core::product::{extract_handle, ProductRecord};
use kiji_core::slug::date_slug_jst;
use kiji_shopify::types::NewArticle;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Author name attached to every generated article. Fixed, not
/// configurable.
const DEFAULT_AUTHOR: &str = "Edward'sStuff";

/// Body of a generation request. Created from the POST body, validated,
/// consumed once, discarded.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Product page URLs, in the order they should appear in the article.
    #[serde(default)]
    pub urls: Option<Vec<String>>,
    /// Article title.
    #[serde(default)]
    pub title: Option<String>,
    /// Explicit article handle; derived from the JST date when absent.
    #[serde(default)]
    pub slug: Option<String>,
    /// Lead paragraph HTML shown under the title.
    #[serde(default)]
    pub lead: Option<String>,
}

/// Successful generation response.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub ok: bool,
    /// The created article exactly as the platform returned it.
    pub article: serde_json::Value,
    /// Direct preview link for the draft.
    pub preview_url: String,
}

/// GET /api/generate -- liveness probe for the front-ends.
pub async fn api_status() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
        "message": "Blog Builder API",
    }))
}

/// OPTIONS /api/generate -- bare preflight, no body. The CORS layer
/// attaches the allow-* headers.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// POST /api/generate -- resolve products, render, publish a draft.
pub async fn generate_article(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    let urls = request.urls.unwrap_or_default();
    if urls.is_empty() {
        return Err(AppError::MissingUrls);
    }

    let title = request.title.unwrap_or_default();
    if title.is_empty() {
        return Err(AppError::MissingTitle);
    }

    let handles: Vec<String> = urls.iter().filter_map(|u| extract_handle(u)).collect();
    if handles.is_empty() {
        return Err(AppError::NoValidUrls);
    }

    let products = resolve_products(&state, &handles).await;
    if products.is_empty() {
        return Err(AppError::NoProductsResolved);
    }

    let slug = match request.slug.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        // Same-day default slugs collide; callers publishing twice a day
        // must supply an explicit slug.
        _ => date_slug_jst(Utc::now()),
    };

    let lead = request.lead.as_deref().unwrap_or("");
    let body_html = render_article(&title, lead, &products)?;

    let article = NewArticle::draft(&title, DEFAULT_AUTHOR, body_html, &slug);
    let created = state.gateway.create_article(&article).await?;

    let blog_id = created
        .blog_id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| state.shopify.blog_id.clone());
    let preview_url = state.shopify.preview_url(&blog_id, &slug);

    tracing::info!(slug = %slug, products = products.len(), "Draft article created");

    Ok(axum::Json(GenerateResponse {
        ok: true,
        article: created.article,
        preview_url,
    }))
}

/// Resolve every handle sequentially, keeping successes in input order.
///
/// Individual failures are logged and skipped so a batch with some bad
/// URLs still publishes from the good ones; the caller decides what an
/// empty result means.
async fn resolve_products(state: &AppState, handles: &[String]) -> Vec<ProductRecord> {
    let mut products = Vec::with_capacity(handles.len());
    let mut failed = 0usize;

    for handle in handles {
        match state.gateway.product_by_handle(handle).await {
            Ok(Some(product)) => products.push(product),
            Ok(None) => {
                failed += 1;
                tracing::warn!(handle = %handle, "No product for handle, skipping");
            }
            Err(err) => {
                failed += 1;
                tracing::warn!(handle = %handle, error = %err, "Product lookup failed, skipping");
            }
        }
    }

    if failed > 0 {
        tracing::info!(
            resolved = products.len(),
            failed,
            "Product resolution finished with skips"
        );
    }

    products
}
