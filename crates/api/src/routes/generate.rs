//! Route definitions for the article generation endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Generation endpoint routes.
///
/// ```text
/// GET     /api/generate  -> api_status
/// POST    /api/generate  -> generate_article
/// OPTIONS /api/generate  -> preflight (204, headers via CORS layer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/generate",
        get(generate::api_status)
            .post(generate::generate_article)
            .options(generate::preflight),
    )
}
