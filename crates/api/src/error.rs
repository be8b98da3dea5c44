use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use kiji_core::article::RenderError;
use kiji_shopify::client::ShopifyError;

/// Application-level error type for HTTP handlers.
///
/// Every reachable failure in the publish pipeline maps to one of these
/// variants, and [`IntoResponse`] turns each into the JSON error
/// envelope `{ "error": <message> }` (plus `detail` for publish
/// rejections), so no fault escapes as an unhandled error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request carried no product URLs.
    #[error("URL がありません")]
    MissingUrls,

    /// The request carried no title.
    #[error("タイトルがありません")]
    MissingTitle,

    /// No product handle could be extracted from any submitted URL.
    #[error("有効な商品URLがありません")]
    NoValidUrls,

    /// Every product lookup failed or matched nothing.
    #[error("商品情報が取得できませんでした")]
    NoProductsResolved,

    /// The platform rejected the article creation.
    #[error("ブログ投稿に失敗しました")]
    PublishFailed {
        /// Raw platform response, attached to the error body.
        detail: serde_json::Value,
    },

    /// The request body was not valid JSON for the expected shape.
    #[error("{0}")]
    InvalidBody(String),

    /// Article rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// An Admin API transport failure outside the publish rejection path.
    #[error(transparent)]
    Shopify(ShopifyError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl From<ShopifyError> for AppError {
    /// Only the publish step propagates `ShopifyError` with `?`:
    /// an API rejection there carries the upstream payload into the
    /// response, anything else is an unexpected fault.
    fn from(err: ShopifyError) -> Self {
        match err {
            ShopifyError::Api { detail, .. } => AppError::PublishFailed { detail },
            other => AppError::Shopify(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingUrls | AppError::MissingTitle | AppError::NoValidUrls => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }

            AppError::InvalidBody(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }

            AppError::NoProductsResolved => {
                (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
            }

            AppError::PublishFailed { detail } => {
                tracing::error!(detail = %detail, "Article creation rejected by the platform");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": self.to_string(), "detail": detail }),
                )
            }

            AppError::Render(err) => {
                tracing::error!(error = %err, "Article rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": err.to_string() }),
                )
            }

            AppError::Shopify(err) => {
                tracing::error!(error = %err, "Admin API call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": err.to_string() }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
