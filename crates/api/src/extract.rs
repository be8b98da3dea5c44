//! Request extractors with project error mapping.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection maps to
/// [`AppError::InvalidBody`], so malformed bodies produce the standard
/// `{ "error": ... }` envelope instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);
