//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::AppError;

/// Post id taken from the `{id}` path segment.
///
/// A segment that is not an integer cannot name a post, so it is a 404
/// rather than a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(pub i64);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("<missing>"))?;

        // Only plain digits name a post: no sign, no whitespace
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::not_found(raw));
        }

        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| AppError::not_found(raw))
    }
}
