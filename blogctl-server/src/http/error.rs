//! Request error types with IntoResponse
//!
//! Errors end the request with an HTML error page and the matching status.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::views;
use crate::db::DbError;

/// Terminal request error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No post with this id (404)
    #[error("post {id} not found")]
    NotFound { id: String },

    /// Unreadable form submission (4xx from the extractor)
    #[error("invalid form: {0}")]
    Form(#[from] FormRejection),

    /// Storage failure (500, logged)
    #[error(transparent)]
    Storage(#[from] DbError),
}

impl AppError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { id } => {
                tracing::debug!(post_id = %id, "post not found");
                (
                    StatusCode::NOT_FOUND,
                    views::error_page(
                        "Not Found",
                        "The requested URL was not found on the server.",
                    ),
                )
                    .into_response()
            }
            Self::Form(rejection) => rejection.into_response(),
            Self::Storage(e) => {
                // Log the actual error, return generic message
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    views::error_page("Internal Server Error", "an internal error occurred"),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_is_404() {
        let response = AppError::not_found(5).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn storage_error_hides_details() {
        let err = AppError::Storage(DbError::Io(std::io::Error::other("disk on fire")));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(!body.contains("disk on fire"));
    }
}
