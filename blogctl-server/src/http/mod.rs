//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing and timeouts
//! - Graceful shutdown
//! - HTML pages and error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod views;

pub use error::AppError;
pub use server::{build_router, run_server, AppState, ServerError};
