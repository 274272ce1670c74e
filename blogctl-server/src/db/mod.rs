//! Database layer - per-call connections and the post repository
//!
//! # Design Principles
//!
//! - One connection per call, always closed before returning
//! - One statement per call, no cross-query transactions
//! - Handlers see only the [`PostStore`] trait

pub mod connection;
pub mod repos;

pub use connection::with_connection;
pub use repos::*;
