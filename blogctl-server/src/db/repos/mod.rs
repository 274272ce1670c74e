//! Post storage behind a trait so handlers can run without a database file
//!
//! Every call is a single statement. Nothing spans multiple queries.

pub mod memory;
pub mod posts;

use async_trait::async_trait;

use crate::models::{Post, PostDraft};

pub use memory::MemoryPostStore;
pub use posts::SqlitePostStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Row-level reads and writes of the `posts` table
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, DbError>;

    /// A single post, or `None` if no row has this id.
    async fn get_post(&self, id: i64) -> Result<Option<Post>, DbError>;

    /// Insert a post stamped with the current time, returning its new id.
    async fn insert_post(&self, draft: &PostDraft) -> Result<i64, DbError>;

    /// Overwrite title and content. A missing id is silently ignored.
    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<(), DbError>;

    /// Remove a post. A missing id is silently ignored.
    async fn delete_post(&self, id: i64) -> Result<(), DbError>;
}
