//! SQLite post repository
//!
//! Each method runs one statement on its own short-lived connection
//! (see [`crate::db::connection::with_connection`]).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;

use super::{DbError, PostStore};
use crate::db::connection::{connect_options, with_connection};
use crate::models::{Post, PostDraft};

const SCHEMA: &str = include_str!("../schema.sql");

/// Posts stored in a single SQLite database file
#[derive(Debug, Clone)]
pub struct SqlitePostStore {
    options: SqliteConnectOptions,
    path: PathBuf,
}

impl SqlitePostStore {
    /// Open the database at `path`, creating the file and the `posts` table
    /// if they do not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DbError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let store = Self {
            options: connect_options(&path),
            path,
        };

        with_connection(&store.options, |conn| {
            Box::pin(async move { sqlx::query(SCHEMA).execute(conn).await.map(|_| ()) })
        })
        .await?;

        tracing::info!(path = %store.path.display(), "post store ready");
        Ok(store)
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PostStore for SqlitePostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, DbError> {
        let posts: Vec<Post> = with_connection(&self.options, |conn| {
            Box::pin(async move {
                sqlx::query_as(
                    "SELECT id, title, content, created FROM posts ORDER BY created DESC, id DESC",
                )
                .fetch_all(conn)
                .await
            })
        })
        .await?;

        tracing::debug!(count = posts.len(), "listed posts");
        Ok(posts)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DbError> {
        let post: Option<Post> = with_connection(&self.options, move |conn| {
            Box::pin(async move {
                sqlx::query_as("SELECT id, title, content, created FROM posts WHERE id = ?")
                    .bind(id)
                    .fetch_optional(conn)
                    .await
            })
        })
        .await?;

        tracing::debug!(post_id = id, found = post.is_some(), "fetched post");
        Ok(post)
    }

    async fn insert_post(&self, draft: &PostDraft) -> Result<i64, DbError> {
        let title = draft.title.as_str().to_owned();
        let content = draft.content.as_str().to_owned();

        let id = with_connection(&self.options, move |conn| {
            Box::pin(async move {
                let result = sqlx::query(
                    "INSERT INTO posts (title, content, created) VALUES (?, ?, datetime('now'))",
                )
                .bind(title)
                .bind(content)
                .execute(conn)
                .await?;
                Ok::<_, sqlx::Error>(result.last_insert_rowid())
            })
        })
        .await?;

        tracing::debug!(post_id = id, "inserted post");
        Ok(id)
    }

    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<(), DbError> {
        let title = draft.title.as_str().to_owned();
        let content = draft.content.as_str().to_owned();

        let affected = with_connection(&self.options, move |conn| {
            Box::pin(async move {
                let result = sqlx::query("UPDATE posts SET title = ?, content = ? WHERE id = ?")
                    .bind(title)
                    .bind(content)
                    .bind(id)
                    .execute(conn)
                    .await?;
                Ok::<_, sqlx::Error>(result.rows_affected())
            })
        })
        .await?;

        tracing::debug!(post_id = id, affected, "updated post");
        Ok(())
    }

    async fn delete_post(&self, id: i64) -> Result<(), DbError> {
        let affected = with_connection(&self.options, move |conn| {
            Box::pin(async move {
                let result = sqlx::query("DELETE FROM posts WHERE id = ?")
                    .bind(id)
                    .execute(conn)
                    .await?;
                Ok::<_, sqlx::Error>(result.rows_affected())
            })
        })
        .await?;

        tracing::debug!(post_id = id, affected, "deleted post");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostForm;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft::from_form(&PostForm {
            title: title.to_owned(),
            content: content.to_owned(),
        })
        .unwrap()
    }

    async fn temp_store() -> (tempfile::TempDir, SqlitePostStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqlitePostStore::open(dir.path().join("database.db"))
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn open_is_idempotent() {
        let (dir, store) = temp_store().await;
        store.insert_post(&draft("Kept", "Across reopen")).await.unwrap();

        let reopened = SqlitePostStore::open(store.path().to_path_buf()).await.unwrap();
        let posts = reopened.list_posts().await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Kept");
        drop(dir);
    }

    #[tokio::test]
    async fn insert_then_get_round_trips_trimmed_fields() {
        let (_dir, store) = temp_store().await;
        let id = store.insert_post(&draft("  Hello ", " World  ")).await.unwrap();

        let post = store.get_post(id).await.unwrap().expect("post exists");
        assert_eq!(post.id, id);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
    }

    #[tokio::test]
    async fn get_missing_post_is_none() {
        let (_dir, store) = temp_store().await;
        assert!(store.get_post(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (_dir, store) = temp_store().await;
        let first = store.insert_post(&draft("First", "a")).await.unwrap();
        let second = store.insert_post(&draft("Second", "b")).await.unwrap();

        let ids: Vec<i64> = store
            .list_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn update_keeps_id_and_created() {
        let (_dir, store) = temp_store().await;
        let id = store.insert_post(&draft("Old", "Body")).await.unwrap();
        let before = store.get_post(id).await.unwrap().unwrap();

        store.update_post(id, &draft("New", "Text")).await.unwrap();

        let after = store.get_post(id).await.unwrap().unwrap();
        assert_eq!(after.title, "New");
        assert_eq!(after.content, "Text");
        assert_eq!(after.created, before.created);
    }

    #[tokio::test]
    async fn update_missing_post_is_a_silent_no_op() {
        let (_dir, store) = temp_store().await;
        store.update_post(5, &draft("New", "Text")).await.unwrap();
        assert!(store.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let (_dir, store) = temp_store().await;
        let id = store.insert_post(&draft("Gone", "Soon")).await.unwrap();
        store.delete_post(id).await.unwrap();
        store.delete_post(id).await.unwrap();

        let next = store.insert_post(&draft("Next", "Post")).await.unwrap();
        assert!(next > id);
        assert!(store.get_post(id).await.unwrap().is_none());
    }
}
