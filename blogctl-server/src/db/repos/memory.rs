//! In-memory post store for tests and throwaway runs

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{DbError, PostStore};
use crate::models::{Post, PostDraft};

/// Posts kept in process memory; contents are lost on drop
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    posts: BTreeMap<i64, Post>,
    last_id: i64,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, DbError> {
        let inner = self.inner.lock().await;
        let mut posts: Vec<Post> = inner.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DbError> {
        Ok(self.inner.lock().await.posts.get(&id).cloned())
    }

    async fn insert_post(&self, draft: &PostDraft) -> Result<i64, DbError> {
        let mut inner = self.inner.lock().await;
        // ids are never handed out twice, even after a delete
        inner.last_id += 1;
        let id = inner.last_id;
        inner.posts.insert(
            id,
            Post {
                id,
                title: draft.title.as_str().to_owned(),
                content: draft.content.as_str().to_owned(),
                created: Utc::now().naive_utc(),
            },
        );
        Ok(id)
    }

    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<(), DbError> {
        if let Some(post) = self.inner.lock().await.posts.get_mut(&id) {
            post.title = draft.title.as_str().to_owned();
            post.content = draft.content.as_str().to_owned();
        }
        Ok(())
    }

    async fn delete_post(&self, id: i64) -> Result<(), DbError> {
        self.inner.lock().await.posts.remove(&id);
        Ok(())
    }
}
