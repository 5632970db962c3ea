//! In-memory post store

use async_trait::async_trait;
use postboard_core::ports::PostStore;
use postboard_core::{seed_posts, Post, PostCreate, PostId, PostListing, Result};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Process-lifetime post mapping.
///
/// Keys only ever grow, so `BTreeMap` order is insertion order.
pub struct MemoryPostStore {
    posts: RwLock<BTreeMap<PostId, Post>>,
}

impl MemoryPostStore {
    /// Create a store holding the ten seed posts
    pub fn new() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn with_posts(posts: BTreeMap<PostId, Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_posts(&self, limit: Option<u64>) -> Result<PostListing> {
        let posts = self.posts.read().await;

        // Zero counts as "no limit"
        let listing = match limit {
            Some(n) if n > 0 => {
                let n = usize::try_from(n).unwrap_or(usize::MAX);
                PostListing::Page(posts.values().take(n).cloned().collect())
            }
            _ => PostListing::All(posts.clone()),
        };

        debug!("Listed {} posts (limit={:?})", listing.len(), limit);
        Ok(listing)
    }

    async fn get_post(&self, id: PostId) -> Result<Option<Post>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn create_post(&self, req: PostCreate) -> Result<(PostId, Post)> {
        let post = Post::from(req);

        // Write lock spans both the max lookup and the insert
        let mut posts = self.posts.write().await;
        let id = posts.keys().next_back().map_or(1, |max| max + 1);
        posts.insert(id, post.clone());

        info!("Created post {}: {}", id, post.title);
        Ok((id, post))
    }
}
