//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use postboard_types::{NewUpload, Post, PostCreate, PostId, PostListing, UploadRecord};

/// Text post store
#[async_trait]
pub trait PostStore: Send + Sync {
    /// List posts. `None` and `Some(0)` both mean "no limit".
    async fn list_posts(&self, limit: Option<u64>) -> Result<PostListing>;
    async fn get_post(&self, id: PostId) -> Result<Option<Post>>;
    /// Append a post under `max(id) + 1` (or 1 when empty).
    async fn create_post(&self, post: PostCreate) -> Result<(PostId, Post)>;
}

/// Upload record store
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Create the backing table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<()>;
    /// Insert a record in its own transaction and return it as stored.
    async fn insert_upload(&self, upload: &NewUpload) -> Result<UploadRecord>;
}
