//! Error types for Postboard

use crate::PostId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PostboardError>;

#[derive(Error, Debug)]
pub enum PostboardError {
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Database error: {0}")]
    Database(String),
}
