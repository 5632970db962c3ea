//! Text post handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    Json,
};
use postboard_core::{Post, PostCreate, PostId, PostListing, PostboardError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    limit: Option<u64>,
}

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<PostListing>, ApiError> {
    let Query(query) = query?;
    let listing = state.posts.list_posts(query.limit).await?;
    Ok(Json(listing))
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<PostId>, PathRejection>,
) -> Result<Json<Post>, ApiError> {
    let Path(id) = id?;

    match state.posts.get_post(id).await? {
        Some(post) => Ok(Json(post)),
        None => {
            debug!("Post {} not found", id);
            Err(PostboardError::PostNotFound(id).into())
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<PostCreate>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Json(req) = body?;
    let (_id, post) = state.posts.create_post(req).await?;
    Ok(Json(post))
}
