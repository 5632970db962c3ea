//! File upload handler

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::multipart::{Multipart, MultipartRejection},
    extract::State,
    Json,
};
use postboard_core::UploadRecord;
use tracing::debug;

pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadRecord>, ApiError> {
    let mut multipart = multipart?;

    let mut caption = String::new();
    let mut file_size = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await?;
                debug!("Received file {:?} ({} bytes)", file_name, data.len());
                file_size = Some(data.len());
            }
            "caption" => caption = field.text().await?,
            other => debug!("Ignoring multipart field {:?}", other),
        }
    }

    let file_size =
        file_size.ok_or_else(|| ApiError::Validation("Missing multipart field: file".to_string()))?;

    let record = state.uploads.upload(&caption, file_size).await?;
    Ok(Json(record))
}
