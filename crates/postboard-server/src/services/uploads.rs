//! Upload service

use postboard_core::ports::UploadStore;
use postboard_core::{NewUpload, Result, UploadRecord};
use std::sync::Arc;
use tracing::info;

pub struct UploadService {
    store: Arc<dyn UploadStore>,
}

impl UploadService {
    pub fn new(store: Arc<dyn UploadStore>) -> Self {
        Self { store }
    }

    /// Record an upload of `file_size` bytes under `caption`.
    ///
    /// The file content itself is dropped; the stored record carries
    /// placeholder file metadata.
    pub async fn upload(&self, caption: &str, file_size: usize) -> Result<UploadRecord> {
        info!(
            "Recording upload: caption={:?}, file_size={}",
            caption, file_size
        );

        let record = self
            .store
            .insert_upload(&NewUpload::placeholder(caption))
            .await?;

        info!("Upload stored with id {}", record.id);
        Ok(record)
    }
}
