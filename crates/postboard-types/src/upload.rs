//! Upload record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_URL: &str = "dummy url";
pub const PLACEHOLDER_FILE_TYPE: &str = "photo";
pub const PLACEHOLDER_FILE_NAME: &str = "dummy name";

/// An upload record about to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUpload {
    pub caption: String,
    pub url: String,
    pub file_type: String,
    pub file_name: String,
}

impl NewUpload {
    /// Build a record for `caption` with placeholder file metadata.
    ///
    /// The uploaded bytes are not stored anywhere, so `url`, `file_type`
    /// and `file_name` carry fixed values.
    pub fn placeholder(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            url: PLACEHOLDER_URL.to_string(),
            file_type: PLACEHOLDER_FILE_TYPE.to_string(),
            file_name: PLACEHOLDER_FILE_NAME.to_string(),
        }
    }
}

/// A stored upload record, as reloaded after insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub id: i64,
    pub caption: String,
    pub url: String,
    pub file_type: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}
