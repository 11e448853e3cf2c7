use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::engine::detection::DetectionResult;
use crate::engine::knowledge::FractureRecord;

// NOTE: expect() is acceptable here: the pattern is static and a failure
// to compile it is irrecoverable.
static SUPPORTED_IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpeg|jpg|png|bmp|tiff|dicom)$").expect("Invalid regex: image extension pattern")
});

/// Represents a single message within a chat session.
///
/// Messages are created once and never mutated; a session keeps them in an
/// append-only list.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    /// The unique identifier for the message (UUID).
    pub id: String,
    /// The text content of the message.
    pub text: String,
    /// Whether the user (rather than the assistant) authored it.
    pub is_user: bool,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            is_user,
            timestamp: Utc::now(),
        }
    }

    /// Creates a message authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    /// Creates a message authored by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }
}

/// Represents an upload as handed over by the file picker: name and size
/// only, never pixel data.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct XrayUpload {
    /// The original name of the file.
    #[validate(length(min = 1))]
    pub file_name: String,
    /// File size in bytes.
    pub file_size_bytes: u64,
    /// When the file was handed over.
    pub uploaded_at: DateTime<Utc>,
}

impl XrayUpload {
    pub fn new(file_name: impl Into<String>, file_size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            file_size_bytes,
            uploaded_at: Utc::now(),
        }
    }

    /// Whether the file name ends in an accepted image extension
    /// (jpeg, jpg, png, bmp, tiff, dicom). Case-insensitive.
    pub fn has_supported_extension(&self) -> bool {
        SUPPORTED_IMAGE_EXTENSION.is_match(&self.file_name)
    }
}

/// Everything the results view needs for one analyzed upload.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisReport {
    /// Name of the analyzed file.
    pub file_name: String,
    /// Size of the analyzed file in bytes.
    pub file_size_bytes: u64,
    /// When the file was handed over.
    pub uploaded_at: DateTime<Utc>,
    /// When classification finished.
    pub analyzed_at: DateTime<Utc>,
    /// Classification wall time in milliseconds.
    pub processing_time_ms: u64,
    /// The classification itself.
    pub result: DetectionResult,
}

impl AnalysisReport {
    /// Returns the knowledge record for a specific-fracture result, for
    /// the detail view.
    pub fn fracture_info(&self) -> Option<&'static FractureRecord> {
        self.result.fracture()
    }
}
