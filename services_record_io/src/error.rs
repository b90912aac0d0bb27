//! Record loading errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Detection record error
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record must be a JSON object")]
    NotAnObject,

    #[error("Record needs metadata and detections entries, found {0} top-level entries")]
    MissingEntries(usize),

    #[error("Detections entry '{0}' is not an array")]
    DetectionsNotArray(String),

    #[error("Detection {index} is malformed: {message}")]
    MalformedDetection { index: usize, message: String },

    #[error("Record has no detections")]
    NoDetections,
}

/// Record result
pub type RecordResult<T> = Result<T, RecordError>;
