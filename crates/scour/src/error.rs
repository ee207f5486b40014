//! Error types for the Scour library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Scour operations.
#[derive(Debug, Error)]
pub enum ScourError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to process.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Dataset is not rectangular.
    #[error("Malformed dataset: column '{column}' has {actual} rows, expected {expected}")]
    MalformedDataset {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A numeric cell cannot be ordered for quantile computation.
    #[error("Unclassifiable value in column '{column}' at row {row}: not comparable")]
    UnclassifiableValue { column: String, row: usize },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Scour operations.
pub type Result<T> = std::result::Result<T, ScourError>;
