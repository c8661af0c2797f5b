//! Error types for data file loading.

use thiserror::Error;

/// Errors that can occur when loading level or player data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// The data parsed but describes something unusable.
    #[error("Invalid data in '{path}': {details}")]
    Invalid { path: String, details: String },
}
