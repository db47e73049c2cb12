//! @ai:module:intent Define error types for result aggregation
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all sb-perf operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read result file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse result file {path}: {source}")]
    ResultParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Results directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to walk results directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Malformed record for task '{task}': {reason}")]
    MalformedRecord { task: String, reason: String },

    #[error("Task '{0}' has no samples")]
    EmptySamples(String),

    #[error("No task results to summarize")]
    EmptyResults,

    #[error("Task '{task}' has {actual} samples, expected {expected} like the other tasks")]
    UnevenSampleCounts {
        task: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
