//! Error types for the pack converter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConverterError.
pub type Result<T> = std::result::Result<T, ConverterError>;

/// Main error type for pack conversion.
///
/// Only fatal conditions live here. Missing textures, unknown materials and
/// unreadable files met during a scan are skipped where they are found.
#[derive(Error, Debug)]
pub enum ConverterError {
    /// The input pack path does not exist.
    #[error("Input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The item definition document exists but could not be read as YAML.
    #[error("Failed to parse item definitions {}: {source}", path.display())]
    DefinitionParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The output archive could not be created or written.
    #[error("Cannot create ZIP file {}: {source}", path.display())]
    Packaging {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// Failed to read or extract a ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failed to serialize JSON output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
