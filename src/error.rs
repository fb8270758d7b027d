//! Error types for embed-media
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for embed-media operations
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Main error type for embed-media operations
#[derive(Error, Debug)]
pub enum EmbedError {
    /// The source directory holds no regular files
    #[error("no media files found in {dir}")]
    EmptyInput { dir: PathBuf },

    /// Source directory does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading an asset failed
    #[error("failed to read {path}: {source}")]
    ReadAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a previously generated artifact failed
    #[error("failed to read generated file {path}: {source}")]
    ReadArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the configuration file failed
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a generated artifact failed
    #[error("failed to write {path}: {source}")]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File name is not valid UTF-8
    #[error("file name is not valid UTF-8: {path}")]
    InvalidFileName { path: PathBuf },

    /// Sanitized file name is still not a C identifier
    #[error("'{filename}' does not map to a valid C identifier (got '{identifier}')")]
    InvalidIdentifier { filename: String, identifier: String },

    /// Two file names sanitize to the same identifier
    #[error("'{first}' and '{second}' both map to identifier '{identifier}'")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    /// Configuration file could not be parsed or failed validation
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Check mode found artifacts that differ from the generated output
    #[error("generated files are out of date: {}", display_paths(.paths))]
    StaleOutput { paths: Vec<PathBuf> },
}

impl EmbedError {
    /// Short machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            EmbedError::EmptyInput { .. } => "empty_input",
            EmbedError::DirectoryNotFound { .. } => "directory_not_found",
            EmbedError::Io(_)
            | EmbedError::ReadAsset { .. }
            | EmbedError::ReadArtifact { .. }
            | EmbedError::WriteArtifact { .. } => "io",
            EmbedError::ReadConfig { .. } => "read_config",
            EmbedError::InvalidFileName { .. } => "invalid_file_name",
            EmbedError::InvalidIdentifier { .. } => "invalid_identifier",
            EmbedError::IdentifierCollision { .. } => "identifier_collision",
            EmbedError::InvalidConfig { .. } => "invalid_config",
            EmbedError::StaleOutput { .. } => "stale_output",
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
