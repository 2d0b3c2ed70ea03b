//! Error types for inventory document loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that prevent a document from reaching the tokenizer.
///
/// Malformed content is never an error: tokenizing and record building are
/// total, and a document without data rows is reported as
/// [`LoadOutcome::Empty`](crate::LoadOutcome::Empty).
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Inventory file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document bytes are not valid UTF-8.
    #[error("{location} is not valid UTF-8 (byte offset {offset})")]
    InvalidEncoding { location: String, offset: usize },

    // === Network Errors ===
    /// Server answered with a non-success status.
    #[error("HTTP {status}")]
    Http { url: String, status: u16 },

    /// Request could not be completed.
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },
}

impl IngestError {
    /// Location (path or URL) the failure relates to.
    pub fn location(&self) -> String {
        match self {
            Self::FileNotFound { path } | Self::FileRead { path, .. } => {
                path.display().to_string()
            }
            Self::InvalidEncoding { location, .. } => location.clone(),
            Self::Http { url, .. } | Self::Network { url, .. } => url.clone(),
        }
    }

    /// Whether the failure happened talking to a remote server.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Network { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
