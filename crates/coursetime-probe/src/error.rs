//! Error types for coursetime-probe

use std::path::PathBuf;

/// Errors that can occur while probing a video's duration
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported container format
    #[error("Unsupported container format: {0}")]
    UnsupportedContainer(String),

    /// Failed to parse container
    #[error("Failed to parse container: {0}")]
    ContainerParse(String),

    /// The container parsed but carries no usable duration
    #[error("No duration found in {0}")]
    NoDuration(String),

    /// External tool is not installed
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// External tool ran but failed
    #[error("{tool} failed: {message}")]
    ToolFailed { tool: String, message: String },
}

impl ProbeError {
    pub(crate) fn tool_failed(tool: &str, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.to_string(),
            message: message.into(),
        }
    }
}
