//! Error types for Eva

use thiserror::Error;

/// Result type alias for Eva operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Eva
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Unknown tool requested by the model: {0}")]
    UnknownTool(String),

    #[error("Unexpected completion response: {0}")]
    UnexpectedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
