//! Error types for the TextRazor client.

use thiserror::Error;

/// Result type for TextRazor client operations.
pub type Result<T> = std::result::Result<T, TextRazorError>;

/// TextRazor client errors.
#[derive(Debug, Error)]
pub enum TextRazorError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response, invalid key, plan limit exceeded)
    #[error("TextRazor returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
