//! Error types for linkextract-ytdlp.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while invoking the extraction tool or parsing its
/// output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// The external tool exited with a non-zero status.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// Failed to parse tool output.
    #[error("failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Whether this error stems from output parsing rather than tool
    /// execution. Callers use this to avoid leaking parser internals to
    /// clients.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. } | Self::Json(_))
    }
}
