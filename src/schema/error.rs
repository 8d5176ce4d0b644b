//! Error types for schema reading.

use thiserror::Error;

/// Errors that can occur while reading a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Attribute or tag content that is not valid UTF-8.
    #[error("Invalid UTF-8 in {0}")]
    Utf8(String),

    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document ended while constructs were still open.
    #[error("Unexpected end of document")]
    UnexpectedEof,

    /// The document contains no root construct.
    #[error("Missing schema root element")]
    MissingRoot,
}

impl SchemaError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a UTF-8 error for the given context.
    pub fn utf8(context: impl Into<String>) -> Self {
        Self::Utf8(context.into())
    }
}
