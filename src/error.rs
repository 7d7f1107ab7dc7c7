//! Error types and result definitions for serialization and I/O operations.
//!
//! All fallible public operations in this crate return [`Result`]. Underlying
//! library failures (JSON parsing, file system calls) are converted into the
//! matching [`SerializationError`] code at the call site, so no foreign error
//! type crosses the public boundary.

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Error codes for the serializer and I/O layer.
///
/// Each variant carries a human-readable message. Use the helper
/// constructors to get the fixed default message for a code when there is
/// nothing more specific to say.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializationError {
    /// The requested format is not supported.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// JSON text could not be parsed or produced.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// INI text could not be parsed or produced.
    #[error("invalid INI: {0}")]
    InvalidIni(String),

    /// Pre-serialization schema validation rejected the document.
    #[error("schema validation failed: {0}")]
    SchemaValidation(String),

    /// A file system operation failed.
    #[error("file I/O error: {0}")]
    FileIo(String),

    /// File content is not valid UTF-8 text.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A value had a type the operation cannot handle.
    #[error("data type mismatch: {0}")]
    DataTypeMismatch(String),

    /// Catch-all for unexpected failures.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl SerializationError {
    /// Creates an [`SerializationError::InvalidFormat`] error.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Creates an [`SerializationError::InvalidJson`] error.
    pub fn invalid_json(msg: impl Into<String>) -> Self {
        Self::InvalidJson(msg.into())
    }

    /// Creates an [`SerializationError::InvalidIni`] error.
    pub fn invalid_ini(msg: impl Into<String>) -> Self {
        Self::InvalidIni(msg.into())
    }

    /// Creates an [`SerializationError::SchemaValidation`] error.
    pub fn schema_validation(msg: impl Into<String>) -> Self {
        Self::SchemaValidation(msg.into())
    }

    /// Creates an [`SerializationError::FileIo`] error.
    pub fn file_io(msg: impl Into<String>) -> Self {
        Self::FileIo(msg.into())
    }

    /// Creates an [`SerializationError::Encoding`] error.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Creates an [`SerializationError::DataTypeMismatch`] error.
    pub fn data_type_mismatch(msg: impl Into<String>) -> Self {
        Self::DataTypeMismatch(msg.into())
    }

    /// Creates an [`SerializationError::Unknown`] error with the default message.
    pub fn unknown() -> Self {
        Self::Unknown("unexpected internal error".to_string())
    }

    /// Returns the fixed default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "unsupported serialization format",
            Self::InvalidJson(_) => "malformed JSON document",
            Self::InvalidIni(_) => "malformed INI document",
            Self::SchemaValidation(_) => "document does not satisfy its schema",
            Self::FileIo(_) => "file operation failed",
            Self::Encoding(_) => "text is not valid UTF-8",
            Self::DataTypeMismatch(_) => "value type not supported by operation",
            Self::Unknown(_) => "unexpected internal error",
        }
    }

    /// Returns the message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidFormat(m)
            | Self::InvalidJson(m)
            | Self::InvalidIni(m)
            | Self::SchemaValidation(m)
            | Self::FileIo(m)
            | Self::Encoding(m)
            | Self::DataTypeMismatch(m)
            | Self::Unknown(m) => m,
        }
    }
}

impl From<std::io::Error> for SerializationError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            // read_to_string reports non-UTF-8 content as InvalidData
            std::io::ErrorKind::InvalidData => Self::Encoding(err.to_string()),
            _ => Self::FileIo(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = SerializationError::invalid_json("unexpected token at line 2");
        assert_eq!(format!("{err}"), "invalid JSON: unexpected token at line 2");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: SerializationError = io.into();
        assert!(matches!(err, SerializationError::FileIo(_)));

        let bad = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream is not UTF-8");
        let err: SerializationError = bad.into();
        assert!(matches!(err, SerializationError::Encoding(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: SerializationError = parse_err.into();
        assert!(matches!(err, SerializationError::InvalidJson(_)));
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(
            SerializationError::invalid_format("").default_message(),
            "unsupported serialization format"
        );
        assert_eq!(
            SerializationError::unknown().message(),
            "unexpected internal error"
        );
    }
}
