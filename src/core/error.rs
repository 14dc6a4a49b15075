//! Error types for the journal facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A level string that matches none of the known levels
    #[error("invalid level: {input}")]
    InvalidLevel { input: String },

    /// No appender attached to the context and no process default installed
    #[error("no appender available: attach one to the context or install a default appender")]
    MissingAppender,

    /// The process-wide configuration was already installed
    #[error("journal configuration already installed")]
    AlreadyInitialized,

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an invalid level error for the rejected input
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("loud");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::config("CONTEXT_JOURNAL_LEVEL", "bad value");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("loud");
        assert_eq!(err.to_string(), "invalid level: loud");

        let err = LoggerError::config("Settings", "level missing");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for Settings: level missing"
        );

        assert!(LoggerError::MissingAppender
            .to_string()
            .contains("no appender available"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
