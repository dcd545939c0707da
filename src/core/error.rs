//! Error types for the logger facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level name that does not map to a known severity
    #[error("unable to set the logging level '{0}': not a valid level")]
    InvalidLevel(String),

    /// Formatter name other than json or text
    #[error("unknown logging formatter: '{0}'")]
    InvalidFormat(String),

    /// Destination path that is non-empty but contains only whitespace
    #[error("log destination path is blank")]
    BlankDestination,

    /// Destination file could not be opened for appending
    #[error("unable to open log file '{path}' for writing: {source}")]
    OpenDestination {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Sink is gone (closed by shutdown)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a destination open error
    pub fn open_destination(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::OpenDestination {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// True for errors raised while validating construction parameters
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidLevel(_)
                | LoggerError::InvalidFormat(_)
                | LoggerError::BlankDestination
                | LoggerError::OpenDestination { .. }
                | LoggerError::InvalidConfiguration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggerError::InvalidLevel("verbose".to_string());
        assert_eq!(
            err.to_string(),
            "unable to set the logging level 'verbose': not a valid level"
        );

        let err = LoggerError::InvalidFormat("xml".to_string());
        assert_eq!(err.to_string(), "unknown logging formatter: 'xml'");

        let err = LoggerError::config("Destination", "path is a directory");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for Destination: path is a directory"
        );
    }

    #[test]
    fn test_open_destination_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::open_destination("/var/log/proxy.log", io_err);

        assert!(matches!(err, LoggerError::OpenDestination { .. }));
        assert!(err.to_string().contains("/var/log/proxy.log"));
        assert!(err.to_string().contains("access denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_construction_error_classification() {
        assert!(LoggerError::BlankDestination.is_construction_error());
        assert!(LoggerError::InvalidLevel("x".into()).is_construction_error());
        assert!(!LoggerError::writer("closed").is_construction_error());
        assert!(!LoggerError::other("boom").is_construction_error());
    }
}
