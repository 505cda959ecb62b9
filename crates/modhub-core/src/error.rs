//! Error types for the modding hub.
//!
//! Only failures that the caller has to act on are errors. Missing tools and
//! unreadable guide files are reported as absent values by the resolvers.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the hub library.
#[derive(Debug, Error)]
pub enum HubError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsupported language code: {0}")]
    InvalidLanguage(String),

    #[error("Unsupported view mode: {0}")]
    InvalidViewMode(String),

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Registry lookups
    #[error("Unknown tool: {id}")]
    UnknownTool { id: String },

    #[error("Unknown guide: {id}")]
    UnknownGuide { id: String },

    // Launch errors
    #[error("Tool not found: {filename}")]
    ToolNotFound { filename: String },

    #[error("Launch failed for {tool}: {message}")]
    LaunchFailed { tool: String, message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for hub operations.
pub type Result<T> = std::result::Result<T, HubError>;

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        HubError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl HubError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        HubError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create a validation error for a form field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        HubError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the error was caused by user input rather than the environment.
    ///
    /// The front end shows these as warnings instead of errors.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            HubError::Validation { .. }
                | HubError::InvalidLanguage(_)
                | HubError::InvalidViewMode(_)
                | HubError::UnknownTool { .. }
                | HubError::UnknownGuide { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HubError::ToolNotFound {
            filename: "tw1_lan_viewer.py".into(),
        };
        assert_eq!(err.to_string(), "Tool not found: tw1_lan_viewer.py");

        let err = HubError::validation("name", "Name required");
        assert_eq!(err.to_string(), "Validation error for name: Name required");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        match HubError::io_with_path(io, "/tmp/x.json") {
            HubError::Io { path, source, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/x.json")));
                assert!(source.is_some());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_user_errors() {
        assert!(HubError::validation("title_en", "English title required").is_user_error());
        assert!(HubError::UnknownTool { id: "x".into() }.is_user_error());
        assert!(!HubError::LaunchFailed {
            tool: "x".into(),
            message: "boom".into()
        }
        .is_user_error());
    }
}
