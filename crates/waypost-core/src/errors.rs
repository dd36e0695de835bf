//! Unified error system for Waypost configuration and provisioning
//!
//! Collaborator failures have their own types in [`crate::effects`]; this
//! error covers everything that happens before a service is running.

use serde::{Deserialize, Serialize};

/// Unified error type for Waypost setup operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum WaypostError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl WaypostError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Standard Result type for Waypost setup operations
pub type Result<T> = std::result::Result<T, WaypostError>;

impl From<std::io::Error> for WaypostError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl From<toml::de::Error> for WaypostError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization(format!("Invalid TOML: {err}"))
    }
}

impl From<serde_json::Error> for WaypostError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("Invalid JSON: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_error_creation() {
        let err = WaypostError::invalid("test message");
        assert_matches!(err, WaypostError::Invalid { .. });
        assert_eq!(err.to_string(), "Invalid: test message");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert_matches!(WaypostError::from(io_err), WaypostError::NotFound { .. });

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_matches!(WaypostError::from(io_err), WaypostError::Internal { .. });
    }

    #[test]
    fn test_parse_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err = WaypostError::from(toml_err);
        assert_matches!(err, WaypostError::Serialization { .. });
        assert!(err.to_string().contains("TOML"));
    }
}
