//! Session Effects Trait
//!
//! Resolves the identity of whoever is currently signed in.

use crate::Identity;
use async_trait::async_trait;
use std::sync::Arc;

/// Failures a session handler can report
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The session backend could not be reached
    #[error("Session unavailable: {message}")]
    Unavailable {
        /// Description of the failure
        message: String,
    },

    /// The session backend did not answer in time
    #[error("Session lookup timed out after {millis}ms")]
    Timeout {
        /// How long the handler waited
        millis: u64,
    },
}

impl SessionError {
    /// Create an unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Effect trait for resolving the current session identity
#[async_trait]
pub trait SessionEffects: Send + Sync {
    /// The signed-in identity, or `None` when nobody is authenticated
    async fn current_identity(&self) -> Result<Option<Arc<Identity>>, SessionError>;
}

/// Blanket implementation for Arc<T> where T: SessionEffects
#[async_trait]
impl<T: SessionEffects + ?Sized> SessionEffects for Arc<T> {
    async fn current_identity(&self) -> Result<Option<Arc<Identity>>, SessionError> {
        (**self).current_identity().await
    }
}
