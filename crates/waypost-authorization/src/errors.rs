//! Trip service errors

use waypost_core::effects::{SessionError, StoreError};

/// Errors from [`TripService`](crate::TripService) calls.
///
/// `NotAuthenticated` is the service's own failure. Handler failures pass
/// through transparently: same message, same source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripError {
    /// No identity is signed in
    #[error("not authenticated: no identity is signed in")]
    NotAuthenticated,

    /// The session handler failed
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The trip store handler failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TripError {
    /// Whether this is the authentication failure
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_handler_errors_keep_their_message() {
        let inner = StoreError::unavailable("replica lagging");
        let err = TripError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert!(!err.is_not_authenticated());

        let inner = SessionError::Timeout { millis: 40 };
        assert_eq!(TripError::from(inner.clone()).to_string(), inner.to_string());
    }

    #[test]
    fn test_transparent_source_is_the_inner_source() {
        let err = TripError::from(StoreError::unavailable("replica lagging"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_not_authenticated() {
        assert!(TripError::NotAuthenticated.is_not_authenticated());
        assert!(TripError::NotAuthenticated
            .to_string()
            .contains("not authenticated"));
    }
}
