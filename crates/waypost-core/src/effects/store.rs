//! Trip Store Effects Trait
//!
//! Resolves the trips an identity owns. An identity without trips is an
//! ordinary `Ok(vec![])`, never an error.

use crate::{Identity, IdentityId, Trip};
use async_trait::async_trait;
use std::sync::Arc;

/// Failures a trip store handler can report
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached
    #[error("Trip store unavailable: {message}")]
    Unavailable {
        /// Description of the failure
        message: String,
    },

    /// The backing store did not answer in time
    #[error("Trip lookup timed out after {millis}ms")]
    Timeout {
        /// How long the handler waited
        millis: u64,
    },

    /// The store has never heard of this identity
    #[error("Unknown identity: {0}")]
    UnknownIdentity(IdentityId),
}

impl StoreError {
    /// Create an unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Effect trait for looking up an identity's trips
#[async_trait]
pub trait TripStoreEffects: Send + Sync {
    /// All trips owned by `identity`, in store order
    async fn find_trips_by(&self, identity: &Identity) -> Result<Vec<Trip>, StoreError>;
}

/// Blanket implementation for Arc<T> where T: TripStoreEffects
#[async_trait]
impl<T: TripStoreEffects + ?Sized> TripStoreEffects for Arc<T> {
    async fn find_trips_by(&self, identity: &Identity) -> Result<Vec<Trip>, StoreError> {
        (**self).find_trips_by(identity).await
    }
}
