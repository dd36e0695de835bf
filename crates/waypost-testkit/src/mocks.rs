//! Mock effect handlers for deterministic testing
//!
//! Every handler counts its calls, and clones share state, so a test can
//! hand one clone to a service and inspect the other afterwards.
//!
//! Uses `std::sync::Mutex`; lock contention is not a concern in tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use waypost_core::effects::{SessionEffects, SessionError, StoreError, TripStoreEffects};
use waypost_core::{Identity, IdentityId, Trip};

/// Session handler returning a fixed identity (or none)
#[derive(Debug, Clone, Default)]
pub struct MockSession {
    identity: Option<Arc<Identity>>,
    calls: Arc<AtomicUsize>,
}

impl MockSession {
    /// A session with `identity` signed in
    pub fn signed_in(identity: impl Into<Arc<Identity>>) -> Self {
        Self {
            identity: Some(identity.into()),
            calls: Arc::default(),
        }
    }

    /// A session with nobody signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Number of `current_identity` calls so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionEffects for MockSession {
    async fn current_identity(&self) -> Result<Option<Arc<Identity>>, SessionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.identity.clone())
    }
}

/// Session handler that always fails
#[derive(Debug, Clone)]
pub struct FailingSession {
    error: SessionError,
}

impl FailingSession {
    /// Fail every lookup with `error`
    pub fn new(error: SessionError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl SessionEffects for FailingSession {
    async fn current_identity(&self) -> Result<Option<Arc<Identity>>, SessionError> {
        Err(self.error.clone())
    }
}

/// Trip store answering with the identity's own trips, as stored on the
/// identity value it is given.
#[derive(Debug, Clone, Default)]
pub struct OwnTripsStore {
    requested: Arc<Mutex<Vec<IdentityId>>>,
}

impl OwnTripsStore {
    /// Create a store with no recorded calls
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find_trips_by` calls so far
    pub fn call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    /// Ids passed to `find_trips_by`, in call order
    pub fn requested(&self) -> Vec<IdentityId> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl TripStoreEffects for OwnTripsStore {
    async fn find_trips_by(&self, identity: &Identity) -> Result<Vec<Trip>, StoreError> {
        self.requested.lock().unwrap().push(identity.id());
        Ok(identity.trips().to_vec())
    }
}

/// Trip store that always fails
#[derive(Debug, Clone)]
pub struct FailingTripStore {
    error: StoreError,
    calls: Arc<AtomicUsize>,
}

impl FailingTripStore {
    /// Fail every lookup with `error`
    pub fn new(error: StoreError) -> Self {
        Self {
            error,
            calls: Arc::default(),
        }
    }

    /// Number of `find_trips_by` calls so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TripStoreEffects for FailingTripStore {
    async fn find_trips_by(&self, _identity: &Identity) -> Result<Vec<Trip>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::an_identity;

    #[tokio::test]
    async fn test_clones_share_counters() {
        let store = OwnTripsStore::new();
        let observer = store.clone();
        let bob = an_identity().travelled_to(["Lisbon"]).build();

        let trips = store.find_trips_by(&bob).await.unwrap();
        assert_eq!(trips, vec![Trip::new("Lisbon")]);
        assert_eq!(observer.call_count(), 1);
        assert_eq!(observer.requested(), vec![bob.id()]);
    }

    #[tokio::test]
    async fn test_mock_session_counts_calls() {
        let session = MockSession::anonymous();
        assert!(session.current_identity().await.unwrap().is_none());
        assert_eq!(session.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_handlers() {
        let session = FailingSession::new(SessionError::unavailable("down"));
        assert!(session.current_identity().await.is_err());

        let store = FailingTripStore::new(StoreError::Timeout { millis: 5 });
        let bob = an_identity().build();
        assert_eq!(
            store.find_trips_by(&bob).await,
            Err(StoreError::Timeout { millis: 5 })
        );
        assert_eq!(store.call_count(), 1);
    }
}
