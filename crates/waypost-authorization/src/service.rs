//! Trip service
//!
//! Authentication, then the connection policy, then at most one store call.
//! The service keeps no state of its own, so it can be shared freely across
//! tasks when its handlers can.

use crate::policy::{evaluate_access, AccessDecision};
use crate::TripError;
use tracing::instrument;
use waypost_core::effects::{SessionEffects, TripStoreEffects};
use waypost_core::{Identity, Trip};

/// Answer for callers that may not see a target's trips. Never allocates.
const NO_TRIPS: Vec<Trip> = Vec::new();

/// Connection-gated access to other identities' trips
#[derive(Debug, Clone)]
pub struct TripService<S, R> {
    session: S,
    store: R,
}

impl<S, R> TripService<S, R>
where
    S: SessionEffects,
    R: TripStoreEffects,
{
    /// Create a service over the given session and trip store handlers
    pub fn new(session: S, store: R) -> Self {
        Self { session, store }
    }

    /// The session handler
    pub fn session(&self) -> &S {
        &self.session
    }

    /// The trip store handler
    pub fn store(&self) -> &R {
        &self.store
    }

    /// Trips of `target` visible to the signed-in identity.
    ///
    /// Fails with [`TripError::NotAuthenticated`] when nobody is signed in.
    /// Returns an empty list when `target` does not list the caller as a
    /// connection. Otherwise returns exactly what the store returns.
    #[instrument(skip(self, target), fields(target_id = %target.id()))]
    pub async fn trips_by(&self, target: &Identity) -> Result<Vec<Trip>, TripError> {
        let caller = self.session.current_identity().await?;
        self.resolve(target, caller.as_deref()).await
    }

    /// Same as [`trips_by`](Self::trips_by), with the caller supplied by the
    /// call site instead of the session handler. `None` means unauthenticated.
    #[instrument(skip(self, target, viewer), fields(target_id = %target.id()))]
    pub async fn trips_visible_to(
        &self,
        target: &Identity,
        viewer: Option<&Identity>,
    ) -> Result<Vec<Trip>, TripError> {
        self.resolve(target, viewer).await
    }

    async fn resolve(
        &self,
        target: &Identity,
        caller: Option<&Identity>,
    ) -> Result<Vec<Trip>, TripError> {
        let Some(caller) = caller else {
            tracing::debug!("rejected: no session identity");
            return Err(TripError::NotAuthenticated);
        };

        match evaluate_access(target, caller) {
            AccessDecision::Allow => {
                let trips = self.store.find_trips_by(target).await?;
                tracing::trace!(caller = %caller.id(), trips = trips.len(), "trips returned");
                Ok(trips)
            }
            AccessDecision::Deny { reason } => {
                tracing::debug!(caller = %caller.id(), %reason, "access denied");
                Ok(NO_TRIPS)
            }
        }
    }
}
