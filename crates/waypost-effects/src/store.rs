//! Trip store effect handler backed by a [`Directory`]

use crate::Directory;
use async_trait::async_trait;
use std::sync::Arc;
use waypost_core::effects::{StoreError, TripStoreEffects};
use waypost_core::{Identity, Trip};

/// Serves each identity's own trips from a provisioned directory.
///
/// The lookup goes by id, so the trips returned are the directory's copy
/// even when the caller passes a stale clone of the identity.
#[derive(Debug, Clone)]
pub struct DirectoryTripStore {
    directory: Arc<Directory>,
}

impl DirectoryTripStore {
    /// Create a store over `directory`
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    /// The directory being served
    pub fn directory(&self) -> &Arc<Directory> {
        &self.directory
    }
}

#[async_trait]
impl TripStoreEffects for DirectoryTripStore {
    async fn find_trips_by(&self, identity: &Identity) -> Result<Vec<Trip>, StoreError> {
        let owner = self
            .directory
            .get(&identity.id())
            .ok_or(StoreError::UnknownIdentity(identity.id()))?;
        tracing::trace!(owner = %owner.id(), trips = owner.trips().len(), "trips loaded");
        Ok(owner.trips().to_vec())
    }
}
