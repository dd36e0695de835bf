//! Identities: connection and trip container
//!
//! An identity is a plain aggregate that only grows. Connections are stored
//! directionally as [`IdentityId`]s; `a.add_connection(&b)` says nothing about
//! whether `b` lists `a`. Duplicates are kept as-is.
//!
//! Mutation needs `&mut Identity`, so provisioning code builds identities
//! first and then shares them read-only (typically as `Arc<Identity>`).

use crate::{IdentityId, Trip};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A party that can authenticate, hold connections and own trips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    id: IdentityId,
    handle: String,
    connections: Vec<IdentityId>,
    trips: Vec<Trip>,
}

impl Identity {
    /// Create an identity with a fresh random id and no connections or trips
    pub fn new(handle: impl Into<String>) -> Self {
        Self::with_id(IdentityId::new(), handle)
    }

    /// Create an identity with a caller-chosen id
    pub fn with_id(id: IdentityId, handle: impl Into<String>) -> Self {
        Self {
            id,
            handle: handle.into(),
            connections: Vec::new(),
            trips: Vec::new(),
        }
    }

    /// The unique handle of this identity
    pub fn id(&self) -> IdentityId {
        self.id
    }

    /// Human-readable label; not unique and not used for equality
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Register `other` as a connection of this identity.
    pub fn add_connection(&mut self, other: &Identity) {
        self.connections.push(other.id);
    }

    /// Append a trip to the owned sequence
    pub fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Whether `other` is among this identity's connections.
    ///
    /// Checked from this identity's side only.
    pub fn is_connected_to(&self, other: &Identity) -> bool {
        self.connections.contains(&other.id)
    }

    /// Connections in registration order
    pub fn connections(&self) -> &[IdentityId] {
        &self.connections
    }

    /// Owned trips in insertion order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
