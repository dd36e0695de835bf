//! Identity directory and provisioning
//!
//! A [`Directory`] is built once from a [`DirectoryConfig`] and then frozen:
//! identities are handed out as `Arc<Identity>` and never mutated again.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use waypost_core::config::{env_flag, WaypostConfig};
use waypost_core::{Identity, IdentityId, Result, Trip, WaypostError};

/// One identity to provision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Unique handle within the directory
    pub handle: String,
    /// Handles this identity lists as connections
    #[serde(default)]
    pub connections: Vec<String>,
    /// Destinations of the trips this identity owns, in order
    #[serde(default)]
    pub trips: Vec<String>,
}

/// Provisioning manifest for a [`Directory`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Register every connection in both directions
    #[serde(default)]
    pub symmetric_connections: bool,
    /// Identities to create, in order
    #[serde(default)]
    pub identities: Vec<IdentityConfig>,
}

impl WaypostConfig for DirectoryConfig {
    fn merge_with_env(&mut self) -> Result<()> {
        if let Some(symmetric) = env_flag("SYMMETRIC_CONNECTIONS")? {
            self.symmetric_connections = symmetric;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashMap::with_capacity(self.identities.len());
        for entry in &self.identities {
            if entry.handle.trim().is_empty() {
                return Err(WaypostError::invalid("identity handle must not be empty"));
            }
            if seen.insert(entry.handle.as_str(), ()).is_some() {
                return Err(WaypostError::invalid(format!(
                    "duplicate identity handle: {}",
                    entry.handle
                )));
            }
        }

        for entry in &self.identities {
            if let Some(unknown) = entry
                .connections
                .iter()
                .find(|handle| !seen.contains_key(handle.as_str()))
            {
                return Err(WaypostError::not_found(format!(
                    "{} lists unknown connection {unknown}",
                    entry.handle
                )));
            }
        }
        Ok(())
    }
}

/// Read-only registry of provisioned identities
#[derive(Debug, Clone, Default)]
pub struct Directory {
    identities: Vec<Arc<Identity>>,
    by_id: HashMap<IdentityId, usize>,
    by_handle: HashMap<String, usize>,
}

impl Directory {
    /// Build identities, connections and trips from `config`.
    ///
    /// The config is validated first. With `symmetric_connections` the
    /// reverse direction is registered unless it is already present.
    pub fn provision(config: &DirectoryConfig) -> Result<Self> {
        config.validate()?;

        let bare: Vec<Identity> = config
            .identities
            .iter()
            .map(|entry| Identity::new(entry.handle.as_str()))
            .collect();
        let index: HashMap<&str, usize> = config
            .identities
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.handle.as_str(), position))
            .collect();

        let mut identities = bare.clone();
        // (owner, peer) edges added only by mirroring, not yet listed explicitly
        let mut mirrored: HashSet<(usize, usize)> = HashSet::new();
        for (owner, entry) in config.identities.iter().enumerate() {
            for handle in &entry.connections {
                let peer = index.get(handle.as_str()).copied().ok_or_else(|| {
                    WaypostError::not_found(format!("unknown connection {handle}"))
                })?;

                if mirrored.remove(&(owner, peer)) {
                    continue;
                }
                if identities[owner].is_connected_to(&bare[peer]) {
                    tracing::warn!(
                        owner = %entry.handle,
                        peer = %handle,
                        "duplicate connection registered"
                    );
                }
                identities[owner].add_connection(&bare[peer]);

                if config.symmetric_connections && !identities[peer].is_connected_to(&bare[owner])
                {
                    identities[peer].add_connection(&bare[owner]);
                    mirrored.insert((peer, owner));
                }
            }
        }

        for (identity, entry) in identities.iter_mut().zip(&config.identities) {
            for destination in &entry.trips {
                identity.add_trip(Trip::new(destination.as_str()));
            }
        }

        let directory = Self::from_identities(identities)?;
        tracing::info!(
            identities = directory.len(),
            symmetric = config.symmetric_connections,
            "directory provisioned"
        );
        Ok(directory)
    }

    /// Freeze already-built identities into a directory.
    ///
    /// Ids and handles must both be unique.
    pub fn from_identities(identities: impl IntoIterator<Item = Identity>) -> Result<Self> {
        let mut directory = Self::default();
        for identity in identities {
            let position = directory.identities.len();
            if directory.by_id.insert(identity.id(), position).is_some() {
                return Err(WaypostError::invalid(format!(
                    "duplicate identity id: {}",
                    identity.id()
                )));
            }
            if directory
                .by_handle
                .insert(identity.handle().to_owned(), position)
                .is_some()
            {
                return Err(WaypostError::invalid(format!(
                    "duplicate identity handle: {}",
                    identity.handle()
                )));
            }
            directory.identities.push(Arc::new(identity));
        }
        Ok(directory)
    }

    /// Look up an identity by id
    pub fn get(&self, id: &IdentityId) -> Option<&Arc<Identity>> {
        self.by_id.get(id).map(|&position| &self.identities[position])
    }

    /// Look up an identity by handle
    pub fn by_handle(&self, handle: &str) -> Option<&Arc<Identity>> {
        self.by_handle
            .get(handle)
            .map(|&position| &self.identities[position])
    }

    /// Number of identities
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Whether the directory holds no identities
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Identities in provisioning order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Identity>> {
        self.identities.iter()
    }
}
