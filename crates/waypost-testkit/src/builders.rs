//! Identity builders

use waypost_core::{Identity, IdentityId, Trip};

/// Start building a test identity
pub fn an_identity() -> IdentityBuilder {
    IdentityBuilder::default()
}

/// Deterministic identity with no connections or trips
pub fn test_identity(seed: u8, handle: &str) -> Identity {
    Identity::with_id(IdentityId::from_entropy([seed; 16]), handle)
}

/// Builder for [`Identity`] fixtures
#[derive(Debug, Clone, Default)]
pub struct IdentityBuilder {
    id: Option<IdentityId>,
    handle: Option<String>,
    connections: Vec<Identity>,
    trips: Vec<Trip>,
}

impl IdentityBuilder {
    /// Set the handle (default `"anonymous"`)
    pub fn named(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Use a deterministic id derived from `seed`
    pub fn with_seed(mut self, seed: u8) -> Self {
        self.id = Some(IdentityId::from_entropy([seed; 16]));
        self
    }

    /// Register these identities as connections, in order
    pub fn connected_to<'a>(mut self, friends: impl IntoIterator<Item = &'a Identity>) -> Self {
        self.connections.extend(friends.into_iter().cloned());
        self
    }

    /// Add trips, in order
    pub fn travelled_to<T: Into<Trip>>(mut self, trips: impl IntoIterator<Item = T>) -> Self {
        self.trips.extend(trips.into_iter().map(Into::into));
        self
    }

    /// Build the identity
    pub fn build(self) -> Identity {
        let handle = self.handle.unwrap_or_else(|| "anonymous".to_string());
        let mut identity = match self.id {
            Some(id) => Identity::with_id(id, handle),
            None => Identity::new(handle),
        };
        for friend in &self.connections {
            identity.add_connection(friend);
        }
        for trip in self.trips {
            identity.add_trip(trip);
        }
        identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_registers_connections_and_trips() {
        let alice = test_identity(1, "alice");
        let carol = test_identity(3, "carol");
        let bob = an_identity()
            .named("bob")
            .with_seed(2)
            .connected_to([&alice, &carol])
            .travelled_to(["Lisbon", "Springfield"])
            .build();

        assert_eq!(bob.id(), IdentityId::from_entropy([2u8; 16]));
        assert!(bob.is_connected_to(&alice));
        assert!(bob.is_connected_to(&carol));
        assert_eq!(bob.trips(), &[Trip::new("Lisbon"), Trip::new("Springfield")][..]);
    }

    #[test]
    fn test_default_builder_is_empty() {
        let nobody = an_identity().build();
        assert_eq!(nobody.handle(), "anonymous");
        assert!(nobody.connections().is_empty());
        assert!(nobody.trips().is_empty());
    }
}
