//! Property test strategies for identity graphs
//!
//! Ids are derived from each identity's position, so shrinking keeps the
//! graph stable and failures reproduce.

use proptest::prelude::*;
use waypost_core::{Identity, IdentityId, Trip};

// Re-export proptest for convenience
pub use proptest;

/// A small set of identities with random directed connections and trips
#[derive(Debug, Clone)]
pub struct Neighbourhood {
    /// Identities in creation order; ids come from `[index + 1; 16]`
    pub identities: Vec<Identity>,
}

impl Neighbourhood {
    /// Identity at `index`, wrapping around
    pub fn pick(&self, index: prop::sample::Index) -> &Identity {
        index.get(&self.identities)
    }
}

/// Strategy for a trip with a short destination name
pub fn arb_trip() -> impl Strategy<Value = Trip> {
    "[A-Z][a-z]{2,10}".prop_map(|destination: String| Trip::new(destination))
}

/// Strategy for up to `max` trips, duplicates allowed
pub fn arb_trips(max: usize) -> impl Strategy<Value = Vec<Trip>> {
    prop::collection::vec(arb_trip(), 0..=max)
}

/// Largest neighbourhood [`arb_neighbourhood`] generates; ids are one byte wide
pub const MAX_NEIGHBOURHOOD: usize = u8::MAX as usize;

/// Strategy for 1 to `max_size` identities with random directed connections.
///
/// Each identity lists each other identity (itself included) with
/// probability one half, and owns up to four trips. `max_size` is clamped
/// to [`MAX_NEIGHBOURHOOD`].
pub fn arb_neighbourhood(max_size: usize) -> impl Strategy<Value = Neighbourhood> {
    (1..=max_size.clamp(1, MAX_NEIGHBOURHOOD)).prop_flat_map(|size| {
        (
            prop::collection::vec(prop::collection::vec(any::<bool>(), size), size),
            prop::collection::vec(arb_trips(4), size),
        )
            .prop_map(move |(edges, trips)| {
                let bare: Vec<Identity> = (0..size)
                    .map(|index| {
                        let seed = u8::try_from(index + 1)
                            .expect("neighbourhood size is clamped to MAX_NEIGHBOURHOOD");
                        Identity::with_id(
                            IdentityId::from_entropy([seed; 16]),
                            format!("identity-{index}"),
                        )
                    })
                    .collect();

                let identities = bare
                    .iter()
                    .zip(edges)
                    .zip(trips)
                    .map(|((owner, row), owned)| {
                        let mut identity = owner.clone();
                        for (peer, listed) in bare.iter().zip(row) {
                            if listed {
                                identity.add_connection(peer);
                            }
                        }
                        for trip in owned {
                            identity.add_trip(trip);
                        }
                        identity
                    })
                    .collect();

                Neighbourhood { identities }
            })
    })
}
