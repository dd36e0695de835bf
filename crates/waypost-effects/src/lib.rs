//! Waypost Effects
//!
//! Layer 3: concrete handlers for the effect traits defined in
//! `waypost-core`, and the provisioning step that builds the identities they
//! serve.
//!
//! - [`Directory`]: read-only registry of provisioned identities, built from
//!   a [`DirectoryConfig`]
//! - [`SessionSlot`]: `SessionEffects` handler holding the signed-in identity
//! - [`DirectoryTripStore`]: `TripStoreEffects` handler serving trips from a
//!   directory
//!
//! Provisioning happens once, with exclusive access; afterwards every
//! identity is shared as `Arc<Identity>` and only read.

pub mod directory;
pub mod session;
pub mod store;

pub use directory::{Directory, DirectoryConfig, IdentityConfig};
pub use session::SessionSlot;
pub use store::DirectoryTripStore;
