//! Waypost Core
//!
//! Layer 1 of the Waypost workspace: the vocabulary every other crate shares.
//!
//! - [`Identity`] and [`IdentityId`]: parties that hold directed connections
//!   and own an ordered list of trips
//! - [`Trip`]: the opaque record an identity owns
//! - [`effects`]: the collaborator traits the trip service consumes
//!   (`SessionEffects`, `TripStoreEffects`); handlers live in `waypost-effects`
//! - [`WaypostError`]: unified error for configuration and provisioning
//! - [`config::WaypostConfig`]: file + environment configuration loading
//!
//! This crate performs no I/O of its own beyond reading configuration files.

pub mod config;
pub mod effects;
pub mod errors;
pub mod types;

pub use config::WaypostConfig;
pub use effects::{SessionEffects, SessionError, StoreError, TripStoreEffects};
pub use errors::{Result, WaypostError};
pub use types::identifiers::IdentityId;
pub use types::identity::Identity;
pub use types::trip::Trip;
