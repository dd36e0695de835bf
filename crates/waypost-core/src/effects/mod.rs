//! Effect trait definitions
//!
//! These traits define **what** the trip service may ask of the outside
//! world; handlers in `waypost-effects` (and mocks in `waypost-testkit`)
//! define **how**. All trip-service code is parameterized by these traits,
//! so there is no process-wide session or store to reach for.
//!
//! Handler failures are reported through [`SessionError`] and [`StoreError`].
//! Cancellation and timeouts are a handler concern and surface as the
//! `Timeout` variants.

pub mod session;
pub mod store;

pub use session::{SessionEffects, SessionError};
pub use store::{StoreError, TripStoreEffects};
