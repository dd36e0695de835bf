//! Waypost Testing Infrastructure
//!
//! Shared fixtures for tests across the workspace: builders for identities,
//! effect handlers with scripted behaviour and call counters, and proptest
//! strategies for identity graphs.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! waypost-testkit = { path = "../waypost-testkit" }
//! ```
//!
//! ```rust,no_run
//! use waypost_testkit::*;
//!
//! let alice = an_identity().named("alice").build();
//! let bob = an_identity()
//!     .connected_to([&alice])
//!     .travelled_to(["Lisbon"])
//!     .build();
//! let session = MockSession::signed_in(alice);
//! let store = OwnTripsStore::new();
//! ```

pub mod builders;
pub mod mocks;
pub mod strategies;
pub mod tracing_init;

pub use builders::*;
pub use mocks::*;
pub use tracing_init::init_test_tracing;
