//! Waypost Authorization
//!
//! Layer 4: the trip service. Given a target identity it answers with the
//! target's trips, gated twice:
//!
//! 1. **Authentication**: the session must resolve to an identity, otherwise
//!    the call fails with [`TripError::NotAuthenticated`] and nothing else
//!    happens.
//! 2. **Authorization**: the target must list the caller among its
//!    connections ([`policy::evaluate_access`]). If it does not, the answer is
//!    an empty list. That is a successful result, not an error.
//!
//! Only when both gates pass is the trip store consulted, and its answer is
//! returned untouched.
//!
//! # Example
//!
//! ```ignore
//! use waypost_authorization::TripService;
//!
//! let service = TripService::new(session, store);
//! let trips = service.trips_by(&bob).await?;
//! ```

pub mod errors;
pub mod policy;
pub mod service;

pub use errors::TripError;
pub use policy::{evaluate_access, AccessDecision};
pub use service::TripService;
