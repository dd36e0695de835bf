//! Domain types shared across Waypost crates

pub mod identifiers;
pub mod identity;
pub mod trip;
