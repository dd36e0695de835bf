//! Trip records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A trip owned by exactly one identity.
///
/// The authorization layer never looks inside a trip; the destination exists
/// for fixtures, provisioning and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trip {
    destination: String,
}

impl Trip {
    /// Create a trip to `destination`
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Where the trip went
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl From<&str> for Trip {
    fn from(destination: &str) -> Self {
        Self::new(destination)
    }
}

impl From<String> for Trip {
    fn from(destination: String) -> Self {
        Self::new(destination)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trip to {}", self.destination)
    }
}
