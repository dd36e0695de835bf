//! Connection policy
//!
//! The single authorization predicate: a caller may see a target's trips
//! when the target lists the caller among its connections. The check runs
//! from the target's side only; a caller listing the target grants nothing.

use serde::{Deserialize, Serialize};
use waypost_core::Identity;

/// Outcome of the connection check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    /// The caller may see the target's trips
    Allow,
    /// The caller may not; the service answers with no trips
    Deny {
        /// Why access was denied
        reason: String,
    },
}

impl AccessDecision {
    /// Whether access was granted
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether `caller` may see the trips owned by `target`
pub fn evaluate_access(target: &Identity, caller: &Identity) -> AccessDecision {
    if target.is_connected_to(caller) {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny {
            reason: format!("{} does not list {} as a connection", target.id(), caller.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_listing_caller_allows() {
        let alice = Identity::new("alice");
        let mut bob = Identity::new("bob");
        bob.add_connection(&alice);

        assert_eq!(evaluate_access(&bob, &alice), AccessDecision::Allow);
    }

    #[test]
    fn test_caller_listing_target_is_not_enough() {
        let mut alice = Identity::new("alice");
        let bob = Identity::new("bob");
        alice.add_connection(&bob);

        let decision = evaluate_access(&bob, &alice);
        assert!(!decision.is_allowed());
        assert!(matches!(decision, AccessDecision::Deny { reason } if reason.contains(&bob.id().to_string())));
    }

    #[test]
    fn test_self_access_requires_self_connection() {
        let mut alice = Identity::new("alice");
        assert!(!evaluate_access(&alice, &alice).is_allowed());

        let me = alice.clone();
        alice.add_connection(&me);
        assert!(evaluate_access(&alice, &alice).is_allowed());
    }
}
