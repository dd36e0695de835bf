//! Session effect handler
//!
//! [`SessionSlot`] holds whichever identity the upstream login code has
//! placed in it. It never issues, refreshes or expires anything.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use waypost_core::effects::{SessionEffects, SessionError};
use waypost_core::Identity;

/// `SessionEffects` handler backed by a shared slot
#[derive(Debug, Clone, Default)]
pub struct SessionSlot {
    current: Arc<RwLock<Option<Arc<Identity>>>>,
}

impl SessionSlot {
    /// Create an empty (unauthenticated) slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot already holding `identity`
    pub fn signed_in(identity: Arc<Identity>) -> Self {
        let slot = Self::new();
        slot.sign_in(identity);
        slot
    }

    /// Make `identity` the current session identity
    pub fn sign_in(&self, identity: Arc<Identity>) {
        tracing::debug!(identity = %identity.id(), "session identity set");
        *self.current.write() = Some(identity);
    }

    /// Clear the current session identity
    pub fn sign_out(&self) {
        if let Some(previous) = self.current.write().take() {
            tracing::debug!(identity = %previous.id(), "session identity cleared");
        }
    }

    /// Snapshot of the current identity
    pub fn current(&self) -> Option<Arc<Identity>> {
        self.current.read().clone()
    }
}

#[async_trait]
impl SessionEffects for SessionSlot {
    async fn current_identity(&self) -> Result<Option<Arc<Identity>>, SessionError> {
        Ok(self.current())
    }
}
