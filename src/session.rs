//! Session store: at most one signed-in identity, mirrored into a durable slot.

use crate::common::Identity;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Slot key holding the serialized identity.
pub const SESSION_KEY: &str = "secureChat_user";

pub struct SessionStore {
    store: Box<dyn KeyValueStore>,
    current: Option<Identity>,
}

impl SessionStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Persist first; the identity only becomes current once the slot holds it.
    pub fn authenticate(&mut self, identity: Identity) -> Result<()> {
        let json = serde_json::to_string(&identity)?;
        self.store.set(SESSION_KEY, &json)?;
        log::info!("Session opened for {} ({})", identity.username, identity.id);
        self.current = Some(identity);
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            log::info!("Session closed for {}", identity.username);
        }
        if let Err(err) = self.store.remove(SESSION_KEY) {
            log::warn!("Failed to clear session slot: {err}");
        }
    }

    /// Reads the slot left by a previous run. Malformed content is purged.
    pub fn restore(&mut self) -> Option<Identity> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored session");
                return None;
            }
            Err(err) => {
                log::warn!("Failed to read session slot ({err}); starting signed out");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => {
                log::info!("Restored session for {}", identity.username);
                self.current = Some(identity.clone());
                Some(identity)
            }
            Err(err) => {
                log::warn!("Error parsing stored user ({err}); purging slot");
                if let Err(err) = self.store.remove(SESSION_KEY) {
                    log::warn!("Failed to purge session slot: {err}");
                }
                self.current = None;
                None
            }
        }
    }
}
