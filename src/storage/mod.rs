pub mod memory;
pub mod slot_db;

pub use memory::MemoryStore;
pub use slot_db::SlotDatabase;

use std::fs;
use std::path::Path;

use crate::error::Result;

/// A flat string key-value slot store, the seam behind the session slot.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Ensure the parent directory of a database file exists
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
