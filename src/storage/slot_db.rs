use rusqlite::{Connection, OptionalExtension, Result as SqlResult, params};
use std::path::Path;

use crate::error::Result;

use super::KeyValueStore;
use super::ensure_parent_dir;

/// SQLite-backed key-value slots (the desktop client's "local storage")
pub struct SlotDatabase {
    conn: Connection,
}

impl SlotDatabase {
    /// Open (or create) the slot database at a path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        ensure_parent_dir(&path)?;
        let slot_db = Self {
            conn: Connection::open(path)?,
        };
        slot_db.init_schema()?;
        Ok(slot_db)
    }

    /// Slots that vanish with the process
    pub fn in_memory() -> Result<Self> {
        let slot_db = Self {
            conn: Connection::open_in_memory()?,
        };
        slot_db.init_schema()?;
        Ok(slot_db)
    }

    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
            )",
            [],
        )?;
        Ok(())
    }

    /// Number of occupied slots
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM slots", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl KeyValueStore for SlotDatabase {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now'))",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM slots WHERE key = ?1", params![key])?;
        Ok(())
    }
}
