//! Key-value store contract and implementations.
//!
//! # Responsibility
//! - Provide get/set/remove over string keys and values.
//! - Back the contract with an in-memory map and a SQLite table.
//!
//! # Invariants
//! - `set` overwrites wholesale; there are no partial value updates.
//! - `SqliteKeyValueStore::try_new` rejects unmigrated connections instead
//!   of masking schema drift at first query.

use crate::db::migrations::latest_version;
use crate::store::{StoreError, StoreResult};
use rusqlite::{params, Connection};
use std::collections::HashMap;

const LOCAL_STORE_TABLE: &str = "local_store";

/// Injected storage contract for page content persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// HashMap-backed store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys. Used by tests to assert cleanup.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// SQLite-backed store over the `local_store` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration version.
    /// - `MissingRequiredTable` when the `local_store` table is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [LOCAL_STORE_TABLE],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(StoreError::MissingRequiredTable(LOCAL_STORE_TABLE));
        }

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM local_store WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO local_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM local_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}
