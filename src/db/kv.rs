//! The key-value adapter every feature stores its state through.
//!
//! Values are JSON-encoded strings under independent keys; there are no
//! cross-key transactions. Per-key operations never fail from the caller's
//! point of view: faults are logged and collapsed into `false`/`None`
//! sentinels, and callers fall back to defaults or surface a generic
//! failure notice. Opening the store is the one operation that errors
//! loudly.

use crate::db::db::Db;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

const UPSERT_VALUE: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP";
const SELECT_VALUE: &str = "SELECT value FROM kv WHERE key = ?1";
const DELETE_VALUE: &str = "DELETE FROM kv WHERE key = ?1";

/// Faults behind the adapter boundary. They are logged here and never
/// returned to callers.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to deserialize stored value: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("storage operation failed: {0}")]
    Store(#[from] rusqlite::Error),
}

pub struct Kv {
    conn: Connection,
}

impl Kv {
    pub fn new() -> anyhow::Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Serializes `value` and overwrites whatever is stored at `key`.
    /// Returns `false` on serialization or storage failure.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(key, %error, "kv save failed");
                false
            }
        }
    }

    /// Reads and deserializes the value at `key`. Returns `None` when the
    /// key is absent or the stored value cannot be read or parsed.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, %error, "kv read failed");
                None
            }
        }
    }

    /// Deletes `key`. Removing an absent key is still a success.
    pub fn remove(&self, key: &str) -> bool {
        match self.conn.execute(DELETE_VALUE, params![key]) {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(key, %error, "kv remove failed");
                false
            }
        }
    }

    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(StorageError::Serialize)?;
        self.conn.execute(UPSERT_VALUE, params![key, json])?;
        Ok(())
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let json: Option<String> = self
            .conn
            .query_row(SELECT_VALUE, params![key], |row| row.get(0))
            .optional()?;
        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json).map_err(StorageError::Deserialize)?)),
            None => Ok(None),
        }
    }
}
