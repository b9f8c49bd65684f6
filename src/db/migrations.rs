//! Versioned schema migrations, applied automatically when the store is
//! opened. Each migration runs inside its own transaction and is recorded
//! in the `migrations` table, so reopening an up-to-date store is a no-op.

use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

fn registry() -> Vec<Migration> {
    vec![
        Migration {
            version: 1,
            name: "create_kv_store",
            up: |tx| {
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS kv (
                        key TEXT NOT NULL PRIMARY KEY,
                        value TEXT NOT NULL
                    )",
                    [],
                )?;
                Ok(())
            },
        },
        Migration {
            version: 2,
            name: "kv_updated_at",
            up: |tx| {
                tx.execute("ALTER TABLE kv ADD COLUMN updated_at TIMESTAMP", [])?;
                Ok(())
            },
        },
    ]
}

/// Applies every migration newer than the store's current version.
pub fn apply(conn: &mut Connection) -> Result<()> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    let current = current_version(conn)?;

    for migration in registry() {
        if migration.version <= current {
            continue;
        }
        let tx = conn.transaction()?;
        (migration.up)(&tx)?;
        tx.execute(
            "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
            params![migration.version, migration.name],
        )?;
        tx.commit()?;
        msg_debug!("Applied migration v{} ({})", migration.version, migration.name);
    }

    Ok(())
}

pub fn current_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| {
        row.get::<_, u32>(0)
    })?;
    Ok(version)
}
