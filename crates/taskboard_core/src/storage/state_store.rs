//! Key-value state store contract and implementations.
//!
//! # Responsibility
//! - Provide the synchronous string-store contract the task store writes
//!   snapshots through.
//! - Keep SQLite details inside the core persistence boundary.
//!
//! # Invariants
//! - SQLite-backed stores only accept bootstrapped connections.
//! - `write` fully replaces the previous value for the key.

use crate::db::{migrations, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for snapshot reads and writes.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// The connection was opened without running migrations first. This is a
    /// wiring bug in the embedding application, not a runtime condition.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingStateTable,
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected \
                 {expected_version}; apply migrations before opening the state store"
            ),
            Self::MissingStateTable => {
                write!(f, "bootstrapped connection is missing the app_state table")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingStateTable => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous key-value string store holding persisted dashboard state.
pub trait StateStore {
    /// Reads the value stored under `key`, `None` when absent.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }
}

/// SQLite-backed state store over the `app_state` table.
pub struct SqliteStateStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStore<'conn> {
    /// Wraps a bootstrapped connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingStateTable` when the schema lacks `app_state`.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let actual = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected = migrations::latest_version();
        if actual != expected {
            return Err(StorageError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        let table: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'app_state';",
                [],
                |row| row.get(0),
            )
            .optional()?;
        if table.is_none() {
            return Err(StorageError::MissingStateTable);
        }

        Ok(Self { conn })
    }
}

impl StateStore for SqliteStateStore<'_> {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM app_state WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory state store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
