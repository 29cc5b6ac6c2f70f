//! SQLite-backed outline store
//!
//! One row per outline: `id TEXT PRIMARY KEY, document TEXT NOT NULL`, the
//! document column holding the JSON rendering of the tree. The connection
//! sits behind a `Mutex` so the store is `Send + Sync` for use from async
//! request handlers; no lock is ever held across an await point.

use crate::store::{Mutation, OutlineStore, StoreError, TransactOutcome};
use async_trait::async_trait;
use deckplan_model::{Outline, OutlineId};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite store for outline documents
#[derive(Debug)]
pub struct SqliteOutlineStore {
    conn: Mutex<Connection>,
}

impl SqliteOutlineStore {
    /// Open (or create) a file-backed database
    ///
    /// Enables WAL journaling so concurrent readers are not blocked by the
    /// single writer.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (tests, ephemeral runs)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS outlines (
                id       TEXT PRIMARY KEY,
                document TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the connection; panics if the mutex is poisoned
    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("SqliteOutlineStore mutex poisoned")
    }
}

#[async_trait]
impl OutlineStore for SqliteOutlineStore {
    async fn get(&self, id: OutlineId) -> Result<Option<Outline>, StoreError> {
        let document: Option<String> = self
            .conn()
            .query_row(
                "SELECT document FROM outlines WHERE id = ?1",
                params![id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        match document {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, outline: &Outline) -> Result<(), StoreError> {
        let document = serde_json::to_string(outline)?;
        self.conn().execute(
            "INSERT INTO outlines (id, document) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET document = excluded.document",
            params![outline.id.to_string(), document],
        )?;
        Ok(())
    }

    async fn transact(
        &self,
        id: OutlineId,
        mutation: Mutation,
    ) -> Result<TransactOutcome, StoreError> {
        let mut conn = self.conn();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let stored: Option<String> = tx
            .query_row(
                "SELECT document FROM outlines WHERE id = ?1",
                params![id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(json) = stored else {
            return Ok(TransactOutcome::Missing);
        };

        let mut outline: Outline = serde_json::from_str(&json)?;
        if mutation(&mut outline).is_err() {
            tracing::debug!(%id, "transaction aborted by mutation");
            return Ok(TransactOutcome::Aborted);
        }

        tx.execute(
            "UPDATE outlines SET document = ?2 WHERE id = ?1",
            params![id.to_string(), serde_json::to_string(&outline)?],
        )?;
        tx.commit()?;

        Ok(TransactOutcome::Committed(outline))
    }
}
