//! SQLite persistence layer for session-scoped values.
//!
//! RULE: Only store.rs talks to the database.
//! The only thing kept here is per-session state such as the dataset
//! seed. Transactions are never written.

use crate::error::DashResult;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

/// A dashboard session. Values stored under one session id are invisible
/// to every other session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
}

impl Session {
    /// Start a fresh session with a random id.
    pub fn new() -> Self {
        Self { id: Uuid::new_v4().to_string() }
    }

    /// Rejoin an existing session by id.
    pub fn resume(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Open (or create) the session database at `path`.
    pub fn open(path: &str) -> DashResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> DashResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> DashResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_session.sql"))?;
        Ok(())
    }

    pub fn get_value(&self, session_id: &str, key: &str) -> DashResult<Option<i64>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM session_value WHERE session_id = ?1 AND key = ?2",
                params![session_id, key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Store `value` unless the key is already set. Returns whichever value
    /// is stored afterwards, so a lost race still yields the winner.
    pub fn put_value_if_absent(
        &self,
        session_id: &str,
        key: &str,
        value: i64,
        created_at: i64,
    ) -> DashResult<i64> {
        self.conn.execute(
            "INSERT INTO session_value (session_id, key, value, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (session_id, key) DO NOTHING",
            params![session_id, key, value, created_at],
        )?;
        let stored = self.conn.query_row(
            "SELECT value FROM session_value WHERE session_id = ?1 AND key = ?2",
            params![session_id, key],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(stored)
    }

    /// Drop every value held by a session.
    pub fn end_session(&self, session_id: &str) -> DashResult<usize> {
        let removed = self.conn.execute(
            "DELETE FROM session_value WHERE session_id = ?1",
            params![session_id],
        )?;
        Ok(removed)
    }
}
