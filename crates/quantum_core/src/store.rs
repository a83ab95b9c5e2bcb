//! Session persistence: append-only history with delete-by-id.
//!
//! The store is an explicit object owned by whatever composes the debugger
//! (the CLI, in this workspace); nothing here is a global. Two backings:
//! [`SqliteStore`] for durable history and [`MemoryStore`] for tests and
//! ephemeral runs.

use std::path::Path;
use std::sync::Mutex;

use crate::error::{QuantumError, Result};
use crate::session::{DebugSession, SessionId};

pub trait SessionStore: Send + Sync {
    /// Append a session snapshot.
    fn add_session(&self, session: &DebugSession) -> Result<()>;
    /// All sessions in append order.
    fn list_sessions(&self) -> Result<Vec<DebugSession>>;
    /// Look up one session by id.
    fn get_session(&self, id: &SessionId) -> Result<Option<DebugSession>>;
    /// Delete by id. Returns whether a session was removed.
    fn delete_session(&self, id: &SessionId) -> Result<bool>;
    /// Remove all sessions.
    fn clear(&self) -> Result<()>;
}

// ── SQLite backing ─────────────────────────────────────────────────

pub struct SqliteStore {
    conn: Mutex<rusqlite::Connection>,
}

impl SqliteStore {
    /// Open (or create) the history DB at `path`. Creates parent dirs,
    /// enables WAL and runs the idempotent migration.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = rusqlite::Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
        migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory SQLite DB, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, rusqlite::Connection>> {
        self.conn
            .lock()
            .map_err(|_| QuantumError::Storage("store mutex poisoned".to_string()))
    }
}

fn migrate(conn: &rusqlite::Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS sessions (
            id             TEXT PRIMARY KEY,
            created_at     TEXT NOT NULL,
            request        TEXT NOT NULL,
            solutions      TEXT NOT NULL,
            recommendation TEXT,
            avg_chaos      REAL
        );",
    )?;
    Ok(())
}

fn row_to_session(row: &rusqlite::Row<'_>) -> rusqlite::Result<(String, String, String, String, Option<String>, Option<f64>)> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn decode_session(
    (id, created_at, request, solutions, recommendation, avg_chaos): (
        String,
        String,
        String,
        String,
        Option<String>,
        Option<f64>,
    ),
) -> Result<DebugSession> {
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| QuantumError::Storage(format!("bad created_at: {e}")))?
        .with_timezone(&chrono::Utc);
    Ok(DebugSession {
        id: SessionId(id),
        created_at,
        request: serde_json::from_str(&request)?,
        solutions: serde_json::from_str(&solutions)?,
        recommendation,
        avg_chaos,
    })
}

impl SessionStore for SqliteStore {
    fn add_session(&self, session: &DebugSession) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO sessions (id, created_at, request, solutions, recommendation, avg_chaos)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                session.id.as_str(),
                session.created_at.to_rfc3339(),
                serde_json::to_string(&session.request)?,
                serde_json::to_string(&session.solutions)?,
                session.recommendation,
                session.avg_chaos,
            ],
        )?;
        tracing::debug!(id = %session.id, "session saved");
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<DebugSession>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, created_at, request, solutions, recommendation, avg_chaos
             FROM sessions ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], row_to_session)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(decode_session).collect()
    }

    fn get_session(&self, id: &SessionId) -> Result<Option<DebugSession>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, created_at, request, solutions, recommendation, avg_chaos
             FROM sessions WHERE id = ?1",
        )?;
        let mut rows = stmt.query(rusqlite::params![id.as_str()])?;
        match rows.next()? {
            Some(row) => Ok(Some(decode_session(row_to_session(row)?)?)),
            None => Ok(None),
        }
    }

    fn delete_session(&self, id: &SessionId) -> Result<bool> {
        let conn = self.lock()?;
        let n = conn.execute(
            "DELETE FROM sessions WHERE id = ?1",
            rusqlite::params![id.as_str()],
        )?;
        Ok(n > 0)
    }

    fn clear(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM sessions", [])?;
        Ok(())
    }
}

// ── In-memory backing ──────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    sessions: Mutex<Vec<DebugSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<DebugSession>>> {
        self.sessions
            .lock()
            .map_err(|_| QuantumError::Storage("store mutex poisoned".to_string()))
    }
}

impl SessionStore for MemoryStore {
    fn add_session(&self, session: &DebugSession) -> Result<()> {
        self.lock()?.push(session.clone());
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<DebugSession>> {
        Ok(self.lock()?.clone())
    }

    fn get_session(&self, id: &SessionId) -> Result<Option<DebugSession>> {
        Ok(self.lock()?.iter().find(|s| &s.id == id).cloned())
    }

    fn delete_session(&self, id: &SessionId) -> Result<bool> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|s| &s.id != id);
        Ok(sessions.len() < before)
    }

    fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}
