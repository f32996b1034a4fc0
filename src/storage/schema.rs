//! Database schema and connection management

use crate::error::ZedError;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Local state for the CLI: drafts, preferences and the portal session
pub struct RegistrationDatabase {
    pub(crate) conn: Connection,
}

impl RegistrationDatabase {
    /// Open the database at its default location and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(Self::database_path()?)
    }

    /// Open (or create) the database at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default database file under the user cache directory
    pub fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| ZedError::Storage {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("zed-tournaments").join("zed.db"))
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Draft body is the serialized RegistrationDraft
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS drafts (
                name TEXT PRIMARY KEY,
                body TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        // Single portal login; id is pinned to 1
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                email TEXT NOT NULL,
                token TEXT NOT NULL,
                user_id TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_drafts_updated ON drafts(updated_at)",
            [],
        )?;

        Ok(())
    }
}
