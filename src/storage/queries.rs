//! Basic database query operations

use super::{models::*, schema::RegistrationDatabase};
use crate::registration::RegistrationDraft;
use crate::Sport;
use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};

const SELECTED_SPORT_KEY: &str = "selected_sport";

fn now() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

impl RegistrationDatabase {
    /// Insert or replace a named draft, keeping its original creation time
    pub fn save_draft(&mut self, name: &str, draft: &RegistrationDraft) -> Result<()> {
        let body = serde_json::to_string(draft)?;
        let now = now()?;
        self.conn.execute(
            "INSERT OR REPLACE INTO drafts (name, body, created_at, updated_at)
             VALUES (?, ?, COALESCE((SELECT created_at FROM drafts WHERE name = ?), ?), ?)",
            params![name, body, name, now, now],
        )?;
        Ok(())
    }

    pub fn load_draft(&self, name: &str) -> Result<Option<RegistrationDraft>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM drafts WHERE name = ?",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        body.map(|b| {
            serde_json::from_str(&b).with_context(|| format!("Draft '{}' is corrupted", name))
        })
        .transpose()
    }

    /// Returns true if a draft was removed
    pub fn delete_draft(&mut self, name: &str) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM drafts WHERE name = ?", params![name])?;
        Ok(rows > 0)
    }

    /// All drafts, most recently updated first. Unreadable rows are skipped.
    pub fn list_drafts(&self) -> Result<Vec<DraftSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, body, updated_at FROM drafts ORDER BY updated_at DESC, name")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u64>(2)?,
            ))
        })?;

        let mut drafts = Vec::new();
        for row in rows {
            let (name, body, updated_at) = row?;
            let Ok(draft) = serde_json::from_str::<RegistrationDraft>(&body) else {
                tracing::warn!(draft = %name, "skipping unreadable draft");
                continue;
            };
            drafts.push(DraftSummary {
                name,
                sport: draft.sport,
                team_name: draft.team_name,
                players: draft.players.len(),
                updated_at,
            });
        }
        Ok(drafts)
    }

    /// Sport picked in `sports rules`, fed to new drafts
    pub fn selected_sport(&self) -> Result<Option<Sport>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?",
                params![SELECTED_SPORT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        // A stale value from an older build is ignored
        Ok(value.and_then(|v| v.parse().ok()))
    }

    pub fn set_selected_sport(&mut self, sport: Sport) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?, ?)",
            params![SELECTED_SPORT_KEY, sport.as_str()],
        )?;
        Ok(())
    }

    pub fn save_session(&mut self, email: &str, token: &str, user_id: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO sessions (id, email, token, user_id, created_at)
             VALUES (1, ?, ?, ?, ?)",
            params![email, token, user_id, now()?],
        )?;
        Ok(())
    }

    pub fn session(&self) -> Result<Option<StoredSession>> {
        let session = self
            .conn
            .query_row(
                "SELECT email, token, user_id, created_at FROM sessions WHERE id = 1",
                [],
                |row| {
                    Ok(StoredSession {
                        email: row.get(0)?,
                        token: row.get(1)?,
                        user_id: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(session)
    }

    /// Returns true if a session was removed
    pub fn clear_session(&mut self) -> Result<bool> {
        let rows = self.conn.execute("DELETE FROM sessions", [])?;
        Ok(rows > 0)
    }
}
