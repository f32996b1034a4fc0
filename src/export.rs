//! CSV export of participations for the admin dashboard.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::backend::types::ParticipationSummary;
use crate::Result;

/// One exported line. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipationRow {
    pub participation: String,
    pub team: String,
    pub sport: String,
    pub team_admin: String,
    pub admin_email: String,
    pub players: u32,
    pub verified: bool,
}

impl From<&ParticipationSummary> for ParticipationRow {
    fn from(summary: &ParticipationSummary) -> Self {
        let (team_admin, admin_email) = match &summary.team_admin {
            Some(admin) => (
                format!("{} {}", admin.first_name, admin.last_name)
                    .trim()
                    .to_string(),
                admin.email.clone(),
            ),
            None => (String::new(), String::new()),
        };
        Self {
            participation: summary.name.clone(),
            team: summary
                .team
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            sport: summary.sport_type.clone().unwrap_or_default(),
            team_admin,
            admin_email,
            players: summary.players_count,
            verified: summary.is_verified,
        }
    }
}

/// Write a header row and one row per participation. Returns the row count.
pub fn write_participations<W: Write>(writer: W, rows: &[ParticipationSummary]) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        // serialize() only writes headers alongside the first record
        csv.write_record([
            "participation",
            "team",
            "sport",
            "team_admin",
            "admin_email",
            "players",
            "verified",
        ])?;
    }
    for summary in rows {
        csv.serialize(ParticipationRow::from(summary))?;
    }
    csv.flush()?;
    Ok(rows.len())
}

pub fn export_participations(path: &Path, rows: &[ParticipationSummary]) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    write_participations(file, rows)
}
