//! Records and payloads exchanged with the registration backend.

use crate::cli::types::ids::{CompetitionId, ParticipationId, PlayerId, SeasonId, TeamId};
use crate::Sport;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Team as stored on the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
}

/// Player as stored on the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(rename = "playerID", default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<i32>,
    #[serde(default)]
    pub kit_size: Option<String>,
}

impl PlayerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Whatever record a uniqueness check collided with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExistingRecord {
    Team(TeamRecord),
    Player(PlayerRecord),
}

/// Scanned ID document attached to a player draft.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IdDocument {
    pub file_name: String,
    pub path: PathBuf,
}

impl IdDocument {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "id-document".to_string());
        Self { file_name, path }
    }
}

/// Fully populated `PlayerCreateInput`.
///
/// Built only through
/// [`build_default_player_payload`](crate::registration::payload::build_default_player_payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(rename = "playerID")]
    pub player_id: String,
    pub kit_size: String,
    pub jersey_number: i32,
    pub team_name: String,
    pub sport_type: Sport,
    pub position: String,
    pub nationality: String,
    pub experience_level: String,
    /// Sent as a multipart upload, never inline
    #[serde(skip)]
    pub id_document: Option<IdDocument>,
}

/// Data for `createParticipation`; relationships are connected by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipationPayload {
    pub name: String,
    pub season: SeasonId,
    pub team: TeamId,
    pub competition: CompetitionId,
    pub sport_type: Sport,
    pub tournament: String,
    pub category: String,
    pub team_admin: PlayerId,
    pub is_verified: bool,
}

/// Partial `PlayerUpdateInput`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "playerID", skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kit_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<i32>,
    /// Serialized as a relationship `connect` by the GraphQL client
    #[serde(skip)]
    pub participation: Option<ParticipationId>,
}

impl PlayerPatch {
    /// Patch that only links a player to a participation.
    pub fn link_participation(participation: ParticipationId) -> Self {
        Self {
            participation: Some(participation),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAdminSummary {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// One row of the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationSummary {
    pub id: ParticipationId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sport_type: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    pub team: Option<TeamRecord>,
    pub team_admin: Option<TeamAdminSummary>,
    #[serde(default)]
    pub players_count: u32,
}

/// A participation seen from the team portal, with its roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub id: ParticipationId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sport_type: Option<String>,
    #[serde(default)]
    pub tournament: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    pub team: Option<TeamRecord>,
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
}

/// Result of a successful password login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}
