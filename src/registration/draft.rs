//! Draft registration records held locally until submission.

use serde::{Deserialize, Serialize};

use super::step::Step;
use crate::backend::types::IdDocument;
use crate::cli::types::{
    field::PlayerField,
    ids::{ParticipationId, TeamId},
};
use crate::{KitSize, Result, Sport};

/// Player entry in the registration form.
///
/// `jersey_number` stays a string until the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub player_id: String,
    pub kit_size: Option<KitSize>,
    pub jersey_number: String,
    pub team_name: String,
    pub sport_type: Option<Sport>,
    pub id_document: Option<IdDocument>,
}

impl PlayerDraft {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            "(unnamed player)".to_string()
        } else {
            name.to_string()
        }
    }

    /// Names of required fields that are still blank.
    pub fn missing_fields(&self, kit_number_required: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("first name");
        }
        if self.last_name.trim().is_empty() {
            missing.push("last name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone_number.trim().is_empty() {
            missing.push("phone number");
        }
        if kit_number_required && self.jersey_number.trim().is_empty() {
            missing.push("jersey number");
        }
        missing
    }

    pub fn apply(&mut self, update: PlayerUpdate) {
        match update {
            PlayerUpdate::FirstName(v) => self.first_name = v,
            PlayerUpdate::LastName(v) => self.last_name = v,
            PlayerUpdate::Email(v) => self.email = v,
            PlayerUpdate::PhoneNumber(v) => self.phone_number = v,
            PlayerUpdate::PlayerId(v) => self.player_id = v,
            PlayerUpdate::KitSize(v) => self.kit_size = Some(v),
            PlayerUpdate::JerseyNumber(v) => self.jersey_number = v,
            PlayerUpdate::IdDocument(doc) => self.id_document = Some(doc),
        }
    }
}

/// A single field change for [`FormState::update_player`](super::form::FormState::update_player).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    PhoneNumber(String),
    PlayerId(String),
    KitSize(KitSize),
    JerseyNumber(String),
    /// Uploaded file; kept apart from the plain string fields
    IdDocument(IdDocument),
}

impl PlayerUpdate {
    /// Parse a CLI `--field`/`--value` pair.
    pub fn from_field(field: PlayerField, value: &str) -> Result<Self> {
        let text = value.trim().to_string();
        Ok(match field {
            PlayerField::FirstName => PlayerUpdate::FirstName(text),
            PlayerField::LastName => PlayerUpdate::LastName(text),
            PlayerField::Email => PlayerUpdate::Email(text),
            PlayerField::PhoneNumber => PlayerUpdate::PhoneNumber(text),
            PlayerField::PlayerId => PlayerUpdate::PlayerId(text),
            PlayerField::KitSize => PlayerUpdate::KitSize(text.parse()?),
            PlayerField::JerseyNumber => PlayerUpdate::JerseyNumber(text),
            PlayerField::IdDocument => PlayerUpdate::IdDocument(IdDocument::from_path(text)),
        })
    }
}

/// Everything the registration wizard has collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub sport: Option<Sport>,
    pub team_name: String,
    pub tournament_id: Option<String>,
    pub players: Vec<PlayerDraft>,
    pub accepted_terms: bool,
    #[serde(default)]
    pub step: Step,
    /// Set when adding players to a team that already exists
    #[serde(default)]
    pub incoming_team_id: Option<TeamId>,
    #[serde(default)]
    pub incoming_participation_id: Option<ParticipationId>,
}

impl RegistrationDraft {
    /// Draft for adding players to an existing team.
    ///
    /// Starts on the players step; the team-info step has nothing to collect.
    pub fn for_existing_team(
        sport: Sport,
        team_name: impl Into<String>,
        tournament_id: Option<String>,
        team_id: TeamId,
        participation_id: ParticipationId,
    ) -> Self {
        Self {
            sport: Some(sport),
            team_name: team_name.into(),
            tournament_id,
            players: Vec::new(),
            accepted_terms: false,
            step: Step::Players,
            incoming_team_id: Some(team_id),
            incoming_participation_id: Some(participation_id),
        }
    }

    pub fn is_existing_team(&self) -> bool {
        self.incoming_team_id.is_some()
    }
}
