//! Uniqueness checks against the backend store.

use tracing::{debug, warn};

use super::{traits::RecordLookup, types::ExistingRecord};
use crate::Result;


pub const RETRY_MESSAGE: &str = "We couldn't verify your details right now. Please try again.";

pub fn team_taken_message(team_name: &str) -> String {
    format!(
        "Team \"{}\" already exists. Please choose another name.",
        team_name
    )
}

/// Candidate values to check. `None` or blank fields are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistenceQuery {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub player_id: Option<String>,
    pub team_name: Option<String>,
}

impl ExistenceQuery {
    pub fn team(name: impl Into<String>) -> Self {
        Self {
            team_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }
}

/// Outcome of [`check_existence`].
///
/// `is_valid == false` with `data == None` means the check itself failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceCheck {
    pub is_valid: bool,
    pub message: Option<String>,
    pub data: Option<ExistingRecord>,
}

impl ExistenceCheck {
    fn available() -> Self {
        Self {
            is_valid: true,
            message: None,
            data: None,
        }
    }

    fn taken(message: String, record: ExistingRecord) -> Self {
        Self {
            is_valid: false,
            message: Some(message),
            data: Some(record),
        }
    }

    fn unverified() -> Self {
        Self {
            is_valid: false,
            message: Some(RETRY_MESSAGE.to_string()),
            data: None,
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Check team name, email, phone and player ID in that order, stopping at
/// the first conflict. Never fails: lookup errors are reported as
/// `is_valid: false` with [`RETRY_MESSAGE`].
pub async fn check_existence<L>(lookup: &L, query: &ExistenceQuery) -> ExistenceCheck
where
    L: RecordLookup + ?Sized,
{
    match first_conflict(lookup, query).await {
        Ok(Some((message, record))) => {
            debug!(%message, "existence check found a conflict");
            ExistenceCheck::taken(message, record)
        }
        Ok(None) => ExistenceCheck::available(),
        Err(e) => {
            warn!(error = %e, "existence check failed");
            ExistenceCheck::unverified()
        }
    }
}

async fn first_conflict<L>(
    lookup: &L,
    query: &ExistenceQuery,
) -> Result<Option<(String, ExistingRecord)>>
where
    L: RecordLookup + ?Sized,
{
    if let Some(name) = present(&query.team_name) {
        if let Some(team) = lookup.find_team_by_name(name).await? {
            return Ok(Some((team_taken_message(name), ExistingRecord::Team(team))));
        }
    }

    if let Some(email) = present(&query.email) {
        if let Some(player) = lookup.find_player_by_email(email).await? {
            return Ok(Some((
                format!("A player with email \"{}\" is already registered.", email),
                ExistingRecord::Player(player),
            )));
        }
    }

    if let Some(phone) = present(&query.phone_number) {
        if let Some(player) = lookup.find_player_by_phone(phone).await? {
            return Ok(Some((
                format!("A player with phone number \"{}\" is already registered.", phone),
                ExistingRecord::Player(player),
            )));
        }
    }

    if let Some(player_id) = present(&query.player_id) {
        if let Some(player) = lookup.find_player_by_player_id(player_id).await? {
            return Ok(Some((
                format!("A player with ID \"{}\" is already registered.", player_id),
                ExistingRecord::Player(player),
            )));
        }
    }

    Ok(None)
}
