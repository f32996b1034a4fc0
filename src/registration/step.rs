//! Step Controller for the two-step registration wizard.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::form::FormState;
use crate::backend::{check_existence, ExistenceQuery, RecordLookup};
use crate::{error::ZedError, Result};


pub const INCOMPLETE_TEAM_INFO: &str =
    "Please select a sport, enter a team name and choose a tournament.";
pub const NOT_ON_PLAYERS_STEP: &str = "Please complete the team info step first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Step {
    #[default]
    TeamInfo,
    Players,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Step::TeamInfo => 1,
            Step::Players => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::TeamInfo => "Team info",
            Step::Players => "Players",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of 2: {}", self.number(), self.title())
    }
}

/// Move from `TeamInfo` to `Players`.
///
/// Already on `Players` means the team info passed and has not changed since,
/// because every team info setter drops the form back to `TeamInfo`.
/// Otherwise refused unless sport, team name and a tournament of that sport are set
/// and the team name is free. A name collision leaves the form on
/// `TeamInfo`. Existing teams skip the name check.
pub async fn advance<L>(form: &mut FormState, lookup: &L) -> Result<Step>
where
    L: RecordLookup + ?Sized,
{
    if form.step() == Step::Players {
        return Ok(Step::Players);
    }

    let team_name = form.team_name().trim().to_string();
    let complete = form.selected_sport().is_some()
        && !team_name.is_empty()
        && form.selected_tournament().is_some();
    if !complete {
        return Err(ZedError::validation(INCOMPLETE_TEAM_INFO));
    }

    if !form.draft().is_existing_team() {
        let check = check_existence(lookup, &ExistenceQuery::team(team_name.as_str())).await;
        if !check.is_valid {
            debug!(team = %team_name, "team name refused");
            let message = check
                .message
                .unwrap_or_else(|| crate::backend::validation::team_taken_message(&team_name));
            return Err(ZedError::validation(message));
        }
    }

    form.set_step(Step::Players);
    Ok(Step::Players)
}

/// Return to `TeamInfo`. Always allowed.
pub fn back(form: &mut FormState) -> Step {
    form.set_step(Step::TeamInfo);
    Step::TeamInfo
}
