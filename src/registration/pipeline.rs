//! Submission Pipeline: turns a complete draft into backend records.
//!
//! Stages run strictly in order and every remote call is awaited before the
//! next one starts. The first resolved player becomes the team admin, so the
//! player stage must never be reordered or fanned out. There is no rollback:
//! a failure part way through leaves whatever was already created.

use tracing::{debug, info, warn};

use super::{
    draft::PlayerDraft,
    form::{FormState, RegistrationOutcome},
    payload::{build_default_player_payload, parse_jersey_number},
    step::{Step, INCOMPLETE_TEAM_INFO, NOT_ON_PLAYERS_STEP},
};
use crate::backend::{
    check_existence,
    types::{ExistingRecord, ParticipationPayload, PlayerPatch},
    validation::team_taken_message,
    ExistenceQuery, RegistrationBackend,
};
use crate::cli::types::ids::{CompetitionId, ParticipationId, PlayerId, SeasonId, TeamId};
use crate::sports::{SportConfig, Tournament};
use crate::{error::ZedError, Result};


pub const TERMS_NOT_ACCEPTED: &str = "You must accept to our terms and conditions to continue.";
pub const NOT_CONFIGURED: &str =
    "Registration is not configured for this tournament yet. Please contact the organisers.";
pub const GENERIC_FAILURE: &str = "An error occurred during registration. Please try again.";
pub const ALREADY_SUBMITTING: &str = "A submission is already in progress.";
pub const SUCCESS_MESSAGE: &str = "Registration successful! Your team has been registered.";
pub const NO_PLAYERS: &str = "Please add at least one player.";

/// Backend names of the season and competition this event registers into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionNames {
    pub season: String,
    pub competition: String,
}

impl CompetitionNames {
    pub fn new(season: impl Into<String>, competition: impl Into<String>) -> Self {
        Self {
            season: season.into(),
            competition: competition.into(),
        }
    }
}

/// A player as the pipeline resolved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlayer {
    pub id: PlayerId,
    pub name: String,
    /// Matched an existing backend player by email
    pub reused: bool,
}

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub team_id: TeamId,
    pub participation_id: ParticipationId,
    pub players: Vec<ResolvedPlayer>,
}

impl SubmissionReport {
    pub fn team_admin(&self) -> Option<&ResolvedPlayer> {
        self.players.first()
    }

    pub fn created_count(&self) -> usize {
        self.players.iter().filter(|p| !p.reused).count()
    }
}

/// Submit the form's draft.
///
/// The outcome is always stored on the form, success or not, and the
/// submitting flag is cleared before returning. A second call while a
/// submission is marked in flight is refused without touching the outcome.
pub async fn submit<B>(
    form: &mut FormState,
    backend: &B,
    names: &CompetitionNames,
) -> Result<SubmissionReport>
where
    B: RegistrationBackend + ?Sized,
{
    if form.is_submitting() {
        return Err(ZedError::Submission {
            message: ALREADY_SUBMITTING.to_string(),
        });
    }

    form.begin_submit();
    let result = run(form, backend, names).await;
    let outcome = match &result {
        Ok(report) => {
            info!(
                team = %report.team_id,
                participation = %report.participation_id,
                players = report.players.len(),
                "registration submitted"
            );
            RegistrationOutcome::Success {
                message: SUCCESS_MESSAGE.to_string(),
            }
        }
        Err(e) => {
            warn!(error = %e, "registration failed");
            RegistrationOutcome::Error {
                message: e.to_string(),
            }
        }
    };
    form.finish_submit(outcome);
    result
}

struct Plan<'a> {
    config: &'static SportConfig,
    tournament: &'static Tournament,
    team_name: String,
    players: &'a [PlayerDraft],
    incoming_team: Option<TeamId>,
    incoming_participation: Option<ParticipationId>,
}

/// Local checks, in order, before any network call.
fn preflight(form: &FormState) -> Result<Plan<'_>> {
    if form.step() != Step::Players {
        return Err(ZedError::validation(NOT_ON_PLAYERS_STEP));
    }
    if !form.accepted_terms() {
        return Err(ZedError::validation(TERMS_NOT_ACCEPTED));
    }

    let config = form
        .sport_config()
        .ok_or_else(|| ZedError::validation(INCOMPLETE_TEAM_INFO))?;
    let tournament_id = form
        .draft()
        .tournament_id
        .as_deref()
        .ok_or_else(|| ZedError::validation(INCOMPLETE_TEAM_INFO))?;
    let tournament = config.require_tournament(tournament_id)?;

    let team_name = form.team_name().trim().to_string();
    if team_name.is_empty() {
        return Err(ZedError::validation(INCOMPLETE_TEAM_INFO));
    }

    let draft = form.draft();
    let players = form.players();
    if draft.is_existing_team() {
        if players.is_empty() {
            return Err(ZedError::validation(NO_PLAYERS));
        }
    } else if players.len() < config.min_players {
        return Err(ZedError::validation(format!(
            "{} teams need at least {} players.",
            config.name, config.min_players
        )));
    }

    for (index, player) in players.iter().enumerate() {
        let number = index + 1;
        if !player.missing_fields(config.kit_number_required).is_empty() {
            return Err(ZedError::validation(format!(
                "Please fill in all required fields for player {}.",
                number
            )));
        }
        if parse_jersey_number(&player.jersey_number).is_err() {
            return Err(ZedError::validation(format!(
                "Jersey number for player {} must be a whole number.",
                number
            )));
        }
    }

    Ok(Plan {
        config,
        tournament,
        team_name,
        players,
        incoming_team: draft.incoming_team_id.clone(),
        incoming_participation: draft.incoming_participation_id.clone(),
    })
}

async fn resolve_ids<B>(backend: &B, names: &CompetitionNames) -> Result<(CompetitionId, SeasonId)>
where
    B: RegistrationBackend + ?Sized,
{
    let not_configured = || ZedError::Configuration {
        message: NOT_CONFIGURED.to_string(),
    };

    let competition = match backend.resolve_competition(&names.competition).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            warn!(competition = %names.competition, "competition not found");
            return Err(not_configured());
        }
        Err(e) => {
            warn!(error = %e, "competition lookup failed");
            return Err(not_configured());
        }
    };
    let season = match backend.resolve_season(&names.season).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            warn!(season = %names.season, "season not found");
            return Err(not_configured());
        }
        Err(e) => {
            warn!(error = %e, "season lookup failed");
            return Err(not_configured());
        }
    };
    Ok((competition, season))
}

fn generic_failure(stage: &str, error: ZedError) -> ZedError {
    warn!(stage, error = %error, "registration stage failed");
    ZedError::Submission {
        message: GENERIC_FAILURE.to_string(),
    }
}

async fn run<B>(form: &FormState, backend: &B, names: &CompetitionNames) -> Result<SubmissionReport>
where
    B: RegistrationBackend + ?Sized,
{
    let plan = preflight(form)?;

    // Only a new participation needs the competition and season
    let ids = if plan.incoming_participation.is_none() {
        Some(resolve_ids(backend, names).await?)
    } else {
        None
    };

    // 1. Team name is re-checked; the earlier check may be stale
    if plan.incoming_team.is_none() {
        let check = check_existence(backend, &ExistenceQuery::team(plan.team_name.as_str())).await;
        if !check.is_valid {
            let message = check
                .message
                .unwrap_or_else(|| team_taken_message(&plan.team_name));
            return Err(ZedError::validation(message));
        }
    }

    // 2. Players, in list order
    let mut resolved = Vec::with_capacity(plan.players.len());
    for player in plan.players {
        let email = player.email.trim();
        let check = check_existence(backend, &ExistenceQuery::email(email)).await;
        if let Some(ExistingRecord::Player(existing)) = check.data {
            debug!(email, player = %existing.id, "reusing existing player");
            resolved.push(ResolvedPlayer {
                id: existing.id,
                name: player.display_name(),
                reused: true,
            });
            continue;
        }

        let payload = build_default_player_payload(player, &plan.team_name, plan.config.sport)?;
        let id = backend.create_player(&payload).await.map_err(|e| {
            warn!(email, error = %e, "player creation failed");
            ZedError::Submission {
                message: format!(
                    "Failed to register player {} {}: {}",
                    player.first_name.trim(),
                    player.last_name.trim(),
                    e
                ),
            }
        })?;
        debug!(email, player = %id, "created player");
        resolved.push(ResolvedPlayer {
            id,
            name: player.display_name(),
            reused: false,
        });
    }

    // 3. Team
    let team_id = match plan.incoming_team {
        Some(id) => id,
        None => backend
            .create_team(&plan.team_name)
            .await
            .map_err(|e| generic_failure("team", e))?,
    };

    // 4. Participation
    let participation_id = match (plan.incoming_participation, ids) {
        (Some(id), _) => id,
        (None, Some((competition, season))) => {
            let team_admin = resolved
                .first()
                .map(|p| p.id.clone())
                .ok_or_else(|| ZedError::validation(NO_PLAYERS))?;
            let payload = ParticipationPayload {
                name: format!(
                    "{} - {} - {} - {}",
                    names.season, plan.team_name, names.competition, plan.tournament.name
                ),
                season,
                team: team_id.clone(),
                competition,
                sport_type: plan.config.sport,
                tournament: plan.tournament.name.to_string(),
                category: plan.tournament.category.label.to_string(),
                team_admin,
                is_verified: false,
            };
            backend
                .create_participation(&payload)
                .await
                .map_err(|e| generic_failure("participation", e))?
        }
        (None, None) => {
            return Err(ZedError::Configuration {
                message: NOT_CONFIGURED.to_string(),
            })
        }
    };

    // 5. Link every resolved player; earlier links stay if a later one fails
    let link = PlayerPatch::link_participation(participation_id.clone());
    for player in &resolved {
        backend
            .update_player(&player.id, &link)
            .await
            .map_err(|e| generic_failure("link", e))?;
    }

    Ok(SubmissionReport {
        team_id,
        participation_id,
        players: resolved,
    })
}
