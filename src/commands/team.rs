//! Team admin portal: login, roster view and edits, late player additions.

use super::common::{add_player_from_args, CommandContext};
use crate::{
    backend::{types::Roster, RegistrationBackend},
    cli::{types::field::PlayerField, PlayerArgs},
    error::ZedError,
    registration::{
        payload::player_patch,
        pipeline::submit,
        render::{render_form, render_report},
        CompetitionNames, FormState, RegistrationDraft, SubmissionReport,
    },
    sports::sport_config,
    ParticipationId, PlayerId, Result, Sport,
};

pub async fn handle_login(ctx: &mut CommandContext, email: &str, password: &str) -> Result<()> {
    let client = ctx.graphql()?;
    let session = client.authenticate(email.trim(), password).await?;
    ctx.db
        .save_session(email.trim(), &session.token, &session.user_id)?;
    println!("✓ Logged in as {}", email.trim());
    Ok(())
}

pub fn handle_logout(ctx: &mut CommandContext) -> Result<()> {
    if ctx.db.clear_session()? {
        println!("✓ Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

fn print_roster(roster: &Roster) {
    let team = roster
        .team
        .as_ref()
        .map(|t| t.name.as_str())
        .unwrap_or("(no team)");
    let status = if roster.is_verified {
        "verified"
    } else {
        "pending verification"
    };
    println!(
        "{} [{}] {} - {}",
        team,
        roster.id,
        roster.tournament.as_deref().unwrap_or("-"),
        status
    );
    for player in &roster.players {
        println!(
            "  {} {} <{}> #{}",
            player.id,
            player.full_name(),
            player.email,
            player
                .jersey_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }
}

pub async fn handle_roster(ctx: &CommandContext) -> Result<()> {
    let (client, session) = ctx.authenticated_graphql()?;
    let rosters = client.rosters_for_admin(&session.email).await?;
    if rosters.is_empty() {
        println!("No teams administered by {}", session.email);
    }
    for roster in &rosters {
        print_roster(roster);
    }
    Ok(())
}

pub async fn handle_edit_player(
    ctx: &CommandContext,
    player: &PlayerId,
    field: PlayerField,
    value: &str,
) -> Result<()> {
    let (client, _) = ctx.authenticated_graphql()?;
    let patch = player_patch(field, value)?;
    client.update_player(player, &patch).await?;
    println!("✓ Updated {} of player {}", field, player);
    Ok(())
}

/// Draft that adds players to the team behind `roster`.
pub fn existing_team_form(roster: &Roster) -> Result<FormState> {
    let sport: Sport = roster
        .sport_type
        .as_deref()
        .ok_or_else(|| ZedError::validation(format!("Participation {} has no sport", roster.id)))?
        .parse()?;
    let config = sport_config(sport);
    let team = roster.team.as_ref().ok_or_else(|| ZedError::NotFound {
        what: format!("Team of participation {}", roster.id),
    })?;
    if roster.players.len() >= config.max_players {
        return Err(ZedError::validation(format!(
            "{} already has {} players, the {} maximum.",
            team.name,
            roster.players.len(),
            config.name
        )));
    }

    // Stored as the tournament name; older rows may hold the id
    let recorded = roster.tournament.as_deref().unwrap_or_default();
    let tournament = config
        .tournaments
        .iter()
        .find(|t| t.name == recorded || t.id == recorded)
        .ok_or_else(|| ZedError::UnknownTournament {
            id: recorded.to_string(),
        })?;

    Ok(FormState::from_draft(RegistrationDraft::for_existing_team(
        sport,
        team.name.clone(),
        Some(tournament.id.to_string()),
        team.id.clone(),
        roster.id.clone(),
    )))
}

/// Register one player onto an existing team and participation.
pub async fn add_to_roster<B>(
    roster: &Roster,
    args: &PlayerArgs,
    accept_terms: bool,
    backend: &B,
    names: &CompetitionNames,
) -> Result<(FormState, SubmissionReport)>
where
    B: RegistrationBackend + ?Sized,
{
    let mut form = existing_team_form(roster)?;
    add_player_from_args(&mut form, args)?;
    form.set_accepted_terms(accept_terms);
    let report = submit(&mut form, backend, names).await?;
    Ok((form, report))
}

pub async fn handle_add_player(
    ctx: &CommandContext,
    participation: &ParticipationId,
    args: &PlayerArgs,
    accept_terms: bool,
) -> Result<()> {
    let (client, session) = ctx.authenticated_graphql()?;
    let roster = client
        .rosters_for_admin(&session.email)
        .await?
        .into_iter()
        .find(|r| &r.id == participation)
        .ok_or_else(|| ZedError::NotFound {
            what: format!("Participation {} for {}", participation, session.email),
        })?;

    let (form, report) =
        add_to_roster(&roster, args, accept_terms, &client, &ctx.competition_names()).await?;
    println!("{}", render_form(&form));
    print!("{}", render_report(&report));
    Ok(())
}
