//! Presentation Layer: terminal views of the registration wizard.
//!
//! Everything here is a pure function of the state it is handed and returns
//! a `String`; command handlers decide where to print it.

use std::fmt::Write;

use super::{
    draft::PlayerDraft,
    form::{FormState, RegistrationOutcome},
    pipeline::SubmissionReport,
    step::Step,
};
use crate::backend::BackendCall;
use crate::sports::{SportConfig, Tournament, SPORT_CONFIGS};

/// Whole-EGP amount with thousands separators, e.g. `6,000 EGP`.
pub fn format_egp(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(" EGP");
    out
}

fn tournament_line(tournament: &Tournament) -> String {
    let mut line = format!(
        "{} [{}] fee {}, prize pool {}",
        tournament.name,
        tournament.id,
        format_egp(tournament.fee),
        format_egp(tournament.prize_pool)
    );
    match tournament.category.max_age {
        Some(age) => {
            let _ = write!(line, " ({}, age {} and under)", tournament.category.label, age);
        }
        None => {
            let _ = write!(line, " ({})", tournament.category.label);
        }
    }
    line
}

pub fn render_sports_overview() -> String {
    let mut out = String::new();
    for config in SPORT_CONFIGS.iter() {
        let _ = writeln!(
            out,
            "{:<11} {:<13} {}",
            config.name,
            config.roster_range(),
            config.tagline
        );
    }
    out
}

pub fn render_rules(config: &SportConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} at {}", config.name, config.venue);
    let _ = writeln!(out, "Roster: {}", config.roster_range());
    if config.kit_number_required {
        let _ = writeln!(out, "Every player needs a jersey number.");
    }
    let _ = writeln!(out, "Tournaments:");
    for tournament in config.tournaments {
        let _ = writeln!(out, "  - {}", tournament_line(tournament));
    }
    out
}

pub fn navigation_hint(step: Step) -> &'static str {
    match step {
        Step::TeamInfo => "Next: `register next` to continue to players.",
        Step::Players => {
            "Next: `register add-player`, `register accept-terms`, then `register submit` (`register back` to edit team info)."
        }
    }
}

fn check(value: bool) -> &'static str {
    if value {
        "x"
    } else {
        " "
    }
}

fn render_team_info(form: &FormState, out: &mut String) {
    match form.sport_config() {
        Some(config) => {
            let _ = writeln!(out, "Sport: {} ({})", config.name, config.roster_range());
            let _ = writeln!(out, "Tournament:");
            let selected = form.selected_tournament().map(|t| t.id);
            for tournament in config.tournaments {
                let _ = writeln!(
                    out,
                    "  [{}] {}",
                    check(selected == Some(tournament.id)),
                    tournament_line(tournament)
                );
            }
        }
        None => {
            let _ = writeln!(out, "Sport: (not selected)");
        }
    }
    let team_name = form.team_name().trim();
    if team_name.is_empty() {
        let _ = writeln!(out, "Team name: (not set)");
    } else {
        let _ = writeln!(out, "Team name: {}", team_name);
    }
}

pub fn render_player(index: usize, player: &PlayerDraft, kit_number_required: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Player {}: {}", index + 1, player.display_name());
    let _ = writeln!(out, "    email: {}", player.email);
    let _ = writeln!(out, "    phone: {}", player.phone_number);
    if !player.player_id.is_empty() {
        let _ = writeln!(out, "    ID: {}", player.player_id);
    }
    let _ = writeln!(
        out,
        "    kit: {} #{}",
        player.kit_size.unwrap_or_default(),
        if player.jersey_number.is_empty() {
            "-"
        } else {
            player.jersey_number.as_str()
        }
    );
    if let Some(doc) = &player.id_document {
        let _ = writeln!(out, "    document: {}", doc.file_name);
    }
    let missing = player.missing_fields(kit_number_required);
    if !missing.is_empty() {
        let _ = writeln!(out, "    missing: {}", missing.join(", "));
    }
    out
}

fn render_players(form: &FormState, out: &mut String) {
    let Some(config) = form.sport_config() else {
        return;
    };
    if let Some(tournament) = form.selected_tournament() {
        let _ = writeln!(out, "{} for {}", form.team_name().trim(), tournament.name);
    }
    let _ = writeln!(
        out,
        "Players: {}/{} (minimum {})",
        form.players().len(),
        config.max_players,
        config.min_players
    );
    for (index, player) in form.players().iter().enumerate() {
        out.push_str(&render_player(index, player, config.kit_number_required));
    }
    if form.is_full() {
        let _ = writeln!(out, "Roster is full.");
    }
    let _ = writeln!(
        out,
        "[{}] I accept the terms and conditions",
        check(form.accepted_terms())
    );
}

pub fn render_outcome(outcome: &RegistrationOutcome) -> String {
    match outcome {
        RegistrationOutcome::Success { message } => format!("✓ {}", message),
        RegistrationOutcome::Error { message } => format!("✗ {}", message),
    }
}

/// The current wizard step, its fields, any outcome and what to do next.
pub fn render_form(form: &FormState) -> String {
    let step = form.step();
    let mut out = format!("{}\n", step);
    match step {
        Step::TeamInfo => render_team_info(form, &mut out),
        Step::Players => render_players(form, &mut out),
    }
    if form.is_submitting() {
        let _ = writeln!(out, "Submitting...");
    }
    match form.outcome() {
        Some(outcome) => {
            let _ = writeln!(out, "{}", render_outcome(outcome));
        }
        None => {
            let _ = writeln!(out, "{}", navigation_hint(step));
        }
    }
    out
}

pub fn render_report(report: &SubmissionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Team: {}", report.team_id);
    let _ = writeln!(out, "Participation: {}", report.participation_id);
    for (index, player) in report.players.iter().enumerate() {
        let mut tags = Vec::new();
        if index == 0 {
            tags.push("team admin");
        }
        if player.reused {
            tags.push("existing");
        }
        let suffix = if tags.is_empty() {
            String::new()
        } else {
            format!(" ({})", tags.join(", "))
        };
        let _ = writeln!(out, "  {} {}{}", player.id, player.name, suffix);
    }
    out
}

/// Numbered list of the remote calls a dry run would make, mutations marked.
pub fn render_call_plan(calls: &[BackendCall]) -> String {
    let mut out = String::new();
    for (index, call) in calls.iter().enumerate() {
        let marker = if call.is_mutation() { "*" } else { " " };
        let description = match call {
            BackendCall::FindTeamByName(name) => format!("find team \"{}\"", name),
            BackendCall::FindPlayerByEmail(email) => format!("find player by email {}", email),
            BackendCall::FindPlayerByPhone(phone) => format!("find player by phone {}", phone),
            BackendCall::FindPlayerByPlayerId(id) => format!("find player by ID {}", id),
            BackendCall::ResolveCompetition(name) => format!("resolve competition \"{}\"", name),
            BackendCall::ResolveSeason(name) => format!("resolve season \"{}\"", name),
            BackendCall::CreatePlayer {
                email,
                jersey_number,
            } => format!("create player {} (#{})", email, jersey_number),
            BackendCall::CreateTeam(name) => format!("create team \"{}\"", name),
            BackendCall::CreateParticipation { name, team_admin } => {
                format!("create participation \"{}\" (admin {})", name, team_admin)
            }
            BackendCall::UpdatePlayer { id, participation } => match participation {
                Some(p) => format!("link player {} to {}", id, p),
                None => format!("update player {}", id),
            },
        };
        let _ = writeln!(out, "{:>3}.{} {}", index + 1, marker, description);
    }
    out
}
