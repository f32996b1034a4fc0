//! `register` subcommands: build a draft step by step, then submit it.
//!
//! Every handler loads the named draft, applies one change, saves it back
//! and prints the resulting view.

use tracing::info;

use super::common::{add_player_from_args, CommandContext};
use crate::{
    backend::{MemoryBackend, RecordLookup, RegistrationBackend},
    cli::{types::field::PlayerField, PlayerArgs},
    error::ZedError,
    registration::{
        draft::PlayerUpdate,
        payment::{confirm_payment_demo, PaymentSummary, PAYMENT_REDIRECT_DELAY},
        pipeline::submit,
        render::{render_call_plan, render_form, render_player, render_report},
        step,
        FormState, SubmissionReport,
    },
    sports::find_tournament,
    Result, Sport,
};

/// Convert a 1-based player number from the CLI
fn player_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| ZedError::validation("Player numbers start at 1."))
}

fn require_player(form: &FormState, number: usize) -> Result<usize> {
    let index = player_index(number)?;
    if index >= form.players().len() {
        return Err(ZedError::NotFound {
            what: format!("Player {}", number),
        });
    }
    Ok(index)
}

/// Update team info. A tournament alone is enough to pick the sport.
pub fn handle_start(
    ctx: &mut CommandContext,
    draft: &str,
    sport: Option<Sport>,
    team: Option<String>,
    tournament: Option<String>,
) -> Result<()> {
    let mut form = ctx.load_form(draft)?;

    let sport = match (sport, tournament.as_deref()) {
        (None, Some(id)) if form.selected_sport().is_none() => find_tournament(id)
            .map(|(config, _)| config.sport)
            .ok_or_else(|| ZedError::UnknownTournament { id: id.to_string() })
            .map(Some)?,
        (sport, _) => sport,
    };

    if let Some(sport) = sport {
        form.set_selected_sport(sport);
    }
    if let Some(id) = tournament.as_deref() {
        let config = form
            .sport_config()
            .ok_or_else(|| ZedError::validation("Choose a sport before the tournament."))?;
        let tournament = config.require_tournament(id)?;
        form.set_selected_tournament(tournament.id);
    }
    if let Some(team) = team {
        form.set_team_name(team.trim());
    }

    ctx.save_form(draft, &form)?;
    println!("{}", render_form(&form));
    Ok(())
}

pub fn handle_show(ctx: &CommandContext, draft: &str) -> Result<()> {
    let form = ctx.load_form(draft)?;
    println!("{}", render_form(&form));
    Ok(())
}

pub fn handle_add_player(ctx: &mut CommandContext, draft: &str, args: &PlayerArgs) -> Result<()> {
    let mut form = ctx.load_form(draft)?;
    let Some(config) = form.sport_config() else {
        return Err(ZedError::validation("Choose a sport before adding players."));
    };

    match add_player_from_args(&mut form, args)? {
        Some(index) => {
            ctx.save_form(draft, &form)?;
            println!("✓ Added player {}", index + 1);
            print!(
                "{}",
                render_player(index, &form.players()[index], config.kit_number_required)
            );
        }
        None => {
            println!(
                "⚠ {} rosters are full at {} players",
                config.name, config.max_players
            );
        }
    }
    Ok(())
}

pub fn handle_update_player(
    ctx: &mut CommandContext,
    draft: &str,
    number: usize,
    field: PlayerField,
    value: &str,
) -> Result<()> {
    let mut form = ctx.load_form(draft)?;
    let index = require_player(&form, number)?;
    let update = PlayerUpdate::from_field(field, value)?;
    if let PlayerUpdate::IdDocument(doc) = &update {
        if !doc.path.is_file() {
            return Err(ZedError::validation(format!(
                "ID document {} does not exist",
                doc.path.display()
            )));
        }
    }

    form.update_player(index, update);
    ctx.save_form(draft, &form)?;
    println!("✓ Updated {} of player {}", field, number);
    Ok(())
}

pub fn handle_remove_player(ctx: &mut CommandContext, draft: &str, number: usize) -> Result<()> {
    let mut form = ctx.load_form(draft)?;
    let index = require_player(&form, number)?;
    let name = form.players()[index].display_name();

    form.remove_player(index);
    ctx.save_form(draft, &form)?;
    println!("✓ Removed player {} ({})", number, name);
    Ok(())
}

pub async fn handle_next<L>(ctx: &mut CommandContext, draft: &str, lookup: &L) -> Result<()>
where
    L: RecordLookup + ?Sized,
{
    let mut form = ctx.load_form(draft)?;
    step::advance(&mut form, lookup).await?;
    ctx.save_form(draft, &form)?;
    println!("{}", render_form(&form));
    Ok(())
}

pub fn handle_back(ctx: &mut CommandContext, draft: &str) -> Result<()> {
    let mut form = ctx.load_form(draft)?;
    step::back(&mut form);
    ctx.save_form(draft, &form)?;
    println!("{}", render_form(&form));
    Ok(())
}

pub fn handle_accept_terms(ctx: &mut CommandContext, draft: &str, revoke: bool) -> Result<()> {
    let mut form = ctx.load_form(draft)?;
    form.set_accepted_terms(!revoke);
    ctx.save_form(draft, &form)?;
    if revoke {
        println!("Terms and conditions no longer accepted");
    } else {
        println!("✓ Terms and conditions accepted");
    }
    Ok(())
}

/// Run the pipeline for a stored draft against `backend`.
///
/// The draft is removed once registered; on failure it stays as it was so
/// it can be fixed and resubmitted.
pub async fn submit_draft<B>(
    ctx: &mut CommandContext,
    draft: &str,
    backend: &B,
) -> Result<(FormState, SubmissionReport)>
where
    B: RegistrationBackend + ?Sized,
{
    if !ctx.has_draft(draft)? {
        return Err(ZedError::NotFound {
            what: format!("Draft '{}'", draft),
        });
    }
    let mut form = ctx.load_form(draft)?;
    let report = submit(&mut form, backend, &ctx.competition_names()).await?;
    ctx.discard_draft(draft)?;
    info!(draft, "draft registered and removed");
    Ok((form, report))
}

pub async fn handle_submit(
    ctx: &mut CommandContext,
    draft: &str,
    dry_run: bool,
    payment_demo: bool,
) -> Result<()> {
    if dry_run {
        return handle_dry_run(ctx, draft).await;
    }

    let client = ctx.graphql()?;
    let (form, report) = submit_draft(ctx, draft, &client).await?;
    println!("{}", render_form(&form));
    print!("{}", render_report(&report));

    if payment_demo {
        run_payment_demo(&form, report.players.len()).await?;
    }
    Ok(())
}

/// Full submission against an in-memory backend. Nothing is saved or removed.
async fn handle_dry_run(ctx: &CommandContext, draft: &str) -> Result<()> {
    let mut form = ctx.load_form(draft)?;
    let backend = MemoryBackend::dry_run();
    let result = submit(&mut form, &backend, &ctx.competition_names()).await;

    println!("Planned calls (* = writes):");
    print!("{}", render_call_plan(&backend.calls()));
    match result {
        Ok(_) => println!("✓ Dry run completed; nothing was sent"),
        Err(e) => println!("✗ Dry run stopped: {}", e),
    }
    Ok(())
}

async fn run_payment_demo(form: &FormState, players: usize) -> Result<()> {
    let (Some(config), Some(tournament)) = (form.sport_config(), form.selected_tournament()) else {
        return Ok(());
    };
    let summary = PaymentSummary::for_tournament(config, tournament, form.team_name(), players);
    println!("{}", summary.render());

    let confirmation = confirm_payment_demo(&summary)?;
    println!("✓ Payment confirmed (reference {})", confirmation.reference);
    println!(
        "Returning to the start page in {} seconds...",
        PAYMENT_REDIRECT_DELAY.as_secs()
    );
    tokio::time::sleep(PAYMENT_REDIRECT_DELAY).await;
    println!("Done.");
    Ok(())
}

pub fn handle_reset(ctx: &mut CommandContext, draft: &str) -> Result<()> {
    if ctx.discard_draft(draft)? {
        println!("✓ Draft '{}' discarded", draft);
    } else {
        println!("No draft named '{}'", draft);
    }
    Ok(())
}

pub fn handle_list(ctx: &CommandContext) -> Result<()> {
    let drafts = ctx.db.list_drafts()?;
    if drafts.is_empty() {
        println!("No drafts saved");
        return Ok(());
    }
    for summary in drafts {
        let sport = summary
            .sport
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let team = if summary.team_name.is_empty() {
            "(no team name)"
        } else {
            summary.team_name.as_str()
        };
        println!(
            "{:<12} {:<11} {} ({} players)",
            summary.name, sport, team, summary.players
        );
    }
    Ok(())
}
