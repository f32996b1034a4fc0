//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use zed_tournaments::{
    cli::{AdminCmd, CasinoCmd, Commands, RegisterCmd, SportsCmd, TeamCmd, Zed},
    commands::{admin, casino, common::CommandContext, register, sports, team},
    LOG_ENV_VAR,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("zed_tournaments=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let app = Zed::parse();

    // Listing sports needs neither config nor storage
    if let Commands::Sports {
        cmd: SportsCmd::List,
    } = &app.command
    {
        sports::handle_list()?;
        return Ok(());
    }

    let mut ctx = CommandContext::new()?;

    match app.command {
        Commands::Sports { cmd } => match cmd {
            SportsCmd::List => sports::handle_list()?,
            SportsCmd::Rules { sport } => sports::handle_rules(&mut ctx, sport)?,
        },

        Commands::Register { draft, cmd } => match cmd {
            RegisterCmd::Start {
                sport,
                team,
                tournament,
            } => register::handle_start(&mut ctx, &draft, sport, team, tournament)?,
            RegisterCmd::Show => register::handle_show(&ctx, &draft)?,
            RegisterCmd::AddPlayer { player } => {
                register::handle_add_player(&mut ctx, &draft, &player)?
            }
            RegisterCmd::UpdatePlayer {
                index,
                field,
                value,
            } => register::handle_update_player(&mut ctx, &draft, index, field, &value)?,
            RegisterCmd::RemovePlayer { index } => {
                register::handle_remove_player(&mut ctx, &draft, index)?
            }
            RegisterCmd::Next => {
                let client = ctx.graphql()?;
                register::handle_next(&mut ctx, &draft, &client).await?
            }
            RegisterCmd::Back => register::handle_back(&mut ctx, &draft)?,
            RegisterCmd::AcceptTerms { revoke } => {
                register::handle_accept_terms(&mut ctx, &draft, revoke)?
            }
            RegisterCmd::Submit {
                dry_run,
                payment_demo,
            } => register::handle_submit(&mut ctx, &draft, dry_run, payment_demo).await?,
            RegisterCmd::Reset => register::handle_reset(&mut ctx, &draft)?,
            RegisterCmd::List => register::handle_list(&ctx)?,
        },

        Commands::Team { cmd } => match cmd {
            TeamCmd::Login { email, password } => {
                team::handle_login(&mut ctx, &email, &password).await?
            }
            TeamCmd::Logout => team::handle_logout(&mut ctx)?,
            TeamCmd::Roster => team::handle_roster(&ctx).await?,
            TeamCmd::EditPlayer {
                player,
                field,
                value,
            } => team::handle_edit_player(&ctx, &player, field, &value).await?,
            TeamCmd::AddPlayer {
                participation,
                player,
                accept_terms,
            } => team::handle_add_player(&ctx, &participation, &player, accept_terms).await?,
        },

        Commands::Admin { cmd } => match cmd {
            AdminCmd::Participations { unverified } => {
                admin::handle_participations(&ctx, unverified).await?
            }
            AdminCmd::Verify { participation } => admin::handle_verify(&ctx, &participation).await?,
            AdminCmd::Export { out, unverified } => {
                admin::handle_export(&ctx, &out, unverified).await?
            }
        },

        Commands::Casino { cmd } => match cmd {
            CasinoCmd::Verify { email } => casino::handle_verify(&ctx, &email).await?,
            CasinoCmd::Ticket { email } => casino::handle_ticket(&ctx, &email).await?,
        },
    }

    Ok(())
}
