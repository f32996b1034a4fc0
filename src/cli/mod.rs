//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{
    field::PlayerField,
    ids::{ParticipationId, PlayerId},
    sport::{KitSize, Sport},
};

pub const DEFAULT_DRAFT: &str = "default";

/// Player fields given as flags; anything omitted stays blank.
#[derive(Debug, Default, Args)]
pub struct PlayerArgs {
    #[clap(long)]
    pub first_name: Option<String>,

    #[clap(long)]
    pub last_name: Option<String>,

    #[clap(long)]
    pub email: Option<String>,

    #[clap(long)]
    pub phone: Option<String>,

    /// National or federation ID number.
    #[clap(long)]
    pub player_id: Option<String>,

    #[clap(long)]
    pub kit_size: Option<KitSize>,

    /// Required for football and basketball; empty means 1.
    #[clap(long)]
    pub jersey: Option<String>,

    /// Scan of the player's ID document, uploaded on submit.
    #[clap(long)]
    pub id_document: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum SportsCmd {
    /// List sports with their roster sizes
    List,

    /// Show a sport's rules and tournaments, and remember it as the selected sport
    Rules { sport: Sport },
}

#[derive(Debug, Subcommand)]
pub enum RegisterCmd {
    /// Start a draft or update its team info (sport, team name, tournament)
    Start {
        #[clap(long, short)]
        sport: Option<Sport>,

        #[clap(long, short)]
        team: Option<String>,

        /// Tournament id as shown by `sports rules`.
        #[clap(long)]
        tournament: Option<String>,
    },

    /// Show the current step of the draft
    Show,

    /// Append a player to the roster
    AddPlayer {
        #[clap(flatten)]
        player: PlayerArgs,
    },

    /// Change one field of a player
    UpdatePlayer {
        /// Player number as shown by `register show` (1-based).
        index: usize,

        #[clap(long)]
        field: PlayerField,

        #[clap(long)]
        value: String,
    },

    /// Remove a player by number (1-based)
    RemovePlayer { index: usize },

    /// Continue to the players step; checks the team name is free
    Next,

    /// Return to the team info step
    Back,

    /// Accept (or with --revoke, withdraw) the terms and conditions
    AcceptTerms {
        #[clap(long)]
        revoke: bool,
    },

    /// Submit the draft to the registration backend
    Submit {
        /// Run the whole submission against an in-memory backend and print the planned calls.
        #[clap(long)]
        dry_run: bool,

        /// Show the demo payment step after a successful registration.
        #[clap(long)]
        payment_demo: bool,
    },

    /// Discard the draft
    Reset,

    /// List saved drafts
    List,
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Log in as a team admin
    Login {
        #[clap(long)]
        email: String,

        #[clap(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the rosters of teams you administer
    Roster,

    /// Change one field of a rostered player
    EditPlayer {
        /// Backend player id as shown by `team roster`.
        #[clap(long)]
        player: PlayerId,

        #[clap(long)]
        field: PlayerField,

        #[clap(long)]
        value: String,
    },

    /// Register one more player for a team you administer
    AddPlayer {
        /// Participation id as shown by `team roster`.
        #[clap(long)]
        participation: ParticipationId,

        #[clap(flatten)]
        player: PlayerArgs,

        /// Accept the terms and conditions for this player.
        #[clap(long)]
        accept_terms: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCmd {
    /// List participations
    Participations {
        /// Only those still waiting for verification.
        #[clap(long)]
        unverified: bool,
    },

    /// Mark a participation as verified
    Verify { participation: ParticipationId },

    /// Export participations to CSV
    Export {
        #[clap(long, short)]
        out: PathBuf,

        #[clap(long)]
        unverified: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CasinoCmd {
    /// Mark a casino night registration as verified
    Verify {
        #[clap(long)]
        email: String,
    },

    /// Issue the entry ticket for a verified registration
    Ticket {
        #[clap(long)]
        email: String,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "zed-tournaments", about = "ZED Tournaments registration CLI")]
pub struct Zed {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sports, roster rules and tournaments
    Sports {
        #[clap(subcommand)]
        cmd: SportsCmd,
    },

    /// Build and submit a team registration
    Register {
        /// Name of the local draft to work on.
        #[clap(long, global = true, default_value = DEFAULT_DRAFT)]
        draft: String,

        #[clap(subcommand)]
        cmd: RegisterCmd,
    },

    /// Team admin portal
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Organiser dashboard
    Admin {
        #[clap(subcommand)]
        cmd: AdminCmd,
    },

    /// Casino night registrations
    Casino {
        #[clap(subcommand)]
        cmd: CasinoCmd,
    },
}
