//! ZED Tournaments registration library
//!
//! Drives team registration for the ZED Tournaments sports festival against
//! its Keystone GraphQL backend, plus the team portal, organiser dashboard
//! and casino night tooling around it.
//!
//! ## Features
//!
//! - **Registration Wizard**: two-step draft (team info, then players) with
//!   per-sport roster limits
//! - **Submission Pipeline**: ordered creation and linking of players, team
//!   and participation, reusing players already on the backend
//! - **Dry Runs**: the same pipeline against an in-memory backend
//! - **Local Drafts**: drafts survive between CLI invocations in SQLite
//! - **Team Portal & Dashboard**: roster edits, verification, CSV export
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zed_tournaments::{
//!     backend::MemoryBackend,
//!     registration::{draft::PlayerUpdate, step, submit, CompetitionNames, FormState},
//!     Sport,
//! };
//!
//! # async fn example() -> zed_tournaments::Result<()> {
//! let backend = MemoryBackend::dry_run();
//! let mut form = FormState::new();
//! form.set_selected_sport(Sport::Padel);
//! form.set_team_name("Net Gains");
//! form.set_selected_tournament("padel-men");
//! step::advance(&mut form, &backend).await?;
//!
//! for n in 0..2 {
//!     form.add_player();
//!     form.update_player(n, PlayerUpdate::FirstName(format!("Player{}", n)));
//!     // ... remaining required fields
//! }
//! form.set_accepted_terms(true);
//!
//! submit(&mut form, &backend, &CompetitionNames::new("2026", "ZED Tournaments")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a backend without a config file:
//! ```bash
//! export ZED_GRAPHQL_URL=https://api.zedtournaments.com/api/graphql
//! ```

pub mod backend;
pub mod casino;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod registration;
pub mod sports;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::{ParticipationId, PlayerId, TeamId},
    sport::{KitSize, Sport},
};
pub use config::{AppConfig, GRAPHQL_URL_ENV_VAR, LOG_ENV_VAR};
pub use error::{Result, ZedError};
