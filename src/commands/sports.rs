//! `sports` subcommands.

use super::common::CommandContext;
use crate::{
    registration::render::{render_rules, render_sports_overview},
    sports::sport_config,
    Result, Sport,
};

pub fn handle_list() -> Result<()> {
    print!("{}", render_sports_overview());
    Ok(())
}

/// Show the rules and remember the sport for the next new draft.
pub fn handle_rules(ctx: &mut CommandContext, sport: Sport) -> Result<()> {
    print!("{}", render_rules(sport_config(sport)));
    ctx.db.set_selected_sport(sport)?;
    println!("{} selected for your next registration.", sport);
    Ok(())
}
