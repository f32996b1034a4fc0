//! Static sport and tournament configuration.
//!
//! Roster limits, kit rules and the tournaments open for registration are
//! fixed per event and compiled in. Nothing here is user-mutable.

use crate::{error::ZedError, Result, Sport};

#[cfg(test)]
mod tests;

/// Eligibility constraint attached to a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    /// Inclusive age cap, `None` for open categories
    pub max_age: Option<u8>,
}

/// A tournament players can register a team for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    pub id: &'static str,
    pub name: &'static str,
    /// Registration fee per team, whole EGP
    pub fee: u32,
    /// Total prize pool, whole EGP
    pub prize_pool: u32,
    pub category: Category,
}

/// Per-sport registration rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SportConfig {
    pub sport: Sport,
    pub name: &'static str,
    pub min_players: usize,
    pub max_players: usize,
    pub kit_number_required: bool,
    pub tournaments: &'static [Tournament],
    pub tagline: &'static str,
    pub venue: &'static str,
}

const OPEN: Category = Category {
    label: "Open",
    max_age: None,
};

pub const SPORT_CONFIGS: [SportConfig; 4] = [
    SportConfig {
        sport: Sport::Football,
        name: "Football",
        min_players: 5,
        max_players: 10,
        kit_number_required: true,
        tournaments: &[
            Tournament {
                id: "football-open",
                name: "Football Open Cup",
                fee: 6000,
                prize_pool: 100_000,
                category: OPEN,
            },
            Tournament {
                id: "football-u16",
                name: "Football Juniors U16",
                fee: 3500,
                prize_pool: 40_000,
                category: Category {
                    label: "U16",
                    max_age: Some(16),
                },
            },
        ],
        tagline: "Five-a-side on the ZED Park pitches",
        venue: "ZED Park, Sheikh Zayed",
    },
    SportConfig {
        sport: Sport::Padel,
        name: "Padel",
        min_players: 2,
        max_players: 3,
        kit_number_required: false,
        tournaments: &[
            Tournament {
                id: "padel-men",
                name: "Padel Men's Doubles",
                fee: 2000,
                prize_pool: 30_000,
                category: Category {
                    label: "Men",
                    max_age: None,
                },
            },
            Tournament {
                id: "padel-mixed",
                name: "Padel Mixed Doubles",
                fee: 2000,
                prize_pool: 30_000,
                category: Category {
                    label: "Mixed",
                    max_age: None,
                },
            },
        ],
        tagline: "Doubles brackets under the lights",
        venue: "ZED Padel Courts",
    },
    SportConfig {
        sport: Sport::Basketball,
        name: "Basketball",
        min_players: 3,
        max_players: 8,
        kit_number_required: true,
        tournaments: &[Tournament {
            id: "basketball-3x3",
            name: "Basketball 3x3 Championship",
            fee: 4000,
            prize_pool: 60_000,
            category: OPEN,
        }],
        tagline: "Half-court 3x3, first to 21",
        venue: "ZED Sports Hall",
    },
    SportConfig {
        sport: Sport::Padbol,
        name: "Padbol",
        min_players: 2,
        max_players: 4,
        kit_number_required: false,
        tournaments: &[Tournament {
            id: "padbol-open",
            name: "Padbol Open",
            fee: 2500,
            prize_pool: 25_000,
            category: OPEN,
        }],
        tagline: "Football meets padel",
        venue: "ZED Padel Courts",
    },
];

/// Look up the configuration for a sport.
pub fn sport_config(sport: Sport) -> &'static SportConfig {
    match sport {
        Sport::Football => &SPORT_CONFIGS[0],
        Sport::Padel => &SPORT_CONFIGS[1],
        Sport::Basketball => &SPORT_CONFIGS[2],
        Sport::Padbol => &SPORT_CONFIGS[3],
    }
}

impl SportConfig {
    /// Find one of this sport's tournaments by id.
    pub fn tournament(&self, id: &str) -> Option<&'static Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn require_tournament(&self, id: &str) -> Result<&'static Tournament> {
        self.tournament(id).ok_or_else(|| ZedError::UnknownTournament { id: id.to_string() })
    }

    /// Human readable roster size, e.g. "5-10 players".
    pub fn roster_range(&self) -> String {
        if self.min_players == self.max_players {
            format!("{} players", self.min_players)
        } else {
            format!("{}-{} players", self.min_players, self.max_players)
        }
    }
}

/// Find a tournament across all sports.
pub fn find_tournament(id: &str) -> Option<(&'static SportConfig, &'static Tournament)> {
    SPORT_CONFIGS
        .iter()
        .find_map(|config| config.tournament(id).map(|t| (config, t)))
}
