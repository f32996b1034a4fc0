//! Unit tests for the sport configuration table

use super::*;

#[test]
fn test_every_sport_has_a_config_entry() {
    for sport in Sport::ALL {
        let config = sport_config(sport);
        assert_eq!(config.sport, sport);
        assert_eq!(config.name, sport.as_str());
    }
}

#[test]
fn test_roster_limits_are_consistent() {
    for config in SPORT_CONFIGS.iter() {
        assert!(config.min_players >= 1, "{} min players", config.name);
        assert!(
            config.min_players <= config.max_players,
            "{} min exceeds max",
            config.name
        );
        assert!(!config.tournaments.is_empty(), "{} has no tournaments", config.name);
    }
}

#[test]
fn test_tournament_ids_are_unique() {
    let mut ids: Vec<&str> = SPORT_CONFIGS
        .iter()
        .flat_map(|c| c.tournaments.iter().map(|t| t.id))
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_tournament_lookup() {
    let football = sport_config(Sport::Football);
    assert_eq!(
        football.tournament("football-open").map(|t| t.name),
        Some("Football Open Cup")
    );
    assert!(football.tournament("padel-men").is_none());
}

#[test]
fn test_require_tournament_unknown() {
    let padel = sport_config(Sport::Padel);
    match padel.require_tournament("nope") {
        Err(ZedError::UnknownTournament { id }) => assert_eq!(id, "nope"),
        other => panic!("Expected UnknownTournament, got {:?}", other),
    }
}

#[test]
fn test_find_tournament_across_sports() {
    let (config, tournament) = find_tournament("basketball-3x3").unwrap();
    assert_eq!(config.sport, Sport::Basketball);
    assert_eq!(tournament.fee, 4000);
    assert!(find_tournament("chess-blitz").is_none());
}

#[test]
fn test_roster_range() {
    assert_eq!(sport_config(Sport::Football).roster_range(), "5-10 players");
}

#[test]
fn test_kit_numbers_only_for_team_sports() {
    assert!(sport_config(Sport::Football).kit_number_required);
    assert!(sport_config(Sport::Basketball).kit_number_required);
    assert!(!sport_config(Sport::Padel).kit_number_required);
    assert!(!sport_config(Sport::Padbol).kit_number_required);
}
