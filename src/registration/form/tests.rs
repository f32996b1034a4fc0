use super::*;
use crate::backend::types::IdDocument;
use crate::sports::SPORT_CONFIGS;
use crate::KitSize;

fn form_with(sport: Sport, players: usize) -> FormState {
    let mut form = FormState::new();
    form.set_selected_sport(sport);
    for _ in 0..players {
        form.add_player();
    }
    form
}

#[test]
fn test_new_form_is_empty() {
    let form = FormState::new();
    assert_eq!(form.step(), Step::TeamInfo);
    assert!(form.selected_sport().is_none());
    assert!(form.players().is_empty());
    assert!(!form.accepted_terms());
    assert!(form.outcome().is_none());
    assert!(!form.is_submitting());
}

#[test]
fn test_add_player_never_exceeds_max() {
    for config in SPORT_CONFIGS.iter() {
        let form = form_with(config.sport, config.max_players + 3);
        assert_eq!(form.players().len(), config.max_players, "{}", config.name);
        assert!(form.is_full());
    }
}

#[test]
fn test_add_player_without_sport_is_noop() {
    let mut form = FormState::new();
    form.add_player();
    assert!(form.players().is_empty());
}

#[test]
fn test_added_players_inherit_team_and_sport() {
    let mut form = FormState::new();
    form.set_selected_sport(Sport::Basketball);
    form.set_team_name("Hoop Dreams");
    form.add_player();

    let player = &form.players()[0];
    assert_eq!(player.team_name, "Hoop Dreams");
    assert_eq!(player.sport_type, Some(Sport::Basketball));
}

#[test]
fn test_team_name_is_copied_onto_players() {
    let mut form = form_with(Sport::Padel, 2);
    form.set_team_name("Net Gains");
    assert!(form.players().iter().all(|p| p.team_name == "Net Gains"));
}

#[test]
fn test_remove_player_out_of_range_is_noop() {
    let mut form = form_with(Sport::Padel, 2);
    form.remove_player(5);
    assert_eq!(form.players().len(), 2);

    form.remove_player(0);
    form.remove_player(0);
    form.remove_player(0);
    assert!(form.players().is_empty());
}

#[test]
fn test_update_player_sets_one_field() {
    let mut form = form_with(Sport::Football, 2);
    form.update_player(1, PlayerUpdate::Email("mo@example.com".to_string()));
    form.update_player(1, PlayerUpdate::KitSize(KitSize::Large));

    assert_eq!(form.players()[1].email, "mo@example.com");
    assert_eq!(form.players()[1].kit_size, Some(KitSize::Large));
    assert_eq!(form.players()[0], PlayerDraft {
        sport_type: Some(Sport::Football),
        ..PlayerDraft::default()
    });
}

#[test]
fn test_update_player_out_of_range_is_noop() {
    let mut form = form_with(Sport::Football, 1);
    let before = form.draft().clone();
    form.update_player(3, PlayerUpdate::FirstName("Ghost".to_string()));
    assert_eq!(form.draft(), &before);
}

#[test]
fn test_id_document_goes_to_dedicated_field() {
    let mut form = form_with(Sport::Padbol, 1);
    form.update_player(0, PlayerUpdate::IdDocument(IdDocument::from_path("/tmp/passport.png")));

    let doc = form.players()[0].id_document.as_ref().unwrap();
    assert_eq!(doc.file_name, "passport.png");
    assert!(form.players()[0].player_id.is_empty());
}

#[test]
fn test_sport_change_truncates_and_clears_tournament() {
    let mut form = form_with(Sport::Football, 8);
    form.set_selected_tournament("football-open");
    form.finish_submit(RegistrationOutcome::Error {
        message: "boom".to_string(),
    });

    form.set_selected_sport(Sport::Padel);

    assert_eq!(form.players().len(), 3);
    assert!(form.players().iter().all(|p| p.sport_type == Some(Sport::Padel)));
    assert!(form.selected_tournament().is_none());
    assert!(form.draft().tournament_id.is_none());
    assert!(form.outcome().is_none());
}

#[test]
fn test_same_sport_keeps_tournament() {
    let mut form = form_with(Sport::Padel, 1);
    form.set_selected_tournament("padel-men");
    form.set_selected_sport(Sport::Padel);
    assert_eq!(form.selected_tournament().map(|t| t.id), Some("padel-men"));
}

#[test]
fn test_tournament_of_other_sport_is_not_selected() {
    let mut form = form_with(Sport::Padel, 0);
    form.set_selected_tournament("football-open");
    assert!(form.selected_tournament().is_none());
}

#[test]
fn test_outcome_is_one_or_the_other() {
    let mut form = FormState::new();
    form.begin_submit();
    assert!(form.is_submitting());
    assert!(form.outcome().is_none());

    form.finish_submit(RegistrationOutcome::Success {
        message: "ok".to_string(),
    });
    assert!(!form.is_submitting());
    assert!(form.outcome().map(|o| o.is_success()).unwrap_or(false));

    form.begin_submit();
    assert!(form.outcome().is_none());
}

mod step_reset_tests {
    use super::*;

    fn on_players() -> FormState {
        let mut form = FormState::new();
        form.set_selected_sport(Sport::Football);
        form.set_team_name("Golden Eagles");
        form.set_selected_tournament("football-open");
        form.set_step(Step::Players);
        form
    }

    #[test]
    fn test_team_info_edits_leave_players_step() {
        let mut renamed = on_players();
        renamed.set_team_name("Silver Hawks");

        let mut new_sport = on_players();
        new_sport.set_selected_sport(Sport::Basketball);

        let mut new_tournament = on_players();
        new_tournament.set_selected_tournament("football-u16");

        for form in [renamed, new_sport, new_tournament] {
            assert_eq!(form.step(), Step::TeamInfo);
        }
    }

    #[test]
    fn test_unchanged_team_info_keeps_players_step() {
        let mut form = on_players();
        form.set_team_name("Golden Eagles");
        form.set_selected_sport(Sport::Football);
        form.set_selected_tournament("football-open");
        form.add_player();
        form.set_accepted_terms(true);
        assert_eq!(form.step(), Step::Players);
    }

    #[test]
    fn test_existing_team_keeps_players_step() {
        let draft = RegistrationDraft::for_existing_team(
            Sport::Football,
            "Golden Eagles",
            Some("football-open".to_string()),
            TeamId::new("team-1"),
            ParticipationId::new("participation-1"),
        );
        let mut form = FormState::from_draft(draft);
        form.set_team_name("Golden Eagles FC");
        assert_eq!(form.step(), Step::Players);
    }

    #[test]
    fn test_context_sport_change_leaves_players_step() {
        let context = SelectionContext::new(Some(Sport::Football));
        let mut form = on_players().with_context(&context);
        assert_eq!(form.step(), Step::Players);

        context.select(Sport::Padbol);
        assert!(form.sync_selection());
        assert_eq!(form.step(), Step::TeamInfo);
    }
}

mod selection_tests {
    use super::*;

    #[test]
    fn test_context_sport_applied_at_construction() {
        let context = SelectionContext::new(Some(Sport::Basketball));
        let form = FormState::new().with_context(&context);
        assert_eq!(form.selected_sport(), Some(Sport::Basketball));
    }

    #[test]
    fn test_stored_sport_wins_over_context() {
        let context = SelectionContext::new(Some(Sport::Basketball));
        let draft = RegistrationDraft {
            sport: Some(Sport::Padel),
            ..RegistrationDraft::default()
        };
        let form = FormState::from_draft(draft).with_context(&context);
        assert_eq!(form.selected_sport(), Some(Sport::Padel));
    }

    #[test]
    fn test_sync_picks_up_later_selection() {
        let context = SelectionContext::default();
        let mut form = FormState::new().with_context(&context);
        assert!(!form.sync_selection());

        context.select(Sport::Padbol);
        assert!(form.sync_selection());
        assert_eq!(form.selected_sport(), Some(Sport::Padbol));

        // already consumed
        assert!(!form.sync_selection());
    }

    #[test]
    fn test_form_changes_do_not_reach_context() {
        let context = SelectionContext::new(Some(Sport::Football));
        let mut form = FormState::new().with_context(&context);
        form.set_selected_sport(Sport::Padel);

        assert_eq!(context.current(), Some(Sport::Football));
        assert!(!form.sync_selection());
    }

    #[test]
    fn test_without_context_sync_is_noop() {
        let mut form = FormState::new();
        assert!(!form.sync_selection());
    }
}
