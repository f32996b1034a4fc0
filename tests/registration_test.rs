//! End-to-end registration through the public API

use zed_tournaments::{
    backend::{BackendCall, MemoryBackend},
    registration::{
        draft::PlayerUpdate,
        pipeline::{GENERIC_FAILURE, SUCCESS_MESSAGE},
        render::render_form,
        step, submit, CompetitionNames, FormState, RegistrationOutcome, SelectionContext, Step,
    },
    KitSize, Sport,
};

fn names() -> CompetitionNames {
    CompetitionNames::new("2026", "ZED Tournaments")
}

fn fill(form: &mut FormState, index: usize, email: &str) {
    form.add_player();
    form.update_player(index, PlayerUpdate::FirstName(format!("Player{}", index + 1)));
    form.update_player(index, PlayerUpdate::LastName("Eagle".to_string()));
    form.update_player(index, PlayerUpdate::Email(email.to_string()));
    form.update_player(index, PlayerUpdate::PhoneNumber(format!("0155500000{}", index)));
    form.update_player(index, PlayerUpdate::JerseyNumber((index + 2).to_string()));
    form.update_player(index, PlayerUpdate::KitSize(KitSize::Large));
}

#[tokio::test]
async fn test_wizard_from_rules_selection_to_success() {
    let backend = MemoryBackend::new()
        .with_competition("ZED Tournaments")
        .with_season("2026");
    let selection = SelectionContext::new(Some(Sport::Football));
    let mut form = FormState::new().with_context(&selection);

    form.set_team_name("Golden Eagles");
    // Players step is unreachable until a tournament is chosen
    assert!(step::advance(&mut form, &backend).await.is_err());
    form.set_selected_tournament("football-open");
    assert_eq!(step::advance(&mut form, &backend).await.unwrap(), Step::Players);

    for index in 0..6 {
        fill(&mut form, index, &format!("eagle{}@example.com", index + 1));
    }
    form.set_accepted_terms(true);
    assert!(render_form(&form).contains("Players: 6/10 (minimum 5)"));

    let report = submit(&mut form, &backend, &names()).await.unwrap();

    assert_eq!(report.players.len(), 6);
    assert_eq!(backend.teams().len(), 1);
    assert_eq!(backend.participations().len(), 1);
    assert_eq!(
        backend
            .mutations()
            .iter()
            .filter(|c| matches!(c, BackendCall::UpdatePlayer { .. }))
            .count(),
        6
    );
    assert_eq!(
        form.outcome(),
        Some(&RegistrationOutcome::Success {
            message: SUCCESS_MESSAGE.to_string()
        })
    );
    assert!(render_form(&form).contains(SUCCESS_MESSAGE));
}

#[tokio::test]
async fn test_retry_after_link_failure_finds_created_team() {
    let backend = MemoryBackend::dry_run().failing_updates_after(1);
    let mut form = FormState::new();
    form.set_selected_sport(Sport::Padel);
    form.set_team_name("Net Gains");
    form.set_selected_tournament("padel-men");
    step::advance(&mut form, &backend).await.unwrap();
    fill(&mut form, 0, "a@example.com");
    fill(&mut form, 1, "b@example.com");
    form.set_accepted_terms(true);

    submit(&mut form, &backend, &names()).await.unwrap_err();
    assert_eq!(form.outcome().map(|o| o.message()), Some(GENERIC_FAILURE));

    // The first attempt already created the team
    let err = submit(&mut form, &backend, &names()).await.unwrap_err();
    assert!(err.is_user_correctable());
    assert_eq!(backend.players().len(), 2);
}

#[tokio::test]
async fn test_dry_run_backend_plans_every_call() {
    let backend = MemoryBackend::dry_run();
    let mut form = FormState::new();
    form.set_selected_sport(Sport::Padbol);
    form.set_team_name("Wall Bangers");
    form.set_selected_tournament("padbol-open");
    step::advance(&mut form, &MemoryBackend::new()).await.unwrap();
    fill(&mut form, 0, "w1@example.com");
    fill(&mut form, 1, "w2@example.com");
    form.set_accepted_terms(true);

    submit(&mut form, &backend, &names()).await.unwrap();

    let calls = backend.calls();
    assert_eq!(
        calls[..3],
        [
            BackendCall::ResolveCompetition("ZED Tournaments".to_string()),
            BackendCall::ResolveSeason("2026".to_string()),
            BackendCall::FindTeamByName("Wall Bangers".to_string()),
        ]
    );
    assert_eq!(backend.mutations().len(), 2 + 1 + 1 + 2);
}
