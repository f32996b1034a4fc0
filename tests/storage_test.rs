//! Storage through the public API, on disk

use zed_tournaments::{
    registration::{FormState, RegistrationDraft},
    storage::RegistrationDatabase,
    Sport,
};

#[test]
fn test_draft_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("zed.db");

    let mut form = FormState::new();
    form.set_selected_sport(Sport::Basketball);
    form.set_team_name("Hoop Dreams");
    form.set_selected_tournament("basketball-3x3");
    form.add_player();
    {
        let mut db = RegistrationDatabase::open(&path).unwrap();
        db.save_draft("default", form.draft()).unwrap();
        db.set_selected_sport(Sport::Basketball).unwrap();
        db.save_session("captain@example.com", "tok", "user-1").unwrap();
    }

    let db = RegistrationDatabase::open(&path).unwrap();
    let draft: RegistrationDraft = db.load_draft("default").unwrap().unwrap();
    assert_eq!(&draft, form.draft());
    assert_eq!(db.selected_sport().unwrap(), Some(Sport::Basketball));
    assert_eq!(db.session().unwrap().unwrap().email, "captain@example.com");

    let resumed = FormState::from_draft(draft);
    assert_eq!(resumed.selected_tournament().map(|t| t.id), Some("basketball-3x3"));
    assert_eq!(resumed.players().len(), 1);
}

#[test]
fn test_in_memory_database_starts_empty() {
    let db = RegistrationDatabase::new_in_memory().unwrap();
    assert!(db.list_drafts().unwrap().is_empty());
    assert!(db.session().unwrap().is_none());
}
