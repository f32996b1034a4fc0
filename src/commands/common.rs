//! Resources shared across command handlers.

use tracing::debug;

use crate::{
    backend::GraphQlClient,
    cli::PlayerArgs,
    config::AppConfig,
    error::ZedError,
    registration::{draft::PlayerUpdate, CompetitionNames, FormState, SelectionContext},
    storage::{RegistrationDatabase, StoredSession},
    Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub config: AppConfig,
    pub db: RegistrationDatabase,
}

impl CommandContext {
    /// Load configuration and open the local database
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        let db = match &config.storage.db_path {
            Some(path) => RegistrationDatabase::open(path)?,
            None => RegistrationDatabase::new()?,
        };
        Ok(Self { config, db })
    }

    pub fn with_parts(config: AppConfig, db: RegistrationDatabase) -> Self {
        Self { config, db }
    }

    pub fn competition_names(&self) -> CompetitionNames {
        CompetitionNames::new(&self.config.event.season, &self.config.event.competition)
    }

    pub fn graphql(&self) -> Result<GraphQlClient> {
        GraphQlClient::new(&self.config.backend.graphql_url)
    }

    pub fn session(&self) -> Result<StoredSession> {
        self.db.session()?.ok_or(ZedError::NotLoggedIn)
    }

    /// Client carrying the stored portal session
    pub fn authenticated_graphql(&self) -> Result<(GraphQlClient, StoredSession)> {
        let session = self.session()?;
        let client = self.graphql()?.with_session(&session.token);
        Ok((client, session))
    }

    /// Load a draft, or start a new one seeded with the remembered sport
    pub fn load_form(&self, name: &str) -> Result<FormState> {
        let selection = SelectionContext::new(self.db.selected_sport()?);
        let draft = self.db.load_draft(name)?;
        if draft.is_none() {
            debug!(draft = name, "starting new draft");
        }
        let mut form = FormState::from_draft(draft.unwrap_or_default()).with_context(&selection);
        form.sync_selection();
        Ok(form)
    }

    pub fn save_form(&mut self, name: &str, form: &FormState) -> Result<()> {
        self.db.save_draft(name, form.draft())?;
        Ok(())
    }

    pub fn has_draft(&self, name: &str) -> Result<bool> {
        Ok(self.db.load_draft(name)?.is_some())
    }

    pub fn discard_draft(&mut self, name: &str) -> Result<bool> {
        Ok(self.db.delete_draft(name)?)
    }
}

/// Field updates for the flags that were given, in form order
pub fn player_updates(args: &PlayerArgs) -> Result<Vec<PlayerUpdate>> {
    let mut updates = Vec::new();
    if let Some(v) = &args.first_name {
        updates.push(PlayerUpdate::FirstName(v.trim().to_string()));
    }
    if let Some(v) = &args.last_name {
        updates.push(PlayerUpdate::LastName(v.trim().to_string()));
    }
    if let Some(v) = &args.email {
        updates.push(PlayerUpdate::Email(v.trim().to_string()));
    }
    if let Some(v) = &args.phone {
        updates.push(PlayerUpdate::PhoneNumber(v.trim().to_string()));
    }
    if let Some(v) = &args.player_id {
        updates.push(PlayerUpdate::PlayerId(v.trim().to_string()));
    }
    if let Some(v) = args.kit_size {
        updates.push(PlayerUpdate::KitSize(v));
    }
    if let Some(v) = &args.jersey {
        updates.push(PlayerUpdate::JerseyNumber(v.trim().to_string()));
    }
    if let Some(path) = &args.id_document {
        if !path.is_file() {
            return Err(ZedError::validation(format!(
                "ID document {} does not exist",
                path.display()
            )));
        }
        updates.push(PlayerUpdate::IdDocument(
            crate::backend::types::IdDocument::from_path(path.clone()),
        ));
    }
    Ok(updates)
}

/// Append a player built from flags. Returns its index, or `None` when the
/// form refused it (no sport, or roster full).
pub fn add_player_from_args(form: &mut FormState, args: &PlayerArgs) -> Result<Option<usize>> {
    let updates = player_updates(args)?;
    let before = form.players().len();
    form.add_player();
    if form.players().len() == before {
        return Ok(None);
    }
    for update in updates {
        form.update_player(before, update);
    }
    Ok(Some(before))
}

