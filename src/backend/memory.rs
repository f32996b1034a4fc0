//! In-memory registration backend.
//!
//! Records every call in order so a submission can be replayed as a plan
//! (`register submit --dry-run`) or asserted on in tests. Failures can be
//! scripted per call kind.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use super::{
    traits::{RecordLookup, RegistrationBackend},
    types::{ParticipationPayload, PlayerPatch, PlayerPayload, PlayerRecord, TeamRecord},
};
use crate::cli::types::ids::{CompetitionId, ParticipationId, PlayerId, SeasonId, TeamId};
use crate::{error::ZedError, Result};

/// One call made against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    FindTeamByName(String),
    FindPlayerByEmail(String),
    FindPlayerByPhone(String),
    FindPlayerByPlayerId(String),
    ResolveCompetition(String),
    ResolveSeason(String),
    CreatePlayer { email: String, jersey_number: i32 },
    CreateTeam(String),
    CreateParticipation { name: String, team_admin: PlayerId },
    UpdatePlayer { id: PlayerId, participation: Option<ParticipationId> },
}

impl BackendCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            BackendCall::CreatePlayer { .. }
                | BackendCall::CreateTeam(_)
                | BackendCall::CreateParticipation { .. }
                | BackendCall::UpdatePlayer { .. }
        )
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    teams: Vec<TeamRecord>,
    players: Vec<PlayerRecord>,
    participations: Vec<(ParticipationId, ParticipationPayload)>,
    competitions: Vec<(String, CompetitionId)>,
    seasons: Vec<(String, SeasonId)>,
    calls: Vec<BackendCall>,
    next_id: u32,
}

impl MemoryState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }
}

/// Backend kept entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
    resolve_any_name: bool,
    lookups_offline: bool,
    failing_player_emails: HashSet<String>,
    fail_create_team: bool,
    fail_create_participation: bool,
    /// Number of `update_player` calls that succeed before the rest fail
    updates_before_failure: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves any competition or season name; used for dry runs.
    pub fn dry_run() -> Self {
        Self {
            resolve_any_name: true,
            ..Self::default()
        }
    }

    pub fn with_competition(self, name: &str) -> Self {
        {
            let mut state = self.lock();
            let id = CompetitionId::new(state.next_id("competition"));
            state.competitions.push((name.to_string(), id));
        }
        self
    }

    pub fn with_season(self, name: &str) -> Self {
        {
            let mut state = self.lock();
            let id = SeasonId::new(state.next_id("season"));
            state.seasons.push((name.to_string(), id));
        }
        self
    }

    pub fn with_team(self, name: &str) -> Self {
        {
            let mut state = self.lock();
            let id = TeamId::new(state.next_id("team"));
            state.teams.push(TeamRecord {
                id,
                name: name.to_string(),
            });
        }
        self
    }

    pub fn with_player(self, first_name: &str, last_name: &str, email: &str) -> Self {
        {
            let mut state = self.lock();
            let id = PlayerId::new(state.next_id("player"));
            state.players.push(PlayerRecord {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                phone_number: None,
                player_id: None,
                jersey_number: None,
                kit_size: None,
            });
        }
        self
    }

    /// Every lookup fails as if the network were down.
    pub fn with_lookups_offline(mut self) -> Self {
        self.lookups_offline = true;
        self
    }

    pub fn failing_player(mut self, email: &str) -> Self {
        self.failing_player_emails.insert(email.to_string());
        self
    }

    pub fn failing_team_creation(mut self) -> Self {
        self.fail_create_team = true;
        self
    }

    pub fn failing_participation_creation(mut self) -> Self {
        self.fail_create_participation = true;
        self
    }

    pub fn failing_updates_after(mut self, successful: usize) -> Self {
        self.updates_before_failure = Some(successful);
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock().calls.clone()
    }

    pub fn mutations(&self) -> Vec<BackendCall> {
        self.calls().into_iter().filter(BackendCall::is_mutation).collect()
    }

    pub fn players(&self) -> Vec<PlayerRecord> {
        self.lock().players.clone()
    }

    pub fn teams(&self) -> Vec<TeamRecord> {
        self.lock().teams.clone()
    }

    pub fn participations(&self) -> Vec<(ParticipationId, ParticipationPayload)> {
        self.lock().participations.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: BackendCall) {
        self.lock().calls.push(call);
    }

    fn offline_check(&self) -> Result<()> {
        if self.lookups_offline {
            Err(ZedError::graphql("connection refused"))
        } else {
            Ok(())
        }
    }

    fn find_player<F>(&self, predicate: F) -> Option<PlayerRecord>
    where
        F: Fn(&PlayerRecord) -> bool,
    {
        self.lock().players.iter().find(|p| predicate(p)).cloned()
    }
}

#[async_trait]
impl RecordLookup for MemoryBackend {
    async fn find_team_by_name(&self, name: &str) -> Result<Option<TeamRecord>> {
        self.record(BackendCall::FindTeamByName(name.to_string()));
        self.offline_check()?;
        Ok(self.lock().teams.iter().find(|t| t.name == name).cloned())
    }

    async fn find_player_by_email(&self, email: &str) -> Result<Option<PlayerRecord>> {
        self.record(BackendCall::FindPlayerByEmail(email.to_string()));
        self.offline_check()?;
        Ok(self.find_player(|p| p.email == email))
    }

    async fn find_player_by_phone(&self, phone_number: &str) -> Result<Option<PlayerRecord>> {
        self.record(BackendCall::FindPlayerByPhone(phone_number.to_string()));
        self.offline_check()?;
        Ok(self.find_player(|p| p.phone_number.as_deref() == Some(phone_number)))
    }

    async fn find_player_by_player_id(&self, player_id: &str) -> Result<Option<PlayerRecord>> {
        self.record(BackendCall::FindPlayerByPlayerId(player_id.to_string()));
        self.offline_check()?;
        Ok(self.find_player(|p| p.player_id.as_deref() == Some(player_id)))
    }
}

#[async_trait]
impl RegistrationBackend for MemoryBackend {
    async fn resolve_competition(&self, name: &str) -> Result<Option<CompetitionId>> {
        self.record(BackendCall::ResolveCompetition(name.to_string()));
        let mut state = self.lock();
        if let Some((_, id)) = state.competitions.iter().find(|(n, _)| n == name) {
            return Ok(Some(id.clone()));
        }
        if self.resolve_any_name {
            let id = CompetitionId::new(state.next_id("competition"));
            state.competitions.push((name.to_string(), id.clone()));
            return Ok(Some(id));
        }
        Ok(None)
    }

    async fn resolve_season(&self, name: &str) -> Result<Option<SeasonId>> {
        self.record(BackendCall::ResolveSeason(name.to_string()));
        let mut state = self.lock();
        if let Some((_, id)) = state.seasons.iter().find(|(n, _)| n == name) {
            return Ok(Some(id.clone()));
        }
        if self.resolve_any_name {
            let id = SeasonId::new(state.next_id("season"));
            state.seasons.push((name.to_string(), id.clone()));
            return Ok(Some(id));
        }
        Ok(None)
    }

    async fn create_player(&self, payload: &PlayerPayload) -> Result<PlayerId> {
        self.record(BackendCall::CreatePlayer {
            email: payload.email.clone(),
            jersey_number: payload.jersey_number,
        });
        if self.failing_player_emails.contains(&payload.email) {
            return Err(ZedError::graphql("Unique constraint failed on the fields: (`email`)"));
        }

        let mut state = self.lock();
        let id = PlayerId::new(state.next_id("player"));
        state.players.push(PlayerRecord {
            id: id.clone(),
            first_name: payload.first_name.clone(),
            last_name: payload.last_name.clone(),
            email: payload.email.clone(),
            phone_number: Some(payload.phone_number.clone()),
            player_id: Some(payload.player_id.clone()),
            jersey_number: Some(payload.jersey_number),
            kit_size: Some(payload.kit_size.clone()),
        });
        Ok(id)
    }

    async fn create_team(&self, name: &str) -> Result<TeamId> {
        self.record(BackendCall::CreateTeam(name.to_string()));
        if self.fail_create_team {
            return Err(ZedError::graphql("Access denied"));
        }

        let mut state = self.lock();
        let id = TeamId::new(state.next_id("team"));
        state.teams.push(TeamRecord {
            id: id.clone(),
            name: name.to_string(),
        });
        Ok(id)
    }

    async fn create_participation(
        &self,
        payload: &ParticipationPayload,
    ) -> Result<ParticipationId> {
        self.record(BackendCall::CreateParticipation {
            name: payload.name.clone(),
            team_admin: payload.team_admin.clone(),
        });
        if self.fail_create_participation {
            return Err(ZedError::graphql("Access denied"));
        }

        let mut state = self.lock();
        let id = ParticipationId::new(state.next_id("participation"));
        state.participations.push((id.clone(), payload.clone()));
        Ok(id)
    }

    async fn update_player(&self, id: &PlayerId, patch: &PlayerPatch) -> Result<PlayerId> {
        let previous_updates = self
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, BackendCall::UpdatePlayer { .. }))
            .count();
        self.record(BackendCall::UpdatePlayer {
            id: id.clone(),
            participation: patch.participation.clone(),
        });
        if let Some(limit) = self.updates_before_failure {
            if previous_updates >= limit {
                return Err(ZedError::graphql("Player update timed out"));
            }
        }

        let mut state = self.lock();
        let player = state
            .players
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| ZedError::NotFound {
                what: format!("Player {}", id),
            })?;
        if let Some(first_name) = &patch.first_name {
            player.first_name = first_name.clone();
        }
        if let Some(last_name) = &patch.last_name {
            player.last_name = last_name.clone();
        }
        if let Some(email) = &patch.email {
            player.email = email.clone();
        }
        if let Some(phone) = &patch.phone_number {
            player.phone_number = Some(phone.clone());
        }
        if let Some(player_id) = &patch.player_id {
            player.player_id = Some(player_id.clone());
        }
        if let Some(kit_size) = &patch.kit_size {
            player.kit_size = Some(kit_size.clone());
        }
        if let Some(jersey) = patch.jersey_number {
            player.jersey_number = Some(jersey);
        }
        Ok(id.clone())
    }
}
