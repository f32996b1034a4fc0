//! Keystone GraphQL client.
//!
//! Implements the lookups and mutations the registration workflow needs,
//! plus the team-portal and admin calls that only the CLI uses.

use async_trait::async_trait;
use lru::LruCache;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use std::{num::NonZeroUsize, sync::Mutex, time::Duration};
use tracing::debug;

use super::{
    http::session_header_map,
    queries,
    traits::{RecordLookup, RegistrationBackend},
    types::{
        IdDocument, ParticipationPayload, ParticipationSummary, PlayerPatch, PlayerPayload,
        PlayerRecord, Roster, Session, TeamRecord,
    },
};
use crate::cli::types::ids::{CompetitionId, ParticipationId, PlayerId, SeasonId, TeamId};
use crate::{error::ZedError, Result};


const USER_AGENT: &str = concat!("zed-tournaments/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ID_CACHE_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum IdCacheKey {
    Competition(String),
    Season(String),
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct IdOnly {
    id: String,
}

#[derive(Debug, Deserialize)]
struct TeamsData {
    teams: Vec<TeamRecord>,
}

#[derive(Debug, Deserialize)]
struct PlayersData {
    players: Vec<PlayerRecord>,
}

#[derive(Debug, Deserialize)]
struct CompetitionsData {
    competitions: Vec<IdOnly>,
}

#[derive(Debug, Deserialize)]
struct SeasonsData {
    seasons: Vec<IdOnly>,
}

#[derive(Debug, Deserialize)]
struct CreatePlayerData {
    #[serde(rename = "createPlayer")]
    created: Option<IdOnly>,
}

#[derive(Debug, Deserialize)]
struct CreateTeamData {
    #[serde(rename = "createTeam")]
    created: Option<IdOnly>,
}

#[derive(Debug, Deserialize)]
struct CreateParticipationData {
    #[serde(rename = "createParticipation")]
    created: Option<IdOnly>,
}

#[derive(Debug, Deserialize)]
struct UpdatePlayerData {
    #[serde(rename = "updatePlayer")]
    updated: Option<IdOnly>,
}

#[derive(Debug, Deserialize)]
struct UpdateParticipationData {
    #[serde(rename = "updateParticipation")]
    updated: Option<IdOnly>,
}

#[derive(Debug, Deserialize)]
struct AuthData {
    #[serde(rename = "authenticateUserWithPassword")]
    result: Option<AuthResult>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AuthResult {
    Success {
        #[serde(rename = "sessionToken")]
        session_token: String,
        item: IdOnly,
    },
    Failure {
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct RostersData {
    participations: Vec<Roster>,
}

#[derive(Debug, Deserialize)]
struct ParticipationsData {
    participations: Vec<ParticipationSummary>,
}

fn connect(id: &str) -> Value {
    json!({ "connect": { "id": id } })
}

fn returned_id(id: Option<IdOnly>, operation: &str) -> Result<String> {
    id.map(|i| i.id)
        .ok_or_else(|| ZedError::graphql(format!("{} returned no data", operation)))
}

/// Client for the registration GraphQL endpoint.
pub struct GraphQlClient {
    http: Client,
    endpoint: String,
    session_token: Option<String>,
    id_cache: Mutex<LruCache<IdCacheKey, String>>,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let capacity = NonZeroUsize::new(ID_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            session_token: None,
            id_cache: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// Send the given Keystone session token with every request.
    pub fn with_session(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        debug!(endpoint = %self.endpoint, "POST graphql");

        let response = self
            .http
            .post(&self.endpoint)
            .headers(session_header_map(self.session_token.as_deref())?)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?
            .json::<GraphQlResponse<T>>()
            .await?;

        Self::into_data(response)
    }

    /// GraphQL multipart request carrying one file at `file_path` in the variables.
    async fn execute_with_upload<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        file_path: &str,
        document: &IdDocument,
    ) -> Result<T> {
        debug!(endpoint = %self.endpoint, file = %document.file_name, "POST graphql multipart");

        let bytes = tokio::fs::read(&document.path).await?;
        let operations = json!({ "query": query, "variables": variables });
        let map = json!({ "0": [file_path] });
        let form = Form::new()
            .text("operations", serde_json::to_string(&operations)?)
            .text("map", serde_json::to_string(&map)?)
            .part("0", Part::bytes(bytes).file_name(document.file_name.clone()));

        let response = self
            .http
            .post(&self.endpoint)
            .headers(session_header_map(self.session_token.as_deref())?)
            .header("apollo-require-preflight", "true")
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json::<GraphQlResponse<T>>()
            .await?;

        Self::into_data(response)
    }

    fn into_data<T>(response: GraphQlResponse<T>) -> Result<T> {
        if !response.errors.is_empty() {
            let message = response
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ZedError::GraphQl { message });
        }
        response
            .data
            .ok_or_else(|| ZedError::graphql("response contained no data"))
    }

    async fn find_player(&self, query: &str, value: &str) -> Result<Option<PlayerRecord>> {
        let data: PlayersData = self.execute(query, json!({ "value": value })).await?;
        Ok(data.players.into_iter().next())
    }

    fn cached_id(&self, key: &IdCacheKey) -> Option<String> {
        self.id_cache
            .lock()
            .ok()
            .and_then(|mut cache| cache.get(key).cloned())
    }

    fn cache_id(&self, key: IdCacheKey, id: &str) {
        if let Ok(mut cache) = self.id_cache.lock() {
            cache.put(key, id.to_string());
        }
    }

    /// Log in with Keystone's password strategy.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Session> {
        let data: AuthData = self
            .execute(
                queries::AUTHENTICATE,
                json!({ "email": email, "password": password }),
            )
            .await?;

        match data.result {
            Some(AuthResult::Success {
                session_token,
                item,
            }) => Ok(Session {
                token: session_token,
                user_id: item.id,
            }),
            Some(AuthResult::Failure { message }) => Err(ZedError::validation(message)),
            None => Err(ZedError::graphql("authentication returned no data")),
        }
    }

    /// Participations whose team admin has the given email, with rosters.
    pub async fn rosters_for_admin(&self, email: &str) -> Result<Vec<Roster>> {
        let data: RostersData = self
            .execute(queries::ROSTERS_FOR_ADMIN, json!({ "email": email }))
            .await?;
        Ok(data.participations)
    }

    pub async fn participations(&self, unverified_only: bool) -> Result<Vec<ParticipationSummary>> {
        let filter = if unverified_only {
            json!({ "isVerified": { "equals": false } })
        } else {
            json!({})
        };
        let data: ParticipationsData = self
            .execute(queries::PARTICIPATIONS, json!({ "where": filter }))
            .await?;
        Ok(data.participations)
    }

    pub async fn set_participation_verified(
        &self,
        id: &ParticipationId,
        verified: bool,
    ) -> Result<ParticipationId> {
        let data: UpdateParticipationData = self
            .execute(
                queries::UPDATE_PARTICIPATION_VERIFIED,
                json!({ "id": id.as_str(), "verified": verified }),
            )
            .await?;
        returned_id(data.updated, "updateParticipation").map(ParticipationId::new)
    }
}

#[async_trait]
impl RecordLookup for GraphQlClient {
    async fn find_team_by_name(&self, name: &str) -> Result<Option<TeamRecord>> {
        let data: TeamsData = self
            .execute(queries::TEAM_BY_NAME, json!({ "name": name }))
            .await?;
        Ok(data.teams.into_iter().next())
    }

    async fn find_player_by_email(&self, email: &str) -> Result<Option<PlayerRecord>> {
        self.find_player(queries::PLAYER_BY_EMAIL, email).await
    }

    async fn find_player_by_phone(&self, phone_number: &str) -> Result<Option<PlayerRecord>> {
        self.find_player(queries::PLAYER_BY_PHONE, phone_number).await
    }

    async fn find_player_by_player_id(&self, player_id: &str) -> Result<Option<PlayerRecord>> {
        self.find_player(queries::PLAYER_BY_PLAYER_ID, player_id).await
    }
}

#[async_trait]
impl RegistrationBackend for GraphQlClient {
    async fn resolve_competition(&self, name: &str) -> Result<Option<CompetitionId>> {
        let key = IdCacheKey::Competition(name.to_string());
        if let Some(id) = self.cached_id(&key) {
            return Ok(Some(CompetitionId::new(id)));
        }

        let data: CompetitionsData = self
            .execute(queries::COMPETITION_BY_NAME, json!({ "name": name }))
            .await?;
        let id = data.competitions.into_iter().next().map(|c| c.id);
        if let Some(id) = &id {
            self.cache_id(key, id);
        }
        Ok(id.map(CompetitionId::new))
    }

    async fn resolve_season(&self, name: &str) -> Result<Option<SeasonId>> {
        let key = IdCacheKey::Season(name.to_string());
        if let Some(id) = self.cached_id(&key) {
            return Ok(Some(SeasonId::new(id)));
        }

        let data: SeasonsData = self
            .execute(queries::SEASON_BY_NAME, json!({ "name": name }))
            .await?;
        let id = data.seasons.into_iter().next().map(|s| s.id);
        if let Some(id) = &id {
            self.cache_id(key, id);
        }
        Ok(id.map(SeasonId::new))
    }

    async fn create_player(&self, payload: &PlayerPayload) -> Result<PlayerId> {
        let mut data = serde_json::to_value(payload)?;

        let created: CreatePlayerData = match &payload.id_document {
            Some(document) => {
                data["idDocument"] = json!({ "upload": null });
                self.execute_with_upload(
                    queries::CREATE_PLAYER,
                    json!({ "data": data }),
                    "variables.data.idDocument.upload",
                    document,
                )
                .await?
            }
            None => {
                self.execute(queries::CREATE_PLAYER, json!({ "data": data }))
                    .await?
            }
        };
        returned_id(created.created, "createPlayer").map(PlayerId::new)
    }

    async fn create_team(&self, name: &str) -> Result<TeamId> {
        let data: CreateTeamData = self
            .execute(queries::CREATE_TEAM, json!({ "data": { "name": name } }))
            .await?;
        returned_id(data.created, "createTeam").map(TeamId::new)
    }

    async fn create_participation(
        &self,
        payload: &ParticipationPayload,
    ) -> Result<ParticipationId> {
        let data = json!({
            "name": payload.name,
            "season": connect(payload.season.as_str()),
            "team": connect(payload.team.as_str()),
            "competition": connect(payload.competition.as_str()),
            "sportType": payload.sport_type.as_str(),
            "tournament": payload.tournament,
            "category": payload.category,
            "teamAdmin": connect(payload.team_admin.as_str()),
            "isVerified": payload.is_verified,
        });
        let created: CreateParticipationData = self
            .execute(queries::CREATE_PARTICIPATION, json!({ "data": data }))
            .await?;
        returned_id(created.created, "createParticipation").map(ParticipationId::new)
    }

    async fn update_player(&self, id: &PlayerId, patch: &PlayerPatch) -> Result<PlayerId> {
        let mut data = serde_json::to_value(patch)?;
        if let Some(participation) = &patch.participation {
            data["participation"] = connect(participation.as_str());
        }
        let updated: UpdatePlayerData = self
            .execute(
                queries::UPDATE_PLAYER,
                json!({ "id": id.as_str(), "data": data }),
            )
            .await?;
        returned_id(updated.updated, "updatePlayer").map(PlayerId::new)
    }
}
