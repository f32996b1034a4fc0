use async_trait::async_trait;

use super::types::{ParticipationPayload, PlayerPatch, PlayerPayload, PlayerRecord, TeamRecord};
use crate::cli::types::ids::{CompetitionId, ParticipationId, PlayerId, SeasonId, TeamId};
use crate::Result;

/// Exact-match lookups used by uniqueness checks.
///
/// Each lookup returns at most one record. Transport problems surface as
/// `Err`; [`check_existence`](super::validation::check_existence) turns them
/// into a retry message.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    async fn find_team_by_name(&self, name: &str) -> Result<Option<TeamRecord>>;

    async fn find_player_by_email(&self, email: &str) -> Result<Option<PlayerRecord>>;

    async fn find_player_by_phone(&self, phone_number: &str) -> Result<Option<PlayerRecord>>;

    async fn find_player_by_player_id(&self, player_id: &str) -> Result<Option<PlayerRecord>>;
}

/// Mutations and id resolution needed to submit a registration.
///
/// None of these calls carry an idempotency key: retrying a failed
/// submission may create duplicate records.
#[async_trait]
pub trait RegistrationBackend: RecordLookup {
    async fn resolve_competition(&self, name: &str) -> Result<Option<CompetitionId>>;

    async fn resolve_season(&self, name: &str) -> Result<Option<SeasonId>>;

    async fn create_player(&self, payload: &PlayerPayload) -> Result<PlayerId>;

    async fn create_team(&self, name: &str) -> Result<TeamId>;

    async fn create_participation(&self, payload: &ParticipationPayload)
        -> Result<ParticipationId>;

    async fn update_player(&self, id: &PlayerId, patch: &PlayerPatch) -> Result<PlayerId>;
}
