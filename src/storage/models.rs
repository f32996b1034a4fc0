//! Data models for the storage layer

use crate::Sport;
use serde::{Deserialize, Serialize};

/// One row of `register list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSummary {
    pub name: String,
    pub sport: Option<Sport>,
    pub team_name: String,
    pub players: usize,
    pub updated_at: u64,
}

/// Team portal login kept between invocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub email: String,
    pub token: String,
    pub user_id: String,
    pub created_at: u64,
}
