//! Supabase (PostgREST) client for the casino registration table.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use super::http::supabase_header_map;
use crate::{casino::CasinoRegistration, error::ZedError, Result};

pub const CASINO_TABLE: &str = "casino_registrations";

pub struct SupabaseClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ZedError::Config {
                message: "Supabase API key is not set (ZED_SUPABASE_KEY)".to_string(),
            });
        }
        Ok(Self {
            http: Client::builder().build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, CASINO_TABLE)
    }

    pub async fn find_registration_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CasinoRegistration>> {
        let url = self.table_url();
        debug!(%url, "GET casino registration");

        let filter = format!("eq.{}", email);
        let params = [("email", filter.as_str()), ("select", "*"), ("limit", "1")];
        let rows = self
            .http
            .get(&url)
            .headers(supabase_header_map(&self.api_key)?)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CasinoRegistration>>()
            .await?;

        Ok(rows.into_iter().next())
    }

    /// Set `is_verified = true` and return the updated row.
    pub async fn mark_verified(&self, id: i64) -> Result<CasinoRegistration> {
        let url = self.table_url();
        debug!(%url, id, "PATCH casino registration");

        let filter = format!("eq.{}", id);
        let rows = self
            .http
            .patch(&url)
            .headers(supabase_header_map(&self.api_key)?)
            .header("Prefer", "return=representation")
            .query(&[("id", filter.as_str())])
            .json(&json!({ "is_verified": true }))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CasinoRegistration>>()
            .await?;

        rows.into_iter().next().ok_or_else(|| ZedError::Supabase {
            message: format!("no casino registration with id {}", id),
        })
    }
}
