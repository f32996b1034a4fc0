//! Runtime configuration.
//!
//! Loaded from `zed_tournaments.toml` (or the file named by `ZED_CONFIG`),
//! then overridden by environment variables. A `.env` file in the working
//! directory is read first so its values count as environment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{error::ZedError, Result};

pub const CONFIG_PATH_ENV_VAR: &str = "ZED_CONFIG";
pub const GRAPHQL_URL_ENV_VAR: &str = "ZED_GRAPHQL_URL";
pub const SUPABASE_URL_ENV_VAR: &str = "ZED_SUPABASE_URL";
pub const SUPABASE_KEY_ENV_VAR: &str = "ZED_SUPABASE_KEY";
pub const SEASON_ENV_VAR: &str = "ZED_SEASON";
pub const COMPETITION_ENV_VAR: &str = "ZED_COMPETITION";
pub const DB_PATH_ENV_VAR: &str = "ZED_DB_PATH";
pub const LOG_ENV_VAR: &str = "ZED_LOG";

pub const DEFAULT_CONFIG_FILE: &str = "zed_tournaments.toml";
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.zedtournaments.com/api/graphql";
pub const DEFAULT_SEASON: &str = "2026";
pub const DEFAULT_COMPETITION: &str = "ZED Tournaments";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    pub graphql_url: String,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            supabase_url: None,
            supabase_key: None,
        }
    }
}

/// Backend names of the season and competition registrations go into
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventConfig {
    pub season: String,
    pub competition: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON.to_string(),
            competition: DEFAULT_COMPETITION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Defaults to the user cache directory
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub event: EventConfig,
    pub storage: StorageConfig,
}

fn non_blank(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn check_url(name: &str, url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ZedError::Config {
            message: format!("{} must start with http:// or https://, got '{}'", name, url),
        })
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read `path`; a missing file gives the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load file, `.env` and environment, then validate.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let path = std::env::var(CONFIG_PATH_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, keyed by environment variable name.
    /// Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).and_then(non_blank);

        if let Some(url) = get(GRAPHQL_URL_ENV_VAR) {
            self.backend.graphql_url = url;
        }
        if let Some(url) = get(SUPABASE_URL_ENV_VAR) {
            self.backend.supabase_url = Some(url);
        }
        if let Some(key) = get(SUPABASE_KEY_ENV_VAR) {
            self.backend.supabase_key = Some(key);
        }
        if let Some(season) = get(SEASON_ENV_VAR) {
            self.event.season = season;
        }
        if let Some(competition) = get(COMPETITION_ENV_VAR) {
            self.event.competition = competition;
        }
        if let Some(path) = get(DB_PATH_ENV_VAR) {
            self.storage.db_path = Some(PathBuf::from(path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_url("backend.graphql_url", &self.backend.graphql_url)?;
        if let Some(url) = &self.backend.supabase_url {
            check_url("backend.supabase_url", url)?;
        }
        if self.event.season.trim().is_empty() || self.event.competition.trim().is_empty() {
            return Err(ZedError::Config {
                message: "event.season and event.competition must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Supabase URL and key, required by the casino commands.
    pub fn supabase(&self) -> Result<(&str, &str)> {
        match (&self.backend.supabase_url, &self.backend.supabase_key) {
            (Some(url), Some(key)) => Ok((url.as_str(), key.as_str())),
            _ => Err(ZedError::Config {
                message: format!(
                    "Casino commands need {} and {}",
                    SUPABASE_URL_ENV_VAR, SUPABASE_KEY_ENV_VAR
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.backend.graphql_url, DEFAULT_GRAPHQL_URL);
        assert_eq!(config.event.season, DEFAULT_SEASON);
        assert_eq!(config.event.competition, DEFAULT_COMPETITION);
        assert!(config.storage.db_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [event]
            season = "2027"
            "#,
        )
        .unwrap();
        assert_eq!(config.event.season, "2027");
        assert_eq!(config.event.competition, DEFAULT_COMPETITION);
        assert_eq!(config.backend.graphql_url, DEFAULT_GRAPHQL_URL);
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml_str("[event\nseason = ").unwrap_err();
        assert!(matches!(err, ZedError::ConfigParse(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = AppConfig::from_toml_str(
            r#"
            [backend]
            graphql_url = "https://staging.example.com/api/graphql"
            "#,
        )
        .unwrap();
        config.apply_overrides(env(&[
            (GRAPHQL_URL_ENV_VAR, "http://localhost:3000/api/graphql"),
            (SEASON_ENV_VAR, "2028"),
            (COMPETITION_ENV_VAR, "   "),
            (DB_PATH_ENV_VAR, "/tmp/zed.db"),
        ]));

        assert_eq!(config.backend.graphql_url, "http://localhost:3000/api/graphql");
        assert_eq!(config.event.season, "2028");
        assert_eq!(config.event.competition, DEFAULT_COMPETITION);
        assert_eq!(config.storage.db_path, Some(PathBuf::from("/tmp/zed.db")));
    }

    #[test]
    fn test_url_validation() {
        let mut config = AppConfig::default();
        config.backend.graphql_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.backend.supabase_url = Some("example.supabase.co".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(
            &path,
            "[backend]\nsupabase_url = \"https://x.supabase.co\"\nsupabase_key = \"anon\"\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.supabase().unwrap(), ("https://x.supabase.co", "anon"));
    }

    #[test]
    fn test_supabase_required_for_casino() {
        assert!(AppConfig::default().supabase().is_err());
    }
}
