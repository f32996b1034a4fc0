//! Error types for the ZED Tournaments registration toolkit

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ZedError>;

#[derive(Error, Debug)]
pub enum ZedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config file could not be parsed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// User-correctable problem with the draft registration.
    #[error("{message}")]
    Validation { message: String },

    /// Competition or season could not be resolved on the backend.
    #[error("{message}")]
    Configuration { message: String },

    /// A remote call failed mid-submission; the message is shown to the user as-is.
    #[error("{message}")]
    Submission { message: String },

    #[error("GraphQL error: {message}")]
    GraphQl { message: String },

    #[error("Supabase error: {message}")]
    Supabase { message: String },

    #[error("Unknown sport: {sport}")]
    UnknownSport { sport: String },

    #[error("Unknown tournament: {id}")]
    UnknownTournament { id: String },

    #[error("Unknown player field: {field}")]
    UnknownField { field: String },

    #[error("Not logged in. Run `zed-tournaments team login` first")]
    NotLoggedIn,

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for ZedError {
    fn from(err: anyhow::Error) -> Self {
        ZedError::Storage {
            message: err.to_string(),
        }
    }
}

impl ZedError {
    pub fn validation(message: impl Into<String>) -> Self {
        ZedError::Validation {
            message: message.into(),
        }
    }

    pub fn graphql(message: impl Into<String>) -> Self {
        ZedError::GraphQl {
            message: message.into(),
        }
    }

    /// True for errors the user can fix by editing the draft.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, ZedError::Validation { .. })
    }
}
