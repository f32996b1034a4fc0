//! Player draft field names accepted by `register update-player`.

use crate::error::ZedError;
use std::fmt;
use std::str::FromStr;

/// A single editable field of a player draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    /// National or federation ID number, not the backend record id
    PlayerId,
    KitSize,
    JerseyNumber,
    /// Path to a scan of the player's ID document
    IdDocument,
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerField::FirstName => "first-name",
            PlayerField::LastName => "last-name",
            PlayerField::Email => "email",
            PlayerField::PhoneNumber => "phone-number",
            PlayerField::PlayerId => "player-id",
            PlayerField::KitSize => "kit-size",
            PlayerField::JerseyNumber => "jersey-number",
            PlayerField::IdDocument => "id-document",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlayerField {
    type Err = ZedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "firstname" => Ok(PlayerField::FirstName),
            "lastname" => Ok(PlayerField::LastName),
            "email" => Ok(PlayerField::Email),
            "phone" | "phonenumber" => Ok(PlayerField::PhoneNumber),
            "playerid" => Ok(PlayerField::PlayerId),
            "kitsize" => Ok(PlayerField::KitSize),
            "jersey" | "jerseynumber" => Ok(PlayerField::JerseyNumber),
            "iddocument" | "idfile" => Ok(PlayerField::IdDocument),
            _ => Err(ZedError::UnknownField {
                field: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_field_accepts_camel_and_kebab_case() {
        assert_eq!("firstName".parse::<PlayerField>().unwrap(), PlayerField::FirstName);
        assert_eq!("first-name".parse::<PlayerField>().unwrap(), PlayerField::FirstName);
        assert_eq!("playerID".parse::<PlayerField>().unwrap(), PlayerField::PlayerId);
        assert_eq!("jerseyNumber".parse::<PlayerField>().unwrap(), PlayerField::JerseyNumber);
    }

    #[test]
    fn test_player_field_unknown() {
        assert!(matches!(
            "nickname".parse::<PlayerField>(),
            Err(ZedError::UnknownField { .. })
        ));
    }
}
