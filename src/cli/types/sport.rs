//! Sport and kit types.

use crate::error::ZedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sports offered at ZED Tournaments.
///
/// Each sport keys one entry of the static [`SportConfig`](crate::sports::SportConfig)
/// table, which decides roster limits and whether a kit number is collected.
///
/// # Examples
///
/// ```rust
/// use zed_tournaments::Sport;
///
/// let sport: Sport = "padel".parse().unwrap();
/// assert_eq!(sport, Sport::Padel);
/// assert_eq!(sport.to_string(), "Padel");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Sport {
    Football,
    Padel,
    Basketball,
    Padbol,
}

impl Sport {
    pub const ALL: [Sport; 4] = [Sport::Football, Sport::Padel, Sport::Basketball, Sport::Padbol];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Padel => "Padel",
            Sport::Basketball => "Basketball",
            Sport::Padbol => "Padbol",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sport {
    type Err = ZedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "football" | "soccer" => Ok(Sport::Football),
            "padel" => Ok(Sport::Padel),
            "basketball" => Ok(Sport::Basketball),
            "padbol" => Ok(Sport::Padbol),
            _ => Err(ZedError::UnknownSport {
                sport: s.to_string(),
            }),
        }
    }
}

/// Jersey sizes handed out with tournament kits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum KitSize {
    Small,
    #[default]
    Medium,
    Large,
    #[value(name = "xlarge")]
    XLarge,
    #[value(name = "xxlarge")]
    XXLarge,
}

impl KitSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            KitSize::Small => "Small",
            KitSize::Medium => "Medium",
            KitSize::Large => "Large",
            KitSize::XLarge => "XLarge",
            KitSize::XXLarge => "XXLarge",
        }
    }
}

impl fmt::Display for KitSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KitSize {
    type Err = ZedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "small" => Ok(KitSize::Small),
            "m" | "medium" => Ok(KitSize::Medium),
            "l" | "large" => Ok(KitSize::Large),
            "xl" | "xlarge" => Ok(KitSize::XLarge),
            "xxl" | "xxlarge" => Ok(KitSize::XXLarge),
            _ => Err(ZedError::validation(format!("Unknown kit size: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_from_str_is_case_insensitive() {
        assert_eq!("FOOTBALL".parse::<Sport>().unwrap(), Sport::Football);
        assert_eq!(" Padbol ".parse::<Sport>().unwrap(), Sport::Padbol);
        assert_eq!("soccer".parse::<Sport>().unwrap(), Sport::Football);
    }

    #[test]
    fn test_sport_from_str_rejects_unknown() {
        match "cricket".parse::<Sport>() {
            Err(ZedError::UnknownSport { sport }) => assert_eq!(sport, "cricket"),
            other => panic!("Expected UnknownSport, got {:?}", other),
        }
    }

    #[test]
    fn test_sport_display_round_trips() {
        for sport in Sport::ALL {
            assert_eq!(sport.to_string().parse::<Sport>().unwrap(), sport);
        }
    }

    #[test]
    fn test_kit_size_defaults_to_medium() {
        assert_eq!(KitSize::default(), KitSize::Medium);
        assert_eq!(KitSize::default().to_string(), "Medium");
    }

    #[test]
    fn test_kit_size_short_codes() {
        assert_eq!("xl".parse::<KitSize>().unwrap(), KitSize::XLarge);
        assert_eq!("S".parse::<KitSize>().unwrap(), KitSize::Small);
        assert!("huge".parse::<KitSize>().is_err());
    }
}
