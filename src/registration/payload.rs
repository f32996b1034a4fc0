//! Backend payload construction for player drafts.

use super::draft::PlayerDraft;
use crate::backend::types::{PlayerPatch, PlayerPayload};
use crate::cli::types::field::PlayerField;
use crate::{error::ZedError, KitSize, Result, Sport};

pub const NOT_PROVIDED: &str = "N/A";
pub const DEFAULT_EXPERIENCE: &str = "Beginner";
pub const DEFAULT_JERSEY_NUMBER: i32 = 1;

/// Coerce a jersey number; blank means [`DEFAULT_JERSEY_NUMBER`].
pub fn parse_jersey_number(raw: &str) -> Result<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_JERSEY_NUMBER);
    }
    raw.parse::<i32>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| {
            ZedError::validation(format!("Jersey number \"{}\" must be a whole number.", raw))
        })
}

fn or_not_provided(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value.to_string()
    }
}

/// Build the complete create payload for a player draft.
///
/// Unset biography fields become "N/A", experience defaults to "Beginner",
/// kit size to Medium and the jersey number to 1.
pub fn build_default_player_payload(
    player: &PlayerDraft,
    team_name: &str,
    sport: Sport,
) -> Result<PlayerPayload> {
    Ok(PlayerPayload {
        first_name: player.first_name.trim().to_string(),
        last_name: player.last_name.trim().to_string(),
        email: player.email.trim().to_string(),
        phone_number: or_not_provided(&player.phone_number),
        player_id: or_not_provided(&player.player_id),
        kit_size: player.kit_size.unwrap_or_default().to_string(),
        jersey_number: parse_jersey_number(&player.jersey_number)?,
        team_name: team_name.trim().to_string(),
        sport_type: player.sport_type.unwrap_or(sport),
        position: NOT_PROVIDED.to_string(),
        nationality: NOT_PROVIDED.to_string(),
        experience_level: DEFAULT_EXPERIENCE.to_string(),
        id_document: player.id_document.clone(),
    })
}

/// Single-field patch for editing a rostered player.
pub fn player_patch(field: PlayerField, value: &str) -> Result<PlayerPatch> {
    let text = Some(value.trim().to_string());
    let mut patch = PlayerPatch::default();
    match field {
        PlayerField::FirstName => patch.first_name = text,
        PlayerField::LastName => patch.last_name = text,
        PlayerField::Email => patch.email = text,
        PlayerField::PhoneNumber => patch.phone_number = text,
        PlayerField::PlayerId => patch.player_id = text,
        PlayerField::KitSize => patch.kit_size = Some(value.parse::<KitSize>()?.to_string()),
        PlayerField::JerseyNumber => patch.jersey_number = Some(parse_jersey_number(value)?),
        PlayerField::IdDocument => {
            return Err(ZedError::validation(
                "ID documents can only be attached while registering.",
            ))
        }
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_for(player: &PlayerDraft, sport: Sport) -> PlayerPayload {
        build_default_player_payload(player, "Golden Eagles", sport).unwrap()
    }

    fn draft() -> PlayerDraft {
        PlayerDraft {
            first_name: " Omar ".to_string(),
            last_name: "Hassan".to_string(),
            email: "omar@example.com".to_string(),
            phone_number: "01001234567".to_string(),
            ..PlayerDraft::default()
        }
    }

    #[test]
    fn test_jersey_number_string_is_coerced() {
        let mut player = draft();
        player.jersey_number = "7".to_string();

        let payload = payload_for(&player, Sport::Football);
        assert_eq!(payload.jersey_number, 7);
    }

    #[test]
    fn test_empty_jersey_number_defaults_to_one() {
        let payload = payload_for(&draft(), Sport::Football);
        assert_eq!(payload.jersey_number, 1);
    }

    #[test]
    fn test_invalid_jersey_number_is_rejected() {
        assert!(parse_jersey_number("seven").is_err());
        assert!(parse_jersey_number("-3").is_err());
        assert_eq!(parse_jersey_number(" 23 ").unwrap(), 23);
    }

    #[test]
    fn test_unset_fields_get_sentinel_defaults() {
        let payload = payload_for(&draft(), Sport::Padel);

        assert_eq!(payload.first_name, "Omar");
        assert_eq!(payload.player_id, "N/A");
        assert_eq!(payload.position, "N/A");
        assert_eq!(payload.nationality, "N/A");
        assert_eq!(payload.experience_level, "Beginner");
        assert_eq!(payload.kit_size, "Medium");
        assert_eq!(payload.sport_type, Sport::Padel);
        assert_eq!(payload.team_name, "Golden Eagles");
    }

    #[test]
    fn test_player_sport_type_wins_over_fallback() {
        let mut player = draft();
        player.sport_type = Some(Sport::Padbol);
        player.kit_size = Some(KitSize::XLarge);

        let payload = payload_for(&player, Sport::Padel);
        assert_eq!(payload.sport_type, Sport::Padbol);
        assert_eq!(payload.kit_size, "XLarge");
    }

    #[test]
    fn test_payload_serializes_keystone_field_names() {
        let payload = payload_for(&draft(), Sport::Football);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["playerID"], "N/A");
        assert_eq!(value["phoneNumber"], "01001234567");
        assert_eq!(value["jerseyNumber"], 1);
        assert!(value.get("idDocument").is_none());
    }

    #[test]
    fn test_player_patch_single_field() {
        let patch = player_patch(PlayerField::JerseyNumber, "10").unwrap();
        assert_eq!(patch.jersey_number, Some(10));
        assert!(patch.email.is_none());

        let patch = player_patch(PlayerField::KitSize, "xl").unwrap();
        assert_eq!(patch.kit_size.as_deref(), Some("XLarge"));
    }

    #[test]
    fn test_player_patch_refuses_id_document() {
        assert!(player_patch(PlayerField::IdDocument, "/tmp/id.png").is_err());
    }
}
