//! Casino night tickets.
//!
//! Verified casino registrations get a short ticket code and a QR payload
//! that door staff scan at the entrance.

use serde::{Deserialize, Serialize};

use crate::{error::ZedError, Result};

const TICKET_CODE_LEN: usize = 10;
const QR_PREFIX: &str = "ZEDCASINO";

/// Row of the `casino_registrations` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CasinoRegistration {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CasinoTicket {
    pub registration_id: i64,
    pub holder: String,
    pub code: String,
    /// String encoded into the entrance QR code
    pub qr_payload: String,
}

/// Deterministic ticket code for a registration.
pub fn ticket_code(registration: &CasinoRegistration) -> String {
    let input = format!("{}:{}", registration.id, registration.email.to_lowercase());
    let hash = blake3::hash(input.as_bytes()).to_hex();
    hash.as_str()[..TICKET_CODE_LEN].to_ascii_uppercase()
}

/// Issue the entrance ticket. Only verified registrations get one.
pub fn issue_ticket(registration: &CasinoRegistration) -> Result<CasinoTicket> {
    if !registration.is_verified {
        return Err(ZedError::validation(format!(
            "Registration for {} has not been verified yet.",
            registration.email
        )));
    }

    let code = ticket_code(registration);
    Ok(CasinoTicket {
        registration_id: registration.id,
        holder: registration.full_name.clone(),
        qr_payload: format!("{}|{}|{}", QR_PREFIX, registration.id, code),
        code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(verified: bool) -> CasinoRegistration {
        CasinoRegistration {
            id: 17,
            full_name: "Nour Adel".to_string(),
            email: "Nour@Example.com".to_string(),
            phone: None,
            is_verified: verified,
        }
    }

    #[test]
    fn test_ticket_code_is_stable_and_case_insensitive_on_email() {
        let mut other = registration(true);
        other.email = "nour@example.com".to_string();

        let code = ticket_code(&registration(true));
        assert_eq!(code.len(), TICKET_CODE_LEN);
        assert_eq!(code, ticket_code(&other));
        assert!(code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ticket_code_differs_per_registration() {
        let mut other = registration(true);
        other.id = 18;
        assert_ne!(ticket_code(&registration(true)), ticket_code(&other));
    }

    #[test]
    fn test_issue_ticket_for_verified_registration() {
        let ticket = issue_ticket(&registration(true)).unwrap();

        assert_eq!(ticket.holder, "Nour Adel");
        assert_eq!(
            ticket.qr_payload,
            format!("ZEDCASINO|17|{}", ticket.code)
        );
    }

    #[test]
    fn test_issue_ticket_refuses_unverified() {
        match issue_ticket(&registration(false)) {
            Err(ZedError::Validation { message }) => assert!(message.contains("not been verified")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}
