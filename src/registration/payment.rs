//! Simulated payment step shown after a successful registration.
//!
//! No money moves. The demo confirms instantly and the CLI pauses for
//! [`PAYMENT_REDIRECT_DELAY`] before "returning" to the start page.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::render::format_egp;
use crate::sports::{SportConfig, Tournament};
use crate::Result;

pub const PAYMENT_REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSummary {
    pub team_name: String,
    pub tournament: String,
    pub sport: String,
    pub players: usize,
    /// Whole EGP, charged per team
    pub amount_due: u32,
}

impl PaymentSummary {
    pub fn for_tournament(
        config: &SportConfig,
        tournament: &Tournament,
        team_name: &str,
        players: usize,
    ) -> Self {
        Self {
            team_name: team_name.trim().to_string(),
            tournament: tournament.name.to_string(),
            sport: config.name.to_string(),
            players,
            amount_due: tournament.fee,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{} ({}, {} players)\n{}\nAmount due: {}",
            self.team_name,
            self.sport,
            self.players,
            self.tournament,
            format_egp(self.amount_due)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pub reference: String,
    pub amount: u32,
}

/// Confirm a demo payment. The reference is derived from the team and time.
pub fn confirm_payment_demo(summary: &PaymentSummary) -> Result<PaymentConfirmation> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(PaymentConfirmation {
        reference: payment_reference(&summary.team_name, now.as_secs()),
        amount: summary.amount_due,
    })
}

fn payment_reference(team_name: &str, timestamp: u64) -> String {
    let hash = blake3::hash(format!("{}:{}", team_name, timestamp).as_bytes());
    format!("DEMO-{}", hash.to_hex().as_str()[..8].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sports::sport_config;
    use crate::Sport;

    fn summary() -> PaymentSummary {
        let config = sport_config(Sport::Basketball);
        PaymentSummary::for_tournament(config, &config.tournaments[0], " Hoop Dreams ", 4)
    }

    #[test]
    fn test_summary_charges_tournament_fee() {
        let summary = summary();
        assert_eq!(summary.amount_due, 4000);
        assert_eq!(summary.team_name, "Hoop Dreams");
        assert!(summary.render().contains("Amount due: 4,000 EGP"));
    }

    #[test]
    fn test_confirmation_reference() {
        let confirmation = confirm_payment_demo(&summary()).unwrap();
        assert!(confirmation.reference.starts_with("DEMO-"));
        assert_eq!(confirmation.reference.len(), 13);
        assert_eq!(confirmation.amount, 4000);
    }

    #[test]
    fn test_reference_is_stable_for_same_input() {
        assert_eq!(
            payment_reference("Hoop Dreams", 1_700_000_000),
            payment_reference("Hoop Dreams", 1_700_000_000)
        );
        assert_ne!(
            payment_reference("Hoop Dreams", 1_700_000_000),
            payment_reference("Hoop Dreams", 1_700_000_001)
        );
    }

    #[test]
    fn test_redirect_delay() {
        assert_eq!(PAYMENT_REDIRECT_DELAY.as_secs(), 3);
    }
}
