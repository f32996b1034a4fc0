//! Form State Manager: the single source of truth for a draft registration.
//!
//! Every operation here is synchronous and local. Network calls happen in
//! [`step`](super::step) and [`pipeline`](super::pipeline), which read and
//! write this state.

use tokio::sync::watch;

use super::{
    context::SelectionContext,
    draft::{PlayerDraft, PlayerUpdate, RegistrationDraft},
    step::Step,
};
use crate::cli::types::ids::{ParticipationId, TeamId};
use crate::sports::{sport_config, SportConfig, Tournament};
use crate::Sport;

#[cfg(test)]
mod tests;

/// Terminal result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Success { message: String },
    Error { message: String },
}

impl RegistrationOutcome {
    pub fn message(&self) -> &str {
        match self {
            RegistrationOutcome::Success { message } | RegistrationOutcome::Error { message } => {
                message
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationOutcome::Success { .. })
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    draft: RegistrationDraft,
    outcome: Option<RegistrationOutcome>,
    is_submitting: bool,
    selection: Option<watch::Receiver<Option<Sport>>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a stored draft.
    pub fn from_draft(draft: RegistrationDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    /// Subscribe to an externally held sport selection.
    ///
    /// The current selection is applied right away; later changes are picked
    /// up by [`sync_selection`](Self::sync_selection).
    pub fn with_context(mut self, context: &SelectionContext) -> Self {
        let mut rx = context.subscribe();
        let current = *rx.borrow_and_update();
        self.selection = Some(rx);
        if let Some(sport) = current {
            if self.draft.sport.is_none() {
                self.set_selected_sport(sport);
            }
        }
        self
    }

    /// Apply the context's sport if it changed since the last sync.
    ///
    /// Returns true when the selected sport was updated.
    pub fn sync_selection(&mut self) -> bool {
        let changed = match self.selection.as_mut() {
            Some(rx) if matches!(rx.has_changed(), Ok(true)) => *rx.borrow_and_update(),
            _ => None,
        };
        match changed {
            Some(sport) if self.draft.sport != Some(sport) => {
                self.set_selected_sport(sport);
                true
            }
            _ => false,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn into_draft(self) -> RegistrationDraft {
        self.draft
    }

    pub fn outcome(&self) -> Option<&RegistrationOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn step(&self) -> Step {
        self.draft.step
    }

    pub fn selected_sport(&self) -> Option<Sport> {
        self.draft.sport
    }

    pub fn sport_config(&self) -> Option<&'static SportConfig> {
        self.draft.sport.map(sport_config)
    }

    pub fn team_name(&self) -> &str {
        &self.draft.team_name
    }

    /// The selected tournament, if it belongs to the selected sport.
    pub fn selected_tournament(&self) -> Option<&'static Tournament> {
        let id = self.draft.tournament_id.as_deref()?;
        self.sport_config()?.tournament(id)
    }

    pub fn players(&self) -> &[PlayerDraft] {
        &self.draft.players
    }

    pub fn accepted_terms(&self) -> bool {
        self.draft.accepted_terms
    }

    pub fn is_full(&self) -> bool {
        self.sport_config()
            .map(|c| self.draft.players.len() >= c.max_players)
            .unwrap_or(false)
    }

    /// Switching sport invalidates the tournament and any roster overflow.
    pub fn set_selected_sport(&mut self, sport: Sport) {
        if self.draft.sport == Some(sport) {
            return;
        }
        let config = sport_config(sport);

        self.draft.sport = Some(sport);
        self.draft.tournament_id = None;
        self.draft.players.truncate(config.max_players);
        for player in &mut self.draft.players {
            player.sport_type = Some(sport);
        }
        self.outcome = None;
        self.team_info_changed();
    }

    pub fn set_team_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.draft.team_name == name {
            return;
        }
        self.draft.team_name = name;
        for player in &mut self.draft.players {
            player.team_name = self.draft.team_name.clone();
        }
        self.team_info_changed();
    }

    pub fn set_selected_tournament(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.draft.tournament_id.as_deref() == Some(id.as_str()) {
            return;
        }
        self.draft.tournament_id = Some(id);
        self.team_info_changed();
    }

    /// Team info edited past the first step has to pass `advance` again.
    /// Existing teams keep their step; their name is already registered.
    fn team_info_changed(&mut self) {
        if self.draft.step == Step::Players && !self.draft.is_existing_team() {
            self.draft.step = Step::TeamInfo;
        }
    }

    /// Append an empty player. Does nothing without a sport or at the roster cap.
    pub fn add_player(&mut self) {
        let Some(config) = self.sport_config() else {
            return;
        };
        if self.draft.players.len() >= config.max_players {
            return;
        }
        self.draft.players.push(PlayerDraft {
            team_name: self.draft.team_name.clone(),
            sport_type: Some(config.sport),
            ..PlayerDraft::default()
        });
    }

    /// Remove the player at `index` if there is one.
    pub fn remove_player(&mut self, index: usize) {
        if index < self.draft.players.len() {
            self.draft.players.remove(index);
        }
    }

    pub fn update_player(&mut self, index: usize, update: PlayerUpdate) {
        if let Some(player) = self.draft.players.get_mut(index) {
            player.apply(update);
        }
    }

    pub fn set_accepted_terms(&mut self, accepted: bool) {
        self.draft.accepted_terms = accepted;
    }

    /// Point the form at an existing team so submission reuses it.
    pub fn set_existing_team(&mut self, team_id: TeamId, participation_id: ParticipationId) {
        self.draft.incoming_team_id = Some(team_id);
        self.draft.incoming_participation_id = Some(participation_id);
    }

    pub(crate) fn set_step(&mut self, step: Step) {
        self.draft.step = step;
    }

    pub(crate) fn begin_submit(&mut self) {
        self.is_submitting = true;
        self.outcome = None;
    }

    pub(crate) fn finish_submit(&mut self, outcome: RegistrationOutcome) {
        self.is_submitting = false;
        self.outcome = Some(outcome);
    }
}
