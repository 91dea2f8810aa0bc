//! Enrollment service
//!
//! Glue between a [`SubmissionStore`] and the pure workflow core: derive a
//! user's progress report, and validate then persist state changes.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{
    apply_state_transition, get_next_states, get_state_config, get_state_progress,
    TransitionResult,
};
use crate::errors::{BonusTrackError, Result};
use crate::schemas::{Bonus, BonusState, Submission, SubmissionStatus};
use crate::store::SubmissionStore;

/// Derived view of one user's progress on one bonus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub bonus_id: String,
    pub user_id: String,
    pub state: BonusState,
    pub label: &'static str,
    pub progress: u8,
    pub status: Option<SubmissionStatus>,
    pub next_states: Vec<BonusState>,
}

/// Build the report for a submission under its bonus's workflow.
pub fn build_report(bonus: &Bonus, submission: &Submission) -> ProgressReport {
    let allowed = Some(bonus.allowed_states.as_slice());
    ProgressReport {
        bonus_id: submission.bonus_id.clone(),
        user_id: submission.user_id.clone(),
        state: submission.state,
        label: get_state_config(submission.state).label,
        progress: get_state_progress(submission.state, allowed),
        status: submission.status,
        next_states: get_next_states(submission.state, allowed),
    }
}

/// Tracks users through bonus workflows on top of a store
#[derive(Debug)]
pub struct Enrollment<S: SubmissionStore> {
    store: S,
}

impl<S: SubmissionStore> Enrollment<S> {
    pub fn new(store: S) -> Self {
        Enrollment { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Report a user's progress. Users without a record are `not_started`.
    ///
    /// # Errors
    /// * `NotFound` - If the bonus does not exist
    pub fn progress(&self, bonus_id: &str, user_id: &str) -> Result<ProgressReport> {
        let bonus = self.store.load_bonus(bonus_id)?;
        let submission = self
            .store
            .load_submission(bonus_id, user_id)?
            .unwrap_or_else(|| Submission::new(bonus_id, user_id));
        Ok(build_report(&bonus, &submission))
    }

    /// Reports for every user with a record on this bonus.
    pub fn progress_all(&self, bonus_id: &str) -> Result<Vec<ProgressReport>> {
        let bonus = self.store.load_bonus(bonus_id)?;
        Ok(self
            .store
            .list_submissions(bonus_id)?
            .iter()
            .map(|s| build_report(&bonus, s))
            .collect())
    }

    /// Move a user to `new_state` and persist the result.
    ///
    /// Without `force` the move must be legal under the bonus's workflow and
    /// the bonus must be active. `force` skips both checks for administrator
    /// corrections. A user with no record who is set to `not_started` gets no
    /// record.
    ///
    /// # Errors
    /// * `NotFound` - If the bonus does not exist
    /// * `StateTransition` - If the move is refused
    pub fn set_state(
        &self,
        bonus_id: &str,
        user_id: &str,
        new_state: BonusState,
        force: bool,
        notes: Option<String>,
    ) -> Result<Submission> {
        let bonus = self.store.load_bonus(bonus_id)?;
        let existing = self.store.load_submission(bonus_id, user_id)?;
        let is_new = existing.is_none();
        let current = existing.unwrap_or_else(|| Submission::new(bonus_id, user_id));

        if !bonus.active && !force {
            return Err(BonusTrackError::StateTransition(format!(
                "Bonus '{}' is not active",
                bonus.id
            )));
        }

        if is_new && new_state == BonusState::NotStarted {
            debug!(bonus_id, user_id, "user has no record; nothing to reset");
            return Ok(current);
        }

        let mut next = if force {
            warn!(
                bonus_id,
                user_id,
                from = %current.state,
                to = %new_state,
                "forcing state change"
            );
            current.clone().with_state(new_state)
        } else {
            match apply_state_transition(&current, new_state, &bonus.allowed_states) {
                TransitionResult::Success { next_submission } => next_submission,
                TransitionResult::Error { error } => {
                    return Err(BonusTrackError::StateTransition(error));
                }
            }
        };

        if notes.is_some() {
            next = next.with_notes(notes);
        }

        self.store.save_submission(&next)?;
        info!(
            bonus_id,
            user_id,
            from = %current.state,
            to = %next.state,
            "state changed"
        );
        Ok(next)
    }
}
