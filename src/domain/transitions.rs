//! State transition logic
//!
//! Pure functions for applying state transitions to submissions.

use crate::schemas::{BonusState, Submission};

use super::states::can_transition_to;
use super::workflow::WorkflowStates;

/// Result of a state transition attempt
#[derive(Debug)]
pub enum TransitionResult {
    /// Successful transition with the new submission state
    Success {
        /// The submission with updated state, status and timestamp
        next_submission: Submission,
    },
    /// Failed transition with error message
    Error {
        /// Description of why the transition failed
        error: String,
    },
}

impl TransitionResult {
    /// Check if the transition was successful
    pub fn is_success(&self) -> bool {
        matches!(self, TransitionResult::Success { .. })
    }

    /// Check if the transition failed
    pub fn is_error(&self) -> bool {
        matches!(self, TransitionResult::Error { .. })
    }

    /// Get the next submission if the transition was successful
    pub fn submission(self) -> Option<Submission> {
        match self {
            TransitionResult::Success { next_submission } => Some(next_submission),
            TransitionResult::Error { .. } => None,
        }
    }

    /// Get the error message if the transition failed
    pub fn error(self) -> Option<String> {
        match self {
            TransitionResult::Success { .. } => None,
            TransitionResult::Error { error } => Some(error),
        }
    }
}

/// Pure function that moves a submission to `new_state`.
///
/// This function:
/// - Never mutates the input submission
/// - Rejects moves outside the workflow's reachable set
/// - Rejects moving to the state the submission is already in
/// - Returns a new Submission with state, status and updated_at refreshed
pub fn apply_state_transition(
    submission: &Submission,
    new_state: BonusState,
    allowed: &WorkflowStates,
) -> TransitionResult {
    if submission.state == new_state {
        return TransitionResult::Error {
            error: format!("Submission is already {}", new_state),
        };
    }

    if !can_transition_to(submission.state, new_state, Some(allowed.as_slice())) {
        return TransitionResult::Error {
            error: format!(
                "Cannot transition from {} to {} (workflow: {})",
                submission.state, new_state, allowed
            ),
        };
    }

    TransitionResult::Success {
        next_submission: submission.clone().with_state(new_state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_workflow_states;
    use crate::schemas::SubmissionStatus;

    fn make_submission(state: BonusState) -> Submission {
        Submission::new("chime", "user-1").with_state(state)
    }

    #[test]
    fn test_transition_forward_one_step() {
        let workflow = parse_workflow_states("step_1,step_2");
        let sub = make_submission(BonusState::Step1);

        let result = apply_state_transition(&sub, BonusState::Step2, &workflow);
        assert!(result.is_success());

        let next = result.submission().unwrap();
        assert_eq!(next.state, BonusState::Step2);
        assert_eq!(next.status, Some(SubmissionStatus::Pending));
    }

    #[test]
    fn test_transition_to_completed_approves() {
        let workflow = parse_workflow_states("step_1");
        let sub = make_submission(BonusState::Step1);

        let next = apply_state_transition(&sub, BonusState::Completed, &workflow)
            .submission()
            .unwrap();
        assert_eq!(next.status, Some(SubmissionStatus::Approved));
    }

    #[test]
    fn test_transition_backwards() {
        let workflow = parse_workflow_states("step_1,step_2,step_3");
        let sub = make_submission(BonusState::Step3);

        let result = apply_state_transition(&sub, BonusState::Step1, &workflow);
        assert!(result.is_success());
    }

    #[test]
    fn test_transition_skipping_ahead_fails() {
        let workflow = parse_workflow_states("step_1,step_2,step_3");
        let sub = make_submission(BonusState::Step1);

        let result = apply_state_transition(&sub, BonusState::Step3, &workflow);
        assert!(result.is_error());

        let error = result.error().unwrap();
        assert!(error.contains("step_1"));
        assert!(error.contains("step_3"));
    }

    #[test]
    fn test_transition_to_special_always_allowed() {
        let workflow = parse_workflow_states("step_1,step_2,step_3");
        let sub = make_submission(BonusState::NotStarted);

        for special in BonusState::SPECIAL {
            let next = apply_state_transition(&sub, special, &workflow).submission().unwrap();
            assert_eq!(next.state, special);
        }
    }

    #[test]
    fn test_transition_to_same_state_fails() {
        let workflow = parse_workflow_states("step_1");
        let sub = make_submission(BonusState::Step1);

        let result = apply_state_transition(&sub, BonusState::Step1, &workflow);
        assert!(result.error().unwrap().contains("already"));
    }

    #[test]
    fn test_reset_clears_status() {
        let workflow = parse_workflow_states("step_1");
        let sub = make_submission(BonusState::Step1);

        let next = apply_state_transition(&sub, BonusState::NotStarted, &workflow)
            .submission()
            .unwrap();
        assert_eq!(next.state, BonusState::NotStarted);
        assert!(next.status.is_none());
    }

    #[test]
    fn test_transition_does_not_mutate_original() {
        let workflow = parse_workflow_states("step_1,step_2");
        let sub = make_submission(BonusState::Step1);
        let original = sub.clone();

        let _ = apply_state_transition(&sub, BonusState::Step2, &workflow);
        assert_eq!(sub, original);
    }
}
