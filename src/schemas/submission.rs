//! Submission schema - a user's record for one bonus

use serde::{Deserialize, Serialize};

use super::BonusState;

/// External status stored on a submission record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
    Blocked,
    UserDeclined,
    Hidden,
}

impl SubmissionStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
            SubmissionStatus::Blocked => "blocked",
            SubmissionStatus::UserDeclined => "user_declined",
            SubmissionStatus::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-(user, bonus) progress record owned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    pub bonus_id: String,

    pub user_id: String,

    /// Current workflow state
    pub state: BonusState,

    /// Status mirrored from the state; null after a reset to not_started
    #[serde(default)]
    pub status: Option<SubmissionStatus>,

    /// Free-form reviewer or user notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// ISO 8601 creation timestamp
    pub created_at: String,

    /// ISO 8601 last update timestamp
    pub updated_at: String,
}

impl Submission {
    /// Create a record in the `not_started` state
    pub fn new(bonus_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Submission {
            schema_version: 1,
            bonus_id: bonus_id.into(),
            user_id: user_id.into(),
            state: BonusState::NotStarted,
            status: None,
            notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Return a new Submission in `state`, with the status it maps to
    pub fn with_state(mut self, state: BonusState) -> Self {
        self.state = state;
        self.status = crate::domain::get_submission_status_for_state(state);
        self.touch_returning()
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self.touch_returning()
    }

    fn touch_returning(mut self) -> Self {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&SubmissionStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&SubmissionStatus::Approved).unwrap(), "\"approved\"");
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::UserDeclined).unwrap(),
            "\"user_declined\""
        );
        assert_eq!(SubmissionStatus::Hidden.to_string(), "hidden");
    }

    #[test]
    fn test_new_submission_defaults() {
        let sub = Submission::new("chime", "user-1");
        assert_eq!(sub.state, BonusState::NotStarted);
        assert!(sub.status.is_none());
        assert_eq!(sub.created_at, sub.updated_at);
    }

    #[test]
    fn test_with_state_maps_status() {
        let sub = Submission::new("chime", "user-1");

        let started = sub.clone().with_state(BonusState::Step1);
        assert_eq!(started.status, Some(SubmissionStatus::Pending));
        assert_eq!(sub.state, BonusState::NotStarted); // Original unchanged
        assert!(started.updated_at >= sub.updated_at);

        let done = started.clone().with_state(BonusState::Completed);
        assert_eq!(done.status, Some(SubmissionStatus::Approved));

        let reset = done.with_state(BonusState::NotStarted);
        assert!(reset.status.is_none());
    }

    #[test]
    fn test_submission_json_round_trip() {
        let sub = Submission::new("chime", "user-1")
            .with_state(BonusState::WaitingDeposit)
            .with_notes(Some("deposit scheduled".to_string()));

        let json = serde_json::to_string_pretty(&sub).unwrap();
        let parsed: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sub);
        assert!(json.contains("\"waiting_deposit\""));
        assert!(json.contains("\"pending\""));
    }

    #[test]
    fn test_submission_skips_none_notes() {
        let json = serde_json::to_string(&Submission::new("chime", "user-1")).unwrap();
        assert!(!json.contains("\"notes\":"));
        assert!(json.contains("\"status\":null"));
    }
}
