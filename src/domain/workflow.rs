//! Allowed-states lists
//!
//! A bonus's workflow is persisted as a comma-delimited string of state
//! tokens. It is parsed once at the boundary into [`WorkflowStates`], which
//! always starts from `not_started` and always reaches a terminal state.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{BonusTrackError, Result};
use crate::schemas::{BonusState, Config};

/// Persisted form of the minimal workflow
pub const DEFAULT_WORKFLOW: &str = "not_started,completed";

/// Normalized, ordered allowed-states list for one bonus.
///
/// Invariants:
/// - contains `not_started`
/// - contains at least one of `completed`, `rejected` or `hidden`
///
/// Duplicates supplied by the caller are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct WorkflowStates(Vec<BonusState>);

impl WorkflowStates {
    /// Build a list from arbitrary states, enforcing the invariants.
    pub fn new(states: Vec<BonusState>) -> Self {
        WorkflowStates(normalize(states))
    }

    pub fn as_slice(&self) -> &[BonusState] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, state: BonusState) -> bool {
        self.0.contains(&state)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BonusState> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<BonusState> {
        self.0
    }
}

impl Default for WorkflowStates {
    fn default() -> Self {
        WorkflowStates(vec![BonusState::NotStarted, BonusState::Completed])
    }
}

impl AsRef<[BonusState]> for WorkflowStates {
    fn as_ref(&self) -> &[BonusState] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a WorkflowStates {
    type Item = &'a BonusState;
    type IntoIter = std::slice::Iter<'a, BonusState>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for WorkflowStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&stringify_workflow_states(&self.0))
    }
}

impl From<String> for WorkflowStates {
    fn from(raw: String) -> Self {
        parse_workflow_states(raw.as_str())
    }
}

impl From<WorkflowStates> for String {
    fn from(states: WorkflowStates) -> Self {
        states.to_string()
    }
}

fn normalize(mut states: Vec<BonusState>) -> Vec<BonusState> {
    if !states.contains(&BonusState::NotStarted) {
        states.insert(0, BonusState::NotStarted);
    }
    if !states.iter().any(|s| s.is_terminal()) {
        states.push(BonusState::Completed);
    }
    states
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Parse a persisted workflow string.
///
/// Unknown tokens are dropped. A missing or blank input yields
/// `[not_started, completed]`.
pub fn parse_workflow_states<'a>(raw: impl Into<Option<&'a str>>) -> WorkflowStates {
    let Some(raw) = raw.into() else {
        return WorkflowStates::default();
    };

    let states = tokens(raw)
        .filter_map(|token| match token.parse::<BonusState>() {
            Ok(state) => Some(state),
            Err(_) => {
                warn!(token, "dropping unknown state from workflow");
                None
            }
        })
        .collect();

    WorkflowStates::new(states)
}

/// Parse a persisted workflow string, rejecting unknown tokens.
///
/// Tokens must match the persisted vocabulary exactly, so `STEP_1` is
/// rejected here even though the lenient parser accepts it.
///
/// # Errors
/// * `UnknownState` - naming the first token that is not a state
pub fn parse_workflow_states_strict(raw: &str) -> Result<WorkflowStates> {
    let states = tokens(raw)
        .map(|token| {
            BonusState::ALL
                .iter()
                .copied()
                .find(|state| state.as_str() == token)
                .ok_or_else(|| BonusTrackError::UnknownState(token.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(WorkflowStates::new(states))
}

/// Parse using the mode selected by `config.strict_workflow_parsing`.
pub fn parse_workflow_with_config(raw: &str, config: &Config) -> Result<WorkflowStates> {
    if config.strict_workflow_parsing {
        parse_workflow_states_strict(raw)
    } else {
        Ok(parse_workflow_states(raw))
    }
}

/// Join states into their persisted form.
///
/// An empty list serializes as the minimal workflow.
pub fn stringify_workflow_states(states: &[BonusState]) -> String {
    if states.is_empty() {
        return DEFAULT_WORKFLOW.to_string();
    }
    states
        .iter()
        .map(BonusState::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::BonusState::*;

    #[test]
    fn test_parse_adds_boundaries() {
        let parsed = parse_workflow_states("step_1,step_2");
        assert_eq!(parsed.as_slice(), &[NotStarted, Step1, Step2, Completed]);
    }

    #[test]
    fn test_parse_empty_and_missing() {
        assert_eq!(parse_workflow_states("").as_slice(), &[NotStarted, Completed]);
        assert_eq!(parse_workflow_states("  ,  ").as_slice(), &[NotStarted, Completed]);
        assert_eq!(parse_workflow_states(None::<&str>).as_slice(), &[NotStarted, Completed]);
    }

    #[test]
    fn test_parse_drops_unknown_tokens() {
        let parsed = parse_workflow_states("interested, bogus ,WAITING_DEPOSIT,step_99");
        assert_eq!(parsed.as_slice(), &[NotStarted, Interested, WaitingDeposit, Completed]);
    }

    #[test]
    fn test_parse_keeps_explicit_not_started_position() {
        let parsed = parse_workflow_states("step_1,not_started,completed");
        assert_eq!(parsed.as_slice(), &[Step1, NotStarted, Completed]);
    }

    #[test]
    fn test_parse_rejected_or_hidden_counts_as_terminal() {
        assert_eq!(
            parse_workflow_states("step_1,rejected").as_slice(),
            &[NotStarted, Step1, Rejected]
        );
        assert_eq!(
            parse_workflow_states("step_1,hidden").as_slice(),
            &[NotStarted, Step1, Hidden]
        );
        // blocked is special but not terminal
        assert_eq!(
            parse_workflow_states("step_1,blocked").as_slice(),
            &[NotStarted, Step1, Blocked, Completed]
        );
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let parsed = parse_workflow_states("step_1,step_1,completed");
        assert_eq!(parsed.as_slice(), &[NotStarted, Step1, Step1, Completed]);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = parse_workflow_states_strict("step_1,bogus,step_2").unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_STATE");
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_strict_parse_is_case_sensitive() {
        let err = parse_workflow_states_strict("step_1,WAITING_DEPOSIT").unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_STATE");
        assert!(err.to_string().contains("WAITING_DEPOSIT"));
        assert!(parse_workflow_states_strict(" step_1 , waiting_deposit ").is_ok());
    }

    #[test]
    fn test_strict_parse_accepts_valid_and_skips_empty_tokens() {
        let parsed = parse_workflow_states_strict("step_1,,step_2,").unwrap();
        assert_eq!(parsed.as_slice(), &[NotStarted, Step1, Step2, Completed]);
        assert_eq!(parse_workflow_states_strict("").unwrap(), WorkflowStates::default());
    }

    #[test]
    fn test_parse_with_config_mode() {
        let lenient = Config::default();
        let strict = Config {
            strict_workflow_parsing: true,
            ..Config::default()
        };
        assert!(parse_workflow_with_config("step_1,nope", &lenient).is_ok());
        assert!(parse_workflow_with_config("step_1,nope", &strict).is_err());
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify_workflow_states(&[NotStarted, Step1, Completed]), "not_started,step_1,completed");
        assert_eq!(stringify_workflow_states(&[]), DEFAULT_WORKFLOW);
    }

    #[test]
    fn test_round_trip() {
        let states = vec![NotStarted, Step1, Step2, Completed];
        let parsed = parse_workflow_states(stringify_workflow_states(&states).as_str());
        assert_eq!(parsed.into_vec(), states);
    }

    #[test]
    fn test_new_normalizes() {
        assert_eq!(WorkflowStates::new(vec![]), WorkflowStates::default());
        assert_eq!(
            WorkflowStates::new(vec![InProgress]).as_slice(),
            &[NotStarted, InProgress, Completed]
        );
    }

    #[test]
    fn test_serde_as_string() {
        let states = parse_workflow_states("interested,waiting_payment");
        let json = serde_json::to_string(&states).unwrap();
        assert_eq!(json, "\"not_started,interested,waiting_payment,completed\"");
        let back: WorkflowStates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, states);
    }
}
