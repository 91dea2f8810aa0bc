//! State catalog
//!
//! Immutable display and mapping metadata for every bonus state. The table is
//! laid out in `BonusState` declaration order so lookup is a plain index.

use serde::Serialize;

use crate::schemas::{BonusState, Boundary, StateKind, SubmissionStatus};

/// Catalog entry for one state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateConfig {
    pub state: BonusState,
    pub label: &'static str,
    pub short_label: &'static str,
    pub description: &'static str,
    /// Empty for states the user never sees
    pub user_label: &'static str,
    pub user_description: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    /// Sort weight for display only
    pub order: u16,
    pub kind: StateKind,
    /// `None` means no submission record should exist yet
    pub submission_status: Option<SubmissionStatus>,
    pub user_visible: bool,
}

impl StateConfig {
    pub fn is_step(&self) -> bool {
        self.kind.is_step()
    }

    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }
}

/// Picker entry for choosing a bonus's workflow states
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: BonusState,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

#[allow(clippy::too_many_arguments)]
const fn step(
    state: BonusState,
    label: &'static str,
    short_label: &'static str,
    description: &'static str,
    user_label: &'static str,
    user_description: &'static str,
    emoji: &'static str,
    color: &'static str,
    order: u16,
) -> StateConfig {
    StateConfig {
        state,
        label,
        short_label,
        description,
        user_label,
        user_description,
        emoji,
        color,
        order,
        kind: StateKind::ProgressStep,
        submission_status: Some(SubmissionStatus::Pending),
        user_visible: true,
    }
}

const fn legacy_step(
    state: BonusState,
    label: &'static str,
    short_label: &'static str,
    order: u16,
) -> StateConfig {
    step(
        state,
        label,
        short_label,
        "Generic workflow step",
        label,
        "Keep going, you're making progress",
        "🔹",
        "slate",
        order,
    )
}

#[allow(clippy::too_many_arguments)]
const fn special(
    state: BonusState,
    label: &'static str,
    description: &'static str,
    user_label: &'static str,
    user_description: &'static str,
    emoji: &'static str,
    color: &'static str,
    order: u16,
    status: SubmissionStatus,
    user_visible: bool,
) -> StateConfig {
    StateConfig {
        state,
        label,
        short_label: label,
        description,
        user_label,
        user_description,
        emoji,
        color,
        order,
        kind: StateKind::Special,
        submission_status: Some(status),
        user_visible,
    }
}

static CATALOG: [StateConfig; 21] = [
    StateConfig {
        state: BonusState::NotStarted,
        label: "Not Started",
        short_label: "New",
        description: "User has not started this bonus",
        user_label: "Not Started",
        user_description: "Start this bonus to track your progress",
        emoji: "⚪",
        color: "gray",
        order: 0,
        kind: StateKind::Boundary(Boundary::Start),
        submission_status: None,
        user_visible: true,
    },
    step(
        BonusState::Interested,
        "Interested",
        "Interested",
        "User is interested in this bonus",
        "Interested",
        "You've saved this bonus for later",
        "👀",
        "sky",
        5,
    ),
    step(
        BonusState::InProgress,
        "In Progress",
        "Started",
        "User has started working on the requirements",
        "In Progress",
        "You're working on this bonus",
        "🚀",
        "blue",
        25,
    ),
    step(
        BonusState::WaitingVerification,
        "Waiting for Verification",
        "Verifying",
        "Account opened, waiting for identity or account verification",
        "Verifying",
        "Your account is being verified",
        "🔍",
        "indigo",
        40,
    ),
    step(
        BonusState::WaitingDeposit,
        "Waiting for Deposit",
        "Deposit",
        "Waiting for the qualifying deposit to post",
        "Deposit Pending",
        "Make the qualifying deposit to continue",
        "💵",
        "violet",
        50,
    ),
    step(
        BonusState::WaitingPayment,
        "Waiting for Payment",
        "Payout",
        "Requirements met, waiting for the bonus to be paid out",
        "Payout Pending",
        "You're all set, the bonus payout is on its way",
        "⏳",
        "amber",
        75,
    ),
    legacy_step(BonusState::Step1, "Step 1", "S1", 10),
    legacy_step(BonusState::Step2, "Step 2", "S2", 20),
    legacy_step(BonusState::Step3, "Step 3", "S3", 30),
    legacy_step(BonusState::Step4, "Step 4", "S4", 41),
    legacy_step(BonusState::Step5, "Step 5", "S5", 51),
    legacy_step(BonusState::Step6, "Step 6", "S6", 60),
    legacy_step(BonusState::Step7, "Step 7", "S7", 70),
    legacy_step(BonusState::Step8, "Step 8", "S8", 80),
    legacy_step(BonusState::Step9, "Step 9", "S9", 90),
    legacy_step(BonusState::Step10, "Step 10", "S10", 95),
    StateConfig {
        state: BonusState::Completed,
        label: "Completed",
        short_label: "Done",
        description: "Bonus received and verified",
        user_label: "Completed",
        user_description: "Congratulations, you earned this bonus",
        emoji: "✅",
        color: "green",
        order: 100,
        kind: StateKind::Boundary(Boundary::Complete),
        submission_status: Some(SubmissionStatus::Approved),
        user_visible: true,
    },
    special(
        BonusState::Rejected,
        "Rejected",
        "Submission was reviewed and rejected",
        "Rejected",
        "Your submission was not approved",
        "❌",
        "red",
        200,
        SubmissionStatus::Rejected,
        true,
    ),
    special(
        BonusState::Hidden,
        "Hidden",
        "Bonus hidden from this user",
        "",
        "",
        "🙈",
        "zinc",
        210,
        SubmissionStatus::Hidden,
        false,
    ),
    special(
        BonusState::Blocked,
        "Blocked",
        "User is not eligible for this bonus",
        "",
        "",
        "⛔",
        "rose",
        220,
        SubmissionStatus::Blocked,
        false,
    ),
    special(
        BonusState::UserDeclined,
        "User Declined",
        "User chose not to pursue this bonus",
        "",
        "",
        "🚫",
        "stone",
        230,
        SubmissionStatus::UserDeclined,
        false,
    ),
];

/// Look up the catalog entry for a state.
pub fn get_state_config(state: BonusState) -> &'static StateConfig {
    &CATALOG[state.index()]
}

/// Look up a catalog entry by persisted token.
///
/// Unrecognised tokens resolve to the `not_started` entry. This is a safe
/// default for display, not a validity check.
pub fn get_state_config_by_id(id: &str) -> &'static StateConfig {
    let state = id.parse().unwrap_or(BonusState::NotStarted);
    get_state_config(state)
}

/// External status a state maps to; `None` for `not_started`.
pub fn get_submission_status_for_state(state: BonusState) -> Option<SubmissionStatus> {
    get_state_config(state).submission_status
}

/// Status for a persisted token, defaulting to `pending` for anything that
/// does not map to a record-less state.
pub fn get_submission_status_for_id(id: &str) -> Option<SubmissionStatus> {
    let config = get_state_config_by_id(id);
    match config.kind {
        StateKind::Boundary(Boundary::Start) => None,
        _ => Some(config.submission_status.unwrap_or(SubmissionStatus::Pending)),
    }
}

/// All catalog entries sorted by display order.
pub fn get_all_state_configs() -> Vec<&'static StateConfig> {
    let mut configs: Vec<&'static StateConfig> = CATALOG.iter().collect();
    configs.sort_by_key(|c| c.order);
    configs
}

/// States an administrator can pick for a bonus workflow, sorted by order.
///
/// Only progress steps and `completed`; `not_started` is implicit and the
/// special states are reachable from every workflow.
pub fn get_states_for_filter() -> Vec<FilterOption> {
    get_all_state_configs()
        .into_iter()
        .filter(|c| c.is_step() || c.state == BonusState::Completed)
        .map(|c| FilterOption {
            value: c.state,
            label: c.label,
            emoji: c.emoji,
            color: c.color,
        })
        .collect()
}
