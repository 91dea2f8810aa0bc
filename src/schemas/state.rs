//! Bonus state vocabulary
//!
//! The closed set of points a user can occupy in a bonus enrollment.

use serde::{Deserialize, Serialize};

/// Progress state of a user on one bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusState {
    /// Default state, always 0%
    NotStarted,
    /// User has shown interest
    Interested,
    /// User is working through the requirements
    InProgress,
    /// Waiting on account verification
    WaitingVerification,
    /// Waiting on the qualifying deposit
    WaitingDeposit,
    /// Waiting on the bonus payout
    WaitingPayment,
    #[serde(rename = "step_1")]
    Step1,
    #[serde(rename = "step_2")]
    Step2,
    #[serde(rename = "step_3")]
    Step3,
    #[serde(rename = "step_4")]
    Step4,
    #[serde(rename = "step_5")]
    Step5,
    #[serde(rename = "step_6")]
    Step6,
    #[serde(rename = "step_7")]
    Step7,
    #[serde(rename = "step_8")]
    Step8,
    #[serde(rename = "step_9")]
    Step9,
    #[serde(rename = "step_10")]
    Step10,
    /// Bonus received, always 100%
    Completed,
    /// Submission refused by an administrator
    Rejected,
    /// Hidden from the user
    Hidden,
    /// User barred from this bonus
    Blocked,
    /// User opted out
    UserDeclined,
}

/// Which end of the workflow a boundary state sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Start,
    Complete,
}

/// Structural role of a state within a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// `not_started` or `completed`
    Boundary(Boundary),
    /// Ordinary intermediate step counted in progress
    ProgressStep,
    /// Out-of-band state, never counted and always reachable
    Special,
}

impl StateKind {
    pub fn is_step(self) -> bool {
        matches!(self, StateKind::ProgressStep)
    }

    pub fn is_special(self) -> bool {
        matches!(self, StateKind::Special)
    }
}

impl BonusState {
    /// Every state, in declaration order
    pub const ALL: [BonusState; 21] = [
        BonusState::NotStarted,
        BonusState::Interested,
        BonusState::InProgress,
        BonusState::WaitingVerification,
        BonusState::WaitingDeposit,
        BonusState::WaitingPayment,
        BonusState::Step1,
        BonusState::Step2,
        BonusState::Step3,
        BonusState::Step4,
        BonusState::Step5,
        BonusState::Step6,
        BonusState::Step7,
        BonusState::Step8,
        BonusState::Step9,
        BonusState::Step10,
        BonusState::Completed,
        BonusState::Rejected,
        BonusState::Hidden,
        BonusState::Blocked,
        BonusState::UserDeclined,
    ];

    /// The out-of-band states, always legal transition targets
    pub const SPECIAL: [BonusState; 4] = [
        BonusState::Rejected,
        BonusState::Hidden,
        BonusState::Blocked,
        BonusState::UserDeclined,
    ];

    /// Returns the persisted token for this state.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BonusState::NotStarted => "not_started",
            BonusState::Interested => "interested",
            BonusState::InProgress => "in_progress",
            BonusState::WaitingVerification => "waiting_verification",
            BonusState::WaitingDeposit => "waiting_deposit",
            BonusState::WaitingPayment => "waiting_payment",
            BonusState::Step1 => "step_1",
            BonusState::Step2 => "step_2",
            BonusState::Step3 => "step_3",
            BonusState::Step4 => "step_4",
            BonusState::Step5 => "step_5",
            BonusState::Step6 => "step_6",
            BonusState::Step7 => "step_7",
            BonusState::Step8 => "step_8",
            BonusState::Step9 => "step_9",
            BonusState::Step10 => "step_10",
            BonusState::Completed => "completed",
            BonusState::Rejected => "rejected",
            BonusState::Hidden => "hidden",
            BonusState::Blocked => "blocked",
            BonusState::UserDeclined => "user_declined",
        }
    }

    /// Structural role of this state.
    pub const fn kind(&self) -> StateKind {
        match self {
            BonusState::NotStarted => StateKind::Boundary(Boundary::Start),
            BonusState::Completed => StateKind::Boundary(Boundary::Complete),
            BonusState::Rejected
            | BonusState::Hidden
            | BonusState::Blocked
            | BonusState::UserDeclined => StateKind::Special,
            _ => StateKind::ProgressStep,
        }
    }

    pub fn is_special(&self) -> bool {
        self.kind().is_special()
    }

    pub fn is_step(&self) -> bool {
        self.kind().is_step()
    }

    /// Whether this state ends a workflow (`completed`, `rejected` or `hidden`).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BonusState::Completed | BonusState::Rejected | BonusState::Hidden
        )
    }

    /// Generic `step_N` states kept for bonuses configured before the named steps existed
    pub fn is_legacy_step(&self) -> bool {
        matches!(
            self,
            BonusState::Step1
                | BonusState::Step2
                | BonusState::Step3
                | BonusState::Step4
                | BonusState::Step5
                | BonusState::Step6
                | BonusState::Step7
                | BonusState::Step8
                | BonusState::Step9
                | BonusState::Step10
        )
    }

    /// Index into tables laid out in declaration order.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for BonusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BonusState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        BonusState::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == token)
            .ok_or_else(|| format!("Unknown bonus state: {}", s.trim()))
    }
}
