//! Schema types for bonustrack
//!
//! Records exchanged with the store, plus the state vocabulary they share.

mod bonus;
mod config;
mod state;
mod submission;

pub use bonus::Bonus;
pub use config::Config;
pub use state::{BonusState, Boundary, StateKind};
pub use submission::{Submission, SubmissionStatus};
