//! Storage for bonuses and submissions
//!
//! The workflow core never touches storage. Callers read a submission and its
//! bonus, compute with `domain`, then write back through a [`SubmissionStore`].
//! Writes are last-write-wins; nothing here locks across read-compute-write.

mod file;

pub use file::FileStore;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::errors::Result;
use crate::schemas::{Bonus, BonusState, Submission, SubmissionStatus};

/// Notification emitted after a submission is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionChange {
    pub bonus_id: String,
    pub user_id: String,
    /// State before the write; `None` when the record was created
    pub previous: Option<BonusState>,
    pub current: BonusState,
    pub status: Option<SubmissionStatus>,
}

/// Persistence contract for bonus configuration and per-(user, bonus) records
pub trait SubmissionStore {
    /// # Errors
    /// * `NotFound` - If no bonus with this id exists
    fn load_bonus(&self, bonus_id: &str) -> Result<Bonus>;

    fn save_bonus(&self, bonus: &Bonus) -> Result<()>;

    fn list_bonuses(&self) -> Result<Vec<Bonus>>;

    /// Returns `Ok(None)` when the user has no record for this bonus yet.
    fn load_submission(&self, bonus_id: &str, user_id: &str) -> Result<Option<Submission>>;

    /// Write a submission and notify subscribers.
    fn save_submission(&self, submission: &Submission) -> Result<()>;

    fn list_submissions(&self, bonus_id: &str) -> Result<Vec<Submission>>;

    /// Receive a [`SubmissionChange`] for every subsequent save.
    fn subscribe(&self) -> broadcast::Receiver<SubmissionChange>;
}
