//! JSON-file store under `.bonustrack/`

use std::path::{Path, PathBuf};

use tokio::sync::broadcast;
use tracing::debug;

use crate::errors::{BonusTrackError, Result};
use crate::fs;
use crate::schemas::{Bonus, Submission};

use super::{SubmissionChange, SubmissionStore};

/// Store backed by one JSON file per bonus and per submission
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    changes: broadcast::Sender<SubmissionChange>,
}

impl FileStore {
    /// Open the store rooted at `root` (the directory containing `.bonustrack`).
    ///
    /// # Errors
    /// * `StoreNotFound` - If `root` has no .bonustrack directory
    /// * `ConfigError` - If `capacity` is zero
    pub fn open(root: impl Into<PathBuf>, capacity: usize) -> Result<Self> {
        let root = root.into();
        if !fs::get_store_dir(&root).is_dir() {
            return Err(BonusTrackError::StoreNotFound(format!(
                "No {} directory in {}",
                fs::STORE_DIR,
                root.display()
            )));
        }
        if capacity == 0 {
            return Err(BonusTrackError::ConfigError(
                "notification capacity must be at least 1".to_string(),
            ));
        }
        let (changes, _) = broadcast::channel(capacity);
        Ok(FileStore { root, changes })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Name the record on I/O failures; other errors already carry their subject.
fn with_context<T>(result: Result<T>, context: impl FnOnce() -> String) -> Result<T> {
    result.map_err(|e| match e {
        BonusTrackError::Io(io) => BonusTrackError::wrap(io, context()),
        other => other,
    })
}

impl SubmissionStore for FileStore {
    fn load_bonus(&self, bonus_id: &str) -> Result<Bonus> {
        fs::validate_id(bonus_id)?;
        fs::read_bonus(&self.root, bonus_id)
    }

    fn save_bonus(&self, bonus: &Bonus) -> Result<()> {
        fs::validate_id(&bonus.id)?;
        with_context(fs::write_bonus(&self.root, bonus), || {
            format!("Failed to save bonus '{}'", bonus.id)
        })
    }

    fn list_bonuses(&self) -> Result<Vec<Bonus>> {
        fs::read_bonuses(&self.root)
    }

    fn load_submission(&self, bonus_id: &str, user_id: &str) -> Result<Option<Submission>> {
        fs::validate_id(bonus_id)?;
        fs::validate_id(user_id)?;
        fs::read_submission(&self.root, bonus_id, user_id)
    }

    fn save_submission(&self, submission: &Submission) -> Result<()> {
        fs::validate_id(&submission.bonus_id)?;
        fs::validate_id(&submission.user_id)?;

        let context = || {
            format!(
                "Failed to save submission '{}/{}'",
                submission.bonus_id, submission.user_id
            )
        };
        let previous = with_context(
            fs::read_submission(&self.root, &submission.bonus_id, &submission.user_id),
            context,
        )?
        .map(|s| s.state);
        with_context(fs::write_submission(&self.root, submission), context)?;

        let change = SubmissionChange {
            bonus_id: submission.bonus_id.clone(),
            user_id: submission.user_id.clone(),
            previous,
            current: submission.state,
            status: submission.status,
        };
        // No subscribers is fine
        if self.changes.send(change).is_err() {
            debug!("no subscribers for submission change");
        }
        Ok(())
    }

    fn list_submissions(&self, bonus_id: &str) -> Result<Vec<Submission>> {
        fs::validate_id(bonus_id)?;
        fs::read_submissions(&self.root, bonus_id)
    }

    fn subscribe(&self) -> broadcast::Receiver<SubmissionChange> {
        self.changes.subscribe()
    }
}
