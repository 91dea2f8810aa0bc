//! Path resolution utilities for bonustrack
//!
//! Provides functions to locate the store root and construct paths
//! to the bonus and submission files inside it.

use std::path::{Path, PathBuf};

use crate::errors::{BonusTrackError, Result};

/// Name of the directory holding all tracker data
pub const STORE_DIR: &str = ".bonustrack";

/// Find the nearest directory containing a .bonustrack directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `StoreNotFound` - If no ancestor contains .bonustrack
pub fn find_store_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| BonusTrackError::StoreNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(STORE_DIR).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(BonusTrackError::StoreNotFound(format!(
                    "Could not find a {} directory; run `bonustrack init` first",
                    STORE_DIR
                )));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Check that an identifier is safe to use as a single path component.
///
/// # Errors
/// * `InvalidId` - unless the id is non-empty and only `[A-Za-z0-9_-]`
pub fn validate_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(BonusTrackError::InvalidId(format!(
            "'{}' must be non-empty and contain only letters, digits, '-' or '_'",
            id
        )))
    }
}

/// Get the path to the .bonustrack directory.
pub fn get_store_dir(root: &Path) -> PathBuf {
    root.join(STORE_DIR)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_store_dir(root).join("config.json")
}

pub fn get_bonuses_dir(root: &Path) -> PathBuf {
    get_store_dir(root).join("bonuses")
}

pub fn get_bonus_path(root: &Path, bonus_id: &str) -> PathBuf {
    get_bonuses_dir(root).join(format!("{}.json", bonus_id))
}

/// Get the directory holding every submission for one bonus.
pub fn get_submissions_dir(root: &Path, bonus_id: &str) -> PathBuf {
    get_store_dir(root).join("submissions").join(bonus_id)
}

pub fn get_submission_path(root: &Path, bonus_id: &str, user_id: &str) -> PathBuf {
    get_submissions_dir(root, bonus_id).join(format!("{}.json", user_id))
}
