//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{BonusTrackError, Result};
use crate::schemas::{Bonus, Config, Submission};

use super::paths::{get_bonus_path, get_bonuses_dir, get_config_path, get_submission_path, get_submissions_dir};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BonusTrackError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            BonusTrackError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        BonusTrackError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| BonusTrackError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read every `*.json` file in a directory, sorted by file name.
///
/// A missing directory reads as empty.
fn read_json_dir<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    paths.iter().map(|p| read_json(p)).collect()
}

/// Read the config.json file, or defaults if it doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}

/// Read a bonus definition.
///
/// # Errors
/// * `NotFound` - If no bonus with this id exists
pub fn read_bonus(root: &Path, bonus_id: &str) -> Result<Bonus> {
    read_json(&get_bonus_path(root, bonus_id)).map_err(|e| match e {
        BonusTrackError::FileNotFound(_) => {
            BonusTrackError::NotFound(format!("Bonus '{}' does not exist", bonus_id))
        }
        other => other,
    })
}

pub fn write_bonus(root: &Path, bonus: &Bonus) -> Result<()> {
    write_json(&get_bonus_path(root, &bonus.id), bonus)
}

pub fn read_bonuses(root: &Path) -> Result<Vec<Bonus>> {
    read_json_dir(&get_bonuses_dir(root))
}

/// Read a user's submission for a bonus, if one has been created.
pub fn read_submission(root: &Path, bonus_id: &str, user_id: &str) -> Result<Option<Submission>> {
    match read_json(&get_submission_path(root, bonus_id, user_id)) {
        Ok(submission) => Ok(Some(submission)),
        Err(BonusTrackError::FileNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn write_submission(root: &Path, submission: &Submission) -> Result<()> {
    let path = get_submission_path(root, &submission.bonus_id, &submission.user_id);
    write_json(&path, submission)
}

pub fn read_submissions(root: &Path, bonus_id: &str) -> Result<Vec<Submission>> {
    read_json_dir(&get_submissions_dir(root, bonus_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_workflow_states;
    use crate::schemas::BonusState;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<Submission> = read_json(&path);
        assert!(matches!(result.unwrap_err(), BonusTrackError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<Submission> = read_json(&path);
        assert!(matches!(result.unwrap_err(), BonusTrackError::InvalidJson(_)));
    }

    #[test]
    fn test_write_json_creates_parent_dirs_and_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deep").join("nested").join("sub.json");

        write_json(&path, &Submission::new("chime", "u1")).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_read_config_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = read_config(temp.path()).unwrap();
        assert!(!config.strict_workflow_parsing);
    }

    #[test]
    fn test_read_write_bonus() {
        let temp = TempDir::new().unwrap();
        let bonus = Bonus::new("chime", "Chime", parse_workflow_states("step_1,step_2"));

        write_bonus(temp.path(), &bonus).unwrap();
        let read = read_bonus(temp.path(), "chime").unwrap();
        assert_eq!(read, bonus);
    }

    #[test]
    fn test_read_missing_bonus_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = read_bonus(temp.path(), "nope").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_read_write_submission() {
        let temp = TempDir::new().unwrap();
        assert!(read_submission(temp.path(), "chime", "u1").unwrap().is_none());

        let sub = Submission::new("chime", "u1").with_state(BonusState::Step1);
        write_submission(temp.path(), &sub).unwrap();

        let read = read_submission(temp.path(), "chime", "u1").unwrap().unwrap();
        assert_eq!(read, sub);
    }

    #[test]
    fn test_read_submissions_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        for user in ["u2", "u1", "u3"] {
            write_submission(temp.path(), &Submission::new("chime", user).with_state(BonusState::Step1))
                .unwrap();
        }
        fs::write(get_submissions_dir(temp.path(), "chime").join("notes.txt"), "x").unwrap();

        let subs = read_submissions(temp.path(), "chime").unwrap();
        let users: Vec<&str> = subs.iter().map(|s| s.user_id.as_str()).collect();
        assert_eq!(users, vec!["u1", "u2", "u3"]);

        assert!(read_submissions(temp.path(), "other").unwrap().is_empty());
    }
}
