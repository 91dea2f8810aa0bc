//! CLI command implementations

pub mod bonus;
pub mod init;
pub mod next;
pub mod parse;
pub mod progress;
pub mod set;
pub mod states;
pub mod status;
pub mod submissions;

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::domain::{parse_workflow_with_config, WorkflowStates};
use crate::errors::{BonusTrackError, Result};
use crate::fs::{find_store_root, resolve_cwd};
use crate::schemas::{BonusState, Config};
use crate::store::FileStore;

/// Locate the store above `cwd` and open it with its config.
pub(crate) fn open_store(cwd: Option<&Path>) -> Result<(Config, FileStore)> {
    let root: PathBuf = find_store_root(&resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    let store = FileStore::open(root, config.notification_capacity)?;
    Ok((config, store))
}

/// Parse a state named on the command line.
///
/// Unlike catalog lookups, an unknown name is an error here.
pub(crate) fn parse_state(raw: &str) -> Result<BonusState> {
    raw.parse()
        .map_err(|_| BonusTrackError::UnknownState(raw.to_string()))
}

/// Parse an optional `--workflow` argument using the store's parsing mode if
/// a store is reachable, lenient otherwise.
pub(crate) fn parse_workflow_arg(
    cwd: Option<&Path>,
    raw: Option<&str>,
) -> Result<Option<WorkflowStates>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let config = match find_store_root(&resolve_cwd(cwd)) {
        Ok(root) => load_config(&root)?,
        Err(_) => Config::default(),
    };
    parse_workflow_with_config(raw, &config).map(Some)
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| BonusTrackError::InvalidJson(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
