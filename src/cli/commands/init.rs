//! Init command - Create a .bonustrack store

use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::fs::{get_bonuses_dir, get_config_path, get_store_dir, resolve_cwd, write_config};
use crate::schemas::Config;

/// Create `.bonustrack/` with a default config in `cwd`.
///
/// An existing config.json is kept unless `force` is set.
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    std::fs::create_dir_all(get_bonuses_dir(&root))?;

    let config_path = get_config_path(&root);
    if config_path.exists() && !force {
        info!(path = %config_path.display(), "config already exists; use --force to overwrite");
    } else {
        write_config(&root, &Config::default())?;
        info!(path = %config_path.display(), "wrote default config");
    }

    println!("Initialized bonus store in {}", get_store_dir(&root).display());
    Ok(())
}
