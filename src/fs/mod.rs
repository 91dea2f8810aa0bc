//! File system utilities for bonustrack
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{
    read_bonus, read_bonuses, read_config, read_json, read_submission, read_submissions,
    write_bonus, write_config, write_json, write_submission,
};
pub use paths::{
    find_store_root, get_bonus_path, get_bonuses_dir, get_config_path, get_store_dir,
    get_submission_path, get_submissions_dir, resolve_cwd, validate_id, STORE_DIR,
};
