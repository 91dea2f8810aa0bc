//! Submissions command - Every user's progress on a bonus

use std::path::Path;

use crate::enrollment::Enrollment;
use crate::errors::Result;

use super::status::print_report;
use super::{open_store, print_json};

pub async fn run(cwd: Option<&Path>, bonus_id: &str, json: bool) -> Result<()> {
    let (_, store) = open_store(cwd)?;
    let reports = Enrollment::new(store).progress_all(bonus_id)?;

    if json {
        return print_json(&reports);
    }
    if reports.is_empty() {
        println!("No submissions for {}", bonus_id);
    }
    for report in &reports {
        print_report(report);
    }
    Ok(())
}
