//! Status command - Show a user's progress on a bonus

use std::path::Path;

use crate::enrollment::{Enrollment, ProgressReport};
use crate::errors::Result;

use super::{open_store, print_json};

pub(crate) fn print_report(report: &ProgressReport) {
    let status = report.status.map(|s| s.as_str()).unwrap_or("-");
    println!(
        "{} / {}: {} ({}) {}%  status: {}",
        report.bonus_id, report.user_id, report.label, report.state, report.progress, status
    );
}

pub async fn run(cwd: Option<&Path>, bonus_id: &str, user_id: &str, json: bool) -> Result<()> {
    let (_, store) = open_store(cwd)?;
    let report = Enrollment::new(store).progress(bonus_id, user_id)?;

    if json {
        return print_json(&report);
    }
    print_report(&report);
    let next: Vec<&str> = report.next_states.iter().map(|s| s.as_str()).collect();
    println!("  next: {}", next.join(", "));
    Ok(())
}
