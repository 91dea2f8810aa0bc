//! Set command - Move a user to a new state

use std::path::Path;

use crate::enrollment::{build_report, Enrollment};
use crate::errors::Result;
use crate::store::SubmissionStore;

use super::status::print_report;
use super::{open_store, parse_state};

pub async fn run(
    cwd: Option<&Path>,
    bonus_id: &str,
    user_id: &str,
    state: &str,
    force: bool,
    notes: Option<String>,
) -> Result<()> {
    let new_state = parse_state(state)?;
    let (_, store) = open_store(cwd)?;
    let enrollment = Enrollment::new(store);

    let submission = enrollment.set_state(bonus_id, user_id, new_state, force, notes)?;
    let bonus = enrollment.store().load_bonus(bonus_id)?;
    print_report(&build_report(&bonus, &submission));
    Ok(())
}
