//! Progress command - Percentage for a state

use std::path::Path;

use crate::domain::get_state_progress;
use crate::errors::Result;

use super::{parse_state, parse_workflow_arg};

pub async fn run(cwd: Option<&Path>, state: &str, workflow: Option<&str>) -> Result<()> {
    let state = parse_state(state)?;
    let workflow = parse_workflow_arg(cwd, workflow)?;
    let progress = get_state_progress(state, workflow.as_ref().map(|w| w.as_slice()));
    println!("{}%", progress);
    Ok(())
}
