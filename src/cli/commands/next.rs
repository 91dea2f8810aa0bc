//! Next command - States reachable from a state

use std::path::Path;

use crate::domain::{get_next_states, get_state_config};
use crate::errors::Result;

use super::{parse_state, parse_workflow_arg};

pub async fn run(cwd: Option<&Path>, state: &str, workflow: Option<&str>) -> Result<()> {
    let state = parse_state(state)?;
    let workflow = parse_workflow_arg(cwd, workflow)?;
    for next in get_next_states(state, workflow.as_ref().map(|w| w.as_slice())) {
        println!("{} {}", get_state_config(next).emoji, next);
    }
    Ok(())
}
