//! Parse command - Normalize a workflow string

use std::path::Path;

use crate::domain::{parse_workflow_states, parse_workflow_states_strict};
use crate::errors::Result;

pub async fn run(_cwd: Option<&Path>, raw: &str, strict: bool) -> Result<()> {
    let states = if strict {
        parse_workflow_states_strict(raw)?
    } else {
        parse_workflow_states(raw)
    };
    println!("{}", states);
    Ok(())
}
