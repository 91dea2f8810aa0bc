//! States command - Print the state catalog

use std::path::Path;

use serde::Serialize;

use crate::domain::{get_all_state_configs, get_states_for_filter, StateConfig};
use crate::errors::Result;
use crate::schemas::{BonusState, SubmissionStatus};

use super::print_json;

#[derive(Debug, Serialize)]
struct StateRow {
    value: BonusState,
    label: &'static str,
    short_label: &'static str,
    description: &'static str,
    emoji: &'static str,
    order: u16,
    is_step: bool,
    is_special: bool,
    user_visible: bool,
    submission_status: Option<SubmissionStatus>,
}

impl From<&StateConfig> for StateRow {
    fn from(c: &StateConfig) -> Self {
        StateRow {
            value: c.state,
            label: c.label,
            short_label: c.short_label,
            description: c.description,
            emoji: c.emoji,
            order: c.order,
            is_step: c.is_step(),
            is_special: c.is_special(),
            user_visible: c.user_visible,
            submission_status: c.submission_status,
        }
    }
}

/// Print every state, or only the workflow-selectable ones with `filter`.
pub async fn run(_cwd: Option<&Path>, filter: bool, json: bool) -> Result<()> {
    if filter {
        let options = get_states_for_filter();
        if json {
            return print_json(&options);
        }
        for o in options {
            println!("{} {:<22} {}", o.emoji, o.value, o.label);
        }
        return Ok(());
    }

    let rows: Vec<StateRow> = get_all_state_configs().into_iter().map(StateRow::from).collect();
    if json {
        return print_json(&rows);
    }
    for r in rows {
        let kind = if r.is_special {
            "special"
        } else if r.is_step {
            "step"
        } else {
            "boundary"
        };
        let status = r.submission_status.map(|s| s.as_str()).unwrap_or("-");
        println!(
            "{:>3} {} {:<22} {:<26} {:<9} {}",
            r.order, r.emoji, r.value, r.label, kind, status
        );
    }
    Ok(())
}
