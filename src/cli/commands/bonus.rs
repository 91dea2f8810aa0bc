//! Bonus commands - Create, list and inspect bonuses

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::domain::{get_state_config, get_state_progress, parse_workflow_with_config};
use crate::errors::Result;
use crate::fs::validate_id;
use crate::schemas::{Bonus, BonusState};
use crate::store::SubmissionStore;

use super::{open_store, print_json};

/// Create or replace a bonus. Without `workflow` the config default is used.
pub async fn add(
    cwd: Option<&Path>,
    id: &str,
    title: &str,
    workflow: Option<&str>,
    points: u32,
    description: Option<String>,
) -> Result<()> {
    validate_id(id)?;
    let (config, store) = open_store(cwd)?;
    let allowed = match workflow {
        Some(raw) => parse_workflow_with_config(raw, &config)?,
        None => config.default_workflow.clone(),
    };

    let bonus = Bonus::new(id, title, allowed)
        .with_points(points)
        .with_description(description);
    store.save_bonus(&bonus)?;
    info!(bonus_id = id, workflow = %bonus.allowed_states, "saved bonus");
    println!("Saved bonus {} ({})", bonus.id, bonus.allowed_states);
    Ok(())
}

pub async fn list(cwd: Option<&Path>, json: bool) -> Result<()> {
    let (_, store) = open_store(cwd)?;
    let bonuses = store.list_bonuses()?;
    if json {
        return print_json(&bonuses);
    }
    if bonuses.is_empty() {
        println!("No bonuses");
    }
    for b in bonuses {
        let active = if b.active { "" } else { " (inactive)" };
        println!("{:<20} {:>6} pts  {}{}", b.id, b.points, b.title, active);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct WorkflowStep {
    state: BonusState,
    label: &'static str,
    progress: u8,
}

#[derive(Debug, Serialize)]
struct BonusView<'a> {
    #[serde(flatten)]
    bonus: &'a Bonus,
    steps: Vec<WorkflowStep>,
}

/// Steps of a bonus's workflow with the percentage each one shows.
fn workflow_steps(bonus: &Bonus) -> Vec<WorkflowStep> {
    let allowed = Some(bonus.allowed_states.as_slice());
    bonus
        .allowed_states
        .iter()
        .map(|&state| WorkflowStep {
            state,
            label: get_state_config(state).label,
            progress: get_state_progress(state, allowed),
        })
        .collect()
}

pub async fn show(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let (_, store) = open_store(cwd)?;
    let bonus = store.load_bonus(id)?;
    let steps = workflow_steps(&bonus);

    if json {
        return print_json(&BonusView { bonus: &bonus, steps });
    }

    println!("{} - {}", bonus.id, bonus.title);
    if let Some(description) = &bonus.description {
        println!("  {}", description);
    }
    println!("  points: {}  active: {}", bonus.points, bonus.active);
    for step in steps {
        println!("  {:>3}%  {:<22} {}", step.progress, step.state, step.label);
    }
    Ok(())
}
