//! CLI module for bonustrack
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bonustrack - Track users through bonus workflows
#[derive(Parser, Debug)]
#[command(name = "bonustrack")]
#[command(version)]
#[command(about = "Track users through bonus workflows: progress, legal transitions and review status")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .bonustrack store in the current directory
    Init {
        /// Overwrite an existing config.json
        #[arg(long)]
        force: bool,
    },

    /// List the state catalog
    States {
        /// Only the states selectable as workflow steps
        #[arg(long)]
        filter: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize a comma-separated workflow string
    Parse {
        /// Workflow string, e.g. "step_1,step_2"
        raw: String,

        /// Fail on unknown states instead of dropping them
        #[arg(long)]
        strict: bool,
    },

    /// Completion percentage of a state
    Progress {
        state: String,

        /// Workflow to measure against (fixed table if omitted)
        #[arg(long)]
        workflow: Option<String>,
    },

    /// States reachable from a state
    Next {
        state: String,

        /// Workflow to move within (default menu if omitted)
        #[arg(long)]
        workflow: Option<String>,
    },

    /// Manage bonuses
    Bonus {
        #[command(subcommand)]
        action: BonusAction,
    },

    /// Show a user's progress on a bonus
    Status {
        bonus_id: String,
        user_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a user to a new state
    Set {
        bonus_id: String,
        user_id: String,
        state: String,

        /// Skip workflow and active checks
        #[arg(long)]
        force: bool,

        /// Attach a note to the submission
        #[arg(long)]
        notes: Option<String>,
    },

    /// List every user's progress on a bonus
    Submissions {
        bonus_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum BonusAction {
    /// Create or replace a bonus
    Add {
        id: String,
        title: String,

        /// Allowed states (config default_workflow if omitted)
        #[arg(long)]
        workflow: Option<String>,

        /// Points awarded on completion
        #[arg(long, default_value_t = 0)]
        points: u32,

        #[arg(long)]
        description: Option<String>,
    },

    /// List bonuses
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one bonus and its workflow percentages
    Show {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
