//! Config schema - Configuration for bonustrack

use serde::{Deserialize, Serialize};

use crate::domain::WorkflowStates;

/// Main configuration for bonustrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Reject workflow strings containing unknown states instead of dropping them
    #[serde(default)]
    pub strict_workflow_parsing: bool,

    /// Workflow given to bonuses created without one
    #[serde(default)]
    pub default_workflow: WorkflowStates,

    /// Buffered change notifications per subscriber
    #[serde(default = "default_notification_capacity")]
    pub notification_capacity: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_notification_capacity() -> usize {
    64
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            strict_workflow_parsing: false,
            default_workflow: WorkflowStates::default(),
            notification_capacity: 64,
        }
    }
}
