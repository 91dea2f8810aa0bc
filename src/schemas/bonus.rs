//! Bonus schema - a promotional offer and its configured workflow

use serde::{Deserialize, Serialize};

use crate::domain::WorkflowStates;

/// A bonus users can enroll in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// Unique identifier, also used as the file name
    pub id: String,

    /// Human-readable title
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Points awarded on completion
    #[serde(default)]
    pub points: u32,

    /// Inactive bonuses only accept forced transitions
    #[serde(default = "default_active")]
    pub active: bool,

    /// Administrator-chosen states, persisted as a comma-delimited string
    #[serde(default)]
    pub allowed_states: WorkflowStates,

    /// ISO 8601 creation timestamp
    pub created_at: String,

    /// ISO 8601 last update timestamp
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}

impl Bonus {
    pub fn new(id: impl Into<String>, title: impl Into<String>, allowed_states: WorkflowStates) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Bonus {
            schema_version: 1,
            id: id.into(),
            title: title.into(),
            description: None,
            points: 0,
            active: true,
            allowed_states,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self.touch_returning()
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self.touch_returning()
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self.touch_returning()
    }

    fn touch_returning(mut self) -> Self {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self
    }
}
