//! Bonus workflow core: state catalog, workflow lists, progress and transitions
//!
//! Everything in here is pure and synchronous.

mod catalog;
mod progress;
mod states;
mod transitions;
mod workflow;


pub use catalog::{
    get_all_state_configs, get_state_config, get_state_config_by_id,
    get_states_for_filter, get_submission_status_for_id, get_submission_status_for_state,
    FilterOption, StateConfig,
};
pub use progress::get_state_progress;
pub use states::{can_transition_to, default_next_states, get_next_states, get_state_index};
pub use transitions::{apply_state_transition, TransitionResult};
pub use workflow::{
    parse_workflow_states, parse_workflow_states_strict, parse_workflow_with_config,
    stringify_workflow_states, WorkflowStates, DEFAULT_WORKFLOW,
};
