//! Transition legality
//!
//! Within a configured workflow a user may move to any state at or before
//! their current position, or exactly one step ahead. The special states
//! are reachable from everywhere.

use crate::schemas::BonusState;

/// Menu offered when a bonus has no configured workflow: every named state
/// plus the specials. The generic `step_N` states are left out.
pub fn default_next_states() -> Vec<BonusState> {
    BonusState::ALL
        .iter()
        .copied()
        .filter(|s| !s.is_legacy_step())
        .collect()
}

/// Get the 0-based position of a state in a workflow.
///
/// Returns the first occurrence, or None if the workflow does not list it.
pub fn get_state_index(state: BonusState, allowed: &[BonusState]) -> Option<usize> {
    allowed.iter().position(|&s| s == state)
}

fn push_unique(states: &mut Vec<BonusState>, state: BonusState) {
    if !states.contains(&state) {
        states.push(state);
    }
}

/// States reachable from `current`.
///
/// The result has no duplicates and keeps workflow order, followed by any
/// special states the workflow did not list.
///
/// # Arguments
/// * `current` - The user's current state
/// * `allowed` - The bonus's workflow; `None` selects the default menu, an
///   empty list leaves only the specials
pub fn get_next_states(current: BonusState, allowed: Option<&[BonusState]>) -> Vec<BonusState> {
    let Some(allowed) = allowed else {
        return default_next_states();
    };

    let window = match get_state_index(current, allowed) {
        Some(index) => &allowed[..(index + 2).min(allowed.len())],
        // Not on the configured path: no restriction
        None => allowed,
    };

    let mut next = Vec::with_capacity(window.len() + BonusState::SPECIAL.len());
    for &state in window.iter().chain(BonusState::SPECIAL.iter()) {
        push_unique(&mut next, state);
    }
    next
}

/// Whether moving from `current` to `new_state` is legal.
pub fn can_transition_to(
    current: BonusState,
    new_state: BonusState,
    allowed: Option<&[BonusState]>,
) -> bool {
    get_next_states(current, allowed).contains(&new_state)
}
