//! Completion percentage
//!
//! With a configured workflow, percentages are spread evenly over the
//! non-special states in the order the administrator chose them. Without
//! one, a fixed table is used.

use tracing::debug;

use crate::schemas::BonusState;

/// Fixed percentages used when a bonus has no configured workflow.
fn fixed_progress(state: BonusState) -> u8 {
    match state {
        BonusState::NotStarted => 0,
        BonusState::Interested => 10,
        BonusState::InProgress => 25,
        BonusState::WaitingVerification => 40,
        BonusState::WaitingDeposit => 50,
        BonusState::WaitingPayment => 75,
        BonusState::Step1 => 10,
        BonusState::Step2 => 20,
        BonusState::Step3 => 30,
        BonusState::Step4 => 40,
        BonusState::Step5 => 50,
        BonusState::Step6 => 60,
        BonusState::Step7 => 70,
        BonusState::Step8 => 80,
        BonusState::Step9 => 90,
        BonusState::Step10 => 95,
        BonusState::Completed => 100,
        BonusState::Rejected
        | BonusState::Hidden
        | BonusState::Blocked
        | BonusState::UserDeclined => 0,
    }
}

/// `round(index / steps * 100)` with halves rounded up, in integers.
fn round_half_up_percent(index: usize, steps: usize) -> u8 {
    ((2 * index * 100 + steps) / (2 * steps)) as u8
}

fn progress_within(current: BonusState, allowed: &[BonusState]) -> u8 {
    if current.is_special() {
        return 0;
    }
    match current {
        BonusState::Completed => return 100,
        BonusState::NotStarted => return 0,
        _ => {}
    }

    let progress_states: Vec<BonusState> = allowed
        .iter()
        .copied()
        .filter(|s| !s.is_special())
        .collect();

    let Some(index) = progress_states.iter().position(|&s| s == current) else {
        return 0;
    };

    if matches!(
        progress_states.as_slice(),
        [BonusState::NotStarted, BonusState::Completed] | [BonusState::Completed, BonusState::NotStarted]
    ) {
        return if current == BonusState::Completed { 100 } else { 0 };
    }

    let steps = progress_states.len() - 1;
    if steps == 0 {
        return 0;
    }
    round_half_up_percent(index, steps)
}

/// Completion percentage (0..=100) of `current`.
///
/// `allowed` is the bonus's configured workflow; `None` or an empty slice
/// selects the fixed table. Special states are not counted, so a workflow
/// ending in `rejected` or `hidden` puts its last ordinary step at 100.
pub fn get_state_progress(current: BonusState, allowed: Option<&[BonusState]>) -> u8 {
    let progress = match allowed {
        Some(states) if !states.is_empty() => progress_within(current, states),
        _ => fixed_progress(current),
    };
    debug!(state = %current, progress, "computed progress");
    progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::BonusState::*;

    #[test]
    fn test_fixed_table() {
        assert_eq!(get_state_progress(NotStarted, None), 0);
        assert_eq!(get_state_progress(Interested, None), 10);
        assert_eq!(get_state_progress(InProgress, None), 25);
        assert_eq!(get_state_progress(WaitingVerification, None), 40);
        assert_eq!(get_state_progress(WaitingDeposit, None), 50);
        assert_eq!(get_state_progress(WaitingPayment, None), 75);
        assert_eq!(get_state_progress(Step1, None), 10);
        assert_eq!(get_state_progress(Step5, None), 50);
        assert_eq!(get_state_progress(Step9, None), 90);
        assert_eq!(get_state_progress(Step10, None), 95);
        assert_eq!(get_state_progress(Completed, None), 100);
        for state in BonusState::SPECIAL {
            assert_eq!(get_state_progress(state, None), 0);
        }
    }

    #[test]
    fn test_empty_slice_uses_fixed_table() {
        assert_eq!(get_state_progress(WaitingPayment, Some(&[][..])), 75);
    }

    #[test]
    fn test_boundaries() {
        let allowed = [NotStarted, Step1, Step2, Completed];
        assert_eq!(get_state_progress(NotStarted, Some(&allowed[..])), 0);
        assert_eq!(get_state_progress(Completed, Some(&allowed[..])), 100);
    }

    #[test]
    fn test_completed_is_100_even_when_not_listed() {
        let allowed = [NotStarted, Step1, Rejected];
        assert_eq!(get_state_progress(Completed, Some(&allowed[..])), 100);
    }

    #[test]
    fn test_even_distribution() {
        let allowed = [NotStarted, Step1, Step2, Completed];
        assert_eq!(get_state_progress(Step1, Some(&allowed[..])), 33);
        assert_eq!(get_state_progress(Step2, Some(&allowed[..])), 67);
    }

    #[test]
    fn test_special_states_excluded() {
        let with_blocked = [NotStarted, Step1, Blocked, Completed];
        let without = [NotStarted, Step1, Completed];

        assert_eq!(get_state_progress(Blocked, Some(&with_blocked[..])), 0);
        assert_eq!(
            get_state_progress(Step1, Some(&with_blocked[..])),
            get_state_progress(Step1, Some(&without[..]))
        );
        assert_eq!(get_state_progress(Step1, Some(&with_blocked[..])), 50);
        assert_eq!(
            get_state_progress(Completed, Some(&with_blocked[..])),
            get_state_progress(Completed, Some(&without[..]))
        );
    }

    #[test]
    fn test_two_state_workflow() {
        let allowed = [NotStarted, Completed];
        assert_eq!(get_state_progress(NotStarted, Some(&allowed[..])), 0);
        assert_eq!(get_state_progress(Completed, Some(&allowed[..])), 100);
        for state in BonusState::ALL {
            if state != Completed {
                assert_eq!(get_state_progress(state, Some(&allowed[..])), 0, "{}", state);
            }
        }
    }

    #[test]
    fn test_state_not_in_workflow() {
        let allowed = [NotStarted, Step1, Completed];
        assert_eq!(get_state_progress(WaitingDeposit, Some(&allowed[..])), 0);
    }

    #[test]
    fn test_last_step_of_workflow_ending_in_special_state() {
        let allowed = [NotStarted, Step1, Step2, Rejected];
        assert_eq!(get_state_progress(Step1, Some(&allowed[..])), 50);
        assert_eq!(get_state_progress(Step2, Some(&allowed[..])), 100);

        let allowed = [NotStarted, Step1, Step2, Step3, Hidden];
        assert_eq!(get_state_progress(Step3, Some(&allowed[..])), 100);
    }

    #[test]
    fn test_half_rounds_up() {
        // 1/8 = 12.5%, 3/8 = 37.5%
        let allowed = [
            NotStarted, Step1, Step2, Step3, Step4, Step5, Step6, Step7, Completed,
        ];
        assert_eq!(get_state_progress(Step1, Some(&allowed[..])), 13);
        assert_eq!(get_state_progress(Step3, Some(&allowed[..])), 38);
        assert_eq!(get_state_progress(Step4, Some(&allowed[..])), 50);
        assert_eq!(get_state_progress(Step5, Some(&allowed[..])), 63);
    }

    #[test]
    fn test_single_progress_state() {
        // Only reachable through raw slices that skip normalization
        assert_eq!(get_state_progress(Step1, Some(&[Step1][..])), 0);
        assert_eq!(get_state_progress(Step1, Some(&[Step1, Blocked][..])), 0);
    }

    #[test]
    fn test_duplicates_use_first_position() {
        let allowed = [NotStarted, Step1, Step1, Completed];
        assert_eq!(get_state_progress(Step1, Some(&allowed[..])), 33);
    }
}
