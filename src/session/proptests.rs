//! Property-based tests for the session state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::history::{ExpansionResult, History};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

/// Run one transition and apply history effects the way the runtime does
fn step(state: &mut SessionState, history: &mut History, event: Event) -> Result<Vec<Effect>, TransitionError> {
    let result = transition(state, history, event)?;
    *state = result.new_state;
    for effect in &result.effects {
        if let Effect::RecordHistory { result } = effect {
            history.record(result.clone());
        }
    }
    Ok(result.effects)
}

/// Submit then complete successfully, returning the stored result
fn expand_ok(state: &mut SessionState, history: &mut History, input: &str) -> ExpansionResult {
    step(state, history, Event::Submit { input: input.to_string() }).unwrap();
    let result = ExpansionResult::new(input.trim(), format!("expanded: {}", input.trim()));
    step(state, history, Event::ExpansionSucceeded { result: result.clone() }).unwrap();
    result
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

fn arb_input() -> impl Strategy<Value = String> {
    " {0,2}[a-z0-9][a-z0-9 ,]{0,30} {0,2}"
}

fn arb_settled_state() -> impl Strategy<Value = SessionState> {
    (
        "[a-z ]{0,10}",
        prop_oneof![
            Just(Phase::Idle),
            "[a-z]{1,10}".prop_map(|message| Phase::Failed { message }),
            ("[a-z]{1,10}", "[a-z]{1,20}").prop_map(|(i, o)| Phase::Displaying {
                result: ExpansionResult::new(i, o)
            }),
        ],
    )
        .prop_map(|(input, phase)| SessionState { input, phase })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn blank_submit_never_transitions(state in arb_settled_state(), blank in arb_blank()) {
        let history = History::new();
        let result = transition(&state, &history, Event::Submit { input: blank }).unwrap();
        prop_assert_eq!(result.new_state, state);
        prop_assert!(result.effects.is_empty());
    }

    #[test]
    fn submit_records_trimmed_input(state in arb_settled_state(), input in arb_input()) {
        let mut state = state;
        let mut history = History::new();
        let before = history.len();

        let stored = expand_ok(&mut state, &mut history, &input);

        prop_assert_eq!(history.len(), before + 1);
        prop_assert_eq!(&history.all()[0], &stored);
        prop_assert_eq!(stored.original_input.as_str(), input.trim());
        prop_assert_eq!(state.displayed(), Some(&stored));
    }

    #[test]
    fn history_is_newest_first(inputs in proptest::collection::vec(arb_input(), 1..12)) {
        let mut state = SessionState::new();
        let mut history = History::new();

        let stored: Vec<_> = inputs
            .iter()
            .map(|input| expand_ok(&mut state, &mut history, input))
            .collect();

        let expected: Vec<_> = stored.into_iter().rev().collect();
        prop_assert_eq!(history.all(), expected.as_slice());
    }

    #[test]
    fn failure_never_touches_history(
        prior in proptest::collection::vec(arb_input(), 0..4),
        input in arb_input(),
        message in "[a-zA-Z .]{0,30}",
    ) {
        let mut state = SessionState::new();
        let mut history = History::new();
        for p in &prior {
            expand_ok(&mut state, &mut history, p);
        }
        let before = history.all().to_vec();

        step(&mut state, &mut history, Event::Submit { input }).unwrap();
        let effects = step(&mut state, &mut history, Event::ExpansionFailed { message }).unwrap();

        prop_assert!(state.error().is_some());
        prop_assert!(state.displayed().is_none());
        prop_assert_eq!(history.all(), before.as_slice());
        prop_assert_eq!(effects, vec![Effect::PublishSnapshot]);
    }

    #[test]
    fn double_submit_is_rejected(first in arb_input(), others in proptest::collection::vec(arb_input(), 1..5)) {
        let mut state = SessionState::new();
        let mut history = History::new();
        step(&mut state, &mut history, Event::Submit { input: first.clone() }).unwrap();

        for other in others {
            let err = step(&mut state, &mut history, Event::Submit { input: other }).unwrap_err();
            prop_assert_eq!(err, TransitionError::Busy);
        }

        let expected = Phase::Submitting { input: first.trim().to_string() };
        prop_assert_eq!(&state.phase, &expected);
        prop_assert!(history.is_empty());
    }

    #[test]
    fn select_is_idempotent_and_preserves_history(
        inputs in proptest::collection::vec(arb_input(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut state = SessionState::new();
        let mut history = History::new();
        for input in &inputs {
            expand_ok(&mut state, &mut history, input);
        }
        let before = history.all().to_vec();
        let chosen = pick.get(&before).clone();

        let effects = step(&mut state, &mut history, Event::SelectFromHistory { id: chosen.id }).unwrap();
        let first = state.clone();
        step(&mut state, &mut history, Event::SelectFromHistory { id: chosen.id }).unwrap();

        prop_assert_eq!(&first, &state);
        prop_assert_eq!(state.displayed(), Some(&chosen));
        prop_assert_eq!(history.all(), before.as_slice());
        let requested = effects
            .iter()
            .any(|e| matches!(e, Effect::RequestExpansion { .. }));
        prop_assert!(!requested);
    }
}
