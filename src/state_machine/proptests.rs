//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::catalog::{Prompt, RefinementKind};
use crate::classifier::{classify, KeywordClassifier, JUDGEMENT_TERMS, VALUE_TERMS};
use crate::engine::DialogueEngine;
use crate::exit::{is_exit, EXIT_TOKENS};
use crate::transition_log::MemoryLog;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = DialogueState> {
    prop_oneof![
        Just(DialogueState::Idle),
        Just(DialogueState::Awareness),
        Just(DialogueState::Typing),
        Just(DialogueState::Refinement),
        Just(DialogueState::Exit),
    ]
}

fn arb_category() -> impl Strategy<Value = QuestionCategory> {
    prop_oneof![
        Just(QuestionCategory::Fact),
        Just(QuestionCategory::Judgement),
        Just(QuestionCategory::Value),
    ]
}

fn arb_context() -> impl Strategy<Value = DialogueContext> {
    (proptest::option::of(arb_category()), any::<bool>()).prop_map(|(category, used)| {
        DialogueContext {
            category,
            refinement_used: used,
            refinement_attempted: used,
        }
    })
}

fn arb_exit_token() -> impl Strategy<Value = String> {
    (proptest::sample::select(EXIT_TOKENS), "[ \t]{0,2}", any::<bool>()).prop_map(
        |(token, pad, upper)| {
            let token = if upper {
                token.to_uppercase()
            } else {
                token.to_string()
            };
            format!("{pad}{token}{pad}")
        },
    )
}

fn arb_keyword_text(terms: &'static [&'static str]) -> impl Strategy<Value = String> {
    ("[a-z ]{0,12}", proptest::sample::select(terms), "[a-z ?]{0,12}")
        .prop_map(|(before, term, after)| format!("{before}{term}{after}"))
}

/// User input: absent, blank, exit tokens, keyword questions, or noise
fn arb_input() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None),
        1 => "[ \t]{0,3}".prop_map(Some),
        2 => arb_exit_token().prop_map(Some),
        3 => arb_keyword_text(VALUE_TERMS).prop_map(Some),
        3 => arb_keyword_text(JUDGEMENT_TERMS).prop_map(Some),
        4 => "[a-zA-Z ?]{1,30}".prop_map(Some),
    ]
}

// ============================================================================
// State Validity Checkers
// ============================================================================

fn is_allowed_edge(from: DialogueState, to: DialogueState) -> bool {
    use DialogueState::{Awareness, Exit, Idle, Refinement, Typing};
    matches!(
        (from, to),
        (Idle, Awareness | Exit)
            | (Awareness, Typing | Exit)
            | (Typing, Refinement | Exit)
            | (Refinement, Exit)
    ) || from == to
}

fn is_refinement_question(output: &str) -> bool {
    [
        RefinementKind::ScopeNarrowing,
        RefinementKind::FocusClarification,
        RefinementKind::ConditionChecking,
    ]
    .iter()
    .any(|kind| kind.question() == output)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Invariant 1: Only the documented edges are ever taken
    #[test]
    fn prop_transitions_follow_allowed_edges(
        state in arb_state(),
        context in arb_context(),
        input in arb_input()
    ) {
        let event = Event::user_input(input.as_deref());
        let result = transition(state, &context, &event, &KeywordClassifier::default());
        prop_assert!(result.is_ok(), "User input must never be rejected: {:?}", result);
        let new_state = result.unwrap().new_state;
        prop_assert!(
            is_allowed_edge(state, new_state),
            "Illegal edge {:?} -> {:?}",
            state,
            new_state
        );
    }

    // Invariant 2: Exit signals always reach Exit with the exit prompt
    #[test]
    fn prop_exit_signal_always_exits(
        state in arb_state(),
        context in arb_context(),
        token in arb_exit_token()
    ) {
        let event = Event::user_input(Some(token.as_str()));
        let result = transition(state, &context, &event, &KeywordClassifier::default()).unwrap();
        prop_assert_eq!(result.new_state, DialogueState::Exit);
        prop_assert_eq!(result.prompt, Prompt::Exit);
        prop_assert!(result.effects.is_empty());
    }

    // Invariant 3: Whole sessions keep every session-level guarantee
    #[test]
    fn prop_session_invariants(inputs in proptest::collection::vec(arb_input(), 0..12)) {
        let log = MemoryLog::new();
        let mut engine = DialogueEngine::new().with_log(&log);
        engine.start();

        let mut changes = 1;
        let mut refinements = 0;
        let mut seen_category = None;

        for input in &inputs {
            let before = engine.state();
            let output = engine.handle_input(input.as_deref());
            let after = engine.state();

            prop_assert!(is_allowed_edge(before, after), "Illegal edge {:?} -> {:?}", before, after);
            if before != after {
                changes += 1;
            }
            if is_refinement_question(output) {
                refinements += 1;
            }
            if before.is_terminal() {
                prop_assert_eq!(after, DialogueState::Exit);
                prop_assert_eq!(output, Prompt::Exit.text());
            }
            if let Some(category) = seen_category {
                prop_assert_eq!(engine.category(), Some(category), "Category was cleared or changed");
            }
            seen_category = engine.category();
        }

        prop_assert!(refinements <= 1, "Refinement asked {} times", refinements);
        prop_assert_eq!(engine.refinement_used(), refinements == 1);

        let events = log.events();
        prop_assert_eq!(events.len(), changes);
        for event in &events {
            prop_assert_ne!(event.from_state(), event.to_state());
        }
        for pair in events.windows(2) {
            prop_assert_eq!(pair[0].to_state(), pair[1].from_state());
        }
        if let Some(last) = events.last() {
            prop_assert_eq!(last.to_state(), engine.state());
        }
    }

    // Invariant 4: Exit tokens only count as whole input
    #[test]
    fn prop_exit_token_inside_word_does_not_exit(
        token in proptest::sample::select(EXIT_TOKENS),
        prefix in "[a-z]{0,4}",
        suffix in "[a-z]{1,4}"
    ) {
        let word = format!("{prefix}{token}{suffix}");
        prop_assume!(!EXIT_TOKENS.contains(&word.as_str()));
        prop_assert!(!is_exit(Some(word.as_str())), "{:?} should not exit", word);
    }

    // Invariant 5: Value keywords win over Judgement keywords
    #[test]
    fn prop_value_takes_priority(
        value in arb_keyword_text(VALUE_TERMS),
        judgement in arb_keyword_text(JUDGEMENT_TERMS),
        value_first in any::<bool>()
    ) {
        let text = if value_first {
            format!("{value} {judgement}")
        } else {
            format!("{judgement} {value}")
        };
        prop_assert_eq!(classify(&text), QuestionCategory::Value);
    }

    // Invariant 6: Classification is deterministic and case-insensitive
    #[test]
    fn prop_classification_is_deterministic(text in "[a-zA-Z ?]{0,40}") {
        let first = classify(&text);
        prop_assert_eq!(classify(&text), first);
        prop_assert_eq!(classify(&text.to_uppercase()), first);
    }
}
