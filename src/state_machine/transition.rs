//! Pure state transition function

use super::{DialogueContext, DialogueState, Effect, Event};
use crate::catalog::{Prompt, RefinementKind};
use crate::classifier::Classifier;
use crate::exit::is_exit;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: DialogueState,
    pub prompt: Prompt,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    #[must_use]
    pub fn new(state: DialogueState, prompt: Prompt) -> Self {
        Self {
            new_state: state,
            prompt,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Dialogue already started (current state: {0})")]
    AlreadyStarted(DialogueState),
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs. The exit check
/// runs before any per-state handling, and `Exit` absorbs every input.
pub fn transition(
    state: DialogueState,
    context: &DialogueContext,
    event: &Event<'_>,
    classifier: &dyn Classifier,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        (DialogueState::Idle, Event::Start) => Ok(TransitionResult::new(
            DialogueState::Awareness,
            Prompt::Awareness,
        )),

        (_, Event::Start) => Err(TransitionError::AlreadyStarted(state)),

        (_, Event::UserInput { text }) if is_exit(*text) => Ok(exit()),

        (DialogueState::Exit, Event::UserInput { .. }) => Ok(exit()),

        // Awareness + question -> Typing, category recorded
        (DialogueState::Awareness, Event::UserInput { text }) => {
            let category = classifier.classify(text.unwrap_or_default());
            Ok(
                TransitionResult::new(DialogueState::Typing, Prompt::Category(category))
                    .with_effect(Effect::RecordCategory(category)),
            )
        }

        // Refinement gate already closed: finish instead of asking again
        (DialogueState::Typing, Event::UserInput { .. }) if context.refinement_used => Ok(exit()),

        (DialogueState::Typing, Event::UserInput { .. }) => {
            let kind = RefinementKind::for_category(context.category);
            Ok(
                TransitionResult::new(DialogueState::Refinement, Prompt::Refinement(kind))
                    .with_effect(Effect::ConsumeRefinement),
            )
        }

        (DialogueState::Refinement, Event::UserInput { .. }) => Ok(exit()),

        (DialogueState::Idle, Event::UserInput { .. }) => Ok(TransitionResult::new(
            DialogueState::Awareness,
            Prompt::Awareness,
        )),
    }
}

fn exit() -> TransitionResult {
    TransitionResult::new(DialogueState::Exit, Prompt::Exit)
}
