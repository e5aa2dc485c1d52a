//! Dialogue engine
//!
//! Owns one conversation: feeds events through the pure transition function,
//! applies the resulting effects, commits the new state and then reports the
//! change to the attached log. A failing or panicking log never affects the
//! conversation.

use crate::catalog::Prompt;
use crate::classifier::{Classifier, KeywordClassifier};
use crate::state_machine::{
    transition, DialogueContext, DialogueState, Event, QuestionCategory, TransitionError,
};
use crate::transition_log::{TransitionEvent, TransitionLog};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// A single questioning conversation
///
/// Not internally synchronized; callers serialize access.
pub struct DialogueEngine<'a> {
    state: DialogueState,
    context: DialogueContext,
    classifier: Box<dyn Classifier + 'a>,
    log: Option<&'a dyn TransitionLog>,
}

impl Default for DialogueEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DialogueEngine<'a> {
    /// Fresh engine in `Idle` using the built-in keyword classifier
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DialogueState::Idle,
            context: DialogueContext::new(),
            classifier: Box::new(KeywordClassifier::default()),
            log: None,
        }
    }

    /// Report every state change to `log`
    #[must_use]
    pub fn with_log(mut self, log: &'a dyn TransitionLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Replace the question classifier
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Classifier + 'a) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Open the conversation and return the awareness menu.
    ///
    /// Only the first call changes state; later calls return the same menu
    /// without logging anything.
    pub fn start(&mut self) -> &'static str {
        self.dispatch(&Event::Start).text()
    }

    /// Feed one line of user input, `None` meaning input has ended.
    ///
    /// Once the engine reaches `Exit` every call returns the exit prompt;
    /// callers stop their loop on [`DialogueEngine::is_finished`].
    pub fn handle_input(&mut self, text: Option<&str>) -> &'static str {
        self.dispatch(&Event::user_input(text)).text()
    }

    #[must_use]
    pub fn state(&self) -> DialogueState {
        self.state
    }

    #[must_use]
    pub fn category(&self) -> Option<QuestionCategory> {
        self.context.category
    }

    #[must_use]
    pub fn refinement_used(&self) -> bool {
        self.context.refinement_used
    }

    #[must_use]
    pub fn refinement_attempted(&self) -> bool {
        self.context.refinement_attempted
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    fn dispatch(&mut self, event: &Event<'_>) -> Prompt {
        let from = self.state;
        match transition(from, &self.context, event, self.classifier.as_ref()) {
            Ok(result) => {
                for effect in result.effects {
                    effect.apply(&mut self.context);
                }
                self.state = result.new_state;
                if from != self.state {
                    self.emit(&TransitionEvent::from_context(
                        from,
                        self.state,
                        &self.context,
                    ));
                }
                result.prompt
            }
            Err(TransitionError::AlreadyStarted(state)) => {
                tracing::debug!(%state, "Ignoring repeated start");
                Prompt::Awareness
            }
        }
    }

    fn emit(&self, event: &TransitionEvent) {
        let Some(log) = self.log else {
            return;
        };
        match panic::catch_unwind(AssertUnwindSafe(|| log.record(event))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!(
                    error = %e,
                    from = %event.from_state(),
                    to = %event.to_state(),
                    "Transition log failed; continuing"
                );
            }
            Err(_) => {
                tracing::error!(
                    from = %event.from_state(),
                    to = %event.to_state(),
                    "Transition log panicked; continuing"
                );
            }
        }
    }
}

impl fmt::Debug for DialogueEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogueEngine")
            .field("state", &self.state)
            .field("context", &self.context)
            .field("has_log", &self.log.is_some())
            .finish_non_exhaustive()
    }
}
