//! Dialogue state types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a questioning conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DialogueState {
    /// Created but not started
    #[default]
    Idle,
    /// Awareness menu shown, waiting for the user's question
    Awareness,
    /// Question classified, category explained
    Typing,
    /// Follow-up question asked
    Refinement,
    /// Terminal
    Exit,
}

impl DialogueState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DialogueState::Idle => "Idle",
            DialogueState::Awareness => "Awareness",
            DialogueState::Typing => "Typing",
            DialogueState::Refinement => "Refinement",
            DialogueState::Exit => "Exit",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, DialogueState::Exit)
    }
}

impl fmt::Display for DialogueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of question the user is asking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionCategory {
    /// What happened, or how something works
    Fact,
    /// What is right or better
    Judgement,
    /// What matters, or should matter
    Value,
}

impl QuestionCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionCategory::Fact => "Fact",
            QuestionCategory::Judgement => "Judgement",
            QuestionCategory::Value => "Value",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session data the transition function reads
///
/// `category` is set once when leaving Awareness and never cleared.
/// `refinement_used` gates the follow-up question to once per session;
/// `refinement_attempted` mirrors it for transition events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogueContext {
    pub category: Option<QuestionCategory>,
    pub refinement_used: bool,
    pub refinement_attempted: bool,
}

impl DialogueContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
