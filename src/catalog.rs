//! Prompt catalog
//!
//! Every line the engine can say. Text depends only on the question
//! category, never on what the user typed.

use crate::state_machine::QuestionCategory;
use std::fmt;

const AWARENESS_PROMPT: &str = "Which one feels closer right now?\n\
A. I don't know what is happening\n\
B. I'm not sure if this is right\n\
C. I don't feel okay about the result\n\
D. I can't tell yet";

const EXIT_PROMPT: &str = "We can stop here. You can take this question to someone else if you want.";

const FACT_PROMPT: &str = "This feels more like a Fact question.\n\
Fact questions are about what happened or how something works.";

const JUDGEMENT_PROMPT: &str = "This feels more like a Judgement question.\n\
Judgement questions involve what is right or better.";

const VALUE_PROMPT: &str = "This feels more like a Value question.\n\
Value questions involve what matters or what should matter.";

/// A rendered line of dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Four-option menu for locating the uncertainty
    Awareness,
    /// Names the category the user's question fell into
    Category(QuestionCategory),
    /// The one follow-up question of a session
    Refinement(RefinementKind),
    Exit,
}

impl Prompt {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Prompt::Awareness => AWARENESS_PROMPT,
            Prompt::Category(QuestionCategory::Fact) => FACT_PROMPT,
            Prompt::Category(QuestionCategory::Judgement) => JUDGEMENT_PROMPT,
            Prompt::Category(QuestionCategory::Value) => VALUE_PROMPT,
            Prompt::Refinement(kind) => kind.question(),
            Prompt::Exit => EXIT_PROMPT,
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Technique behind a refinement question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefinementKind {
    /// Fact questions, and sessions where no category was recorded
    ScopeNarrowing,
    /// Judgement questions
    FocusClarification,
    /// Value questions
    ConditionChecking,
}

impl RefinementKind {
    #[must_use]
    pub fn for_category(category: Option<QuestionCategory>) -> Self {
        match category {
            Some(QuestionCategory::Judgement) => RefinementKind::FocusClarification,
            Some(QuestionCategory::Value) => RefinementKind::ConditionChecking,
            Some(QuestionCategory::Fact) | None => RefinementKind::ScopeNarrowing,
        }
    }

    #[must_use]
    pub fn question(self) -> &'static str {
        match self {
            RefinementKind::ScopeNarrowing => {
                "Are you asking about this situation, or all situations?"
            }
            RefinementKind::FocusClarification => {
                "Are you asking about the situation itself, or about someone's choice?"
            }
            RefinementKind::ConditionChecking => {
                "Would the question change if one condition were different?"
            }
        }
    }

    /// Short human-readable name of the technique
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RefinementKind::ScopeNarrowing => "Scope narrowing",
            RefinementKind::FocusClarification => "Focus clarification",
            RefinementKind::ConditionChecking => "Condition checking",
        }
    }
}
