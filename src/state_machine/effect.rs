//! Effects produced by state transitions

use super::state::{DialogueContext, QuestionCategory};

/// Context updates to apply after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Remember the classified category for the rest of the session
    RecordCategory(QuestionCategory),

    /// Close the refinement gate
    ConsumeRefinement,
}

impl Effect {
    pub fn apply(self, context: &mut DialogueContext) {
        match self {
            Effect::RecordCategory(category) => context.category = Some(category),
            Effect::ConsumeRefinement => {
                context.refinement_used = true;
                context.refinement_attempted = true;
            }
        }
    }
}
