//! Question classification
//!
//! A coarse keyword heuristic, kept behind the [`Classifier`] trait so the
//! state machine never depends on how a category is chosen.

use crate::state_machine::QuestionCategory;

/// Terms that mark a Value question. Checked before Judgement terms.
pub const VALUE_TERMS: &[&str] = &[
    "fair",
    "fairness",
    "meaning",
    "important",
    "should matter",
    "价值",
];

/// Terms that mark a Judgement question
pub const JUDGEMENT_TERMS: &[&str] = &["right", "wrong", "better", "worse", "choice", "should i"];

/// Maps free text to a question category
pub trait Classifier {
    fn classify(&self, text: &str) -> QuestionCategory;
}

/// Substring keyword matcher over lowercased input
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    value_terms: Vec<String>,
    judgement_terms: Vec<String>,
}

impl KeywordClassifier {
    /// Build a classifier from custom term sets. Terms are lowercased here so
    /// matching stays case-insensitive.
    pub fn new<V, J>(value_terms: V, judgement_terms: J) -> Self
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        Self {
            value_terms: lowercase_all(value_terms),
            judgement_terms: lowercase_all(judgement_terms),
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(VALUE_TERMS, JUDGEMENT_TERMS)
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, text: &str) -> QuestionCategory {
        categorize(text, &self.value_terms, &self.judgement_terms)
    }
}

/// Classify with the built-in term sets
#[must_use]
pub fn classify(text: &str) -> QuestionCategory {
    categorize(text, VALUE_TERMS, JUDGEMENT_TERMS)
}

fn categorize<T: AsRef<str>>(text: &str, value_terms: &[T], judgement_terms: &[T]) -> QuestionCategory {
    let lowered = text.to_lowercase();
    let mentions = |terms: &[T]| terms.iter().any(|term| lowered.contains(term.as_ref()));

    if mentions(value_terms) {
        QuestionCategory::Value
    } else if mentions(judgement_terms) {
        QuestionCategory::Judgement
    } else {
        QuestionCategory::Fact
    }
}

fn lowercase_all<I>(terms: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    terms
        .into_iter()
        .map(|term| term.as_ref().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}
