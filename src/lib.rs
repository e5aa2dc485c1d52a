//! Questioning engine
//!
//! A small finite-state dialogue that walks a user through locating their
//! uncertainty, naming the kind of question they are asking, and offering a
//! single follow-up before stepping aside.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod exit;
pub mod state_machine;
pub mod transition_log;

pub use catalog::{Prompt, RefinementKind};
pub use classifier::{classify, Classifier, KeywordClassifier};
pub use engine::DialogueEngine;
pub use exit::is_exit;
pub use state_machine::{DialogueContext, DialogueState, QuestionCategory};
pub use transition_log::{
    JsonLinesLog, MemoryLog, TracingLog, TransitionEvent, TransitionLog, TransitionLogError,
};
