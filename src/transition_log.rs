//! Transition log
//!
//! Sinks notified once per observed state change. The engine borrows a sink
//! for its lifetime and never owns it.

use crate::state_machine::{DialogueContext, DialogueState, QuestionCategory};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::Mutex;
use thiserror::Error;

/// Record of one state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    from_state: DialogueState,
    to_state: DialogueState,
    category: Option<QuestionCategory>,
    refinement_attempted: bool,
}

impl TransitionEvent {
    #[must_use]
    pub fn new(
        from_state: DialogueState,
        to_state: DialogueState,
        category: Option<QuestionCategory>,
        refinement_attempted: bool,
    ) -> Self {
        Self {
            from_state,
            to_state,
            category,
            refinement_attempted,
        }
    }

    /// Snapshot the session fields as they stand now
    #[must_use]
    pub fn from_context(
        from_state: DialogueState,
        to_state: DialogueState,
        context: &DialogueContext,
    ) -> Self {
        Self::new(
            from_state,
            to_state,
            context.category,
            context.refinement_attempted,
        )
    }

    #[must_use]
    pub fn from_state(&self) -> DialogueState {
        self.from_state
    }

    #[must_use]
    pub fn to_state(&self) -> DialogueState {
        self.to_state
    }

    #[must_use]
    pub fn category(&self) -> Option<QuestionCategory> {
        self.category
    }

    #[must_use]
    pub fn refinement_attempted(&self) -> bool {
        self.refinement_attempted
    }
}

#[derive(Debug, Error)]
pub enum TransitionLogError {
    #[error("Failed to write transition log: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode transition event: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Transition log rejected event: {0}")]
    Rejected(String),
    #[error("Transition log lock poisoned")]
    Poisoned,
}

/// Receiver of transition events
pub trait TransitionLog {
    fn record(&self, event: &TransitionEvent) -> Result<(), TransitionLogError>;
}

impl<F> TransitionLog for F
where
    F: Fn(&TransitionEvent) -> Result<(), TransitionLogError>,
{
    fn record(&self, event: &TransitionEvent) -> Result<(), TransitionLogError> {
        self(event)
    }
}

/// Emits each transition as a structured `tracing` record
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl TransitionLog for TracingLog {
    fn record(&self, event: &TransitionEvent) -> Result<(), TransitionLogError> {
        tracing::info!(
            from = %event.from_state,
            to = %event.to_state,
            category = event.category.map(QuestionCategory::as_str),
            refinement_attempted = event.refinement_attempted,
            "Dialogue state changed"
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    ts: String,
    #[serde(flatten)]
    event: &'a TransitionEvent,
}

/// Writes one JSON object per transition, newline-delimited
pub struct JsonLinesLog<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> JsonLinesLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> Result<W, TransitionLogError> {
        self.writer
            .into_inner()
            .map_err(|_| TransitionLogError::Poisoned)
    }
}

impl<W: Write> TransitionLog for JsonLinesLog<W> {
    fn record(&self, event: &TransitionEvent) -> Result<(), TransitionLogError> {
        let line = JsonLine {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event,
        };
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| TransitionLogError::Poisoned)?;
        serde_json::to_writer(&mut *writer, &line)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct MemoryLog {
    events: Mutex<Vec<TransitionEvent>>,
}

impl MemoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far
    #[must_use]
    pub fn events(&self) -> Vec<TransitionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TransitionLog for MemoryLog {
    fn record(&self, event: &TransitionEvent) -> Result<(), TransitionLogError> {
        self.events
            .lock()
            .map_err(|_| TransitionLogError::Poisoned)?
            .push(event.clone());
        Ok(())
    }
}
