//! Exit signal detection
//!
//! Matching is whole-token: the trimmed, lowercased input must equal one of
//! the tokens exactly. Keyword scanning elsewhere is substring-based, but
//! here "know" or "nothing" must never end a conversation.

/// Inputs that end the conversation when entered on their own
pub const EXIT_TOKENS: &[&str] = &[
    "exit", "quit", "stop", "bye", "no",
    // "don't want", "stop", "end"
    "不要", "停", "结束",
];

/// Whether `input` should force the conversation to its terminal state.
///
/// Absent input (end of stream) and blank input both count as exit.
#[must_use]
pub fn is_exit(input: Option<&str>) -> bool {
    let Some(text) = input else {
        return true;
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lowered = trimmed.to_lowercase();
    EXIT_TOKENS.contains(&lowered.as_str())
}
