//! Events that drive a dialogue

/// Events that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// Caller opened the conversation
    Start,
    /// A line from the user; `None` when input has ended
    UserInput { text: Option<&'a str> },
}

impl<'a> Event<'a> {
    #[must_use]
    pub fn user_input(text: Option<&'a str>) -> Self {
        Event::UserInput { text }
    }
}
