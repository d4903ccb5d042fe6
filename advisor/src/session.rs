//! Chat session state machine.
//!
//! DESIGN
//! ======
//! A session is `Idle` or `Waiting`. [`ChatSession::submit`] moves
//! `Idle -> Waiting` and hands back the request the caller must send;
//! [`ChatSession::complete`] records the result and moves back to `Idle`.
//! Only one request can be outstanding: a second submit while waiting is
//! rejected instead of racing the first, so bot replies always land in
//! submission order.
//!
//! The session never performs I/O. Browser and terminal frontends drive the
//! HTTP exchange themselves and feed the result back in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::message::Message;
use crate::wire::{QueryError, QueryOutcome, QueryRequest, outcome_text};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Waiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Input was empty after trimming; nothing happened.
    #[error("query is empty")]
    EmptyInput,
    /// A request is already outstanding.
    #[error("a query is already in flight")]
    RequestInFlight,
    /// `complete` was called with no request outstanding.
    #[error("no query is in flight")]
    NoRequestInFlight,
}

/// Input text, transcript, and in-flight flag for one chat.
#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    input: String,
    transcript: Vec<Message>,
    phase: Phase,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the in-progress input (keystrokes).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Fill the input with a preset prompt without submitting it.
    pub fn set_quick_query(&mut self, text: &str) {
        text.clone_into(&mut self.input);
    }

    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.phase == Phase::Waiting
    }

    /// Submit the current input.
    ///
    /// On success the raw (untrimmed) input is appended as a user message, the
    /// session enters `Waiting`, and the request body to send is returned. The
    /// input itself is left in place until [`ChatSession::complete`].
    ///
    /// # Errors
    ///
    /// - [`SessionError::EmptyInput`] when the trimmed input is empty.
    /// - [`SessionError::RequestInFlight`] while another request is outstanding.
    ///
    /// Either way the session is unchanged.
    pub fn submit(&mut self) -> Result<QueryRequest, SessionError> {
        if self.input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.is_waiting() {
            return Err(SessionError::RequestInFlight);
        }
        let query = self.input.clone();
        self.transcript.push(Message::user(query.clone()));
        self.phase = Phase::Waiting;
        Ok(QueryRequest { query })
    }

    /// Record the result of the outstanding request.
    ///
    /// Appends exactly one bot message, clears the input, and returns to
    /// `Idle`, whatever the result was. Returns the appended message.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRequestInFlight`] if nothing was submitted;
    /// the transcript is left untouched.
    pub fn complete(&mut self, result: &Result<QueryOutcome, QueryError>) -> Result<&Message, SessionError> {
        if !self.is_waiting() {
            return Err(SessionError::NoRequestInFlight);
        }
        self.transcript.push(Message::bot(outcome_text(result)));
        self.input.clear();
        self.phase = Phase::Idle;
        let last = self.transcript.len() - 1;
        Ok(&self.transcript[last])
    }
}
