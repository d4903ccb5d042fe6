//! Shared chat model for the wealth advisor frontends.
//!
//! This crate owns everything the browser `client` and the terminal `cli`
//! agree on: the transcript message model, the `/query` wire schema, the
//! submit/complete state machine, and the line-block rendering model. It does
//! no I/O; callers perform the HTTP exchange and feed the result back in.

pub mod config;
pub mod message;
pub mod render;
pub mod session;
pub mod wire;

pub use config::{BackendConfig, ConfigError, DEFAULT_BACKEND_URL};
pub use message::{Message, Role};
pub use render::{Block, MessageView, TranscriptView, WAITING_TEXT, message_view, render_content, transcript_view};
pub use session::{ChatSession, Phase, SessionError};
pub use wire::{
    AnswerSource, CONNECTION_FAILED_TEXT, NO_RESULTS_TEXT, QueryError, QueryOutcome, QueryRequest, QueryResponse,
    decode_response, outcome_text,
};
