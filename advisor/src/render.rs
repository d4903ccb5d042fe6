//! Line-block rendering model shared by the browser and terminal views.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::message::{Message, Role};
use crate::session::ChatSession;

/// Transient bot-style line shown while a query is in flight.
pub const WAITING_TEXT: &str = "🤔 Analyzing your financial query...";

/// One rendered line of message content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Line whose trimmed form starts with `*`; marker and padding stripped.
    ListItem(String),
    /// Any other line, including empty ones.
    Paragraph(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageView {
    pub role: Role,
    pub blocks: Vec<Block>,
}

/// Everything a frontend needs to draw the chat log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptView {
    pub messages: Vec<MessageView>,
    /// `Some(WAITING_TEXT)` while waiting; never part of the transcript.
    pub pending: Option<&'static str>,
}

/// Split content on `'\n'` and classify each line.
#[must_use]
pub fn render_content(content: &str) -> Vec<Block> {
    content.split('\n').map(render_line).collect()
}

fn render_line(line: &str) -> Block {
    match line.trim_start().strip_prefix('*') {
        Some(item) => Block::ListItem(item.trim().to_owned()),
        None => Block::Paragraph(line.to_owned()),
    }
}

#[must_use]
pub fn message_view(message: &Message) -> MessageView {
    MessageView { role: message.role(), blocks: render_content(message.content()) }
}

/// Project a session into its view. Pure; does not touch the session.
#[must_use]
pub fn transcript_view(session: &ChatSession) -> TranscriptView {
    TranscriptView {
        messages: session.transcript().iter().map(message_view).collect(),
        pending: session.is_waiting().then_some(WAITING_TEXT),
    }
}
