//! Plain-text rendering of transcript messages.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use advisor::{Block, Message, render_content};

const BULLET: &str = "  • ";

/// Render a message's line blocks for the terminal: list items get a bullet,
/// everything else prints verbatim (empty lines included).
pub fn format_message(message: &Message) -> String {
    render_content(message.content())
        .into_iter()
        .map(|block| match block {
            Block::ListItem(text) => format!("{BULLET}{text}"),
            Block::Paragraph(text) => text,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
