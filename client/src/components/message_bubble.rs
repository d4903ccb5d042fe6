//! Single transcript message rendered as line blocks.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use advisor::{Block, MessageView, Role};
use leptos::prelude::*;

/// CSS class list for a message container.
fn bubble_class(role: Role) -> String {
    format!("message {}", role.as_str())
}

/// One message: `*` lines as list items, everything else as paragraphs.
#[component]
pub fn MessageBubble(message: MessageView) -> impl IntoView {
    let class = bubble_class(message.role);
    let blocks = message
        .blocks
        .into_iter()
        .map(|block| match block {
            Block::ListItem(text) => view! { <li>{text}</li> }.into_any(),
            Block::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class=class>
            <div>{blocks}</div>
        </div>
    }
}

/// Transient "waiting" line; styled like a bot message but not part of the transcript.
#[component]
pub fn PendingBubble(text: &'static str) -> impl IntoView {
    view! { <div class=bubble_class(Role::Bot)>{text}</div> }
}
