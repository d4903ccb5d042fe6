//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat log, input form, and preset prompts while
//! reading/writing the shared `ChatState` from Leptos context.

pub mod chat_panel;
pub mod message_bubble;
pub mod quick_queries;
