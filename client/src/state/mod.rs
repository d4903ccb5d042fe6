//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Reactive wrappers only. The chat rules live in `advisor::ChatSession`;
//! these types add the browser-side logging around it.

pub mod chat;
