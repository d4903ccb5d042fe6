//! Preset prompts that fill the input without sending it.

#[cfg(test)]
#[path = "quick_queries_test.rs"]
mod quick_queries_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;

pub const QUICK_QUERIES: &[&str] = &[
    "What is the current price of AAPL?",
    "How did TSLA perform last week?",
    "Should I diversify into index funds?",
    "What are safe investments during inflation?",
];

/// Row of preset prompt chips. Clicking one only sets the input text.
#[component]
pub fn QuickQueries() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <div class="quick-queries">
            {QUICK_QUERIES
                .iter()
                .map(|&text| {
                    view! {
                        <button
                            type="button"
                            class="quick-queries__chip"
                            on:click=move |_| chat.update(|c| c.session.set_quick_query(text))
                        >
                            {text}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
