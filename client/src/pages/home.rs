//! Home page: the whole app is this one screen.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::quick_queries::QuickQueries;

#[component]
pub fn AdvisorPage() -> impl IntoView {
    view! {
        <div class="app-container">
            <h2>"💰 AI Wealth Management Advisor"</h2>
            <QuickQueries/>
            <ChatPanel/>
        </div>
    }
}
