//! Advisor chat panel: transcript, waiting line, and the query form.

use advisor::BackendConfig;
use leptos::prelude::*;

use crate::components::message_bubble::{MessageBubble, PendingBubble};
use crate::net::api::post_query;
use crate::state::chat::ChatState;

/// Chat panel showing message history and the query input.
///
/// Submitting sends one `POST /query`; the input and button are disabled until
/// the answer (or failure) has been recorded.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let endpoint = StoredValue::new(expect_context::<BackendConfig>().query_endpoint());

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.session.transcript().len(), c.is_waiting()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(request) = chat.try_update(ChatState::begin_submit).flatten() else {
            return;
        };
        let endpoint = endpoint.get_value();
        leptos::task::spawn_local(async move {
            let result = post_query(&endpoint, &request).await;
            chat.update(|c| c.finish(result));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let is_waiting = move || chat.with(ChatState::is_waiting);

    view! {
        <div class="chat-box" node_ref=messages_ref>
            {move || {
                let transcript = chat.with(ChatState::view);
                let messages = transcript
                    .messages
                    .into_iter()
                    .map(|message| view! { <MessageBubble message=message/> })
                    .collect::<Vec<_>>();
                view! {
                    {messages}
                    {transcript.pending.map(|text| view! { <PendingBubble text=text/> })}
                }
            }}
        </div>

        <form class="input-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Ask about investments, stocks, or finance..."
                disabled=is_waiting
                prop:value=move || chat.with(|c| c.session.input().to_owned())
                on:input=move |ev| chat.update(|c| c.session.set_input(event_target_value(&ev)))
            />
            <button type="submit" disabled=is_waiting>
                "Send"
            </button>
        </form>
    }
}
