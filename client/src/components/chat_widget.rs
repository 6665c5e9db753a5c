//! Floating assistant chat: toggle button plus message window.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget owns its `ChatState` signal. Each send spawns one reply request
//! on the page's `TaskScope`, so replies still pending when the page unmounts
//! are aborted instead of writing into a disposed signal. Closing the window
//! only hides it; pending replies still land in the log.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::ChatClient;
use crate::state::chat::ChatState;
use crate::util::task_scope::TaskScope;

#[component]
pub fn ChatWidget(client: Arc<dyn ChatClient>, scope: TaskScope) -> impl IntoView {
    let chat = RwSignal::new(ChatState::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = Callback::new(move |()| {
        let Some(text) = chat.try_update(ChatState::send).flatten() else {
            return;
        };
        let client = client.clone();
        scope.spawn(async move {
            match client.reply(&text).await {
                Ok(reply) => chat.update(|c| c.receive_reply(reply)),
                Err(err) => log::warn!("{} ({}): {err}", err.user_message(), err.error_code()),
            }
        });
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send.run(());
        }
    };

    let is_open = move || chat.with(|c| c.open);

    view! {
        <button
            class="chat-toggle"
            type="button"
            aria-label=move || if is_open() { "Close chat" } else { "Open chat" }
            on:click=move |_| chat.update(ChatState::toggle)
        >
            {move || if is_open() { "✕" } else { "💬" }}
        </button>

        <div class="chat-window" class:chat-window--open=is_open aria-hidden=move || (!is_open()).to_string()>
            <div class="chat-window__header">
                <div class="chat-window__identity">
                    <span class="avatar avatar--small">"👤"</span>
                    <div>
                        <div class="chat-window__title">"Dr. Ajith's Assistant"</div>
                        <div class="chat-window__status">"Online now"</div>
                    </div>
                </div>
                <button
                    class="chat-window__close"
                    type="button"
                    aria-label="Close chat"
                    on:click=move |_| chat.update(ChatState::close)
                >
                    "✕"
                </button>
            </div>

            <div class="chat-window__messages" node_ref=messages_ref>
                {move || {
                    chat.with(|c| {
                        c.messages
                            .iter()
                            .map(|msg| {
                                let from_user = msg.is_from_user();
                                let text = msg.text.clone();
                                view! {
                                    <div
                                        class="chat-row"
                                        class:chat-row--user=from_user
                                        class:chat-row--bot={!from_user}
                                    >
                                        <div class="chat-bubble">{text}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>

            <div class="chat-window__input-row">
                <input
                    class="chat-window__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| chat.update(|c| c.set_input(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-window__send" type="button" on:click=move |_| do_send.run(())>
                    "➤"
                </button>
            </div>
        </div>
    }
}
