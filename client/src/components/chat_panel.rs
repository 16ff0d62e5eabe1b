//! AI chat panel backed by `/ai/chat`.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::state::chat::ChatState;
use crate::state::toast::ToastState;
use crate::state::{ChatMessage, Sender};

use super::toast_host::reject_blank;

const MSG_TEXT_REQUIRED: &str = "Xabar matnini kiriting";

#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = chat.get();
        let _tracked = (state.messages.len(), state.typing);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let trimmed = input.get().trim().to_string();
        if reject_blank(toasts, &trimmed, MSG_TEXT_REQUIRED) {
            return;
        }
        input.set(String::new());
        chat.update(|state| state.begin(&trimmed));
        spawn_local(async move {
            let outcome = api::send_chat(&trimmed).await;
            let reply = match outcome {
                Ok(resp) => Ok(resp.response.unwrap_or_default()),
                Err(text) => Err(text),
            };
            chat.update(|state| state.settle(reply));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="ai-panel" id="ai-chat">
            <h3 class="ai-panel__title">"AI chat"</h3>
            <div class="ai-chat__messages" node_ref=messages_ref>
                {move || {
                    chat.get().messages.iter().map(message_bubble).collect::<Vec<_>>()
                }}
                <Show when=move || chat.get().typing>
                    <div class="chat-message">
                        <div class="typing-dots">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                </Show>
            </div>
            <div class="ai-chat__input-row">
                <input
                    class="ai-chat__input"
                    type="text"
                    placeholder="Savolingizni yozing..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=move |_| do_send()>
                    "Yuborish"
                </button>
            </div>
        </div>
    }
}

fn message_bubble(message: &ChatMessage) -> impl IntoView + use<> {
    let from_user = message.sender == Sender::User;
    let text = message.text.clone();
    view! {
        <div class="chat-message" class:chat-message--user=from_user>
            <div class="chat-message__text">{text}</div>
        </div>
    }
}
