//! Floating rule-based chat widget.
//!
//! Answers entirely from the local keyword table in
//! `sitelogic::responder` — no network call, no context across turns.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::state::widget::WidgetState;
use crate::state::{ChatMessage, Sender};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let widget = expect_context::<RwSignal<WidgetState>>();
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Pin the transcript to its newest entry.
    Effect::new(move || {
        let _tracked = widget.get().messages.len();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if sitelogic::validate::is_blank(&text) {
            return;
        }
        widget.update(|state| state.submit(text.trim()));
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-widget">
            <Show when=move || widget.get().open>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <span>"SmartBot yordamchisi"</span>
                        <button
                            class="chat-widget__close"
                            on:click=move |_| widget.update(WidgetState::toggle)
                        >
                            "×"
                        </button>
                    </div>
                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || {
                            widget
                                .get()
                                .messages
                                .iter()
                                .map(message_bubble)
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <div class="chat-widget__input-row">
                        <input
                            class="chat-widget__input"
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
            </Show>
            <button
                class="chat-widget__toggle"
                aria-label="Chat oynasini ochish"
                on:click=move |_| widget.update(WidgetState::toggle)
            >
                {move || if widget.get().open { "×" } else { "💬" }}
            </button>
        </div>
    }
}

fn message_bubble(message: &ChatMessage) -> impl IntoView + use<> {
    let from_user = message.sender == Sender::User;
    let text = message.text.clone();
    view! {
        <div class="chat-message" class:chat-message--user=from_user>
            <small class="chat-message__author">
                {if from_user { "Siz" } else { "SmartBot" }}
            </small>
            <div class="chat-message__text">{text}</div>
        </div>
    }
}
