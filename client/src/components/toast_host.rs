//! The single toast stack shared by every controller on the page.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
use sitelogic::consts::TOAST_DISMISS_MS;

/// Push a toast and schedule its auto-dismiss timer.
///
/// Each toast dismisses independently; manual close and the timer race,
/// and the loser is a no-op on an already-removed id.
pub fn push_toast(toasts: RwSignal<ToastState>, kind: ToastKind, text: impl Into<String>) {
    let id = toasts
        .try_update(|state| state.push(kind, text))
        .unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
            toasts.update(|state| state.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = (TOAST_DISMISS_MS, id);
    }
}

/// Blank-input guard shared by the AI workflows: every submit action
/// with an empty or whitespace-only primary input pushes exactly one
/// validation toast and sends nothing. Returns whether the submit stops.
pub fn reject_blank(toasts: RwSignal<ToastState>, value: &str, message: &'static str) -> bool {
    if sitelogic::validate::is_blank(value) {
        push_toast(toasts, ToastKind::Error, message);
        return true;
    }
    false
}

/// Fixed-position stack rendering every live toast with a close control.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast {}", toast.kind.css_class());
                        let text = toast.text.clone();
                        view! {
                            <div class=class>
                                <span class="toast__text">{text}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Yopish"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
