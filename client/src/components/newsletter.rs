//! Newsletter signup strip. Subscription is acknowledged locally after
//! a short delay; there is no backing endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::toast::{ToastKind, ToastState};

use super::toast_host::push_toast;

const MSG_THANKS: &str = "Obuna uchun rahmat! Tez orada yangiliklar yuboramiz.";
const LABEL_SUBSCRIBE: &str = "Obuna bo'lish";
const LABEL_SUBSCRIBING: &str = "Obuna bo'linyapti...";

#[component]
pub fn Newsletter() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || sitelogic::validate::is_blank(&email.get_untracked()) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(2000)).await;
            busy.set(false);
            email.set(String::new());
            push_toast(toasts, ToastKind::Success, MSG_THANKS);
        });
    };

    view! {
        <form class="newsletter" on:submit=on_submit>
            <input
                class="form-control"
                type="email"
                placeholder="Email manzilingiz"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <button class="btn btn--secondary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { LABEL_SUBSCRIBING } else { LABEL_SUBSCRIBE }}
            </button>
        </form>
    }
}
