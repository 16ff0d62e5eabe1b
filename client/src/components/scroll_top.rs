//! Floating scroll-to-top button.

use leptos::prelude::*;

use crate::util::dom;

/// Appears once the page has scrolled past the threshold; clicking it
/// smooth-scrolls back to the very top.
#[component]
pub fn ScrollTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        visible.set(sitelogic::scroll::show_scroll_top(dom::scroll_y()));
    });
    on_cleanup(move || handle.remove());

    view! {
        <button
            class="scroll-top"
            aria-label="Yuqoriga chiqish"
            style:display=move || if visible.get() { "block" } else { "none" }
            on:click=move |_| dom::smooth_scroll_to(0.0)
        >
            "↑"
        </button>
    }
}
