//! Scroll-reveal wrapper for marketing cards.

use leptos::prelude::*;

use sitelogic::consts::FADE_IN_MS;

use crate::util::visibility::observe_once;

/// Fades its children in the first time they scroll into view, then stays
/// revealed for good.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let shown = RwSignal::new(false);
    let armed = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };
        if armed.get_untracked() {
            return;
        }
        armed.set(true);
        observe_once(&el, move || shown.set(true));
    });

    view! {
        <div
            class="reveal"
            class:fade-in=move || shown.get()
            style:animation-duration=format!("{FADE_IN_MS}ms")
            node_ref=node
        >
            {children()}
        </div>
    }
}
