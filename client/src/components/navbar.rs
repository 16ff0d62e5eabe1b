//! Fixed navbar with reactive scroll styling and smooth anchor links.

use leptos::prelude::*;

use crate::util::dom;
use sitelogic::scroll::{NavbarLook, NavbarScroll};

/// Top navigation bar.
///
/// Recomputes its look on every scroll event (not debounced): a drop
/// shadow once the page has scrolled past the small threshold, and a
/// slide-out while scrolling down past the larger one. Anchor links are
/// intercepted and smooth-scrolled with the fixed header offset.
#[component]
pub fn Navbar() -> impl IntoView {
    let look = RwSignal::new(NavbarLook::default());
    let tracker = RwSignal::new(NavbarScroll::default());

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = dom::scroll_y();
        let mut state = tracker.get_untracked();
        look.set(state.observe(offset));
        tracker.set(state);
    });
    on_cleanup(move || handle.remove());

    let transform = move || {
        if look.get().hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    };

    let anchor = |target: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            dom::scroll_to_anchor(target);
        }
    };

    view! {
        <nav class="navbar" class:navbar--shadow=move || look.get().shadow style:transform=transform>
            <a href="/" class="navbar__brand">
                "SmartBot.uz"
            </a>
            <div class="navbar__links">
                <a href="#services" on:click=anchor("#services")>
                    "Xizmatlar"
                </a>
                <a href="#portfolio" on:click=anchor("#portfolio")>
                    "Portfolio"
                </a>
                <a href="#blog" on:click=anchor("#blog")>
                    "Blog"
                </a>
                <a href="#contact" on:click=anchor("#contact")>
                    "Aloqa"
                </a>
                <a href="/ai" class="navbar__cta">
                    "AI vositalar"
                </a>
            </div>
        </nav>
    }
}
