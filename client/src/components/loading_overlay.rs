//! Blocking loading indicator for the non-chat AI workflows.

use leptos::prelude::*;

use crate::state::overlay::OverlayState;

/// Full-screen modal shown while a blog/analyze/case-study/document
/// request is in flight. Visibility mirrors [`OverlayState`] exactly, and
/// the workflows clear that state on every completion path.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();

    view! {
        <Show when=move || overlay.get().visible()>
            <div class="loading-overlay">
                <div class="loading-overlay__box">
                    <div class="loading-overlay__spinner"></div>
                    <p>"AI ishlamoqda, iltimos kuting..."</p>
                </div>
            </div>
        </Show>
    }
}
