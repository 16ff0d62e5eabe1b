//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chat_widget::ChatWidget;
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::navbar::Navbar;
use crate::components::scroll_top::ScrollTop;
use crate::components::toast_host::{ToastHost, push_toast};
use crate::pages::{ai_tools::AiToolsPage, home::HomePage};
use crate::state::chat::ChatState;
use crate::state::overlay::OverlayState;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::widget::WidgetState;
use crate::util::dom;

const MSG_ONLINE: &str = "Internet aloqasi tiklandi";
const MSG_OFFLINE: &str = "Internet aloqasi yo'q";

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let chat = RwSignal::new(ChatState::default());
    let widget = RwSignal::new(WidgetState::default());
    let toasts = RwSignal::new(ToastState::default());
    let overlay = RwSignal::new(OverlayState::default());

    provide_context(chat);
    provide_context(widget);
    provide_context(toasts);
    provide_context(overlay);

    // Surface connectivity changes as toasts for the life of the page.
    dom::on_window_event("online", move || {
        push_toast(toasts, ToastKind::Success, MSG_ONLINE);
    });
    dom::on_window_event("offline", move || {
        push_toast(toasts, ToastKind::Warning, MSG_OFFLINE);
    });
    #[cfg(feature = "hydrate")]
    dom::on_window_event("error", || {
        log::error!("unhandled script error");
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/smartbot-site.css"/>
        <Title text="SmartBot.uz"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Sahifa topilmadi.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("ai") view=AiToolsPage/>
            </Routes>
        </Router>

        <ToastHost/>
        <LoadingOverlay/>
        <ChatWidget/>
        <ScrollTop/>
    }
}
