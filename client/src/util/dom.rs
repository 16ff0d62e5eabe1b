//! Window-level DOM helpers: scroll position, smooth scrolling, clipboard.

/// Current vertical scroll offset of the page.
#[must_use]
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.page_y_offset().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the window to an absolute vertical offset.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = top;
    }
}

/// Smooth-scroll to a same-page anchor, leaving room for the fixed header.
///
/// `href` is the raw link target (`"#services"`). No-ops when the hash is
/// bare (`"#"`), not a hash link at all, or names an element that does not
/// exist.
pub fn scroll_to_anchor(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(id) = href.strip_prefix('#') else {
            return;
        };
        if id.is_empty() {
            return;
        }
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let rect_top = target.get_bounding_client_rect().top();
        smooth_scroll_to(sitelogic::scroll::anchor_target(rect_top, scroll_y()));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = href;
    }
}

/// Attach a listener to a window event by name, for events (like
/// `online`/`offline`) that live outside the typed event map. The
/// listener stays attached for the life of the page.
pub fn on_window_event(name: &str, callback: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut()>::new(move || callback());
        if window
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .is_ok()
        {
            closure.forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = name;
        drop(callback);
    }
}

/// Copy text to the clipboard, reporting the outcome to `done`.
pub fn copy_text(text: String, done: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            done(false);
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        leptos::task::spawn_local(async move {
            let outcome = wasm_bindgen_futures::JsFuture::from(promise).await;
            done(outcome.is_ok());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = text;
        done(false);
    }
}
