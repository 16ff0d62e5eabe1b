//! One-shot viewport visibility via `IntersectionObserver`.
//!
//! Counters and scroll-reveal cards animate the first time they enter the
//! viewport and never again, so the observer unobserves each element as it
//! fires.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Invoke `on_visible` once, the first time `element` intersects the
/// viewport. The element is unobserved afterwards so the callback can
/// never re-fire.
#[cfg(feature = "hydrate")]
pub fn observe_once(element: &web_sys::Element, on_visible: impl Fn() + 'static) {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_visible();
                }
            }
        },
    );
    if let Ok(observer) = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        observer.observe(element);
    }
    // The observer outlives this scope; the closure must too.
    callback.forget();
}

/// Server-side stub; elements are never "visible" without a viewport.
#[cfg(not(feature = "hydrate"))]
pub fn observe_once<E>(element: &E, on_visible: impl Fn() + 'static) {
    let _unused = (element, &on_visible);
}
