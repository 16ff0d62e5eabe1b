//! Animated stat counters for the hero section.

use leptos::prelude::*;

use crate::util::visibility::observe_once;
use sitelogic::counter::Counter;

/// The site's headline stats. `24` is the support hotline and renders as
/// `24/7`; everything else gets a `+` suffix.
const STATS: &[(&str, u32)] = &[
    ("Loyihalar", 50),
    ("Mijozlar", 30),
    ("Qo'llab-quvvatlash", 24),
    ("Yillik tajriba", 5),
];

#[component]
pub fn CounterGrid() -> impl IntoView {
    view! {
        <div class="counter-grid" id="stats">
            {STATS
                .iter()
                .map(|(label, target)| {
                    view! { <StatCounter label=*label target=*target/> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// One counter cell. Starts ticking the first time it becomes visible in
/// the viewport and never re-triggers; the tick loop clamps at the target
/// so the final label is always exact.
#[component]
fn StatCounter(label: &'static str, target: u32) -> impl IntoView {
    let counter = RwSignal::new(Counter::new(target));
    let armed = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Span>::new();

    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };
        if armed.get_untracked() {
            return;
        }
        armed.set(true);
        observe_once(&el, move || animate(counter));
    });

    view! {
        <div class="counter-grid__cell">
            <span class="counter" node_ref=node>
                {move || counter.get().label()}
            </span>
            <span class="counter-grid__label">{label}</span>
        </div>
    }
}

/// Drive one counter to completion on a fixed-interval tick.
fn animate(counter: RwSignal<Counter>) {
    #[cfg(feature = "hydrate")]
    {
        let snapshot = counter.get_untracked();
        if snapshot.done() {
            return;
        }
        let interval = u64::from(snapshot.interval_ms().max(1));
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(interval)).await;
                let more = counter.try_update(Counter::tick).unwrap_or(false);
                if !more {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // No timers off-browser; snap straight to the target.
        counter.update(|c| while c.tick() {});
    }
}
