//! Category-filtered card grid, shared by the portfolio and blog sections.
//! One component, parameterized by card set and stagger delay.

use leptos::prelude::*;

use sitelogic::consts::FADE_IN_MS;
use sitelogic::filter;

/// One filterable card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCard {
    pub category: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Filter buttons plus the card grid.
///
/// Exactly one button is active at a time; clicking re-renders the grid so
/// only matching cards exist in the DOM, each with a fade-in delayed
/// proportionally to its position in the full card list.
#[component]
pub fn FilterGrid(
    filters: Vec<(&'static str, &'static str)>,
    cards: Vec<FilterCard>,
    stagger_ms: u32,
) -> impl IntoView {
    let active = RwSignal::new(filter::ALL);

    let buttons = filters
        .into_iter()
        .map(|(value, label)| {
            view! {
                <button
                    class="filter-btn"
                    class:active=move || active.get() == value
                    on:click=move |_| active.set(value)
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="filter-grid">
            <div class="filter-grid__buttons">{buttons}</div>
            <div class="filter-grid__cards">
                {move || {
                    let current = active.get();
                    let categories: Vec<&str> =
                        cards.iter().map(|card| card.category).collect();
                    filter::visible_indices(current, &categories)
                        .into_iter()
                        .map(|index| {
                            let card = &cards[index];
                            let delay = filter::stagger_delay_ms(index, stagger_ms);
                            view! {
                                <div
                                    class="filter-grid__card fade-in"
                                    style:animation-delay=format!("{delay}ms")
                                    style:animation-duration=format!("{FADE_IN_MS}ms")
                                >
                                    <h5>{card.title}</h5>
                                    <p>{card.blurb}</p>
                                    <span class="filter-grid__tag">{card.category}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
