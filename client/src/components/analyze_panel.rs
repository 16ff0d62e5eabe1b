//! Message analysis panel backed by `/ai/analyze`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::net::types::Recommendation;
use crate::state::overlay::OverlayState;
use crate::state::toast::{ToastKind, ToastState};

use super::toast_host::{push_toast, reject_blank};

const MSG_TEXT_REQUIRED: &str = "Xabar matnini kiriting";
const MSG_ANALYZED: &str = "Xabar muvaffaqiyatli tahlil qilindi!";

type AnalyzeOutcome = Result<(Option<Recommendation>, Option<String>), String>;

#[component]
pub fn AnalyzePanel() -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let message = RwSignal::new(String::new());
    let result = RwSignal::new(None::<AnalyzeOutcome>);

    let on_analyze = move |_| {
        let text = message.get_untracked().trim().to_string();
        if reject_blank(toasts, &text, MSG_TEXT_REQUIRED) {
            return;
        }
        overlay.update(OverlayState::begin);
        spawn_local(async move {
            let outcome = api::analyze_message(&text).await;
            overlay.update(OverlayState::finish);
            match outcome {
                Ok(resp) if resp.success => {
                    result.set(Some(Ok((resp.recommendation, resp.analysis))));
                    push_toast(toasts, ToastKind::Success, MSG_ANALYZED);
                }
                Ok(resp) => {
                    result.set(Some(Err(resp.failure_text().to_string())));
                }
                Err(text) => push_toast(toasts, ToastKind::Error, text),
            }
        });
    };

    view! {
        <div class="ai-panel" id="ai-analyze">
            <h3 class="ai-panel__title">"Xabar tahlili"</h3>
            <textarea
                class="form-control"
                rows="4"
                placeholder="Mijoz xabarini kiriting"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" on:click=on_analyze>
                "Tahlil qilish"
            </button>
            <div class="ai-panel__result">
                {move || result.get().map(render_result)}
            </div>
        </div>
    }
}

fn render_result(outcome: AnalyzeOutcome) -> impl IntoView {
    match outcome {
        Ok((recommendation, analysis)) => view! {
            <div>
                {recommendation.map(recommendation_card)}
                {analysis.map(|text| view! { <p class="ai-panel__analysis">{text}</p> })}
            </div>
        }
        .into_any(),
        Err(text) => view! { <div class="alert alert--error">{text}</div> }.into_any(),
    }
}

fn recommendation_card(rec: Recommendation) -> impl IntoView {
    view! {
        <div class="recommendation-card">
            <h4 class="recommendation-card__service">{rec.service}</h4>
            <p class="recommendation-card__description">{rec.description}</p>
            <a class="btn btn--secondary" href=rec.url>
                "Batafsil"
            </a>
        </div>
    }
}
