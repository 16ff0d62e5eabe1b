//! Case study generation panel backed by `/ai/case-study`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::state::overlay::OverlayState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::dom;

use super::toast_host::{push_toast, reject_blank};

const MSG_PROJECT_REQUIRED: &str = "Loyiha ma'lumotlarini kiriting";
const MSG_CREATED: &str = "Case study muvaffaqiyatli yaratildi!";
const MSG_COPIED: &str = "Matn nusxalandi!";
const MSG_COPY_FAILED: &str = "Nusxalashda xatolik yuz berdi";

#[component]
pub fn CaseStudyPanel() -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let project_info = RwSignal::new(String::new());
    let result = RwSignal::new(None::<Result<String, String>>);

    let on_generate = move |_| {
        let text = project_info.get_untracked().trim().to_string();
        if reject_blank(toasts, &text, MSG_PROJECT_REQUIRED) {
            return;
        }
        overlay.update(OverlayState::begin);
        spawn_local(async move {
            let outcome = api::generate_case_study(&text).await;
            overlay.update(OverlayState::finish);
            match outcome {
                Ok(resp) if resp.success => {
                    result.set(Some(Ok(resp.case_study.unwrap_or_default())));
                    push_toast(toasts, ToastKind::Success, MSG_CREATED);
                }
                Ok(resp) => {
                    result.set(Some(Err(resp.failure_text().to_string())));
                }
                Err(text) => push_toast(toasts, ToastKind::Error, text),
            }
        });
    };

    let on_copy = move |_| {
        let Some(Ok(text)) = result.get_untracked() else {
            return;
        };
        dom::copy_text(text, move |copied| {
            if copied {
                push_toast(toasts, ToastKind::Success, MSG_COPIED);
            } else {
                push_toast(toasts, ToastKind::Error, MSG_COPY_FAILED);
            }
        });
    };

    view! {
        <div class="ai-panel" id="ai-case-study">
            <h3 class="ai-panel__title">"Case study yaratish"</h3>
            <textarea
                class="form-control"
                rows="4"
                placeholder="Loyiha haqida ma'lumot kiriting"
                prop:value=move || project_info.get()
                on:input=move |ev| project_info.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" on:click=on_generate>
                "Yaratish"
            </button>
            <div class="ai-panel__result">
                {move || result.get().map(move |outcome| render_result(outcome, on_copy))}
            </div>
        </div>
    }
}

fn render_result(
    outcome: Result<String, String>,
    on_copy: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    match outcome {
        Ok(text) => {
            // Paragraph breaks in the payload become separate <p> nodes.
            let paragraphs = text
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .map(|line| view! { <p>{line.to_string()}</p> })
                .collect::<Vec<_>>();
            view! {
                <div class="case-study">
                    <div class="case-study__body">{paragraphs}</div>
                    <button class="btn btn--secondary" on:click=on_copy>
                        "Nusxalash"
                    </button>
                </div>
            }
            .into_any()
        }
        Err(text) => view! { <div class="alert alert--error">{text}</div> }.into_any(),
    }
}
