//! Document analysis panel backed by `/ai/document`.
//!
//! The only panel that uploads a file; the pick and the size check both
//! happen before any network traffic.

use leptos::prelude::*;

use crate::state::overlay::OverlayState;
use crate::state::toast::{ToastKind, ToastState};

use super::toast_host::push_toast;

const MSG_FILE_REQUIRED: &str = "Fayl tanlang";
const MSG_FILE_TOO_LARGE: &str = "Fayl hajmi 10MB dan kichik bo'lishi kerak";
const MSG_ANALYZED: &str = "Hujjat muvaffaqiyatli tahlil qilindi!";

#[derive(Clone, PartialEq)]
struct DocumentReport {
    file_type: Option<String>,
    extracted_text: Option<String>,
    analysis: Option<String>,
}

#[component]
pub fn DocumentPanel() -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();
    let result = RwSignal::new(None::<Result<DocumentReport, String>>);

    let on_analyze = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use leptos::task::spawn_local;

            use crate::net::api;

            let Some(file) = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                push_toast(toasts, ToastKind::Error, MSG_FILE_REQUIRED);
                return;
            };
            if sitelogic::validate::file_too_large(file.size()) {
                push_toast(toasts, ToastKind::Error, MSG_FILE_TOO_LARGE);
                return;
            }
            overlay.update(OverlayState::begin);
            spawn_local(async move {
                let outcome = api::analyze_document(&file).await;
                overlay.update(OverlayState::finish);
                match outcome {
                    Ok(resp) if resp.success => {
                        result.set(Some(Ok(DocumentReport {
                            file_type: resp.file_type,
                            extracted_text: resp.extracted_text,
                            analysis: resp.analysis,
                        })));
                        push_toast(toasts, ToastKind::Success, MSG_ANALYZED);
                    }
                    Ok(resp) => {
                        result.set(Some(Err(resp.failure_text().to_string())));
                    }
                    Err(text) => push_toast(toasts, ToastKind::Error, text),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _unused = (overlay, result, file_input);
            push_toast(toasts, ToastKind::Error, MSG_FILE_REQUIRED);
        }
    };

    view! {
        <div class="ai-panel" id="ai-document">
            <h3 class="ai-panel__title">"Hujjat tahlili"</h3>
            <div class="ai-panel__input-row">
                <input
                    class="form-control"
                    type="file"
                    accept=".pdf,.docx,.txt"
                    node_ref=file_input
                />
                <button class="btn btn--primary" on:click=on_analyze>
                    "Tahlil qilish"
                </button>
            </div>
            <div class="ai-panel__result">
                {move || result.get().map(render_result)}
            </div>
        </div>
    }
}

fn render_result(outcome: Result<DocumentReport, String>) -> impl IntoView {
    match outcome {
        Ok(report) => view! {
            <div class="document-report">
                {report
                    .file_type
                    .map(|kind| view! { <span class="document-report__type">{kind}</span> })}
                {report.extracted_text.map(|text| {
                    view! {
                        <details class="document-report__extract">
                            <summary>"Ajratib olingan matn"</summary>
                            <pre>{text}</pre>
                        </details>
                    }
                })}
                {report
                    .analysis
                    .map(|text| view! { <p class="document-report__analysis">{text}</p> })}
            </div>
        }
        .into_any(),
        Err(text) => view! { <div class="alert alert--error">{text}</div> }.into_any(),
    }
}
