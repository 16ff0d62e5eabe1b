//! Blog generation panel backed by `/ai/blog`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::net::types::Blog;
use crate::state::overlay::OverlayState;
use crate::state::toast::{ToastKind, ToastState};

use super::toast_host::{push_toast, reject_blank};

const MSG_TOPIC_REQUIRED: &str = "Mavzu kiritish majburiy";
const MSG_BLOG_CREATED: &str = "Blog maqolasi muvaffaqiyatli yaratildi!";

#[component]
pub fn BlogPanel() -> impl IntoView {
    let overlay = expect_context::<RwSignal<OverlayState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let topic = RwSignal::new(String::new());
    let result = RwSignal::new(None::<Result<(Option<String>, Option<Blog>), String>>);

    let on_generate = move |_| {
        let text = topic.get_untracked().trim().to_string();
        if reject_blank(toasts, &text, MSG_TOPIC_REQUIRED) {
            return;
        }
        overlay.update(OverlayState::begin);
        spawn_local(async move {
            let outcome = api::generate_blog(&text).await;
            overlay.update(OverlayState::finish);
            match outcome {
                Ok(resp) if resp.success => {
                    result.set(Some(Ok((resp.message, resp.blog))));
                    push_toast(toasts, ToastKind::Success, MSG_BLOG_CREATED);
                }
                Ok(resp) => {
                    result.set(Some(Err(resp.failure_text().to_string())));
                }
                Err(text) => push_toast(toasts, ToastKind::Error, text),
            }
        });
    };

    view! {
        <div class="ai-panel" id="ai-blog">
            <h3 class="ai-panel__title">"Blog maqolasi yaratish"</h3>
            <div class="ai-panel__input-row">
                <input
                    class="form-control"
                    type="text"
                    placeholder="Maqola mavzusini kiriting"
                    prop:value=move || topic.get()
                    on:input=move |ev| topic.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=on_generate>
                    "Yaratish"
                </button>
            </div>
            <div class="ai-panel__result">
                {move || result.get().map(render_result)}
            </div>
        </div>
    }
}

fn render_result(outcome: Result<(Option<String>, Option<Blog>), String>) -> impl IntoView {
    match outcome {
        Ok((message, blog)) => view! {
            <div>
                {message.map(|text| view! { <div class="alert alert--success">{text}</div> })}
                {blog.map(blog_card)}
            </div>
        }
        .into_any(),
        Err(text) => view! { <div class="alert alert--error">{text}</div> }.into_any(),
    }
}

fn blog_card(blog: Blog) -> impl IntoView {
    view! {
        <article class="blog-card" data-blog-id=blog.id.to_string()>
            <span class="blog-card__category">{blog.category}</span>
            <h4 class="blog-card__title">{blog.title}</h4>
            // Rendered as a text node, so markup in the payload stays inert.
            <p class="blog-card__content">{blog.content}</p>
            <small class="blog-card__date">{blog.date}</small>
        </article>
    }
}
