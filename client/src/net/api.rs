//! REST helpers for the `/ai/*` endpoints and AJAX form posts.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side:
//! stubs returning the transport-failure text, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is fire-and-forget: no retry, timeout, or cancellation. A
//! transport or parse failure maps to a fixed localized message distinct
//! from a server-reported `success: false`, and that message is the whole
//! `Err` value — callers turn it into a toast or panel, never a panic.

#![allow(clippy::unused_async)]

use super::types::{AnalyzeResponse, BlogResponse, CaseStudyResponse, ChatResponse};
#[cfg(feature = "hydrate")]
use super::types::{DocumentResponse, FormResponse};

pub const ERR_CHAT: &str = "Aloqa xatosi yuz berdi. Iltimos, qaytadan urinib ko'ring.";
pub const ERR_BLOG: &str = "Blog yaratishda xatolik yuz berdi";
pub const ERR_ANALYZE: &str = "Tahlil qilishda xatolik yuz berdi";
pub const ERR_CASE_STUDY: &str = "Case study yaratishda xatolik yuz berdi";
pub const ERR_DOCUMENT: &str = "Hujjat tahlilida xatolik yuz berdi";
pub const ERR_FORM: &str = "Xatolik yuz berdi. Iltimos, qaytadan urinib ko'ring.";

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    url: &str,
    body: &serde_json::Value,
    err_text: &'static str,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|_| err_text.to_owned())?
        .send()
        .await
        .map_err(|_| err_text.to_owned())?;
    resp.json::<T>().await.map_err(|_| err_text.to_owned())
}

/// `POST /ai/chat` with the user's message.
pub async fn send_chat(message: &str) -> Result<ChatResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/ai/chat", &serde_json::json!({ "message": message }), ERR_CHAT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = message;
        Err(ERR_CHAT.to_owned())
    }
}

/// `POST /ai/blog` with the requested topic.
pub async fn generate_blog(topic: &str) -> Result<BlogResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/ai/blog", &serde_json::json!({ "topic": topic }), ERR_BLOG).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = topic;
        Err(ERR_BLOG.to_owned())
    }
}

/// `POST /ai/analyze` with a customer message.
pub async fn analyze_message(message: &str) -> Result<AnalyzeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/ai/analyze", &serde_json::json!({ "message": message }), ERR_ANALYZE).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = message;
        Err(ERR_ANALYZE.to_owned())
    }
}

/// `POST /ai/case-study` with free-form project info.
pub async fn generate_case_study(project_info: &str) -> Result<CaseStudyResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/ai/case-study",
            &serde_json::json!({ "project_info": project_info }),
            ERR_CASE_STUDY,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = project_info;
        Err(ERR_CASE_STUDY.to_owned())
    }
}

/// `POST /ai/document` with the selected file as multipart form data.
///
/// The 10 MiB size guard runs in the panel before this is called.
#[cfg(feature = "hydrate")]
pub async fn analyze_document(file: &web_sys::File) -> Result<DocumentResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| ERR_DOCUMENT.to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| ERR_DOCUMENT.to_owned())?;

    let resp = gloo_net::http::Request::post("/ai/document")
        .body(form)
        .map_err(|_| ERR_DOCUMENT.to_owned())?
        .send()
        .await
        .map_err(|_| ERR_DOCUMENT.to_owned())?;
    resp.json::<DocumentResponse>()
        .await
        .map_err(|_| ERR_DOCUMENT.to_owned())
}

/// Submit a form's data to its action URL with the AJAX marker header.
///
/// A JSON reply is parsed for `{success, message}`; a non-JSON content
/// type is tolerated as implicit success, matching how plain redirect
/// responses from the form handler are treated.
#[cfg(feature = "hydrate")]
pub async fn submit_form(action: &str, form: web_sys::FormData) -> Result<FormResponse, String> {
    let resp = gloo_net::http::Request::post(action)
        .header("X-Requested-With", "XMLHttpRequest")
        .body(form)
        .map_err(|_| ERR_FORM.to_owned())?
        .send()
        .await
        .map_err(|_| ERR_FORM.to_owned())?;

    let is_json = resp
        .headers()
        .get("content-type")
        .is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        return Ok(FormResponse {
            success: true,
            message: None,
        });
    }
    resp.json::<FormResponse>()
        .await
        .map_err(|_| ERR_FORM.to_owned())
}
