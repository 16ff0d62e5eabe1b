//! Response DTOs for the `/ai/*` endpoints and AJAX form posts.
//!
//! DESIGN
//! ======
//! Every payload carries a `success` flag that selects the rendering
//! branch. Success-only fields are optional with defaults so a failure
//! payload still deserializes, and the failure text field differs per
//! endpoint (`message` vs `error`) — [`failure_text`] hides that split
//! from the panels.
//!
//! [`failure_text`]: AnalyzeResponse::failure_text

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Generic failure text when the server reported `success: false` without
/// a usable message field.
pub const GENERIC_FAILURE: &str = "Xatolik yuz berdi";

/// `POST /ai/chat` reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    /// Bot reply on success; some failure payloads echo a message here too.
    #[serde(default)]
    pub response: Option<String>,
}

/// A generated blog article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: String,
    pub category: String,
}

/// `POST /ai/blog` reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub blog: Option<Blog>,
}

impl BlogResponse {
    #[must_use]
    pub fn failure_text(&self) -> &str {
        self.message.as_deref().unwrap_or(GENERIC_FAILURE)
    }
}

/// Service recommendation produced by message analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub service: String,
    pub description: String,
    pub url: String,
}

/// `POST /ai/analyze` reply. Failure uses `error`, not `message`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    #[must_use]
    pub fn failure_text(&self) -> &str {
        self.error.as_deref().unwrap_or(GENERIC_FAILURE)
    }
}

/// `POST /ai/case-study` reply. `case_study` is newline-delimited text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub case_study: Option<String>,
}

impl CaseStudyResponse {
    #[must_use]
    pub fn failure_text(&self) -> &str {
        self.message.as_deref().unwrap_or(GENERIC_FAILURE)
    }
}

/// `POST /ai/document` reply. Failure may use either `message` or `error`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub success: bool,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DocumentResponse {
    #[must_use]
    pub fn failure_text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or(GENERIC_FAILURE)
    }
}

/// JSON body of an AJAX form post reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
