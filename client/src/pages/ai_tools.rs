//! AI tools page hosting the five workflow panels.

use leptos::prelude::*;

use crate::components::analyze_panel::AnalyzePanel;
use crate::components::blog_panel::BlogPanel;
use crate::components::case_study_panel::CaseStudyPanel;
use crate::components::chat_panel::ChatPanel;
use crate::components::document_panel::DocumentPanel;

#[component]
pub fn AiToolsPage() -> impl IntoView {
    view! {
        <main class="ai-tools">
            <div class="container">
                <h1 class="section-title">"AI vositalar"</h1>
                <p class="ai-tools__intro">
                    "Sun'iy intellekt yordamida kontent yarating, mijoz xabarlarini tahlil qiling va hujjatlar bilan ishlang."
                </p>
                <div class="ai-tools__grid">
                    <ChatPanel />
                    <BlogPanel />
                    <AnalyzePanel />
                    <CaseStudyPanel />
                    <DocumentPanel />
                </div>
            </div>
        </main>
    }
}
