//! UI components: global affordances, marketing page behaviors, and the
//! five AI workflow panels.

pub mod analyze_panel;
pub mod blog_panel;
pub mod case_study_panel;
pub mod chat_panel;
pub mod chat_widget;
pub mod contact_form;
pub mod counter_grid;
pub mod document_panel;
pub mod filter_grid;
pub mod loading_overlay;
pub mod navbar;
pub mod newsletter;
pub mod reveal;
pub mod scroll_top;
pub mod toast_host;
