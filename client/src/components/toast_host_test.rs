use super::*;

// =============================================================
// Blank-input guard
// =============================================================

#[test]
fn blank_input_pushes_one_validation_toast_and_blocks() {
    let toasts = RwSignal::new(ToastState::default());
    assert!(reject_blank(toasts, "   ", "Xabar matnini kiriting"));

    let state = toasts.get_untracked();
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
    assert_eq!(state.toasts[0].text, "Xabar matnini kiriting");
}

#[test]
fn empty_input_blocks_like_whitespace() {
    let toasts = RwSignal::new(ToastState::default());
    assert!(reject_blank(toasts, "", "Mavzu kiritish majburiy"));
    assert_eq!(toasts.get_untracked().toasts.len(), 1);
}

#[test]
fn non_blank_input_passes_without_toast() {
    let toasts = RwSignal::new(ToastState::default());
    assert!(!reject_blank(toasts, " salom ", "Xabar matnini kiriting"));
    assert!(toasts.get_untracked().toasts.is_empty());
}

// =============================================================
// Push
// =============================================================

#[test]
fn push_toast_appends_to_the_stack() {
    let toasts = RwSignal::new(ToastState::default());
    push_toast(toasts, ToastKind::Success, "bir");
    push_toast(toasts, ToastKind::Warning, "ikki");

    let state = toasts.get_untracked();
    let texts: Vec<&str> = state.toasts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["bir", "ikki"]);
}
