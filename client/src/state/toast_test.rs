use super::*;

// =============================================================
// Stacking
// =============================================================

#[test]
fn toasts_stack_in_push_order() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "bir");
    state.push(ToastKind::Error, "ikki");
    state.push(ToastKind::Info, "uch");
    let texts: Vec<&str> = state.toasts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["bir", "ikki", "uch"]);
}

#[test]
fn ids_are_unique_across_dismissals() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "b");
    assert_ne!(a, b);
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    let b = state.push(ToastKind::Error, "b");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn double_dismiss_is_a_noop() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    state.dismiss(a);
    state.dismiss(a);
    assert!(state.toasts.is_empty());
}

// =============================================================
// Kinds
// =============================================================

#[test]
fn kinds_map_to_distinct_css_classes() {
    let classes = [
        ToastKind::Success.css_class(),
        ToastKind::Error.css_class(),
        ToastKind::Warning.css_class(),
        ToastKind::Info.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
