use super::*;

fn transcript() -> WidgetState {
    let mut state = WidgetState::default();
    state.submit("narx qancha?");
    state
}

// =============================================================
// Bubble rendering
// =============================================================

#[test]
fn bubbles_outlive_the_widget_snapshot() {
    // Same shape as the panel: bubbles rebuilt from a temporary snapshot
    // must own their text.
    let bubbles: Vec<_> = transcript().messages.iter().map(message_bubble).collect();
    assert_eq!(bubbles.len(), 3);
}
