use super::*;

// =============================================================
// Toggle
// =============================================================

#[test]
fn widget_starts_closed() {
    assert!(!WidgetState::default().open);
}

#[test]
fn toggle_flips_open_state() {
    let mut state = WidgetState::default();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn widget_opens_with_a_greeting() {
    let state = WidgetState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::Bot);
}

#[test]
fn submit_appends_user_line_then_reply() {
    let mut state = WidgetState::default();
    state.submit("narxlar qanday?");
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[1].sender, Sender::User);
    assert_eq!(state.messages[1].text, "narxlar qanday?");
    assert_eq!(state.messages[2].sender, Sender::Bot);
    assert_eq!(state.messages[2].text, sitelogic::responder::reply("narx"));
}

#[test]
fn unknown_topic_gets_fallback_reply() {
    let mut state = WidgetState::default();
    state.submit("zxcvbnm");
    assert_eq!(
        state.messages.last().map(|m| m.text.as_str()),
        Some(sitelogic::responder::FALLBACK)
    );
}

#[test]
fn replies_ignore_earlier_turns() {
    let mut state = WidgetState::default();
    state.submit("telegram bot kerak");
    state.submit("zxcvbnm");
    // The second reply is the fallback even though the previous turn
    // matched; each message is classified independently.
    assert_eq!(
        state.messages.last().map(|m| m.text.as_str()),
        Some(sitelogic::responder::FALLBACK)
    );
}
