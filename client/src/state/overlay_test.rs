use super::*;

#[test]
fn overlay_starts_hidden() {
    assert!(!OverlayState::default().visible());
}

#[test]
fn begin_shows_and_finish_hides() {
    let mut state = OverlayState::default();
    state.begin();
    assert!(state.visible());
    state.finish();
    assert!(!state.visible());
}

#[test]
fn overlay_is_gone_after_success_path() {
    let mut state = OverlayState::default();
    state.begin();
    // Simulated success branch: render result, then unconditional cleanup.
    state.finish();
    assert!(!state.visible());
}

#[test]
fn overlay_is_gone_after_error_path() {
    let mut state = OverlayState::default();
    state.begin();
    // Simulated transport failure: toast, then the same cleanup.
    state.finish();
    assert!(!state.visible());
}

#[test]
fn overlapping_requests_keep_overlay_until_last_settles() {
    let mut state = OverlayState::default();
    state.begin();
    state.begin();
    state.finish();
    assert!(state.visible());
    state.finish();
    assert!(!state.visible());
}

#[test]
fn extra_finish_is_a_noop() {
    let mut state = OverlayState::default();
    state.finish();
    assert!(!state.visible());
}
