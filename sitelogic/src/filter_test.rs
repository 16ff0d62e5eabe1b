use super::*;

// =============================================================
// Visibility
// =============================================================

#[test]
fn wildcard_shows_everything() {
    assert!(matches(ALL, "telegram"));
    assert!(matches(ALL, "web"));
    assert!(matches(ALL, ""));
}

#[test]
fn category_filter_is_exact() {
    assert!(matches("telegram", "telegram"));
    assert!(!matches("telegram", "web"));
    assert!(!matches("telegram", "telegram-bot"));
}

#[test]
fn visible_indices_keep_display_order() {
    let categories = ["web", "telegram", "web", "instagram", "telegram"];
    assert_eq!(visible_indices("telegram", &categories), [1, 4]);
    assert_eq!(visible_indices(ALL, &categories), [0, 1, 2, 3, 4]);
    assert!(visible_indices("crm", &categories).is_empty());
}

// =============================================================
// Stagger
// =============================================================

#[test]
fn stagger_grows_with_index() {
    assert_eq!(stagger_delay_ms(0, 50), 0);
    assert_eq!(stagger_delay_ms(3, 50), 150);
    assert_eq!(stagger_delay_ms(3, 30), 90);
}

#[test]
fn stagger_saturates_instead_of_overflowing() {
    assert_eq!(stagger_delay_ms(usize::MAX, 50), u32::MAX);
}
