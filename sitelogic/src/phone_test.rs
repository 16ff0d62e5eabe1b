use super::*;

// =============================================================
// Full number
// =============================================================

#[test]
fn full_number_formats_to_grouped_shape() {
    assert_eq!(format("998901234567"), "+998 90 123 45 67");
}

#[test]
fn progressive_typing_converges_on_final_shape() {
    // Simulate one input event per typed digit: each event re-formats the
    // previous formatted value with the new digit appended.
    let mut value = String::new();
    for digit in "998901234567".chars() {
        value.push(digit);
        value = format(&value);
    }
    assert_eq!(value, "+998 90 123 45 67");
}

#[test]
fn formatting_is_idempotent() {
    let once = format("998901234567");
    assert_eq!(format(&once), once);
}

// =============================================================
// Partial input
// =============================================================

#[test]
fn bare_prefix_gets_plus_only() {
    assert_eq!(format("998"), "+998");
}

#[test]
fn partial_groups_format_incrementally() {
    assert_eq!(format("9989"), "+998 9");
    assert_eq!(format("99890"), "+998 90");
    assert_eq!(format("998901"), "+998 90 1");
    assert_eq!(format("9989012345"), "+998 90 123 45");
}

// =============================================================
// Non-Uzbek input
// =============================================================

#[test]
fn non_prefix_digits_pass_through() {
    assert_eq!(format("901234567"), "901234567");
    assert_eq!(format("12345"), "12345");
}

#[test]
fn non_digits_are_stripped() {
    assert_eq!(format("(90) 123-45-67"), "901234567");
    assert_eq!(format("+998 90 123 45 67"), "+998 90 123 45 67");
}

#[test]
fn excess_digits_are_truncated() {
    assert_eq!(format("99890123456789"), "+998 90 123 45 67");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(format(""), "");
}
