use super::*;

// =============================================================
// Required rule
// =============================================================

#[test]
fn required_empty_is_invalid() {
    assert_eq!(
        validate_field("", FieldKind::Text, true),
        Verdict::Invalid(MSG_REQUIRED)
    );
}

#[test]
fn required_whitespace_only_is_invalid() {
    assert_eq!(
        validate_field("   ", FieldKind::Text, true),
        Verdict::Invalid(MSG_REQUIRED)
    );
}

#[test]
fn optional_empty_is_valid() {
    assert!(validate_field("", FieldKind::Email, false).is_ok());
    assert!(validate_field("", FieldKind::Phone, false).is_ok());
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_accepts_plain_address() {
    assert!(validate_field("ali@example.com", FieldKind::Email, true).is_ok());
}

#[test]
fn email_rejects_missing_at() {
    assert_eq!(
        validate_field("ali.example.com", FieldKind::Email, true),
        Verdict::Invalid(MSG_EMAIL)
    );
}

#[test]
fn email_rejects_missing_tld_dot() {
    assert_eq!(
        validate_field("ali@example", FieldKind::Email, true),
        Verdict::Invalid(MSG_EMAIL)
    );
}

#[test]
fn email_rejects_whitespace() {
    assert_eq!(
        validate_field("ali @example.com", FieldKind::Email, true),
        Verdict::Invalid(MSG_EMAIL)
    );
}

#[test]
fn email_rejects_double_at() {
    assert_eq!(
        validate_field("ali@@example.com", FieldKind::Email, true),
        Verdict::Invalid(MSG_EMAIL)
    );
}

#[test]
fn email_rejects_empty_local_part() {
    assert_eq!(
        validate_field("@example.com", FieldKind::Email, true),
        Verdict::Invalid(MSG_EMAIL)
    );
}

// =============================================================
// Phone shape
// =============================================================

#[test]
fn phone_accepts_formatted_uzbek_number() {
    assert!(validate_field("+998 90 123 45 67", FieldKind::Phone, true).is_ok());
}

#[test]
fn phone_rejects_unformatted_digits() {
    assert_eq!(
        validate_field("998901234567", FieldKind::Phone, true),
        Verdict::Invalid(MSG_PHONE)
    );
}

#[test]
fn phone_rejects_wrong_grouping() {
    assert_eq!(
        validate_field("+998 901 23 45 67", FieldKind::Phone, true),
        Verdict::Invalid(MSG_PHONE)
    );
}

#[test]
fn phone_rejects_letters_in_groups() {
    assert_eq!(
        validate_field("+998 9o 123 45 67", FieldKind::Phone, true),
        Verdict::Invalid(MSG_PHONE)
    );
}

#[test]
fn phone_rejects_trailing_group() {
    assert_eq!(
        validate_field("+998 90 123 45 67 89", FieldKind::Phone, true),
        Verdict::Invalid(MSG_PHONE)
    );
}

// =============================================================
// Length rules
// =============================================================

#[test]
fn name_rejects_single_character() {
    assert_eq!(
        validate_field("a", FieldKind::Name, true),
        Verdict::Invalid(MSG_NAME_SHORT)
    );
}

#[test]
fn name_accepts_two_characters() {
    assert!(validate_field("Al", FieldKind::Name, true).is_ok());
}

#[test]
fn message_rejects_short_text() {
    assert_eq!(
        validate_field("salom", FieldKind::Message, true),
        Verdict::Invalid(MSG_MESSAGE_SHORT)
    );
}

#[test]
fn message_accepts_ten_characters() {
    assert!(validate_field("salom dunyo", FieldKind::Message, true).is_ok());
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn validation_is_idempotent() {
    let cases = [
        ("", FieldKind::Text, true),
        ("ali@example.com", FieldKind::Email, true),
        ("+998 90 123 45 67", FieldKind::Phone, false),
        ("qisqa", FieldKind::Message, true),
    ];
    for (value, kind, required) in cases {
        assert_eq!(
            validate_field(value, kind, required),
            validate_field(value, kind, required)
        );
    }
}

// =============================================================
// Submit guards
// =============================================================

#[test]
fn blank_guard_catches_whitespace_only() {
    assert!(is_blank(""));
    assert!(is_blank("  \t "));
    assert!(!is_blank(" ok "));
}

#[test]
fn file_guard_uses_ten_mib_cap() {
    assert!(!file_too_large(10.0 * 1024.0 * 1024.0));
    assert!(file_too_large(10.0 * 1024.0 * 1024.0 + 1.0));
}
