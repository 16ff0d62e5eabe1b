#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::consts::MAX_UPLOAD_BYTES;

/// What kind of value a form field holds, which decides the shape rules
/// applied on top of the `required` check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Person name; at least two characters when present.
    Name,
    /// Email address; must look like `local@domain.tld`.
    Email,
    /// Uzbek phone number in the formatted `+998 NN NNN NN NN` shape.
    Phone,
    /// Free-form message; at least ten characters when present.
    Message,
    /// Anything else (selects, subjects); only the `required` rule applies.
    Text,
}

/// Outcome of validating one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    /// Invalid, with the inline message to show under the field.
    Invalid(&'static str),
}

impl Verdict {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

pub const MSG_REQUIRED: &str = "Bu maydon majburiy";
pub const MSG_EMAIL: &str = "Email manzili noto'g'ri";
pub const MSG_PHONE: &str = "Telefon raqami noto'g'ri formatda";
pub const MSG_NAME_SHORT: &str = "Ism juda qisqa";
pub const MSG_MESSAGE_SHORT: &str = "Xabar juda qisqa";

/// Validate a single field value.
///
/// Pure function of `(value, kind, required)`: trims the value, applies the
/// required rule first, then the kind-specific shape rule. Empty optional
/// fields are always valid — shape rules only run on non-empty input,
/// mirroring how the contact form treats optional phone/email fields.
#[must_use]
pub fn validate_field(value: &str, kind: FieldKind, required: bool) -> Verdict {
    let value = value.trim();

    if value.is_empty() {
        return if required {
            Verdict::Invalid(MSG_REQUIRED)
        } else {
            Verdict::Ok
        };
    }

    match kind {
        FieldKind::Name if value.chars().count() < 2 => Verdict::Invalid(MSG_NAME_SHORT),
        FieldKind::Email if !email_shape(value) => Verdict::Invalid(MSG_EMAIL),
        FieldKind::Phone if !phone_shape(value) => Verdict::Invalid(MSG_PHONE),
        FieldKind::Message if value.chars().count() < 10 => Verdict::Invalid(MSG_MESSAGE_SHORT),
        _ => Verdict::Ok,
    }
}

/// `local@domain.tld` shape: exactly one `@`, a dot in the domain part,
/// no whitespace, nothing empty around the separators.
fn email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Formatted Uzbek number: `+998 NN NNN NN NN`.
fn phone_shape(value: &str) -> bool {
    let mut parts = value.split(' ');
    let groups = [
        (parts.next(), "+998"),
        (parts.next(), "dd"),
        (parts.next(), "ddd"),
        (parts.next(), "dd"),
        (parts.next(), "dd"),
    ];
    if parts.next().is_some() {
        return false;
    }
    groups.iter().all(|(part, expect)| match (part, *expect) {
        (Some(p), "+998") => *p == "+998",
        (Some(p), pattern) => p.len() == pattern.len() && p.chars().all(|c| c.is_ascii_digit()),
        (None, _) => false,
    })
}

/// Guard used by every AI workflow before any request is sent: a trimmed
/// empty primary input blocks the submit.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Client-side size guard for the document workflow (10 MiB cap).
#[must_use]
pub fn file_too_large(size_bytes: f64) -> bool {
    size_bytes > MAX_UPLOAD_BYTES
}
