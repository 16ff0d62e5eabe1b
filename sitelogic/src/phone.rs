#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Re-format a phone input's current value as the user types.
///
/// Strips every non-digit, then — only when the digits start with the `998`
/// country prefix — regroups them as `+998 NN NNN NN NN`, truncating at
/// twelve digits. Partial prefixes format with however many digits exist so
/// far, so running this on every input event converges on the same value
/// (the previous formatting is stripped before regrouping). Digit sequences
/// not starting with `998` are returned as-is.
#[must_use]
pub fn format(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    if !digits.starts_with("998") {
        return digits;
    }

    let rest = &digits[3..digits.len().min(12)];
    let mut out = String::from("+998");
    for (start, end) in [(0, 2), (2, 5), (5, 7), (7, 9)] {
        if rest.len() <= start {
            break;
        }
        out.push(' ');
        out.push_str(&rest[start..rest.len().min(end)]);
    }
    out
}
