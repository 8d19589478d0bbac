//! Last-4 phone verification.
//!
//! Two comparison rules exist and are deliberately kept apart:
//! the lookup page normalizes both sides to digits, while letter
//! generation compares the normalized roster suffix against the submitted
//! text as-is. A formatted submission such as `"45-67"` therefore passes
//! lookup but fails letter generation.

/// Reduces a roster or user phone value to ASCII digits.
///
/// A trailing `.0` left by numeric spreadsheet cells is dropped first, then
/// every non-digit character. Arabic-Indic digits are folded to ASCII.
pub fn normalize_phone(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.strip_suffix(".0").unwrap_or(raw);
    raw.chars().filter_map(ascii_digit).collect()
}

/// The last four characters of an already-normalized digit string, or
/// `None` when it is shorter than four.
pub fn last4(digits: &str) -> Option<&str> {
    digits.len().checked_sub(4).map(|start| &digits[start..])
}

/// Lookup rule: both sides normalized, last four digits compared.
pub fn matches_for_lookup(roster_phone: &str, submitted: &str) -> bool {
    let roster_digits = normalize_phone(roster_phone);
    let Some(expected) = last4(&roster_digits) else {
        return false;
    };
    let submitted_digits = normalize_phone(submitted);
    let start = submitted_digits.len().saturating_sub(4);
    &submitted_digits[start..] == expected
}

/// Letter rule: roster side normalized, submitted value only trimmed.
pub fn matches_for_letter(roster_phone: &str, phone_last4: &str) -> bool {
    let roster_digits = normalize_phone(roster_phone);
    last4(&roster_digits).is_some_and(|expected| expected == phone_last4.trim())
}

fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        // Arabic-Indic and Extended Arabic-Indic digits
        '\u{0660}'..='\u{0669}' => char::from_digit(c as u32 - 0x0660, 10),
        '\u{06F0}'..='\u{06F9}' => char::from_digit(c as u32 - 0x06F0, 10),
        _ => None,
    }
}
