//! Shared field checks used by the validator.

pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

pub(crate) fn validate_max_len(errors: &mut Vec<String>, name: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.push(format!("{name} is {len} characters, max is {max}"));
    }
}

/// Accepts anything with a scheme (`about:blank`, `https://...`, `file:///...`).
pub(crate) fn validate_url(errors: &mut Vec<String>, name: &str, value: &str) {
    let scheme = value.split_once(':').map(|(scheme, _)| scheme).unwrap_or("");
    let scheme_ok = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if !scheme_ok || value.chars().any(char::is_whitespace) {
        errors.push(format!("{name} = {value:?} is not a URL"));
    }
}
