//! Helpers for the query part of the console URL.

use url::form_urlencoded;

/// Whether the query string carries the named parameter, with or without
/// a value.
pub fn has_parameter(search: &str, name: &str) -> bool {
    form_urlencoded::parse(strip_question_mark(search).as_bytes())
        .any(|(key, _)| key == name)
}

/// The first value of the named parameter. Absent parameters and empty
/// values both yield `None`.
pub fn get_parameter(search: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(strip_question_mark(search).as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn strip_question_mark(search: &str) -> &str {
    search.strip_prefix('?').unwrap_or(search)
}
