use once_cell::sync::Lazy;
use regex::Regex;

static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new("(.)([A-Z][a-z]+)").unwrap());
static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new("([a-z0-9])([A-Z])").unwrap());

/// Converts a `snake_case` field name to `camelCase`.
///
/// A doubled underscore leaves an empty segment, which comes through as a
/// literal `_`.
///
/// ```
/// use json_guess::underscore_to_camelcase;
///
/// assert_eq!("startImmediately", underscore_to_camelcase("start_immediately"));
/// assert_eq!("a_B", underscore_to_camelcase("a__b"));
/// ```
pub fn underscore_to_camelcase(name: &str) -> String {
    let mut segments = name.split('_');
    let mut out = segments.next().unwrap_or_default().to_owned();

    for segment in segments {
        if segment.is_empty() {
            out.push('_');
        } else {
            out.push_str(&capitalize(segment));
        }
    }

    out
}

/// Converts a `camelCase` field name to `snake_case`.
pub fn camelcase_to_underscores(name: &str) -> String {
    let s = WORD_START.replace_all(name, "${1}_${2}");
    LOWER_UPPER.replace_all(&s, "${1}_${2}").to_lowercase()
}

/// Uppercases the first character and lowercases the rest.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
