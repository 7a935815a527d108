use regex::bytes::Regex;
use std::sync::OnceLock;

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?$")
            .expect("number grammar is a valid regex")
    })
}

/// Whether `bytes` is exactly one JSON number literal.
///
/// # Example
///
/// ```
/// use lazy_json::is_json_number;
///
/// assert!(is_json_number(b"-1234.56789E+12"));
/// assert!(!is_json_number(b"-1234.56789A+12"));
/// assert!(!is_json_number(b"404 not found"));
/// ```
pub fn is_json_number(bytes: &[u8]) -> bool {
    number_regex().is_match(bytes)
}
