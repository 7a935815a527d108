//! Rendering of root-relative node paths.
//!
//! Identifier-like keys render as `.key`, other keys as `["key"]` and array
//! indices as `[N]`. The root path is empty.

use regex::Regex;
use std::sync::OnceLock;

/// Whether `key` can be rendered in dotted form.
pub fn is_identifier_key(key: &str) -> bool {
    !key.contains([' ', '/', '-'])
}

/// Path of the child reached from `parent` through object key `key`.
///
/// # Example
///
/// ```
/// use lazy_json::path::key_path;
///
/// assert_eq!(key_path(".a", "b"), ".a.b");
/// assert_eq!(key_path(".a", "b c"), ".a[\"b c\"]");
/// ```
pub fn key_path(parent: &str, key: &str) -> String {
    let mut out = String::with_capacity(parent.len() + key.len() + 4);
    out.push_str(parent);
    if is_identifier_key(key) {
        out.push('.');
        out.push_str(key);
    } else {
        out.push('[');
        out.push_str(&quote(key));
        out.push(']');
    }
    out
}

/// Path of the child reached from `parent` through array index `index`.
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Non-printable characters: controls, format and private-use characters,
/// unassigned code points and every separator except the ASCII space.
fn non_printable_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[\p{Cc}\p{Cf}\p{Co}\p{Cn}\p{Zs}\p{Zl}\p{Zp}&&[^ ]]$")
            .expect("non-printable class is a valid regex")
    })
}

fn is_printable(ch: char) -> bool {
    if ch.is_ascii() {
        return (' '..='~').contains(&ch);
    }
    let mut buf = [0u8; 4];
    !non_printable_regex().is_match(ch.encode_utf8(&mut buf))
}

/// Render `s` as a double-quoted string literal.
///
/// Quotes and backslashes are escaped, as are non-printable characters: the
/// common controls by letter (`\n`, `\t`, ...), other ASCII as `\xNN`, the
/// rest as `\uNNNN` or, above U+FFFF, `\UNNNNNNNN`.
pub fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let escaped: Option<String> = match ch {
            '\u{0007}' => Some("\\a".into()),
            '\u{0008}' => Some("\\b".into()),
            '\u{000C}' => Some("\\f".into()),
            '\n' => Some("\\n".into()),
            '\r' => Some("\\r".into()),
            '\t' => Some("\\t".into()),
            '\u{000B}' => Some("\\v".into()),
            '"' => Some("\\\"".into()),
            '\\' => Some("\\\\".into()),
            c if is_printable(c) => None,
            c if c.is_ascii() => Some(format!("\\x{:02x}", c as u32)),
            c if (c as u32) < 0x10000 => Some(format!("\\u{:04x}", c as u32)),
            c => Some(format!("\\U{:08x}", c as u32)),
        };

        if let Some(esc) = escaped {
            result.push_str(&s[last..i]);
            result.push_str(&esc);
            last = i + ch.len_utf8();
        }
    }

    result.push_str(&s[last..]);
    result.push('"');
    result
}
