use super::escape;

/// Render text as a quoted JSON string literal.
///
/// # Examples
///
/// ```
/// use json_bridge_util::strings::as_string;
///
/// assert_eq!(as_string("hello"), "\"hello\"");
/// assert_eq!(as_string("back\\slash"), "\"back\\\\slash\"");
/// ```
pub fn as_string(s: &str) -> String {
    let escaped = escape(s);
    let mut out = String::with_capacity(escaped.len() + 2);
    out.push('"');
    out.push_str(&escaped);
    out.push('"');
    out
}
