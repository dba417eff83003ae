//! Size-bounding of strings and sequences for log-safe rendering.
//!
//! A negative limit always means "unlimited".

use serde_json::Value;
use std::borrow::Cow;

/// Values [`truncate`] knows how to shorten, plus a carrier for everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum Truncatable {
    Str(String),
    Bytes(Vec<u8>),
    Chars(Vec<char>),
    /// Any other value. Returned unchanged.
    Other(Value),
}

impl From<&str> for Truncatable {
    fn from(s: &str) -> Self {
        Truncatable::Str(s.to_owned())
    }
}

impl From<String> for Truncatable {
    fn from(s: String) -> Self {
        Truncatable::Str(s)
    }
}

impl From<Vec<u8>> for Truncatable {
    fn from(bytes: Vec<u8>) -> Self {
        Truncatable::Bytes(bytes)
    }
}

impl From<Vec<char>> for Truncatable {
    fn from(chars: Vec<char>) -> Self {
        Truncatable::Chars(chars)
    }
}

/// Shorten `s` to `limit` characters, appending `", + <N> more"` where `N`
/// is the number of characters dropped.
///
/// The suffix is part of the output, so truncating an already truncated
/// string cuts it again. Only strings of at most `limit` characters are left
/// alone.
///
/// # Examples
///
/// ```
/// use json_bridge_util::truncate_string;
///
/// assert_eq!(truncate_string("hello", 5), "hello");
/// assert_eq!(truncate_string("hello world", 5), "hello, + 6 more");
/// assert_eq!(truncate_string("hello world", -1), "hello world");
/// ```
pub fn truncate_string(s: &str, limit: i32) -> Cow<'_, str> {
    let Ok(limit) = usize::try_from(limit) else {
        return Cow::Borrowed(s);
    };
    let Some(cut) = char_boundary(s, limit) else {
        return Cow::Borrowed(s);
    };
    let elided = s[cut..].chars().count();
    Cow::Owned(format!("{}, + {} more", &s[..cut], elided))
}

/// Truncate a string, byte sequence or char sequence to `limit` elements.
///
/// `None` becomes an empty string. Only strings get the `", + <N> more"`
/// suffix; sequences are simply cut.
///
/// # Examples
///
/// ```
/// use json_bridge_util::{truncate, Truncatable};
///
/// assert_eq!(truncate(None, 3), Truncatable::Str(String::new()));
/// assert_eq!(
///     truncate(Some(vec![1u8, 2, 3, 4].into()), 2),
///     Truncatable::Bytes(vec![1, 2])
/// );
/// ```
pub fn truncate(value: Option<Truncatable>, limit: i32) -> Truncatable {
    let Some(value) = value else {
        return Truncatable::Str(String::new());
    };
    let Ok(max) = usize::try_from(limit) else {
        return value;
    };
    match value {
        Truncatable::Str(s) => Truncatable::Str(truncate_string(&s, limit).into_owned()),
        Truncatable::Bytes(mut bytes) => {
            bytes.truncate(max);
            Truncatable::Bytes(bytes)
        }
        Truncatable::Chars(mut chars) => {
            chars.truncate(max);
            Truncatable::Chars(chars)
        }
        other => other,
    }
}

/// Byte offset of the character at index `limit`, or `None` if `s` has no
/// more than `limit` characters.
fn char_boundary(s: &str, limit: usize) -> Option<usize> {
    s.char_indices().nth(limit).map(|(i, _)| i)
}
