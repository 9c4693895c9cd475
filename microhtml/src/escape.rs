//! HTML entity escaping.
//!
//! Every scalar child and every non-boolean attribute value passes through
//! here at render time. Five characters are replaced:
//!
//! | char | entity   |
//! |------|----------|
//! | `&`  | `&amp;`  |
//! | `<`  | `&lt;`   |
//! | `>`  | `&gt;`   |
//! | `"`  | `&quot;` |
//! | `'`  | `&#039;` |
//!
//! Attribute values are delimited with single quotes, so `'` must never reach
//! the output unescaped. Everything else, including non-ASCII text, passes
//! through untouched.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::value::Value;

#[inline]
fn entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&#039;"),
        _ => None,
    }
}

/// Escape a string, borrowing it when nothing needs replacing.
///
/// ```
/// use microhtml::escape_text;
///
/// assert_eq!(escape_text("fish & chips"), "fish &amp; chips");
/// assert_eq!(escape_text("it's <b>"), "it&#039;s &lt;b&gt;");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| entity(b).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    let _ = write_escaped(&mut out, text);
    Cow::Owned(out)
}

/// Convert a scalar to its canonical text and escape it.
///
/// `null` and booleans produce an empty string.
pub fn escape_value(value: &Value) -> String {
    let mut out = String::new();
    let _ = value.write_escaped(&mut out);
    out
}

/// Write `text` to `out` with the five special characters replaced.
pub fn write_escaped<W: Write + ?Sized>(out: &mut W, text: &str) -> fmt::Result {
    // All five characters are ASCII, so every match index is a char boundary.
    let mut last = 0;
    for (i, byte) in text.bytes().enumerate() {
        if let Some(entity) = entity(byte) {
            out.write_str(&text[last..i])?;
            out.write_str(entity)?;
            last = i + 1;
        }
    }
    out.write_str(&text[last..])
}
