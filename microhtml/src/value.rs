//! Scalar values: the leaves of a node tree and the values of attributes.

use compact_str::{CompactString, format_compact};
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::sync::Arc;

use crate::escape;
use crate::tracing_macros::{debug, trace};

/// A scalar that renders as escaped text.
///
/// As a child, `Null` and `Bool` render as nothing. As an attribute value,
/// `Bool(true)` renders a bare attribute name while `Bool(false)` and `Null`
/// drop the attribute entirely.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No value
    #[default]
    Null,
    /// A boolean flag
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// An unsigned integer
    UInt(u64),
    /// A floating point number
    Float(f64),
    /// A string
    Str(CompactString),
    /// Any `Display` implementor, formatted at render time
    Lazy(Lazy),
}

impl Value {
    /// Wrap a `Display` implementor, deferring formatting until render.
    pub fn lazy<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Value::Lazy(Lazy::new(value))
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for `Null` and `Bool`, the values that render as nothing.
    pub fn is_blank(&self) -> bool {
        matches!(self, Value::Null | Value::Bool(_))
    }

    /// The canonical text form, before escaping.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null | Value::Bool(_) => Cow::Borrowed(""),
            Value::Int(n) => Cow::Owned(n.to_string()),
            Value::UInt(n) => Cow::Owned(n.to_string()),
            Value::Float(x) => Cow::Owned(x.to_string()),
            Value::Str(s) => Cow::Borrowed(s.as_str()),
            Value::Lazy(lazy) => Cow::Owned(lazy.format()),
        }
    }

    /// Write the escaped text form of this value.
    pub(crate) fn write_escaped<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        match self {
            Value::Null | Value::Bool(_) => Ok(()),
            // Numbers never contain characters that need escaping.
            Value::Int(n) => write!(out, "{n}"),
            Value::UInt(n) => write!(out, "{n}"),
            Value::Float(x) => write!(out, "{x}"),
            Value::Str(s) => escape::write_escaped(out, s),
            Value::Lazy(lazy) => escape::write_escaped(out, &lazy.format()),
        }
    }
}

/// A shared `Display` implementor, formatted every time it is rendered.
#[derive(Clone)]
pub struct Lazy(Arc<dyn fmt::Display + Send + Sync>);

impl Lazy {
    pub fn new<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Lazy(Arc::new(value))
    }

    /// Format the wrapped value.
    ///
    /// A `Display` impl that returns an error keeps whatever it wrote before
    /// failing; rendering never aborts because of it.
    pub fn format(&self) -> String {
        let mut buf = String::new();
        if write!(buf, "{}", self.0).is_err() {
            debug!(partial_len = buf.len(), "lazy value failed to format, keeping partial text");
        }
        trace!(len = buf.len(), "formatted lazy value");
        buf
    }
}

impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lazy(..)")
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::UInt(value as u64)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        // Widening to f64 would print `1.1f32` as `1.100000023841858`.
        Value::Str(format_compact!("{value}"))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        let mut buf = [0u8; 4];
        Value::Str(CompactString::from(&*value.encode_utf8(&mut buf)))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(CompactString::from(value))
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(CompactString::from(value.as_str()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(CompactString::from(value))
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Str(CompactString::from(value))
    }
}

impl From<CompactString> for Value {
    fn from(value: CompactString) -> Self {
        Value::Str(value)
    }
}

impl From<Lazy> for Value {
    fn from(value: Lazy) -> Self {
        Value::Lazy(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Invokes `$mac!` with every type that converts into a [`Value`].
///
/// Used to give child and argument conversions the same coverage without a
/// blanket impl.
macro_rules! with_scalar_types {
    ($mac:ident) => {
        $mac!(
            bool,
            i8,
            i16,
            i32,
            i64,
            isize,
            u8,
            u16,
            u32,
            u64,
            usize,
            f32,
            f64,
            char,
            &str,
            &String,
            String,
            ::std::borrow::Cow<'_, str>,
            ::compact_str::CompactString,
            $crate::value::Lazy,
            $crate::value::Value
        );
    };
}

pub(crate) use with_scalar_types;

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    struct Apples(u32);

    impl fmt::Display for Apples {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} apples", self.0)
        }
    }

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_numbers_stringify() {
        assert_eq!(Value::from(42).to_text(), "42");
        assert_eq!(Value::from(-7i8).to_text(), "-7");
        assert_eq!(Value::from(7u64).to_text(), "7");
        assert_eq!(Value::from(1.0f64).to_text(), "1");
        assert_eq!(Value::from(0.25f64).to_text(), "0.25");
        assert_eq!(Value::from(1.1f32).to_text(), "1.1");
    }

    #[test]
    fn test_blank_values() {
        assert!(Value::Null.is_blank());
        assert!(Value::from(true).is_blank());
        assert!(Value::from(false).is_blank());
        assert!(!Value::from(0).is_blank());
        assert!(!Value::from("").is_blank());
        assert_eq!(Value::from(true).to_text(), "");
    }

    #[test]
    fn test_option_maps_none_to_null() {
        assert!(Value::from(None::<&str>).is_null());
        assert_eq!(Value::from(Some("x")).to_text(), "x");
    }

    #[test]
    fn test_lazy_formats_on_demand() {
        let value = Value::lazy(Apples(3));
        assert_eq!(value.to_text(), "3 apples");
    }

    #[test]
    fn test_lazy_failure_keeps_partial_text() {
        let value = Value::lazy(Failing);
        assert_eq!(value.to_text(), "partial");
    }
}
