//! JSON value types and the compact serializer.
//!
//! [`Value`] borrows its string payloads from the parsed input whenever no
//! escape sequence forced a copy. Container payloads are wrapped in
//! `Option` so that a null array or object is distinguishable from an empty
//! one; the parser never produces the null variants, but values built
//! programmatically can, and they serialize as `null`.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::number::Number;

/// Object payload: keys are unique, and a duplicate key written through the
/// parser wins over earlier ones.
pub type Map<'a> = BTreeMap<Cow<'a, str>, Value<'a>>;

/// Array payload.
pub type Array<'a> = Vec<Value<'a>>;

/// A JSON value.
///
/// # Examples
///
/// ```
/// use jsonlax::{parse, Options, Value};
///
/// let value = parse(b"[null,true,3]", Options::default()).unwrap();
/// assert!(value.is_array());
/// assert_eq!(value.get_index(2).and_then(Value::as_i64), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value<'a> {
    #[default]
    Null,
    Bool(bool),
    Number(Number<'a>),
    String(Cow<'a, str>),
    /// `None` is the null array; `Some` holds the elements in order.
    Array(Option<Array<'a>>),
    /// `None` is the null object; `Some` holds the entries.
    Object(Option<Map<'a>>),
}

impl<'a> Value<'a> {
    /// Returns `true` if the value is `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number of any representation.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array, including the null array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object, including the null object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload if this is an in-range integer number.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the double payload if this number carries one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements of a non-null array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array<'a>> {
        match self {
            Value::Array(Some(items)) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries of a non-null object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map<'a>> {
        match self {
            Value::Object(Some(entries)) => Some(entries),
            _ => None,
        }
    }

    /// Looks up `key` in an object value.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonlax::{parse, Options, Value};
    ///
    /// let value = parse(br#"{"a":null,"b":0}"#, Options::default()).unwrap();
    /// assert_eq!(value.get("b").and_then(Value::as_i64), Some(0));
    /// assert!(value.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    /// Looks up the element at `index` in an array value.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value<'a>> {
        self.as_array().and_then(|items| items.get(index))
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::Number(Number::Int(v))
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Number(Number::Float(v))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::String(Cow::Borrowed(v))
    }
}

/// Escapes a string body for inclusion in a JSON string literal.
///
/// Quotes, backslashes and all control characters are replaced with their
/// escape sequences so that serializer output is itself valid JSON.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            // Unicode line separators, escaped for pre-2019 JS consumers
            '\u{2028}' | '\u{2029}' => write!(f, "\\u{:04X}", c as u32)?,
            c if c.is_control() && (c as u32) <= 0xFFFF => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value<'_> {
    /// The compact serializer: minimal whitespace, `null` for the null
    /// container variants, `[]`/`{}` for the empty ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null | Value::Array(None) | Value::Object(None) => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => fmt::Display::fmt(n, f),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(Some(items)) => {
                f.write_str("[")?;
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(Some(entries)) => {
                f.write_str("{")?;
                let mut first = true;
                for (key, value) in entries {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(key, f)?;
                    write!(f, "\":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
