//! Numeric payloads and the literal promotion policy.
//!
//! The byte scanner recognizes the JSON `number` production and reports how
//! much of the literal is its integer part; [`Number::from_literal`] then
//! promotes the literal to the narrowest representation that holds it
//! exactly, falling back to the preserved source text when nothing else can.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use num_bigint::BigInt;

/// The four physical number representations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number<'a> {
    /// An integer literal that fits a signed 64-bit value.
    Int(i64),
    /// A literal with a fractional or exponent part that converts to a
    /// finite double.
    Float(f64),
    /// An integer literal outside the `i64` range, kept exact.
    Big(BigInt),
    /// A fractional or exponent literal outside the `f64` range; the exact
    /// source bytes are preserved.
    Huge(Cow<'a, str>),
}

impl<'a> Number<'a> {
    /// Promote a scanned literal to the narrowest exact representation.
    ///
    /// `int_len` is the length of the integer part as reported by
    /// [`scan_number`]; when it equals the literal length the literal has no
    /// fractional or exponent part.
    pub(crate) fn from_literal(text: &'a str, int_len: usize) -> Self {
        if int_len == text.len() {
            return match text.parse::<i64>() {
                Ok(n) => Number::Int(n),
                Err(_) => match BigInt::parse_bytes(text.as_bytes(), 10) {
                    Some(big) => Number::Big(big),
                    None => Number::Huge(Cow::Borrowed(text)),
                },
            };
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_infinite() => Number::Huge(Cow::Borrowed(text)),
            Ok(value) if value == 0.0 && has_nonzero_mantissa(text) => {
                Number::Huge(Cow::Borrowed(text))
            }
            Ok(value) => Number::Float(value),
            Err(_) => Number::Huge(Cow::Borrowed(text)),
        }
    }

    /// Returns the value as an `i64` if it is an in-range integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as an `f64` if it carries one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Float(n) => Some(*n),
            _ => None,
        }
    }
}

/// True when the digits before any exponent marker contain a nonzero digit.
///
/// `str::parse::<f64>` reports underflow by returning zero, so a zero result
/// for a literal with a nonzero mantissa means the literal is out of range.
fn has_nonzero_mantissa(text: &str) -> bool {
    text.bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .any(|b| matches!(b, b'1'..=b'9'))
}

impl fmt::Display for Number<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(n) => {
                use core::fmt::Write;
                let mut digits = String::new();
                write!(digits, "{n}")?;
                if !digits.contains('.') {
                    digits.push_str(".0");
                }
                f.write_str(&digits)
            }
            Number::Big(n) => write!(f, "{n}"),
            Number::Huge(text) => f.write_str(text),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum ScanState {
    Start,
    Sign,
    Zero,
    Integer,
    FractionStart,
    Fraction,
    ExponentStart,
    ExponentSign,
    Exponent,
}

/// Scan the JSON `number` production at the head of `bytes`.
///
/// Returns `(len, int_part_len)` for the longest accepted prefix, or `None`
/// when no accepting state is reachable. `int_part_len == len` means the
/// literal has no fractional or exponent part. Bytes after the accepted
/// literal are the caller's concern; the scanner never reads past the slice.
pub(crate) fn scan_number(bytes: &[u8]) -> Option<(usize, usize)> {
    use ScanState::*;

    let mut state = Start;
    let mut len = 0;
    let mut int_len = 0;
    for &b in bytes {
        state = match (state, b) {
            (Start, b'-') => Sign,
            (Start | Sign, b'0') => Zero,
            (Start | Sign, b'1'..=b'9') => Integer,
            (Integer, b'0'..=b'9') => Integer,
            (Zero | Integer, b'.') => FractionStart,
            (Zero | Integer | Fraction, b'e' | b'E') => ExponentStart,
            (FractionStart | Fraction, b'0'..=b'9') => Fraction,
            (ExponentStart, b'+' | b'-') => ExponentSign,
            (ExponentStart | ExponentSign | Exponent, b'0'..=b'9') => Exponent,
            _ => break,
        };
        len += 1;
        if matches!(state, Sign | Zero | Integer) {
            int_len = len;
        }
    }
    match state {
        Zero | Integer | Fraction | Exponent => Some((len, int_len)),
        _ => None,
    }
}
