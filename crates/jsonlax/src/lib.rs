//! Strict and lenient JSON parsing into a borrowed value tree.
//!
//! The parser is a single-pass, character-class-driven state machine over a
//! contiguous UTF-8 input. String payloads borrow from the input buffer
//! whenever no escape sequence forces a copy, and numeric literals are
//! promoted to the narrowest exact representation: `i64`, `f64`, an
//! arbitrary-precision integer, or the preserved source text when a literal
//! falls outside the `f64` range.
//!
//! # Examples
//!
//! ```
//! use jsonlax::{parse, Options, Value};
//!
//! let value = parse(br#"{"greeting":"hello, world"}"#, Options::default()).unwrap();
//! assert_eq!(
//!     value.get("greeting").and_then(Value::as_str),
//!     Some("hello, world")
//! );
//! ```
//!
//! Lenient mode accepts unquoted strings and trailing commas on top of
//! everything strict mode accepts:
//!
//! ```
//! use jsonlax::{parse, Options, Value};
//!
//! let value = parse(b"[a, b,]", Options::lenient()).unwrap();
//! assert_eq!(value.get_index(1).and_then(Value::as_str), Some("b"));
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod builder;
mod classify;
mod encoding;
mod error;
mod number;
mod options;
mod parser;
mod scanner;
mod value;

pub use encoding::{detect_encoding, Encoding};
pub use error::{ErrorKind, ParseError};
pub use number::Number;
pub use options::Options;
pub use parser::{parse, parse_many};
pub use value::{Array, Map, Value};

#[cfg(test)]
mod tests;
