//! Parse error surface.
//!
//! Scanners and dispatch handlers record exactly one [`ParseError`] in the
//! parser's pending-error slot and flip the parser into its failed context;
//! the entry points surface that error. Nothing is retried or recovered.

use thiserror::Error;

use crate::encoding::Encoding;

/// Discriminated failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The input was empty or contained only whitespace.
    #[error("input contained no JSON value")]
    NoJson,
    /// A single-root entry point saw more than one top-level value.
    #[error("input contained more than one top-level value")]
    MultipleRoots,
    /// The input is not valid UTF-8.
    #[error("invalid byte sequence in input")]
    InvalidChar,
    /// An ASCII control byte appeared outside a string.
    #[error("control character {0:#04x} outside a string")]
    ControlChar(u8),
    /// The input ended with an unclosed `{` or `[`.
    #[error("end of input inside an unclosed object or array")]
    EndedInsideStructure,
    /// The input ended before a string's closing quote.
    #[error("end of input inside a string")]
    EndedInsideQuote,
    /// A byte that is not acceptable in the current context.
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    /// A raw tab, newline or carriage return byte inside a string.
    #[error("raw tab, newline or carriage return inside a string")]
    TabNewlineCrInsideQuotes,
    /// Any other control byte inside a string.
    #[error("control character {0:#04x} inside a string")]
    ControlCharInsideQuotes(u8),
    /// A backslash followed by a byte that does not form an escape.
    #[error("invalid escape character {0:?}")]
    InvalidEscapeChar(char),
    /// A non-string value was used as an object key (lenient mode).
    #[error("object key is not a string")]
    InvalidKey,
    /// Strict mode saw an unquoted token that is neither a keyword nor a
    /// number.
    #[error("token is neither a keyword nor a number")]
    NotAKeywordOrNumber,
    /// The input's byte pattern indicates a non-UTF-8 encoding.
    #[error("unsupported input encoding {0}")]
    UnsupportedEncoding(Encoding),
}

/// A parse failure with its position in the input.
///
/// `line` and `column` are 1-based; `offset` is the 0-based byte offset of
/// the offending position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// 1-based line of the offending byte.
    pub line: usize,
    /// 1-based column of the offending byte within its line.
    pub column: usize,
    /// 0-based byte offset of the offending byte.
    pub offset: usize,
}
