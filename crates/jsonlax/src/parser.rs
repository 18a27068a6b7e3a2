//! The context × character-class state machine.
//!
//! A single pass over the input drives a dispatch on (current context,
//! class of the current byte). Scanners record failures in the pending-error
//! slot and flip the context to [`Context::Failed`], which halts the loop;
//! the entry points observe the slot and surface the one error.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::builder::Builder;
use crate::classify::{classify, CharClass};
use crate::encoding::{detect_encoding, Encoding};
use crate::error::{ErrorKind, ParseError};
use crate::number::{scan_number, Number};
use crate::options::Options;
use crate::scanner::scan_string;
use crate::value::Value;

/// Parse exactly one JSON value.
///
/// The returned [`Value`] borrows string payloads from `input` wherever no
/// escape sequence forced a copy, so `input` must outlive it. Duplicate
/// object keys are resolved last-write-wins.
///
/// # Errors
///
/// Returns a positioned [`ParseError`]; [`ErrorKind::NoJson`] when the input
/// holds no value, [`ErrorKind::MultipleRoots`] when it holds more than one.
///
/// # Examples
///
/// ```
/// use jsonlax::{parse, ErrorKind, Options, Value};
///
/// let value = parse(b"[false,true,null]", Options::default()).unwrap();
/// assert_eq!(value.get_index(1), Some(&Value::Bool(true)));
///
/// let err = parse(b"null null", Options::default()).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::MultipleRoots);
/// ```
pub fn parse(input: &[u8], options: Options) -> Result<Value<'_>, ParseError> {
    let src = decode_input(input)?;
    let mut parser = Parser::new(src, options);
    parser.run()?;
    match parser.roots.len() {
        0 => Err(parser.error_here(ErrorKind::NoJson)),
        1 => Ok(parser.roots.swap_remove(0)),
        _ => Err(parser.error_here(ErrorKind::MultipleRoots)),
    }
}

/// Parse one or more whitespace-separated JSON values.
///
/// # Errors
///
/// Returns [`ErrorKind::NoJson`] when the input was empty or whitespace
/// only; any other failure aborts the whole parse.
///
/// # Examples
///
/// ```
/// use jsonlax::{parse_many, Options, Value};
///
/// let roots = parse_many(b"null null", Options::default()).unwrap();
/// assert_eq!(roots, [Value::Null, Value::Null]);
/// ```
pub fn parse_many(input: &[u8], options: Options) -> Result<Vec<Value<'_>>, ParseError> {
    let src = decode_input(input)?;
    let mut parser = Parser::new(src, options);
    parser.run()?;
    if parser.roots.is_empty() {
        return Err(parser.error_here(ErrorKind::NoJson));
    }
    Ok(parser.roots)
}

/// Reject non-UTF-8 encodings up front and validate the byte stream.
fn decode_input(input: &[u8]) -> Result<&str, ParseError> {
    match detect_encoding(input) {
        Encoding::Utf8 => {}
        other => {
            return Err(ParseError {
                kind: ErrorKind::UnsupportedEncoding(other),
                line: 1,
                column: 1,
                offset: 0,
            });
        }
    }
    match core::str::from_utf8(input) {
        Ok(src) => Ok(src),
        Err(err) => {
            let prefix = &input[..err.valid_up_to()];
            let line_start = prefix
                .iter()
                .rposition(|&b| b == b'\n')
                .map_or(0, |at| at + 1);
            Err(ParseError {
                kind: ErrorKind::InvalidChar,
                line: 1 + prefix.iter().filter(|&&b| b == b'\n').count(),
                column: err.valid_up_to() - line_start + 1,
                offset: err.valid_up_to(),
            })
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Contexts
// ------------------------------------------------------------------------------------------------

/// Names the kind of token the parser expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// At the top level, before or between root values.
    Root,
    /// After `{` or an object's `,`.
    ObjectKey,
    /// After a key.
    ObjectColon,
    /// After `:`.
    ObjectValue,
    /// After a completed value inside an object.
    ObjectComma,
    /// After `[` or an array's `,`.
    ArrayValue,
    /// After a completed value inside an array.
    ArrayComma,
    /// A pending error has been recorded; absorbs the rest of the input.
    Failed,
}

/// Transient parser state, scoped to a single parse call.
struct Parser<'a> {
    src: &'a str,
    cursor: usize,
    limit: usize,
    context: Context,
    /// One entry per open container; the top is the active builder.
    stack: Vec<Builder<'a>>,
    line: usize,
    line_start: usize,
    pending: Option<ParseError>,
    roots: Vec<Value<'a>>,
    lenient: bool,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str, options: Options) -> Self {
        Parser {
            src,
            cursor: 0,
            limit: src.len(),
            context: Context::Root,
            stack: Vec::new(),
            line: 1,
            line_start: 0,
            pending: None,
            roots: Vec::new(),
            lenient: options.lenient,
        }
    }

    fn run(&mut self) -> Result<(), ParseError> {
        let bytes = self.src.as_bytes();
        while self.cursor < self.limit {
            if self.context == Context::Failed {
                break;
            }
            let byte = bytes[self.cursor];
            match classify(byte) {
                CharClass::SpaceTabCr => self.cursor += 1,
                CharClass::Newline => {
                    self.cursor += 1;
                    self.line += 1;
                    self.line_start = self.cursor;
                }
                class => self.dispatch(class, byte),
            }
        }
        if let Some(err) = self.pending.take() {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(self.error_here(ErrorKind::EndedInsideStructure));
        }
        Ok(())
    }

    // --------------------------------------------------------------------------------------------
    // Dispatch
    // --------------------------------------------------------------------------------------------

    fn dispatch(&mut self, class: CharClass, byte: u8) {
        use CharClass::*;

        match self.context {
            Context::Root | Context::ObjectValue | Context::ArrayValue => match class {
                Quote => self.take_string(),
                StartObject => self.open(Builder::object(), Context::ObjectKey),
                StartArray => self.open(Builder::array(), Context::ArrayValue),
                Other => self.take_scalar(),
                EndArray if self.context == Context::ArrayValue => self.close_container(true),
                AsciiControl => self.fail(ErrorKind::ControlChar(byte)),
                _ => self.fail_unexpected(),
            },
            Context::ObjectKey => match class {
                Quote => self.take_key(),
                EndObject => self.close_container(true),
                Other if self.lenient => self.take_loose_key(),
                AsciiControl => self.fail(ErrorKind::ControlChar(byte)),
                _ => self.fail_unexpected(),
            },
            Context::ObjectColon => match class {
                NameSeparator => {
                    self.cursor += 1;
                    self.context = Context::ObjectValue;
                }
                AsciiControl => self.fail(ErrorKind::ControlChar(byte)),
                _ => self.fail_unexpected(),
            },
            Context::ObjectComma => match class {
                ValueSeparator => {
                    self.cursor += 1;
                    self.context = Context::ObjectKey;
                }
                EndObject => self.close_container(false),
                AsciiControl => self.fail(ErrorKind::ControlChar(byte)),
                _ => self.fail_unexpected(),
            },
            Context::ArrayComma => match class {
                ValueSeparator => {
                    self.cursor += 1;
                    self.context = Context::ArrayValue;
                }
                EndArray => self.close_container(false),
                AsciiControl => self.fail(ErrorKind::ControlChar(byte)),
                _ => self.fail_unexpected(),
            },
            Context::Failed => {}
        }
    }

    // --------------------------------------------------------------------------------------------
    // Containers
    // --------------------------------------------------------------------------------------------

    fn open(&mut self, builder: Builder<'a>, context: Context) {
        self.cursor += 1;
        self.stack.push(builder);
        self.context = context;
    }

    /// Finalize the innermost container. A terminator in value or key
    /// position (`[1,]` / `{"a":1,}`) closes a non-empty container only in
    /// lenient mode; closing an empty container is always allowed.
    fn close_container(&mut self, at_value_position: bool) {
        let Some(builder) = self.stack.pop() else {
            self.fail_unexpected();
            return;
        };
        if at_value_position && !self.lenient && !builder.is_empty() {
            self.fail_unexpected();
            return;
        }
        self.cursor += 1;
        self.complete_value(builder.finish());
    }

    /// Route a finished value to the parent builder, or to the root list
    /// when no container is open, and enter the parent's post-value context.
    fn complete_value(&mut self, value: Value<'a>) {
        match self.stack.last_mut() {
            None => {
                self.roots.push(value);
                self.context = Context::Root;
            }
            Some(parent) => {
                parent.add_value(value);
                self.context = match parent {
                    Builder::Array(_) => Context::ArrayComma,
                    Builder::Object { .. } => Context::ObjectComma,
                };
            }
        }
    }

    // --------------------------------------------------------------------------------------------
    // Tokens
    // --------------------------------------------------------------------------------------------

    fn take_string(&mut self) {
        match scan_string(self.src, self.cursor + 1) {
            Ok(scanned) => {
                self.cursor = scanned.end;
                self.complete_value(Value::String(scanned.text));
            }
            Err((kind, offset)) => self.fail_at(kind, offset),
        }
    }

    fn take_key(&mut self) {
        match scan_string(self.src, self.cursor + 1) {
            Ok(scanned) => {
                self.cursor = scanned.end;
                if let Some(builder) = self.stack.last_mut() {
                    builder.set_key(scanned.text);
                }
                self.context = Context::ObjectColon;
            }
            Err((kind, offset)) => self.fail_at(kind, offset),
        }
    }

    fn take_scalar(&mut self) {
        if let Some(value) = self.scan_scalar() {
            self.complete_value(value);
        }
    }

    /// Lenient object keys go through the same scalar scan as values; only
    /// string results may become keys.
    fn take_loose_key(&mut self) {
        let start = self.cursor;
        let Some(value) = self.scan_scalar() else {
            return;
        };
        match value {
            Value::String(text) => {
                if let Some(builder) = self.stack.last_mut() {
                    builder.set_key(text);
                }
                self.context = Context::ObjectColon;
            }
            _ => self.fail_at(ErrorKind::InvalidKey, start),
        }
    }

    /// Recognize a keyword or number at the cursor. A tentative match
    /// followed by another `Other`-class byte is rejected in strict mode and
    /// rescanned as an unquoted literal in lenient mode.
    fn scan_scalar(&mut self) -> Option<Value<'a>> {
        let src = self.src;
        let rest = &src[self.cursor..];
        if let Some((value, len)) = match_keyword(rest) {
            if !self.other_follows(len) {
                self.cursor += len;
                return Some(value);
            }
            return self.reject_scalar();
        }
        if let Some((len, int_len)) = scan_number(rest.as_bytes()) {
            if !self.other_follows(len) {
                let text = &rest[..len];
                self.cursor += len;
                return Some(Value::Number(Number::from_literal(text, int_len)));
            }
            return self.reject_scalar();
        }
        self.reject_scalar()
    }

    fn reject_scalar(&mut self) -> Option<Value<'a>> {
        if self.lenient {
            return Some(self.scan_unquoted());
        }
        self.fail(ErrorKind::NotAKeywordOrNumber);
        None
    }

    /// Extend the cursor over a run of `Other`-class bytes. The exact
    /// keyword spellings stay keywords; everything else is a string view.
    fn scan_unquoted(&mut self) -> Value<'a> {
        let src = self.src;
        let bytes = src.as_bytes();
        let start = self.cursor;
        let mut end = start;
        while end < self.limit && classify(bytes[end]) == CharClass::Other {
            end += 1;
        }
        self.cursor = end;
        match &src[start..end] {
            "null" => Value::Null,
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            text => Value::String(Cow::Borrowed(text)),
        }
    }

    /// Does the byte after a tentative token continue an unquoted literal?
    fn other_follows(&self, len: usize) -> bool {
        self.src
            .as_bytes()
            .get(self.cursor + len)
            .is_some_and(|&b| classify(b) == CharClass::Other)
    }

    // --------------------------------------------------------------------------------------------
    // Errors
    // --------------------------------------------------------------------------------------------

    /// Offsets handed in here always sit on the current line; no token may
    /// span a raw newline.
    fn error_at(&self, kind: ErrorKind, offset: usize) -> ParseError {
        ParseError {
            kind,
            line: self.line,
            column: offset - self.line_start + 1,
            offset,
        }
    }

    fn error_here(&self, kind: ErrorKind) -> ParseError {
        self.error_at(kind, self.cursor)
    }

    fn fail_at(&mut self, kind: ErrorKind, offset: usize) {
        self.pending = Some(self.error_at(kind, offset));
        self.context = Context::Failed;
    }

    fn fail(&mut self, kind: ErrorKind) {
        self.fail_at(kind, self.cursor);
    }

    fn fail_unexpected(&mut self) {
        let c = self.src[self.cursor..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.fail(ErrorKind::UnexpectedChar(c));
    }
}

fn match_keyword(rest: &str) -> Option<(Value<'static>, usize)> {
    if rest.starts_with("null") {
        return Some((Value::Null, 4));
    }
    if rest.starts_with("true") {
        return Some((Value::Bool(true), 4));
    }
    if rest.starts_with("false") {
        return Some((Value::Bool(false), 5));
    }
    None
}
