use crate::{parse, parse_many, Encoding, ErrorKind, Options};

fn strict_err(input: &str) -> ErrorKind {
    parse(input.as_bytes(), Options::default()).unwrap_err().kind
}

#[test]
fn empty_and_blank_inputs() {
    assert_eq!(strict_err(""), ErrorKind::NoJson);
    assert_eq!(strict_err("   \t  "), ErrorKind::NoJson);
    assert_eq!(strict_err(" \n\r\n "), ErrorKind::NoJson);
    assert_eq!(
        parse_many(b"  ", Options::default()).unwrap_err().kind,
        ErrorKind::NoJson
    );
}

#[test]
fn multiple_roots_rejected_by_single_root_entry() {
    assert_eq!(strict_err("null null"), ErrorKind::MultipleRoots);
    assert_eq!(strict_err("{} {}"), ErrorKind::MultipleRoots);
    assert_eq!(strict_err("1 2"), ErrorKind::MultipleRoots);
}

#[test]
fn unclosed_structures() {
    assert_eq!(strict_err("{"), ErrorKind::EndedInsideStructure);
    assert_eq!(strict_err("["), ErrorKind::EndedInsideStructure);
    assert_eq!(strict_err("[1,"), ErrorKind::EndedInsideStructure);
    assert_eq!(strict_err(r#"{"a""#), ErrorKind::EndedInsideStructure);
    assert_eq!(strict_err(r#"{"a":"#), ErrorKind::EndedInsideStructure);
    assert_eq!(strict_err("[[{}]"), ErrorKind::EndedInsideStructure);
}

#[test]
fn unclosed_strings() {
    assert_eq!(strict_err("\"abc"), ErrorKind::EndedInsideQuote);
    assert_eq!(strict_err("\"abc\\"), ErrorKind::EndedInsideQuote);
    assert_eq!(strict_err("[\"abc"), ErrorKind::EndedInsideQuote);
}

#[test]
fn stray_punctuation() {
    for input in ["}", "]", ":", ",", "{]", "[}", "[,", "{,", "[1:", r#"{"a",}"#] {
        assert!(
            matches!(strict_err(input), ErrorKind::UnexpectedChar(_)),
            "input {input:?}"
        );
    }
}

#[test]
fn raw_whitespace_inside_strings() {
    assert_eq!(strict_err("\"a\tb\""), ErrorKind::TabNewlineCrInsideQuotes);
    assert_eq!(strict_err("\"a\nb\""), ErrorKind::TabNewlineCrInsideQuotes);
    assert_eq!(strict_err("\"a\rb\""), ErrorKind::TabNewlineCrInsideQuotes);
}

#[test]
fn control_bytes() {
    assert_eq!(
        strict_err("\"a\u{0001}b\""),
        ErrorKind::ControlCharInsideQuotes(0x01)
    );
    assert_eq!(strict_err("\u{0001}"), ErrorKind::ControlChar(0x01));
    assert_eq!(strict_err("[\u{000B}]"), ErrorKind::ControlChar(0x0B));
}

#[test]
fn invalid_escapes() {
    assert_eq!(strict_err(r#""a\qb""#), ErrorKind::InvalidEscapeChar('q'));
    assert_eq!(strict_err(r#""\x41""#), ErrorKind::InvalidEscapeChar('x'));
    assert_eq!(strict_err(r#""\u12G4""#), ErrorKind::InvalidEscapeChar('G'));
}

#[test]
fn unquoted_tokens_in_strict_mode() {
    assert_eq!(strict_err("[a]"), ErrorKind::NotAKeywordOrNumber);
    assert_eq!(strict_err("nullx"), ErrorKind::NotAKeywordOrNumber);
    assert_eq!(strict_err("tru"), ErrorKind::NotAKeywordOrNumber);
    assert_eq!(strict_err("truefalse"), ErrorKind::NotAKeywordOrNumber);
    assert_eq!(strict_err("01"), ErrorKind::NotAKeywordOrNumber);
    assert_eq!(strict_err("1."), ErrorKind::NotAKeywordOrNumber);
    assert_eq!(strict_err("1.2.3"), ErrorKind::NotAKeywordOrNumber);
    assert_eq!(strict_err("-"), ErrorKind::NotAKeywordOrNumber);
    assert_eq!(strict_err("123abc"), ErrorKind::NotAKeywordOrNumber);
}

#[test]
fn non_ascii_outside_strings() {
    assert_eq!(strict_err("\u{00E9}"), ErrorKind::UnexpectedChar('\u{00E9}'));
    assert_eq!(
        strict_err("[1, \u{6C34}]"),
        ErrorKind::UnexpectedChar('\u{6C34}')
    );
}

#[test]
fn comment_bytes_are_reserved() {
    assert!(matches!(strict_err("/"), ErrorKind::UnexpectedChar('/')));
    assert!(matches!(strict_err("# x"), ErrorKind::UnexpectedChar('#')));
    assert!(matches!(
        strict_err("[1] // tail"),
        ErrorKind::UnexpectedChar('/')
    ));
}

#[test]
fn wide_encodings_are_rejected() {
    // "12" in UTF-16BE and UTF-32LE
    let err = parse(&[0x00, 0x31, 0x00, 0x32], Options::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedEncoding(Encoding::Utf16Be));
    let err = parse(&[0x31, 0x00, 0x00, 0x00], Options::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedEncoding(Encoding::Utf32Le));
}

#[test]
fn invalid_utf8_is_rejected() {
    assert_eq!(
        parse(&[0xFF], Options::default()).unwrap_err().kind,
        ErrorKind::InvalidChar
    );
    assert_eq!(
        parse(b"[\"a\xFFb\"]", Options::default()).unwrap_err().kind,
        ErrorKind::InvalidChar
    );
}

#[test]
fn errors_carry_positions() {
    let err = parse(b"[1,\nx]", Options::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotAKeywordOrNumber);
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 1);
    assert_eq!(err.offset, 4);

    let err = parse(b"{\"a\" 1}", Options::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedChar('1')));
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 6);
}

#[test]
fn nothing_is_recovered_after_a_failure() {
    // the error in the middle aborts the parse even though valid values follow
    let err = parse_many(b"[1] } [2]", Options::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedChar('}')));
}
