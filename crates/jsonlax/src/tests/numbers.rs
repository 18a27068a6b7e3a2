use alloc::borrow::Cow;
use alloc::string::ToString;

use num_bigint::BigInt;

use crate::{parse, Number, Options, Value};

fn number(input: &str) -> Number<'_> {
    match parse(input.as_bytes(), Options::default()).unwrap() {
        Value::Number(n) => n,
        other => panic!("expected a number for {input:?}, got {other:?}"),
    }
}

fn big(digits: &str) -> BigInt {
    BigInt::parse_bytes(digits.as_bytes(), 10).unwrap()
}

#[test]
fn i64_boundaries_stay_int() {
    assert_eq!(number("-9223372036854775808"), Number::Int(i64::MIN));
    assert_eq!(number("-9223372036854775807"), Number::Int(i64::MIN + 1));
    assert_eq!(number("9223372036854775806"), Number::Int(i64::MAX - 1));
    assert_eq!(number("9223372036854775807"), Number::Int(i64::MAX));
}

#[test]
fn just_outside_i64_becomes_bigint() {
    assert_eq!(
        number("-9223372036854775809"),
        Number::Big(big("-9223372036854775809"))
    );
    assert_eq!(
        number("9223372036854775808"),
        Number::Big(big("9223372036854775808"))
    );
    assert_eq!(
        number("18446744073709551615"),
        Number::Big(big("18446744073709551615"))
    );
    assert_eq!(
        number("18446744073709551616"),
        Number::Big(big("18446744073709551616"))
    );
}

#[test]
fn very_long_integers_stay_exact() {
    let digits = "9".repeat(100);
    assert_eq!(number(&digits), Number::Big(big(&digits)));
}

#[test]
fn zeroes_are_int_zero() {
    assert_eq!(number("0"), Number::Int(0));
    assert_eq!(number("-0"), Number::Int(0));
}

#[test]
fn fraction_and_exponent_forms_are_doubles() {
    assert_eq!(number("0.0"), Number::Float(0.0));
    assert_eq!(number("-0.0"), Number::Float(0.0));
    assert_eq!(number("0e0"), Number::Float(0.0));
    assert_eq!(number("1e1"), Number::Float(10.0));
    assert_eq!(number("1.234e2"), Number::Float(123.4));
    assert_eq!(number("1.234E-2"), Number::Float(0.01234));
    assert_eq!(number("2.5"), Number::Float(2.5));
    assert_eq!(number("-12.75"), Number::Float(-12.75));
}

#[test]
fn overflowing_literals_are_preserved_verbatim() {
    assert_eq!(number("1e999"), Number::Huge(Cow::Borrowed("1e999")));
    assert_eq!(number("-1e999"), Number::Huge(Cow::Borrowed("-1e999")));
    assert_eq!(
        number("123.4E-9999999999999999999"),
        Number::Huge(Cow::Borrowed("123.4E-9999999999999999999"))
    );
}

#[test]
fn subnormals_are_still_doubles() {
    assert_eq!(number("5e-324"), Number::Float(5e-324));
    assert!(matches!(number("2.2250738585072014e-308"), Number::Float(_)));
}

#[test]
fn numbers_terminate_cleanly_before_structural_bytes() {
    let value = parse(b"[1,2.5,-3e2]", Options::default()).unwrap();
    assert_eq!(value.get_index(0), Some(&Value::Number(Number::Int(1))));
    assert_eq!(value.get_index(1), Some(&Value::Number(Number::Float(2.5))));
    assert_eq!(
        value.get_index(2),
        Some(&Value::Number(Number::Float(-300.0)))
    );
}

#[test]
fn number_serialization_round_trips() {
    for input in [
        "0",
        "-7",
        "9223372036854775807",
        "9223372036854775808",
        "18446744073709551616",
        "2.5",
        "10.0",
        "0.01234",
        "1e999",
        "123.4E-9999999999999999999",
    ] {
        let first = parse(input.as_bytes(), Options::default()).unwrap();
        let first_string = first.to_string();
        let reparsed = parse(first_string.as_bytes(), Options::default()).unwrap();
        assert_eq!(first, reparsed, "input {input:?}");
    }
}

#[test]
fn huge_literals_serialize_verbatim() {
    let value = parse(b"123.4E-9999999999999999999", Options::default()).unwrap();
    assert_eq!(value.to_string(), "123.4E-9999999999999999999");
}
