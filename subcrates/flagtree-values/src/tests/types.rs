// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::ValueError;
use crate::types::*;
use crate::value::{Value, Var};
use log::LevelFilter;
use std::time::Duration;

fn assert_round_trip<V: Value>(mut value: V) {
    let before = value.stringify();
    value.parse(before.as_str()).unwrap();
    assert_eq!(before, value.stringify());
}

#[test]
fn test_parse_int() {
    let dst = Var::default();
    let mut value = IntValue::new(&dst, 3);

    for (input, expected) in &[
        ("42", 42),
        ("-7", -7),
        ("+9", 9),
        ("0x1f", 31),
        ("0X1F", 31),
        ("-0x10", -16),
        ("0o17", 15),
        ("0b101", 5),
        ("007", 7),
        ("0755", 493),
        ("-0755", -493),
        ("0", 0),
        ("1_000", 1000),
        ("0x_ff_ff", 65535),
        ("0b1010_1010", 170),
        ("-9223372036854775808", i64::min_value()),
    ] {
        value.parse(input).unwrap();
        assert_eq!(*expected, dst.get(), "parsing {:?}", input);
    }
}

#[test]
fn test_parse_int_failure() {
    let dst = Var::default();
    let mut value = IntValue::new(&dst, 3);

    assert_eq!(
        "could not parse \"x\" as int (invalid digit found in string)",
        value.parse("x").unwrap_err().to_string()
    );
    assert!(value.parse("").is_err());
    assert!(value.parse("0x-5").is_err());
    assert!(value.parse("1.5").is_err());
    assert!(value.parse("08").is_err());
    assert!(value.parse("_1").is_err());
    assert!(value.parse("1_").is_err());
    assert!(value.parse("1__0").is_err());
    assert!(value.parse("0x").is_err());
    assert!(value.parse("99999999999999999999").is_err());
    // A failed parse leaves the destination alone.
    assert_eq!(3, dst.get());
}

#[test]
fn test_parse_float() {
    let dst = Var::default();
    let mut value = FloatValue::new(&dst, 0.5);
    assert_eq!("0.5", value.stringify());

    value.parse("2.25").unwrap();
    assert_eq!(2.25, dst.get());
    value.parse("1e3").unwrap();
    assert_eq!(1000.0, dst.get());
    assert_eq!("1000", value.stringify());

    match value.parse("abc").unwrap_err() {
        ValueError::Conversion { value, kind, .. } => {
            assert_eq!("abc", value);
            assert_eq!("float", kind);
        }
        e => panic!("Unexpected error {:?}", e),
    }
}

#[test]
fn test_parse_string() {
    let dst = Var::default();
    let mut value = StringValue::new(&dst, "banana");
    value.parse("mango").unwrap();
    assert_eq!("mango", dst.get());
    value.parse("").unwrap();
    assert_eq!("", dst.get());
}

#[test]
fn test_parse_bool() {
    let dst = Var::default();
    let mut value = BoolValue::new(&dst, false);

    for input in &["1", "t", "T", "TRUE", "true", "True"] {
        dst.set(false);
        value.parse(input).unwrap();
        assert!(dst.get(), "parsing {:?}", input);
    }
    for input in &["0", "f", "F", "FALSE", "false", "False"] {
        dst.set(true);
        value.parse(input).unwrap();
        assert!(!dst.get(), "parsing {:?}", input);
    }

    assert_eq!(
        "could not parse \"ham\" as bool (invalid syntax)",
        value.parse("ham").unwrap_err().to_string()
    );
    assert!(value.parse("yes").is_err());
}

#[test]
fn test_int_list_resets_on_each_parse() {
    let dst = Var::default();
    let mut value = IntListValue::new(&dst, &[1, 2, 3]);
    assert_eq!("1,2,3", value.stringify());

    value.parse("4,5").unwrap();
    assert_eq!(vec![4, 5], dst.get());
    value.parse("6").unwrap();
    assert_eq!(vec![6], dst.get());
    value.parse("").unwrap();
    assert!(dst.get().is_empty());
}

#[test]
fn test_int_list_failure_names_offending_element() {
    let dst = Var::default();
    let mut value = IntListValue::new(&dst, &[1]);
    assert_eq!(
        "could not parse \"b\" as int (invalid digit found in string)",
        value.parse("7,b,9").unwrap_err().to_string()
    );
    assert_eq!(vec![1], dst.get());
}

#[test]
fn test_string_list_resets_on_each_parse() {
    let dst = Var::default();
    let mut value = StringListValue::new(&dst, &["a", "b"]);
    assert_eq!("a,b", value.stringify());

    value.parse("c").unwrap();
    assert_eq!(vec!["c".to_owned()], dst.get());
    value.parse("d,,e").unwrap();
    assert_eq!(
        vec!["d".to_owned(), "".to_owned(), "e".to_owned()],
        dst.get()
    );
}

#[test]
fn test_parse_duration_value() {
    let dst = Var::default();
    let mut value = DurationValue::new(&dst, Duration::from_millis(100));
    assert_eq!("100ms", value.stringify());

    value.parse("32m4ms").unwrap();
    assert_eq!(Duration::from_millis(32 * 60 * 1000 + 4), dst.get());
    assert_eq!(
        "could not parse \"78\" as duration (missing unit)",
        value.parse("78").unwrap_err().to_string()
    );
}

#[test]
fn test_parse_level() {
    let dst = Var::new(LevelFilter::Off);
    let mut value = LevelValue::new(&dst, LevelFilter::Info);
    assert_eq!("INFO", value.stringify());

    value.parse("debug").unwrap();
    assert_eq!(LevelFilter::Debug, dst.get());
    value.parse("OFF").unwrap();
    assert_eq!(LevelFilter::Off, dst.get());
    value.parse(" Trace ").unwrap();
    assert_eq!(LevelFilter::Trace, dst.get());

    let err = value.parse("loud").unwrap_err().to_string();
    assert!(
        err.starts_with("could not parse \"loud\" as log level ("),
        "unexpected error {}",
        err
    );
}

#[test]
fn test_defaults_round_trip() {
    assert_round_trip(IntValue::new(&Var::default(), -17));
    assert_round_trip(IntValue::new(&Var::default(), i64::max_value()));
    assert_round_trip(FloatValue::new(&Var::default(), 3.125));
    assert_round_trip(FloatValue::new(&Var::default(), 0.1));
    assert_round_trip(StringValue::new(&Var::default(), "cardboard"));
    assert_round_trip(StringValue::new(&Var::default(), ""));
    assert_round_trip(BoolValue::new(&Var::default(), true));
    assert_round_trip(BoolValue::new(&Var::default(), false));
    assert_round_trip(IntListValue::new(&Var::default(), &[1, -2, 3]));
    assert_round_trip(IntListValue::new(&Var::default(), &[]));
    assert_round_trip(StringListValue::new(&Var::default(), &["x", "y"]));
    assert_round_trip(StringListValue::new(&Var::default(), &[]));
    assert_round_trip(DurationValue::new(
        &Var::default(),
        Duration::new(5660, 4_000_123),
    ));
    assert_round_trip(DurationValue::new(&Var::default(), Duration::from_secs(0)));
    assert_round_trip(LevelValue::new(&Var::new(LevelFilter::Off), LevelFilter::Warn));
}
