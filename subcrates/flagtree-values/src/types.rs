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

//! The built-in `Value` implementations. Each one is constructed from a `Var`
//! and a default, and writes the default into the `Var` immediately, so the
//! destination holds a sensible value even if the flag never appears.

use crate::duration::{format_duration, parse_duration};
use crate::error::*;
use crate::value::{Binding, Value, Var};
use log::LevelFilter;
use std::time::Duration;

/// Returns true if the underscores in `digits` only ever separate digits. A
/// leading underscore is fine right after a radix prefix.
fn underscores_ok(digits: &str, prefixed: bool) -> bool {
    !(digits.ends_with('_')
        || digits.contains("__")
        || (!prefixed && digits.starts_with('_')))
}

/// Parse an integer, accepting an optional sign, a "0x", "0o" or "0b" radix
/// prefix, a bare leading "0" for octal, and "_" between digits.
fn parse_int(value: &str) -> ValueResult<i64> {
    let syntax = || ValueError::conversion(value, "int", "invalid digit found in string");

    let (sign, unsigned) = match value.chars().next() {
        Some(c) if c == '+' || c == '-' => (Some(c), &value[1..]),
        _ => (None, value),
    };
    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits, prefixed) = if lower.starts_with("0x") {
        (16, &unsigned[2..], true)
    } else if lower.starts_with("0o") {
        (8, &unsigned[2..], true)
    } else if lower.starts_with("0b") {
        (2, &unsigned[2..], true)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..], true)
    } else {
        (10, unsigned, false)
    };
    if digits.starts_with('+') || digits.starts_with('-') || !underscores_ok(digits, prefixed) {
        return Err(syntax());
    }

    let signed: String = sign
        .into_iter()
        .chain(digits.chars().filter(|&c| c != '_'))
        .collect();
    i64::from_str_radix(&signed, radix).map_err(|e| ValueError::conversion(value, "int", e))
}

/// Parse a boolean, accepting the same spellings as most flag libraries do:
/// 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False.
fn parse_bool(value: &str) -> ValueResult<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ValueError::conversion(value, "bool", "invalid syntax")),
    }
}

/// Split a comma-separated list. The empty string is the empty list, so that
/// an empty default survives a stringify / parse round trip.
fn split_list(value: &str) -> Vec<&str> {
    match value.is_empty() {
        true => Vec::new(),
        false => value.split(',').collect(),
    }
}

/// IntValue stores a signed integer. Besides plain decimal it accepts "0x",
/// "0o" and "0b" prefixes, a leading "0" for octal (so "0755" is 493), and
/// underscores between digits ("1_000").
#[derive(Debug)]
pub struct IntValue {
    dst: Var<i64>,
}

impl IntValue {
    /// Bind a new IntValue to `dst`, and set it to `default`.
    pub fn new(dst: &Var<i64>, default: i64) -> Self {
        dst.set(default);
        IntValue { dst: dst.clone() }
    }
}

impl Value for IntValue {
    fn stringify(&self) -> String {
        self.dst.get().to_string()
    }

    fn parse(&mut self, value: &str) -> ValueResult<()> {
        self.dst.set(parse_int(value)?);
        Ok(())
    }

    fn binding(&self) -> Binding {
        self.dst.binding()
    }
}

/// FloatValue stores a 64-bit floating point number.
#[derive(Debug)]
pub struct FloatValue {
    dst: Var<f64>,
}

impl FloatValue {
    /// Bind a new FloatValue to `dst`, and set it to `default`.
    pub fn new(dst: &Var<f64>, default: f64) -> Self {
        dst.set(default);
        FloatValue { dst: dst.clone() }
    }
}

impl Value for FloatValue {
    fn stringify(&self) -> String {
        self.dst.get().to_string()
    }

    fn parse(&mut self, value: &str) -> ValueResult<()> {
        let parsed = value
            .parse::<f64>()
            .map_err(|e| ValueError::conversion(value, "float", e))?;
        self.dst.set(parsed);
        Ok(())
    }

    fn binding(&self) -> Binding {
        self.dst.binding()
    }
}

/// StringValue stores its text unchanged. Parsing it never fails.
#[derive(Debug)]
pub struct StringValue {
    dst: Var<String>,
}

impl StringValue {
    /// Bind a new StringValue to `dst`, and set it to `default`.
    pub fn new(dst: &Var<String>, default: &str) -> Self {
        dst.set(default.to_owned());
        StringValue { dst: dst.clone() }
    }
}

impl Value for StringValue {
    fn stringify(&self) -> String {
        self.dst.get()
    }

    fn parse(&mut self, value: &str) -> ValueResult<()> {
        self.dst.set(value.to_owned());
        Ok(())
    }

    fn binding(&self) -> Binding {
        self.dst.binding()
    }
}

/// BoolValue stores a boolean. It is a no-argument value: "--flag" alone
/// means "--flag=true", and an explicit value can only be given with "=".
#[derive(Debug)]
pub struct BoolValue {
    dst: Var<bool>,
}

impl BoolValue {
    /// Bind a new BoolValue to `dst`, and set it to `default`.
    pub fn new(dst: &Var<bool>, default: bool) -> Self {
        dst.set(default);
        BoolValue { dst: dst.clone() }
    }
}

impl Value for BoolValue {
    fn stringify(&self) -> String {
        self.dst.get().to_string()
    }

    fn parse(&mut self, value: &str) -> ValueResult<()> {
        self.dst.set(parse_bool(value)?);
        Ok(())
    }

    fn is_no_argument(&self) -> bool {
        true
    }

    fn binding(&self) -> Binding {
        self.dst.binding()
    }
}

/// IntListValue stores a comma-separated list of decimal integers.
///
/// Each call to `parse` replaces the whole list: if the flag is repeated on
/// the command line, the last occurrence wins, exactly like scalar flags.
#[derive(Debug)]
pub struct IntListValue {
    dst: Var<Vec<i64>>,
}

impl IntListValue {
    /// Bind a new IntListValue to `dst`, and set it to `default`.
    pub fn new(dst: &Var<Vec<i64>>, default: &[i64]) -> Self {
        dst.set(default.to_vec());
        IntListValue { dst: dst.clone() }
    }
}

impl Value for IntListValue {
    fn stringify(&self) -> String {
        self.dst
            .borrow()
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<String>>()
            .join(",")
    }

    fn parse(&mut self, value: &str) -> ValueResult<()> {
        let parsed = split_list(value)
            .into_iter()
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|e| ValueError::conversion(s, "int", e))
            })
            .collect::<ValueResult<Vec<i64>>>()?;
        self.dst.set(parsed);
        Ok(())
    }

    fn binding(&self) -> Binding {
        self.dst.binding()
    }
}

/// StringListValue stores a comma-separated list of strings. Like
/// `IntListValue`, every `parse` call replaces the list.
#[derive(Debug)]
pub struct StringListValue {
    dst: Var<Vec<String>>,
}

impl StringListValue {
    /// Bind a new StringListValue to `dst`, and set it to `default`.
    pub fn new(dst: &Var<Vec<String>>, default: &[&str]) -> Self {
        dst.set(default.iter().map(|&s| s.to_owned()).collect());
        StringListValue { dst: dst.clone() }
    }
}

impl Value for StringListValue {
    fn stringify(&self) -> String {
        self.dst.borrow().join(",")
    }

    fn parse(&mut self, value: &str) -> ValueResult<()> {
        self.dst
            .set(split_list(value).into_iter().map(|s| s.to_owned()).collect());
        Ok(())
    }

    fn binding(&self) -> Binding {
        self.dst.binding()
    }
}

/// DurationValue stores a `Duration`, written as a sequence of numbers with
/// units, e.g. "1h34m20s4ms" or "1.5s".
#[derive(Debug)]
pub struct DurationValue {
    dst: Var<Duration>,
}

impl DurationValue {
    /// Bind a new DurationValue to `dst`, and set it to `default`.
    pub fn new(dst: &Var<Duration>, default: Duration) -> Self {
        dst.set(default);
        DurationValue { dst: dst.clone() }
    }
}

impl Value for DurationValue {
    fn stringify(&self) -> String {
        format_duration(self.dst.get())
    }

    fn parse(&mut self, value: &str) -> ValueResult<()> {
        self.dst.set(parse_duration(value)?);
        Ok(())
    }

    fn binding(&self) -> Binding {
        self.dst.binding()
    }
}

/// LevelValue stores a log verbosity, one of "off", "error", "warn", "info",
/// "debug" or "trace" (case insensitive).
#[derive(Debug)]
pub struct LevelValue {
    dst: Var<LevelFilter>,
}

impl LevelValue {
    /// Bind a new LevelValue to `dst`, and set it to `default`.
    pub fn new(dst: &Var<LevelFilter>, default: LevelFilter) -> Self {
        dst.set(default);
        LevelValue { dst: dst.clone() }
    }
}

impl Value for LevelValue {
    fn stringify(&self) -> String {
        self.dst.get().to_string()
    }

    fn parse(&mut self, value: &str) -> ValueResult<()> {
        let level = value
            .trim()
            .parse::<LevelFilter>()
            .map_err(|e| ValueError::conversion(value, "log level", e))?;
        self.dst.set(level);
        Ok(())
    }

    fn binding(&self) -> Binding {
        self.dst.binding()
    }
}
