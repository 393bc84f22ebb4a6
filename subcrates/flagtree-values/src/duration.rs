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

use crate::error::*;
use std::fmt::Write;
use std::time::Duration;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Units accepted when parsing, along with their length in nanoseconds.
const PARSE_UNITS: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", NANOS_PER_SECOND),
    ("m", 60 * NANOS_PER_SECOND),
    ("h", 3600 * NANOS_PER_SECOND),
];

/// Units used when formatting, largest first.
const FORMAT_UNITS: &[(&str, u128)] = &[
    ("h", 3600 * NANOS_PER_SECOND),
    ("m", 60 * NANOS_PER_SECOND),
    ("s", NANOS_PER_SECOND),
    ("ms", 1_000_000),
    ("us", 1_000),
    ("ns", 1),
];

/// Fractional digits beyond this are ignored; they are below nanosecond
/// precision for every unit anyway.
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a duration string: a possibly signed sequence of decimal numbers,
/// each with an optional fraction and a mandatory unit suffix, such as "300ms",
/// "1.5h" or "2h45m". The special case "0" needs no unit. Negative durations
/// are rejected, since `Duration` cannot represent them.
pub fn parse_duration(value: &str) -> ValueResult<Duration> {
    let err = |cause: &str| ValueError::conversion(value, "duration", cause);

    let mut rest = value;
    if rest.starts_with('-') {
        return Err(err("negative durations are not supported"));
    }
    if rest.starts_with('+') {
        rest = &rest[1..];
    }
    if rest == "0" {
        return Ok(Duration::from_secs(0));
    }
    if rest.is_empty() {
        return Err(err("invalid duration"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or_else(|| rest.len());
        let (number, tail) = rest.split_at(number_len);
        let (whole, fraction) = match number.find('.') {
            None => (number, ""),
            Some(idx) => (&number[..idx], &number[idx + 1..]),
        };
        if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
            return Err(err("invalid duration"));
        }

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or_else(|| tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        if unit.is_empty() {
            return Err(err("missing unit"));
        }
        let scale = match PARSE_UNITS.iter().find(|(name, _)| *name == unit) {
            None => return Err(err(&format!("unknown unit {:?}", unit))),
            Some((_, scale)) => *scale,
        };

        let whole: u128 = match whole.is_empty() {
            true => 0,
            false => whole.parse().map_err(|_| err("overflow"))?,
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(|| err("overflow"))?;
        if !fraction.is_empty() {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let numerator: u128 = digits.parse().map_err(|_| err("invalid duration"))?;
            nanos = nanos
                .checked_add(numerator * scale / 10u128.pow(digits.len() as u32))
                .ok_or_else(|| err("overflow"))?;
        }

        total = total.checked_add(nanos).ok_or_else(|| err("overflow"))?;
        rest = tail;
    }

    let seconds = total / NANOS_PER_SECOND;
    if seconds > u128::from(u64::MAX) {
        return Err(err("overflow"));
    }
    Ok(Duration::new(
        seconds as u64,
        (total % NANOS_PER_SECOND) as u32,
    ))
}

/// Format a duration as a sequence of whole units, largest first, skipping any
/// unit which would be zero: e.g. "1h34m20s4ms". The zero duration is "0s".
/// The output is always accepted by `parse_duration`.
pub fn format_duration(duration: Duration) -> String {
    let mut nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_owned();
    }

    let mut out = String::new();
    for (unit, scale) in FORMAT_UNITS {
        let count = nanos / scale;
        if count > 0 {
            // Writing into a String cannot fail.
            let _ = write!(out, "{}{}", count, unit);
            nanos %= scale;
        }
    }
    out
}
