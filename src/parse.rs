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
use crate::flag::{Flags, HELP_LONG_NAME, HELP_SHORT_NAME};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // (hyphens)(name)(=value)? - the name is as short as possible, so it ends
    // at the first '='. A trailing "=" with nothing after it stays part of the
    // name.
    static ref FLAG_RE: Regex =
        Regex::new(r"(?s)^(?P<hyphens>-*)(?P<name>.*?)(?:=(?P<value>.+))?$").unwrap();
}

/// Token is a single command-line argument, split into its leading hyphens,
/// its name and its optional "=value" suffix.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Token<'a> {
    pub(crate) hyphens: usize,
    pub(crate) name: &'a str,
    pub(crate) value: Option<&'a str>,
}

impl<'a> Token<'a> {
    pub(crate) fn new(token: &'a str) -> Result<Token<'a>> {
        let captures = match FLAG_RE.captures(token) {
            None => {
                return Err(Error::Internal(format!(
                    "failed to classify token {:?}",
                    token
                )))
            }
            Some(c) => c,
        };
        let group = |name: &str| captures.name(name).map(|m| m.as_str());

        Ok(Token {
            hyphens: group("hyphens").map_or(0, |h| h.len()),
            name: group("name").unwrap_or(""),
            value: group("value"),
        })
    }

    /// Only tokens with one or two leading hyphens are flags. Anything else
    /// marks the start of the positional arguments (or subcommand).
    pub(crate) fn is_flag(&self) -> bool {
        self.hyphens == 1 || self.hyphens == 2
    }

    pub(crate) fn is_help(&self) -> bool {
        let mut chars = self.name.chars();
        self.name == HELP_LONG_NAME
            || (chars.next() == Some(HELP_SHORT_NAME) && chars.next().is_none())
    }
}

/// The outcome of trying to parse a single flag from the front of the
/// remaining arguments.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// There are no more flags; this is the positional boundary.
    End,
    /// Help was requested.
    Help,
    /// The named flag was parsed, consuming one or two arguments.
    Flag { long: String, consumed: usize },
}

/// Parse the next named flag from the front of the given arguments, storing
/// its value into its destination. This handles all of the possible shapes:
///
/// - "--foo bar" consumes two arguments.
/// - "--foo=bar" consumes one argument.
/// - "--foo", for a no-argument flag, consumes one argument.
/// - anything which is not a flag ends the flags, consuming nothing.
pub(crate) fn parse_next_named_flag<S: AsRef<str>>(
    flags: &mut Flags,
    args: &[S],
) -> Result<Step> {
    let raw = match args.first() {
        None => return Ok(Step::End),
        Some(raw) => raw.as_ref(),
    };
    let token = Token::new(raw)?;
    if !token.is_flag() {
        return Ok(Step::End);
    }
    if token.is_help() {
        return Ok(Step::Help);
    }

    let flag = match flags.find_named_flag_mut(token.name) {
        None => return Err(Error::UnknownFlag(raw.to_owned())),
        Some(flag) => flag,
    };
    let long = flag.get_long().to_owned();

    if let Some(value) = token.value {
        flag.parse(value).map_err(|e| Error::BadValue {
            setting: format!("{:?}", raw),
            cause: e,
        })?;
        return Ok(Step::Flag { long, consumed: 1 });
    }

    if flag.is_no_argument() {
        flag.parse("true").map_err(|e| Error::BadValue {
            setting: format!("{:?}", raw),
            cause: e,
        })?;
        return Ok(Step::Flag { long, consumed: 1 });
    }

    let next = match args.get(1) {
        None => return Err(Error::MissingValue(raw.to_owned())),
        Some(next) => next.as_ref(),
    };
    flag.parse(next).map_err(|e| Error::BadValue {
        setting: format!("{:?} {:?}", raw, next),
        cause: e,
    })?;
    Ok(Step::Flag { long, consumed: 2 })
}

/// The outcome of scanning all of a command's flags.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Scan {
    /// Help was requested, so scanning stopped early.
    Help,
    /// All flags were parsed. `boundary` is the index of the first argument
    /// which is not a flag, and `seen` holds the long names of every flag
    /// which was given.
    Done {
        boundary: usize,
        seen: HashSet<String>,
    },
}

/// Parse flags from the front of `args` until the first argument which isn't
/// one. Once that boundary is reached, nothing after it is ever treated as a
/// flag, even if it looks like one.
pub(crate) fn scan_flags<S: AsRef<str>>(
    command: &str,
    flags: &mut Flags,
    args: &[S],
) -> Result<Scan> {
    let mut seen = HashSet::new();
    let mut idx = 0;
    loop {
        match parse_next_named_flag(flags, &args[idx..])? {
            Step::End => break,
            Step::Help => return Ok(Scan::Help),
            Step::Flag { long, consumed } => {
                trace!("{}: parsed flag --{} from {} argument(s)", command, long, consumed);
                seen.insert(long);
                idx += consumed;
            }
        }
    }
    Ok(Scan::Done {
        boundary: idx,
        seen: seen,
    })
}
