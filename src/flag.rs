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
use flagtree_values::{Value, ValueResult};
use std::collections::{HashMap, HashSet};

/// The long name reserved for requesting help.
pub(crate) const HELP_LONG_NAME: &str = "help";
/// The short name reserved for requesting help.
pub(crate) const HELP_SHORT_NAME: char = 'h';

/// Flag describes a single named flag, and holds the `Value` its parsed text
/// is stored into.
///
/// A Flag is built with `Flag::new` plus the builder-style setters, and then
/// handed to `Command::add_flag`, which validates it.
#[derive(Debug)]
pub struct Flag {
    value: Box<dyn Value>,
    /// The optional short name, e.g. 'c' for "-c".
    short: Option<char>,
    /// The long name, e.g. "count" for "--count".
    long: String,
    /// The placeholder shown after the flag name in help output.
    label: String,
    help: String,
    /// A required flag must be given explicitly on the command line, even if
    /// it has a default.
    required: bool,
    /// The rendered default value, captured at registration time.
    default_value: String,
}

impl Flag {
    /// Construct a new Flag with the given long name, storing into the given
    /// Value.
    pub fn new<V: Value + 'static>(long: &str, value: V) -> Self {
        Flag {
            value: Box::new(value),
            short: None,
            long: long.to_owned(),
            label: String::new(),
            help: String::new(),
            required: false,
            default_value: String::new(),
        }
    }

    /// Set this flag's short name.
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Set the placeholder shown in help output. If this is never called, the
    /// upper-cased long name is used (except for no-argument flags, which
    /// take no placeholder).
    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    /// Set the human-readable help text.
    pub fn help(mut self, help: &str) -> Self {
        self.help = help.to_owned();
        self
    }

    /// Mark this flag as required (or not).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Returns this flag's long name.
    pub fn get_long(&self) -> &str {
        self.long.as_str()
    }

    /// Returns this flag's short name, if it has one.
    pub fn get_short(&self) -> Option<char> {
        self.short
    }

    /// Returns the placeholder shown in help output.
    pub fn get_label(&self) -> &str {
        self.label.as_str()
    }

    /// Returns the human-readable help text for this flag.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns whether this flag must be given explicitly.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the default value, rendered when the flag was registered.
    pub fn get_default_value(&self) -> &str {
        self.default_value.as_str()
    }

    /// Returns whether this flag can be given without a value.
    pub fn is_no_argument(&self) -> bool {
        self.value.is_no_argument()
    }

    /// Store the given text into this flag's destination.
    pub(crate) fn parse(&mut self, value: &str) -> ValueResult<()> {
        self.value.parse(value)
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidArgument(message)
}

/// Validate the shape of a short flag name.
fn check_short_name(short: char) -> Result<()> {
    if short == '-' {
        return Err(invalid("short flag name must not begin with '-'".to_owned()));
    }
    if short == '=' {
        return Err(invalid("short flag name must not contain '='".to_owned()));
    }
    if short == HELP_SHORT_NAME {
        return Err(invalid(format!(
            "cannot override short flag name \"{}\"",
            HELP_SHORT_NAME
        )));
    }
    Ok(())
}

/// Validate the shape of a long flag name.
fn check_long_name(long: &str) -> Result<()> {
    if long.starts_with('-') {
        return Err(invalid(format!(
            "long flag name {:?} must not begin with '-'",
            long
        )));
    }
    if long.contains('=') {
        return Err(invalid(format!(
            "long flag name {:?} must not contain '='",
            long
        )));
    }
    if long.is_empty() {
        return Err(invalid("long flag name cannot be empty".to_owned()));
    }
    if long.chars().count() < 2 {
        return Err(invalid(format!(
            "long flag name {:?} must be at least 2 characters",
            long
        )));
    }
    if long == HELP_LONG_NAME {
        return Err(invalid(format!(
            "cannot override long flag name \"{}\"",
            HELP_LONG_NAME
        )));
    }
    Ok(())
}

/// Flags is the registry of all of the flags belonging to a single command.
/// Flags are kept in registration order, and indexed by long name and by
/// short name.
#[derive(Debug, Default)]
pub struct Flags {
    flags: Vec<Flag>,
    long_index: HashMap<String, usize>,
    short_to_long: HashMap<char, String>,
}

impl Flags {
    /// Validate the given flag and add it to this registry. `owner` is the
    /// name of the command this registry belongs to, used in error messages.
    pub(crate) fn add(&mut self, owner: &str, mut flag: Flag) -> Result<()> {
        if let Some(short) = flag.short {
            check_short_name(short)?;
            if self.short_to_long.contains_key(&short) {
                return Err(invalid(format!(
                    "{}: short flag name \"{}\" already defined",
                    owner, short
                )));
            }
        }

        check_long_name(flag.long.as_str())?;
        if self.long_index.contains_key(&flag.long) {
            return Err(invalid(format!(
                "{}: long flag name {:?} already defined",
                owner, flag.long
            )));
        }

        let binding = flag.value.binding();
        if let Some(other) = self.flags.iter().find(|f| f.value.binding() == binding) {
            return Err(invalid(format!(
                "long flag name {:?}: variable already bound to flag {:?}",
                flag.long, other.long
            )));
        }

        flag.default_value = flag.value.stringify();
        if flag.label.is_empty() && !flag.is_no_argument() {
            flag.label = flag.long.to_uppercase();
        }

        if let Some(short) = flag.short {
            self.short_to_long.insert(short, flag.long.clone());
        }
        self.long_index.insert(flag.long.clone(), self.flags.len());
        self.flags.push(flag);
        Ok(())
    }

    /// Locate the index of the flag matching the given name, which may be
    /// either a long name or (if it is a single character) a short name.
    fn find_index(&self, name: &str) -> Option<usize> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => self
                .short_to_long
                .get(&short)
                .and_then(|long| self.long_index.get(long))
                .copied(),
            _ => self.long_index.get(name).copied(),
        }
    }

    /// Locate the flag matching the given long or short name.
    pub fn find_named_flag(&self, name: &str) -> Option<&Flag> {
        self.find_index(name).map(|idx| &self.flags[idx])
    }

    pub(crate) fn find_named_flag_mut(&mut self, name: &str) -> Option<&mut Flag> {
        match self.find_index(name) {
            None => None,
            Some(idx) => Some(&mut self.flags[idx]),
        }
    }

    /// Returns an Iterator over the flags, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    /// Returns the flags sorted by long name, the order used in help output.
    pub(crate) fn sorted(&self) -> Vec<&Flag> {
        let mut sorted: Vec<&Flag> = self.flags.iter().collect();
        sorted.sort_by(|a, b| a.long.cmp(&b.long));
        sorted
    }

    /// Returns the number of registered flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if no flags have been registered.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the sorted long names of the required flags which don't appear
    /// in `seen`.
    pub(crate) fn missing_required(&self, seen: &HashSet<String>) -> Vec<String> {
        let mut missing: Vec<String> = self
            .flags
            .iter()
            .filter(|f| f.required && !seen.contains(&f.long))
            .map(|f| f.long.clone())
            .collect();
        missing.sort();
        missing
    }
}
