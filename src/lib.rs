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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! flagtree is a command-line argument parser for programs with trees of
//! subcommands, like "git remote add" or "hg clone".
//!
//! Each `Command` owns its own flags, and either a list of subcommands or a
//! list of positional arguments. Flags are parsed level by level: the flags
//! of "prog" come before "sub", and the flags of "sub" come after it. Flag
//! values are stored into caller-provided `Var` destinations as they are
//! parsed, and parsing results in an unexecuted `Action`, which the caller
//! then executes with an application-defined context value.

/// command defines the tree of commands, and the resolution of command-line
/// arguments against it.
pub mod command;
/// error defines the errors which can come up while building a command tree
/// or parsing arguments against it.
pub mod error;
/// flag defines flags, and the per-command flag registry.
pub mod flag;
mod help;
/// main_impl provides a complete `main` for programs built on flagtree.
pub mod main_impl;
mod parse;
/// parse_and_execute parses arguments and executes the resulting action in
/// one step.
pub mod parse_and_execute;
/// testing provides utilities which are useful for unit testing code built on
/// flagtree.
#[cfg(feature = "testing")]
pub mod testing;
/// util contains small helpers for validating parsed flags.
pub mod util;

pub use flagtree_values as values;

pub use self::command::{Action, Command, CommandCallback, CommandResult, Pair};
pub use self::error::{Error, ErrorKind, Result};
pub use self::flag::{Flag, Flags};
pub use self::main_impl::main_impl;
pub use self::parse_and_execute::parse_and_execute;
pub use self::util::count_true;
pub use flagtree_values::{
    BoolValue, DurationValue, FloatValue, IntListValue, IntValue, LevelValue, StringListValue,
    StringValue, Value, ValueError, ValueResult, Var,
};

#[cfg(test)]
mod tests;
