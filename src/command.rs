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
use crate::flag::{Flag, Flags};
use crate::help;
use crate::parse::{scan_flags, Scan};
use flagtree_values::Var;
use log::debug;
use std::fmt;

/// An alias for Result, which has an arbitrary Error type. This is used to
/// denote the actual Result returned by a caller-provided action.
///
/// Note that the Ok value accepted is just (); this library has no logic to
/// deal with application-specific success return values.
pub type CommandResult<E> = ::std::result::Result<(), E>;

/// The caller-provided action for a particular Command. It is given the
/// application's context value when it is finally executed.
pub type CommandCallback<'a, C, E> = Box<dyn FnMut(C) -> CommandResult<E> + 'a>;

/// Pair describes one positional argument, for help output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pair {
    /// The placeholder name, e.g. "FILE" or "COLOR...".
    pub name: String,
    /// The human-readable help text.
    pub help: String,
}

impl Pair {
    /// A convenience function to construct a new Pair.
    pub fn new(name: &str, help: &str) -> Self {
        Pair {
            name: name.to_owned(),
            help: help.to_owned(),
        }
    }
}

/// A named group of subcommands. Groups only affect help output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Group {
    pub(crate) name: String,
    pub(crate) commands: Vec<String>,
}

/// A Command is a node in a tree of subcommands. Each command has its own
/// description and its own set of flags, and either a list of subcommands or
/// (optionally) positional arguments, but never both.
///
/// `C` is the type of the application context handed to the action when it is
/// executed, and `E` is the error type actions return.
pub struct Command<'a, C, E = Error> {
    name: String,
    help: String,
    description: String,
    examples: String,
    footer: String,
    /// The space-separated names of this command's ancestors, root first. This
    /// is only ever used to build messages.
    parent: Option<String>,
    flags: Flags,
    pairs: Vec<Pair>,
    positionals: Option<Var<Vec<String>>>,
    args: Vec<String>,
    commands: Vec<Command<'a, C, E>>,
    groups: Vec<Group>,
    callback: Option<CommandCallback<'a, C, E>>,
}

impl<'a, C, E> Command<'a, C, E> {
    /// Construct a new top-level Command with the given name and one-line
    /// help text. It has no flags, no subcommands and no action yet.
    pub fn new(name: &str, help: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "command name cannot be empty".to_owned(),
            ));
        }

        Ok(Command {
            name: name.to_owned(),
            help: help.to_owned(),
            description: String::new(),
            examples: String::new(),
            footer: String::new(),
            parent: None,
            flags: Flags::default(),
            pairs: Vec::new(),
            positionals: None,
            args: Vec::new(),
            commands: Vec::new(),
            groups: Vec::new(),
            callback: None,
        })
    }

    /// Returns this command's own name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns this command's one-line help text.
    pub fn help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns the full name of this command, from the root of the tree down
    /// to here, e.g. "hg clone".
    pub fn path(&self) -> String {
        match self.parent {
            None => self.name.clone(),
            Some(ref parent) => format!("{} {}", parent, self.name),
        }
    }

    /// Set the long description, shown verbatim in help output below the
    /// one-line help.
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = description.trim().to_owned();
        self
    }

    /// Set the examples block shown in help output.
    pub fn set_examples(&mut self, examples: &str) -> &mut Self {
        self.examples = examples.trim().to_owned();
        self
    }

    /// Set the footer shown at the very end of help output.
    pub fn set_footer(&mut self, footer: &str) -> &mut Self {
        self.footer = footer.trim().to_owned();
        self
    }

    /// Set the action which is returned when parsing resolves to this
    /// command.
    pub fn set_action<F: FnMut(C) -> CommandResult<E> + 'a>(&mut self, action: F) -> &mut Self {
        self.callback = Some(Box::new(action));
        self
    }

    /// Returns whether an action has been set.
    pub fn has_action(&self) -> bool {
        self.callback.is_some()
    }

    /// Validate and register a flag. Errors here mean the command tree was
    /// built incorrectly.
    pub fn add_flag(&mut self, flag: Flag) -> Result<()> {
        let path = self.path();
        self.flags.add(path.as_str(), flag)
    }

    /// Register several flags, stopping at the first one which is invalid.
    pub fn add_flags(&mut self, flags: Vec<Flag>) -> Result<()> {
        for flag in flags {
            self.add_flag(flag)?;
        }
        Ok(())
    }

    /// Returns this command's flags.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Add a new subcommand to this command, and return it so flags, further
    /// subcommands and an action can be added to it.
    pub fn add_command(&mut self, name: &str, help: &str) -> Result<&mut Command<'a, C, E>> {
        let mut command = Command::new(name, help)?;
        if self.positionals.is_some() {
            return Err(Error::InvalidArgument(format!(
                "{}: already have positional arguments; cannot have also subcommands",
                self.path()
            )));
        }
        if self.commands.iter().any(|c| c.name == name) {
            return Err(Error::InvalidArgument(format!(
                "{}: subcommand {:?} already defined",
                self.path(),
                name
            )));
        }

        command.parent = Some(self.path());
        let idx = self.commands.len();
        self.commands.push(command);
        Ok(&mut self.commands[idx])
    }

    /// Returns this command's subcommands, in the order they were added.
    pub fn commands(&self) -> &[Command<'a, C, E>] {
        self.commands.as_slice()
    }

    /// Describe this command's positional arguments. After parsing, `dst`
    /// holds every argument which follows this command's flags.
    pub fn add_positionals(&mut self, dst: &Var<Vec<String>>, pairs: Vec<Pair>) -> Result<()> {
        if !self.commands.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "{}: already have subcommands; cannot have also pos args",
                self.path()
            )));
        }
        if self.positionals.is_some() {
            return Err(Error::InvalidArgument(format!(
                "{}: pos args already defined",
                self.path()
            )));
        }

        for (idx, pair) in pairs.iter().enumerate() {
            if pair.name.is_empty() {
                return Err(Error::InvalidArgument(format!(
                    "{}: pos arg at index {} ({:?}) cannot be empty",
                    self.path(),
                    idx,
                    pair.name
                )));
            }
            if let Some(previous) = pairs[..idx].iter().position(|p| p.name == pair.name) {
                return Err(Error::InvalidArgument(format!(
                    "{}: pos arg at index {} ({:?}) was already defined at index {}",
                    self.path(),
                    idx,
                    pair.name,
                    previous
                )));
            }
        }

        self.pairs = pairs;
        self.positionals = Some(dst.clone());
        Ok(())
    }

    /// Returns the positional arguments described for this command.
    pub fn pairs(&self) -> &[Pair] {
        self.pairs.as_slice()
    }

    /// Group some of this command's subcommands under a heading in help
    /// output. Every name must already have been added with `add_command`.
    pub fn add_group(&mut self, name: &str, commands: &[&str]) -> Result<()> {
        if commands.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "group {:?}: child list is empty",
                name
            )));
        }
        for &command in commands {
            if !self.commands.iter().any(|c| c.name == command) {
                return Err(Error::InvalidArgument(format!(
                    "group {:?}: {:?} is not a subcommand of {}",
                    name,
                    command,
                    self.path()
                )));
            }
        }

        self.groups.push(Group {
            name: name.to_owned(),
            commands: commands.iter().map(|&c| c.to_owned()).collect(),
        });
        Ok(())
    }

    /// Returns the arguments which were left over after this command's flags,
    /// the last time parsing resolved to this command.
    pub fn args(&self) -> &[String] {
        self.args.as_slice()
    }

    /// Render this command's help text.
    pub fn usage(&self) -> String {
        help::usage(self)
    }

    pub(crate) fn get_description(&self) -> &str {
        self.description.as_str()
    }

    pub(crate) fn get_examples(&self) -> &str {
        self.examples.as_str()
    }

    pub(crate) fn get_footer(&self) -> &str {
        self.footer.as_str()
    }

    pub(crate) fn groups(&self) -> &[Group] {
        self.groups.as_slice()
    }

    pub(crate) fn find_command(&self, name: &str) -> Option<&Command<'a, C, E>> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Parse the given command-line arguments (excluding the program name)
    /// against this command tree. Flag values are stored into their
    /// destinations as they are parsed.
    ///
    /// On success, the action of the command the arguments resolved to is
    /// returned, unexecuted. If help was requested, `Error::Help` is returned
    /// with the rendered help text.
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<Action<'_, 'a, C, E>> {
        let command = self.resolve(args)?;
        Ok(Action { command: command })
    }

    /// Parse this command's flags, check its required flags, and then either
    /// stop here or descend into the subcommand named by the next argument.
    fn resolve<S: AsRef<str>>(&mut self, args: &[S]) -> Result<&mut Self> {
        let path = self.path();
        self.args.clear();

        let (boundary, seen) = match scan_flags(path.as_str(), &mut self.flags, args)? {
            Scan::Help => {
                debug!("{}: help requested", path);
                return Err(Error::Help(self.usage()));
            }
            Scan::Done { boundary, seen } => (boundary, seen),
        };

        let missing = self.flags.missing_required(&seen);
        if !missing.is_empty() {
            return Err(Error::MissingRequired(missing));
        }

        let rest = &args[boundary..];
        if self.commands.is_empty() {
            self.args = rest.iter().map(|a| a.as_ref().to_owned()).collect();
            if let Some(ref positionals) = self.positionals {
                positionals.set(self.args.clone());
            }
            debug!("resolved command '{}' with {} argument(s)", path, self.args.len());
            return Ok(self);
        }

        let (first, rest) = match rest.split_first() {
            None => return Err(Error::MissingCommand),
            Some((first, rest)) => (first.as_ref(), rest),
        };
        match self.commands.iter_mut().find(|c| c.name == first) {
            None => Err(Error::UnknownCommand(first.to_owned())),
            Some(command) => {
                debug!("{}: descending into subcommand '{}'", path, first);
                command.resolve(rest)
            }
        }
    }
}

impl<'a, C, E> fmt::Debug for Command<'a, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("flags", &self.flags)
            .field("pairs", &self.pairs)
            .field("commands", &self.commands)
            .finish()
    }
}

/// Action is the deferred result of a successful parse: the command the
/// arguments resolved to, whose action has not been executed yet.
pub struct Action<'c, 'a, C, E> {
    command: &'c mut Command<'a, C, E>,
}

impl<'c, 'a, C, E> Action<'c, 'a, C, E> {
    /// Returns the command the arguments resolved to.
    pub fn command(&self) -> &Command<'a, C, E> {
        self.command
    }

    /// Returns the full name of the command the arguments resolved to.
    pub fn path(&self) -> String {
        self.command.path()
    }
}

impl<'c, 'a, C, E: From<Error>> Action<'c, 'a, C, E> {
    /// Execute the resolved command's action with the given application
    /// context. If that command was never given an action, this returns
    /// `Error::NoAction` (converted into `E`).
    pub fn execute(self, context: C) -> CommandResult<E> {
        let command = self.command;
        match command.callback {
            None => Err(Error::NoAction(command.path()).into()),
            Some(ref mut callback) => callback(context),
        }
    }
}

impl<'c, 'a, C, E> fmt::Debug for Action<'c, 'a, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Action {{ {:?} }}", self.command.path())
    }
}
