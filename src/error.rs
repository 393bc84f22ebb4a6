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

use flagtree_values::ValueError;
use thiserror::Error;

/// ErrorKind is the coarse classification of an `Error`, which is what most
/// callers actually need to decide what to do with it (e.g. which exit code to
/// use).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The user asked for help. This is not a failure.
    Help,
    /// The command-line arguments were invalid.
    Parse,
    /// The command tree itself was built incorrectly. This is a bug in the
    /// calling program, not a user error.
    Registration,
    /// Something unexpected went wrong inside this library.
    Internal,
}

/// Error represents the various errors which can come up while building a
/// command tree or parsing command-line flags against it.
#[derive(Debug, Error)]
pub enum Error {
    /// Help was requested with "-h" or "--help". The payload is the rendered
    /// help text of the command on which it was requested.
    #[error("{0}")]
    Help(String),
    /// A flag-shaped token didn't match any registered flag.
    #[error("unrecognized flag {0:?}")]
    UnknownFlag(String),
    /// A value-taking flag was the last token.
    #[error("flag {0:?} requires a value")]
    MissingValue(String),
    /// A flag's value was rejected by its destination. `setting` is the quoted
    /// token(s) which were being applied.
    #[error("setting {setting}: {cause}")]
    BadValue {
        /// The quoted token(s) which were being applied.
        setting: String,
        /// The underlying conversion error.
        #[source]
        cause: ValueError,
    },
    /// Some required flags were never given. The names are sorted.
    #[error("missing required options: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
    /// A command with subcommands was given no further arguments.
    #[error("expected a command")]
    MissingCommand,
    /// The token in subcommand position didn't name any subcommand.
    #[error("unrecognized command {0:?}")]
    UnknownCommand(String),
    /// The resolved command has no action to execute.
    #[error("{0}: no action registered")]
    NoAction(String),
    /// Errors akin to EINVAL - essentially, an argument passed into a function
    /// was invalid in some way. This is how command tree registration errors
    /// are reported.
    #[error("{0}")]
    InvalidArgument(String),
    /// An internal unrecoverable error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Return the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Help(_) => ErrorKind::Help,
            Error::UnknownFlag(_)
            | Error::MissingValue(_)
            | Error::BadValue { .. }
            | Error::MissingRequired(_)
            | Error::MissingCommand
            | Error::UnknownCommand(_)
            | Error::NoAction(_) => ErrorKind::Parse,
            Error::InvalidArgument(_) => ErrorKind::Registration,
            Error::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns true if this "error" is really a request for help.
    pub fn is_help(&self) -> bool {
        self.kind() == ErrorKind::Help
    }

    /// Returns true if this error was caused by invalid command-line
    /// arguments.
    pub fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }
}

/// A Result type which uses flagtree's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
