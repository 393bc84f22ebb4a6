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

use std::fmt::Display;
use thiserror::Error;

/// ValueError describes why a piece of command-line text could not be stored
/// into a flag's destination.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValueError {
    /// The text could not be converted into the destination's type. `kind` is
    /// a short human-readable name of that type (e.g. "int"), and `cause` is
    /// the underlying conversion error.
    #[error("could not parse {value:?} as {kind} ({cause})")]
    Conversion {
        /// The offending text.
        value: String,
        /// The name of the type we were trying to produce.
        kind: &'static str,
        /// Why the conversion failed.
        cause: String,
    },
    /// A free-form error, for user-defined `Value` implementations which don't
    /// fit the conversion mold.
    #[error("{0}")]
    Custom(String),
}

impl ValueError {
    /// A convenience constructor for `ValueError::Conversion`.
    pub fn conversion<C: Display>(value: &str, kind: &'static str, cause: C) -> Self {
        ValueError::Conversion {
            value: value.to_owned(),
            kind: kind,
            cause: cause.to_string(),
        }
    }
}

/// A Result type which uses `ValueError`.
pub type ValueResult<T> = Result<T, ValueError>;
