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

//! flagtree-values defines how command-line text is stored into typed
//! destinations: the `Value` trait, the shared `Var` handle it writes into,
//! and implementations for the common types.

/// Parsing and formatting of human-readable durations.
pub mod duration;
/// error defines the error type returned when a value can't be parsed.
pub mod error;
/// types contains the built-in `Value` implementations.
pub mod types;
/// value defines the `Value` trait and the `Var` destination handle.
pub mod value;

pub use self::error::{ValueError, ValueResult};
pub use self::types::*;
pub use self::value::{Binding, Value, Var};

#[cfg(test)]
mod tests;
