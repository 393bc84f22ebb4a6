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

use crate::command::{Command, CommandResult};
use crate::error::*;
use log::debug;

/// Parse the given command-line arguments (excluding the program name) against
/// the given command tree, and then execute the resolved command's action with
/// the given context.
///
/// The outer Result reports problems with the arguments themselves, including
/// requests for help (see `Error::Help`). The inner `CommandResult` is whatever
/// the action returned.
pub fn parse_and_execute<'a, C, E, S>(
    command: &mut Command<'a, C, E>,
    args: &[S],
    context: C,
) -> Result<CommandResult<E>>
where
    E: From<Error>,
    S: AsRef<str>,
{
    let action = command.parse(args)?;
    if !action.command().has_action() {
        return Err(Error::NoAction(action.path()));
    }

    debug!("executing command '{}'", action.path());
    Ok(action.execute(context))
}
