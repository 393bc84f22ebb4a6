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
use crate::parse_and_execute::parse_and_execute;
use std::env;
use std::fmt::{Debug, Display};
use std::process;

pub(crate) const EXIT_SUCCESS: i32 = 0;
pub(crate) const EXIT_FAILURE: i32 = 1;
/// The conventional exit code for incorrect command-line usage.
pub(crate) const EXIT_USAGE: i32 = 2;

pub(crate) fn get_program_parameters() -> Vec<String> {
    env::args()
        .skip(1) // Skip the first argument, which is our executable.
        .collect()
}

fn describe<E: Display + Debug>(e: &E) -> String {
    match cfg!(debug_assertions) {
        false => e.to_string(),
        true => format!("{:?}", e),
    }
}

pub(crate) fn handle_result<E: Display + Debug>(r: Result<CommandResult<E>>) -> i32 {
    match r {
        // The command was executed, and we got a result back from it.
        Ok(r) => match r {
            Ok(_) => EXIT_SUCCESS,
            // The command returned an error to us.
            Err(e) => {
                eprintln!("{}", describe(&e));
                EXIT_FAILURE
            }
        },
        // Help was requested. This is not an error.
        Err(Error::Help(help)) => {
            print!("{}", help);
            EXIT_SUCCESS
        }
        // The user gave us bad arguments.
        Err(ref e) if e.is_parse() => {
            eprintln!("Error parsing command-line flags: {}", e);
            EXIT_USAGE
        }
        // An internal error (or a badly built command tree).
        Err(e) => {
            eprintln!("{}", describe(&e));
            EXIT_FAILURE
        }
    }
}

/// Parse this process's command-line arguments against the given command tree,
/// execute the resolved action with the given context, and exit. Help goes to
/// stdout and exits successfully; bad arguments exit with status 2; errors
/// returned by the action exit with status 1.
pub fn main_impl<'a, C, E>(mut command: Command<'a, C, E>, context: C) -> !
where
    E: Display + Debug + From<Error>,
{
    process::exit(handle_result(parse_and_execute(
        &mut command,
        get_program_parameters().as_slice(),
        context,
    )));
}
