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

use crate::command::Command;
use crate::flag::{Flag, HELP_LONG_NAME, HELP_SHORT_NAME};
use std::fmt::{self, Write};

/// Extra spaces between a list entry and its description.
const COLUMN_GAP: usize = 4;
/// Extra spaces between a positional argument and its description.
const PAIR_GAP: usize = 6;

const HELP_FLAG_HELP: &str = "Print this help and exit";

fn width(s: &str) -> usize {
    s.chars().count()
}

fn write_lines<W: Write>(f: &mut W, text: &str) -> fmt::Result {
    for line in text.split('\n') {
        writeln!(f, " {}", line)?;
    }
    Ok(())
}

fn write_examples<W: Write>(f: &mut W, examples: &str) -> fmt::Result {
    f.write_str("Examples:\n\n")?;
    for line in examples.split('\n') {
        if line.is_empty() {
            f.write_str("\n")?;
        } else {
            writeln!(f, " {}", line)?;
        }
    }
    f.write_str("\n")
}

fn write_command_list<W: Write, C, E>(
    f: &mut W,
    names: &[&str],
    command: &Command<C, E>,
    column: usize,
) -> fmt::Result {
    for &name in names {
        let help = command.find_command(name).map_or("", |c| c.help());
        writeln!(f, " {:<column$}{}", name, help, column = column)?;
    }
    Ok(())
}

fn write_commands<W: Write, C, E>(f: &mut W, command: &Command<C, E>) -> fmt::Result {
    let column = command
        .commands()
        .iter()
        .map(|c| width(c.name()) + 1)
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    if command.groups().is_empty() {
        f.write_str("Commands:\n\n")?;
        let names: Vec<&str> = command.commands().iter().map(|c| c.name()).collect();
        write_command_list(f, names.as_slice(), command, column)?;
        return f.write_str("\n");
    }

    f.write_str("available commands:\n\n")?;
    for group in command.groups() {
        writeln!(f, "{}:\n", group.name)?;
        let names: Vec<&str> = group.commands.iter().map(|c| c.as_str()).collect();
        write_command_list(f, names.as_slice(), command, column)?;
        f.write_str("\n")?;
    }
    Ok(())
}

fn flag_column(flag: &Flag) -> String {
    let mut column = " ".to_owned();
    if let Some(short) = flag.get_short() {
        column.push('-');
        column.push(short);
        column.push_str(", ");
    }
    column.push_str(format!("--{} {}", flag.get_long(), flag.get_label()).as_str());
    column
}

fn write_flags<W: Write, C, E>(f: &mut W, command: &Command<C, E>) -> fmt::Result {
    let help_column = format!(" -{}, --{}", HELP_SHORT_NAME, HELP_LONG_NAME);
    let flags: Vec<(String, &Flag)> = command
        .flags()
        .sorted()
        .into_iter()
        .map(|flag| (flag_column(flag), flag))
        .collect();
    let column = flags
        .iter()
        .map(|(c, _)| width(c))
        .chain(Some(width(help_column.as_str())))
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    f.write_str("Options:\n\n")?;
    for (flag_column, flag) in &flags {
        write!(f, "{:<column$}{}", flag_column, flag.get_help(), column = column)?;
        if flag.is_required() {
            f.write_str(" (required)")?;
        } else if !flag.get_default_value().is_empty() {
            write!(f, " (default: {})", flag.get_default_value())?;
        }
        f.write_str("\n")?;
    }
    if !flags.is_empty() {
        f.write_str("\n")?;
    }
    writeln!(f, "{:<column$}{}", help_column, HELP_FLAG_HELP, column = column)
}

fn write_pairs<W: Write, C, E>(f: &mut W, command: &Command<C, E>) -> fmt::Result {
    let column = command
        .pairs()
        .iter()
        .map(|p| width(p.name.as_str()))
        .max()
        .unwrap_or(0)
        + PAIR_GAP;

    f.write_str("\nPositional arguments:\n\n")?;
    for pair in command.pairs() {
        writeln!(f, " {:<column$}{}", pair.name, pair.help, column = column)?;
    }
    Ok(())
}

fn write_usage<W: Write, C, E>(f: &mut W, command: &Command<C, E>) -> fmt::Result {
    let path = command.path();
    write!(f, "{} -- {}\n\n", path, command.help())?;

    if !command.get_description().is_empty() {
        write_lines(f, command.get_description())?;
        f.write_str("\n")?;
    }

    write!(f, "Usage: {} ", path)?;
    if !command.commands().is_empty() {
        f.write_str("<command> ")?;
    }
    f.write_str("[options]")?;
    for pair in command.pairs() {
        write!(f, " {}", pair.name)?;
    }
    f.write_str("\n\n")?;

    if !command.get_examples().is_empty() {
        write_examples(f, command.get_examples())?;
    }

    if !command.commands().is_empty() {
        write_commands(f, command)?;
    }

    write_flags(f, command)?;

    if !command.pairs().is_empty() {
        write_pairs(f, command)?;
    }

    if !command.get_footer().is_empty() {
        f.write_str("\n")?;
        write_lines(f, command.get_footer())?;
    }
    Ok(())
}

/// Render the full help text for the given command.
pub(crate) fn usage<C, E>(command: &Command<C, E>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_usage(&mut out, command);
    out
}
