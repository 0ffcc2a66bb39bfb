//! Debugger command surface
//!
//! One line of user input maps to one [`Command`], and each command maps to
//! exactly one [`Debugger`] operation.

use crate::breakpoints::Breakpoint;
use crate::debugger::Debugger;
use crate::error::{DebugError, DebugResult};
use fun_parser::{Expression, parse_expression};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load { path: PathBuf },
    Breakpoint { line: usize },
    Condition { line: usize, condition: Expression },
    List,
    Remove { line: usize },
    Run,
    Evaluate { expression: Expression },
    Stop,
    Continue,
    Exit,
}

impl Command {
    /// Parse one line of debugger input
    pub fn parse(input: &str) -> DebugResult<Self> {
        let input = input.trim();
        let (verb, arguments) = match input.split_once(char::is_whitespace) {
            Some((verb, arguments)) => (verb, arguments.trim()),
            None => (input, ""),
        };

        let command = match verb {
            "load" => {
                if arguments.is_empty() {
                    return Err(DebugError::invalid_argument(verb, "expected a file name"));
                }
                Command::Load {
                    path: PathBuf::from(arguments),
                }
            }
            "breakpoint" => Command::Breakpoint {
                line: parse_line_number(verb, arguments)?,
            },
            "condition" => {
                let (line, condition) = arguments
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| {
                        DebugError::invalid_argument(
                            verb,
                            "expected a line number followed by a condition",
                        )
                    })?;
                Command::Condition {
                    line: parse_line_number(verb, line)?,
                    condition: parse_expression(condition)?,
                }
            }
            "list" => Command::List,
            "remove" => Command::Remove {
                line: parse_line_number(verb, arguments)?,
            },
            "run" => Command::Run,
            "evaluate" => Command::Evaluate {
                expression: parse_expression(arguments)?,
            },
            "stop" => Command::Stop,
            "continue" => Command::Continue,
            "exit" => Command::Exit,
            _ => {
                return Err(DebugError::UnknownCommand {
                    command: input.to_string(),
                });
            }
        };

        Ok(command)
    }

    pub fn execute(self, debugger: &mut Debugger) -> DebugResult<()> {
        match self {
            Command::Load { path } => debugger.load(path),
            Command::Breakpoint { line } => debugger.add_breakpoint(line, Breakpoint::Unconditional),
            Command::Condition { line, condition } => {
                debugger.add_breakpoint(line, Breakpoint::conditional(condition))
            }
            Command::List => debugger.list(),
            Command::Remove { line } => debugger.remove_breakpoint(line),
            Command::Run => debugger.run(),
            Command::Evaluate { expression } => debugger.evaluate(expression),
            Command::Stop => debugger.stop(),
            Command::Continue => debugger.resume(),
            Command::Exit => {
                debugger.exit();
                Ok(())
            }
        }
    }
}

impl FromStr for Command {
    type Err = DebugError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

fn parse_line_number(command: &str, text: &str) -> DebugResult<usize> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DebugError::invalid_argument(command, "expected a line number"));
    }
    text.parse::<usize>()
        .map_err(|_| DebugError::invalid_argument(command, format!("\"{text}\" is not a line number")))
}
