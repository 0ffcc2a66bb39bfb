//! Line-oriented debugger front end
//!
//! Shared by scripted input and the interactive prompt: both feed lines to
//! [`DebuggerShell::execute_line`], which prints any error message through
//! the debugger's output and keeps going.

use crate::command::Command;
use crate::debugger::Debugger;
use fun_interpreter::Output;
use std::io;
use tracing::debug;

pub const PROMPT: &str = "> ";

pub const HELP: &str = "\
Welcome to Fun debugger! List of available commands:
   load <filename> – loads file to memory. If there is a file loaded already, its debugging will be cancelled and all the breakpoints will be removed.
   breakpoint <line-number> – sets a breakpoint at the given line.
   condition <line-number> <condition-expression> – sets a conditional breakpoint at the given line. If a line already contains a breakpoint, it will be overwritten.
   list – lists breakpoints with line numbers and conditions.
   remove <line-number> – removes breakpoint from the given line.
   run – runs the loaded file. Everything printed would be forwarded to standard output. If interpreted line contains a breakpoint and its condition is satisfied, the interpretation is paused. If the program was already running, an error is thrown.
   evaluate <expression> – evaluates an expression in the context of current line.
   stop – stops the interpretation.
   continue – continues the interpretation until the next breakpoint or the file end.
   exit – stops the interpretation and exits the debugger.";

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStatus {
    Continue,
    Exit,
}

pub struct DebuggerShell {
    debugger: Debugger,
}

impl DebuggerShell {
    pub fn new(output: Output) -> Self {
        Self {
            debugger: Debugger::new(output),
        }
    }

    pub fn debugger(&self) -> &Debugger {
        &self.debugger
    }

    pub fn debugger_mut(&mut self) -> &mut Debugger {
        &mut self.debugger
    }

    pub fn print_help(&self) -> io::Result<()> {
        self.debugger.output().write_line(HELP)
    }

    /// Parse and execute one line of input, reporting failures as text
    pub fn execute_line(&mut self, line: &str) -> io::Result<ShellStatus> {
        if !line.trim().is_empty() {
            let result = Command::parse(line).and_then(|command| command.execute(&mut self.debugger));
            if let Err(error) = result {
                debug!(%error, "command failed");
                self.debugger.output().write_line(&error.to_string())?;
            }
        }

        Ok(if self.debugger.is_exited() {
            ShellStatus::Exit
        } else {
            ShellStatus::Continue
        })
    }

    /// Run a non-interactive session: help banner, then a prompt before each line
    pub fn run_script<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.print_help()?;
        for line in lines {
            self.debugger.output().write_str(PROMPT)?;
            if self.execute_line(line.as_ref())? == ShellStatus::Exit {
                break;
            }
        }
        Ok(())
    }
}
