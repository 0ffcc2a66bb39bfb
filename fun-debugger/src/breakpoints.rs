//! Breakpoint model
//!
//! Breakpoints are keyed by source line. The table keeps insertion order for
//! listing, and setting a breakpoint on an occupied line replaces it in place.

use fun_interpreter::{Interpreter, Result};
use fun_parser::Expression;
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Breakpoint {
    Unconditional,
    Conditional { condition: Expression },
}

impl Breakpoint {
    pub fn conditional(condition: Expression) -> Self {
        Self::Conditional { condition }
    }

    /// Decide whether execution should pause, evaluating the condition
    /// against the interpreter's live call stack
    pub fn should_stop(&self, interpreter: &mut Interpreter<'_>) -> Result<bool> {
        match self {
            Self::Unconditional => Ok(true),
            Self::Conditional { condition } => {
                Ok(interpreter.evaluate_expression(condition)? != 0)
            }
        }
    }

    /// Message printed when this breakpoint trips on `line`
    pub fn stop_message(&self, line: usize) -> String {
        match self {
            Self::Unconditional => format!("Stopping at line {line} unconditionally"),
            Self::Conditional { condition } => {
                format!("Stopping at line {line} because ({condition}) evaluates to \"true\"")
            }
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconditional => f.write_str("unconditional"),
            Self::Conditional { condition } => write!(f, "condition = ({condition})"),
        }
    }
}

/// Shared, insertion-ordered breakpoint table.
///
/// Cloning yields another handle to the same table, which is how the running
/// program sees edits made while it is paused.
#[derive(Debug, Clone, Default)]
pub struct BreakpointTable {
    entries: Arc<Mutex<IndexMap<usize, Breakpoint>>>,
}

impl BreakpointTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, line: usize, breakpoint: Breakpoint) {
        self.entries.lock().insert(line, breakpoint);
    }

    /// Remove the breakpoint on `line`, keeping the order of the others
    pub fn remove(&self, line: usize) -> Option<Breakpoint> {
        self.entries.lock().shift_remove(&line)
    }

    pub fn get(&self, line: usize) -> Option<Breakpoint> {
        self.entries.lock().get(&line).cloned()
    }

    /// Snapshot of all breakpoints in insertion order
    pub fn entries(&self) -> Vec<(usize, Breakpoint)> {
        self.entries
            .lock()
            .iter()
            .map(|(line, breakpoint)| (*line, breakpoint.clone()))
            .collect()
    }

    /// The `Breakpoints:` listing, one tab-indented line per breakpoint
    pub fn listing(&self) -> String {
        let mut listing = String::from("Breakpoints:");
        for (line, breakpoint) in self.entries() {
            listing.push_str(&format!("\n\tline {line}: {breakpoint}"));
        }
        listing
    }
}
