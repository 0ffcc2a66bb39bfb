//! Fun Debugger
//!
//! Runs a Fun program on a worker thread with a statement hook installed, so
//! execution can pause on breakpoints, expressions can be evaluated against
//! the paused call stack, and the run can be resumed or stopped.

pub mod breakpoints;
pub mod command;
pub mod debugger;
pub mod error;
pub mod hook;
pub mod shell;
pub mod worker;


pub use breakpoints::{Breakpoint, BreakpointTable};
pub use command::Command;
pub use debugger::{DebugState, Debugger};
pub use error::{DebugError, DebugResult};
pub use shell::{DebuggerShell, HELP, PROMPT, ShellStatus};
