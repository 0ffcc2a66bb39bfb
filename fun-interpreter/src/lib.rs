//! Fun Interpreter
//!
//! A tree-walking evaluator for Fun programs parsed by `fun-parser`.
//!
//! - Every expression evaluates to a single `i32`
//! - Scoping is resolved through the live call stack, innermost frame first
//! - A [`StatementHook`] can observe (and pause) execution before each statement

pub mod call_stack;
pub mod error;
pub mod interpreter;
pub mod operators;
pub mod output;
pub mod test_harness;

// Include tests directory with all test modules
#[cfg(test)]
#[path = "tests/mod.rs"]
pub mod tests;

// Re-export public API
pub use call_stack::{CallStack, Frame};
pub use error::{InterpretError, Result};
pub use interpreter::{Interpreter, StatementHook};
pub use output::{CapturedOutput, Output};
pub use test_harness::{FunTestHarness, TestHarnessError};

/// Interpret a parsed program from start to finish
pub fn interpret(program: &fun_parser::Program, output: Output) -> Result<()> {
    Interpreter::new(output).interpret(program)
}
