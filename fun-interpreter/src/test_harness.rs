//! Test harness for the Fun interpreter
//!
//! Parses and runs source text against a captured output sink so tests can
//! assert on what a program prints and on the values expressions produce.
//! Every run uses a fresh interpreter.

use crate::{CapturedOutput, InterpretError, Interpreter, Output};
use fun_parser::{ParseError, parse_expression, parse_program};
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during test harness operations
#[derive(Debug, Error, Diagnostic)]
pub enum TestHarnessError {
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: ParseError,
    },

    #[error("Interpret error: {source}")]
    Interpret {
        #[from]
        source: InterpretError,
    },

    #[error("Assertion failed: expected {expected:?}, but got {actual:?}")]
    AssertionFailed { expected: String, actual: String },
}

/// Runs Fun source text and captures everything it prints
pub struct FunTestHarness {
    output: Output,
    captured: CapturedOutput,
}

impl Default for FunTestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl FunTestHarness {
    pub fn new() -> Self {
        let (output, captured) = Output::captured();
        Self { output, captured }
    }

    /// Run a program and return what it printed
    pub fn run(&mut self, source: &str) -> Result<String, TestHarnessError> {
        let program = parse_program(source)?;
        self.captured.take();

        let mut interpreter = Interpreter::new(self.output.clone());
        interpreter.interpret(&program)?;
        Ok(self.captured.take())
    }

    /// Output printed before the last run failed (or succeeded)
    pub fn printed(&self) -> String {
        self.captured.contents()
    }

    /// Evaluate a single expression in a fresh root frame
    pub fn evaluate(&mut self, expression: &str) -> Result<i32, TestHarnessError> {
        let expression = parse_expression(expression)?;
        let mut interpreter = Interpreter::new(self.output.clone());
        Ok(interpreter.evaluate_expression(&expression)?)
    }

    pub fn assert_prints(&mut self, source: &str, expected: &str) -> Result<(), TestHarnessError> {
        let actual = self.run(source)?;
        if actual != expected {
            return Err(TestHarnessError::AssertionFailed {
                expected: expected.to_string(),
                actual,
            });
        }
        Ok(())
    }

    pub fn assert_evaluates_to_integer(
        &mut self,
        expression: &str,
        expected: i32,
    ) -> Result<(), TestHarnessError> {
        let actual = self.evaluate(expression)?;
        if actual != expected {
            return Err(TestHarnessError::AssertionFailed {
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    /// Run a program that is expected to fail, returning the interpretation error
    pub fn run_expecting_error(&mut self, source: &str) -> Result<InterpretError, TestHarnessError> {
        match self.run(source) {
            Ok(actual) => Err(TestHarnessError::AssertionFailed {
                expected: "an interpretation error".to_string(),
                actual,
            }),
            Err(TestHarnessError::Interpret { source }) => Ok(source),
            Err(other) => Err(other),
        }
    }
}
