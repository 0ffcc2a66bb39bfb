//! Runtime error types for the Fun interpreter.
//!
//! Every failure aborts the current run. Errors carry the position of the
//! offending node so the CLI can render them against the source file.

use fun_parser::Span;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors that can occur while interpreting a program
#[derive(Error, Diagnostic, Debug)]
pub enum InterpretError {
    #[error("Could not interpret: redefined variable \"{name}\" at {position}")]
    #[diagnostic(
        code(fun::runtime::variable_redefinition),
        help("A name can only be defined once per scope; use assignment to change it")
    )]
    VariableRedefinition {
        name: String,
        position: Span,
        #[label("already defined in this scope")]
        span: SourceSpan,
    },

    #[error("Could not interpret: redefined function \"{name}\" at {position}")]
    #[diagnostic(
        code(fun::runtime::function_redefinition),
        help("A function can only be defined once per scope")
    )]
    FunctionRedefinition {
        name: String,
        position: Span,
        #[label("already defined in this scope")]
        span: SourceSpan,
    },

    #[error("Could not interpret: undefined variable \"{name}\" at {position}")]
    #[diagnostic(
        code(fun::runtime::undefined_variable),
        help("Make sure the variable is defined with `var` before use")
    )]
    UndefinedVariable {
        name: String,
        position: Span,
        #[label("undefined variable")]
        span: SourceSpan,
    },

    #[error("Could not interpret: undefined function \"{name}\" at {position}")]
    #[diagnostic(
        code(fun::runtime::undefined_function),
        help("Functions must be defined before they are called")
    )]
    UndefinedFunction {
        name: String,
        position: Span,
        #[label("undefined function")]
        span: SourceSpan,
    },

    #[error("Could not interpret: \"return\" outside of function at {position}")]
    #[diagnostic(code(fun::runtime::invalid_return))]
    InvalidReturn {
        position: Span,
        #[label("return at top level")]
        span: SourceSpan,
    },

    #[error("Could not interpret: zero division at {position}")]
    #[diagnostic(
        code(fun::runtime::division_by_zero),
        help("Ensure the divisor is not zero before division")
    )]
    DivisionByZero {
        position: Span,
        #[label("division by zero here")]
        span: SourceSpan,
    },

    #[error(
        "Could not interpret: function \"{function}\" expects {expected} arguments, got {found} at {position}"
    )]
    #[diagnostic(
        code(fun::runtime::wrong_arity),
        help("Check the function definition for the correct number of arguments")
    )]
    WrongArity {
        function: String,
        expected: usize,
        found: usize,
        position: Span,
        #[label("wrong number of arguments")]
        span: SourceSpan,
    },

    #[error("Interpretation interrupted")]
    #[diagnostic(code(fun::runtime::interrupted))]
    Interrupted,

    #[error("Could not write program output: {source}")]
    #[diagnostic(code(fun::runtime::output))]
    Output {
        #[from]
        source: std::io::Error,
    },
}

impl InterpretError {
    pub fn variable_redefinition(name: &str, position: Span) -> Self {
        Self::VariableRedefinition {
            name: name.to_string(),
            position,
            span: position.into(),
        }
    }

    pub fn function_redefinition(name: &str, position: Span) -> Self {
        Self::FunctionRedefinition {
            name: name.to_string(),
            position,
            span: position.into(),
        }
    }

    pub fn undefined_variable(name: &str, position: Span) -> Self {
        Self::UndefinedVariable {
            name: name.to_string(),
            position,
            span: position.into(),
        }
    }

    pub fn undefined_function(name: &str, position: Span) -> Self {
        Self::UndefinedFunction {
            name: name.to_string(),
            position,
            span: position.into(),
        }
    }

    pub fn invalid_return(position: Span) -> Self {
        Self::InvalidReturn {
            position,
            span: position.into(),
        }
    }

    pub fn division_by_zero(position: Span) -> Self {
        Self::DivisionByZero {
            position,
            span: position.into(),
        }
    }

    pub fn wrong_arity(function: &str, expected: usize, found: usize, position: Span) -> Self {
        Self::WrongArity {
            function: function.to_string(),
            expected,
            found,
            position,
            span: position.into(),
        }
    }

    /// True for the cancellation error raised when a run is aborted
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

/// Type alias for interpreter results
pub type Result<T> = std::result::Result<T, InterpretError>;
