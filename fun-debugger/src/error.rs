//! Debugger error types.

use fun_interpreter::InterpretError;
use fun_parser::ParseError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the debugger and its command surface
#[derive(Error, Diagnostic, Debug)]
pub enum DebugError {
    #[error("Debug is already running")]
    #[diagnostic(
        code(fun::debug::already_running),
        help("The previous run was stopped; use `run` again to start over")
    )]
    AlreadyRunning,

    #[error("Debug is not running")]
    #[diagnostic(code(fun::debug::not_running), help("Start the program with `run`"))]
    NotRunning,

    #[error("No file loaded")]
    #[diagnostic(code(fun::debug::no_file_loaded), help("Load a file with `load <filename>`"))]
    NoFileLoaded,

    #[error("Unknown command type met: \"{command}\"")]
    #[diagnostic(code(fun::debug::unknown_command))]
    UnknownCommand { command: String },

    #[error("Invalid argument for \"{command}\": {message}")]
    #[diagnostic(code(fun::debug::invalid_argument))]
    InvalidArgument { command: String, message: String },

    #[error("The debugged program stopped responding")]
    #[diagnostic(code(fun::debug::worker_lost))]
    WorkerLost,

    #[error("Could not read {}: {source}", path.display())]
    #[diagnostic(code(fun::debug::read))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {source}")]
    #[diagnostic(code(fun::debug::io))]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Interpret(#[from] InterpretError),
}

impl DebugError {
    pub fn invalid_argument(command: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            command: command.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for debugger operations
pub type DebugResult<T> = Result<T, DebugError>;
