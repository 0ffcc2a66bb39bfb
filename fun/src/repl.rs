//! Interactive front end for the Fun debugger
//!
//! Reads commands with rustyline and hands each line to a
//! [`DebuggerShell`], so interactive sessions behave exactly like scripted
//! ones apart from line editing and history.

use fun_debugger::{DebuggerShell, PROMPT, ShellStatus};
use fun_interpreter::Output;
use miette::Diagnostic;
use rustyline::{DefaultEditor, error::ReadlineError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that end a debugger session
#[derive(Debug, Error, Diagnostic)]
pub enum ReplError {
    #[error("IO error: {source}")]
    #[diagnostic(code(fun::repl::io))]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Readline error: {source}")]
    #[diagnostic(code(fun::repl::readline))]
    Readline {
        #[from]
        source: ReadlineError,
    },
}

/// Debugger prompt configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string for input
    pub prompt: String,

    /// Enable history persistence
    pub persist_history: bool,

    /// History file path
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            persist_history: true,
            history_file: Some(".fun_history".to_string()),
        }
    }
}

pub struct DebuggerRepl {
    editor: DefaultEditor,
    shell: DebuggerShell,
    config: ReplConfig,
    preload: Option<PathBuf>,
}

impl DebuggerRepl {
    pub fn with_config(config: ReplConfig) -> Result<Self, ReplError> {
        let mut editor = DefaultEditor::new()?;

        if config.persist_history {
            if let Some(ref history_file) = config.history_file {
                // A missing history file is normal on first start
                let _ = editor.load_history(history_file);
            }
        }

        Ok(Self {
            editor,
            shell: DebuggerShell::new(Output::stdout()),
            config,
            preload: None,
        })
    }

    /// Load `path` as soon as the session starts
    pub fn preload(&mut self, path: &Path) {
        self.preload = Some(path.to_path_buf());
    }

    /// Run the session until `exit` or end of input
    pub fn run(&mut self) -> Result<(), ReplError> {
        self.shell.print_help()?;

        if let Some(path) = self.preload.take() {
            if let Err(error) = self.shell.debugger_mut().load(&path) {
                self.shell.debugger().output().write_line(&error.to_string())?;
            }
        }

        while let Some(line) = self.read_line()? {
            if self.shell.execute_line(&line)? == ShellStatus::Exit {
                break;
            }
        }

        // Covers end of input without `exit`
        self.shell.debugger_mut().exit();
        self.save_history()?;
        debug!("debugger session ended");
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ReplError> {
        match self.editor.readline(&self.config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Ok(Some(String::new()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(ReplError::Readline { source: err }),
        }
    }

    fn save_history(&mut self) -> Result<(), ReplError> {
        if self.config.persist_history {
            if let Some(ref history_file) = self.config.history_file {
                self.editor.save_history(history_file)?;
            }
        }
        Ok(())
    }
}
