//! Debug session controller
//!
//! Owns the loaded program, its breakpoint table and at most one in-flight
//! run. Every operation is synchronous: `run` and `resume` block until the
//! program pauses on a breakpoint or finishes.

use crate::breakpoints::{Breakpoint, BreakpointTable};
use crate::error::{DebugError, DebugResult};
use crate::worker::{RunHandle, WorkerCommand, WorkerEvent};
use fun_interpreter::Output;
use fun_parser::{Expression, Program, parse_program};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// What the controller can observe between operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugState {
    NoFile,
    Loaded,
    Paused { line: usize },
}

/// A loaded program together with its breakpoints and current run
struct DebugSession {
    program: Arc<Program>,
    breakpoints: BreakpointTable,
    run: Option<PausedRun>,
}

struct PausedRun {
    handle: RunHandle,
    line: usize,
}

pub struct Debugger {
    output: Output,
    session: Option<DebugSession>,
    exited: bool,
}

impl Debugger {
    pub fn new(output: Output) -> Self {
        Self {
            output,
            session: None,
            exited: false,
        }
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn state(&self) -> DebugState {
        match &self.session {
            None => DebugState::NoFile,
            Some(DebugSession { run: None, .. }) => DebugState::Loaded,
            Some(DebugSession {
                run: Some(run), ..
            }) => DebugState::Paused { line: run.line },
        }
    }

    /// True while a run is paused on a breakpoint
    pub fn is_running(&self) -> bool {
        matches!(self.state(), DebugState::Paused { .. })
    }

    pub fn is_exited(&self) -> bool {
        self.exited
    }

    /// Load a file, cancelling any run of the previous one
    pub fn load(&mut self, path: impl AsRef<Path>) -> DebugResult<()> {
        let path = path.as_ref();
        self.abort_run();
        let source = std::fs::read_to_string(path).map_err(|source| DebugError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.install(parse_program(&source)?, Some(path));
        Ok(())
    }

    /// Load program text directly
    pub fn load_source(&mut self, source: &str) -> DebugResult<()> {
        self.abort_run();
        self.install(parse_program(source)?, None);
        Ok(())
    }

    fn install(&mut self, program: Program, path: Option<&Path>) {
        debug!(path = ?path, "loaded program");
        self.session = Some(DebugSession {
            program: Arc::new(program),
            breakpoints: BreakpointTable::new(),
            run: None,
        });
    }

    fn session(&self) -> DebugResult<&DebugSession> {
        self.session.as_ref().ok_or(DebugError::NoFileLoaded)
    }

    fn session_mut(&mut self) -> DebugResult<&mut DebugSession> {
        self.session.as_mut().ok_or(DebugError::NoFileLoaded)
    }

    pub fn add_breakpoint(&mut self, line: usize, breakpoint: Breakpoint) -> DebugResult<()> {
        self.session()?.breakpoints.set(line, breakpoint);
        Ok(())
    }

    pub fn remove_breakpoint(&mut self, line: usize) -> DebugResult<()> {
        let removed = self.session()?.breakpoints.remove(line);
        if removed.is_none() {
            debug!(line, "no breakpoint to remove");
        }
        Ok(())
    }

    pub fn breakpoints(&self) -> DebugResult<Vec<(usize, Breakpoint)>> {
        Ok(self.session()?.breakpoints.entries())
    }

    /// Print the breakpoint listing
    pub fn list(&self) -> DebugResult<()> {
        let listing = self.session()?.breakpoints.listing();
        self.output.write_line(&listing)?;
        Ok(())
    }

    /// Start the loaded program and wait until it pauses or finishes
    pub fn run(&mut self) -> DebugResult<()> {
        let output = self.output.clone();
        let session = self.session_mut()?;
        if let Some(stray) = session.run.take() {
            warn!(line = stray.line, "run requested while paused, stopping current run");
            stray.handle.abort();
            return Err(DebugError::AlreadyRunning);
        }

        debug!("starting run");
        let handle = RunHandle::spawn(
            Arc::clone(&session.program),
            session.breakpoints.clone(),
            output,
        )?;
        self.wait(handle)
    }

    /// Resume a paused run until the next trip or the end
    pub fn resume(&mut self) -> DebugResult<()> {
        let run = self.take_paused()?;
        run.handle.send(WorkerCommand::Resume)?;
        self.wait(run.handle)
    }

    /// Force-terminate a paused run
    pub fn stop(&mut self) -> DebugResult<()> {
        let run = self.take_paused()?;
        run.handle.abort();
        debug!("run stopped");
        self.output.write_line("Debug stopped")?;
        Ok(())
    }

    /// Evaluate `expression` in the paused program's current frames and
    /// print the result. Does nothing unless a run is paused.
    pub fn evaluate(&mut self, expression: Expression) -> DebugResult<()> {
        let Some(run) = self.session.as_ref().and_then(|session| session.run.as_ref()) else {
            debug!("evaluate ignored, nothing is paused");
            return Ok(());
        };

        run.handle.send(WorkerCommand::Evaluate(expression))?;
        match run.handle.next_event()? {
            WorkerEvent::Evaluated(result) => {
                let value = result?;
                self.output
                    .write_line(&format!("Evaluation result: {value}"))?;
                Ok(())
            }
            other => {
                warn!(?other, "unexpected event while evaluating");
                Err(DebugError::WorkerLost)
            }
        }
    }

    /// Terminate any run and mark the debugger finished
    pub fn exit(&mut self) {
        self.abort_run();
        self.exited = true;
    }

    fn take_paused(&mut self) -> DebugResult<PausedRun> {
        self.session
            .as_mut()
            .and_then(|session| session.run.take())
            .ok_or(DebugError::NotRunning)
    }

    fn abort_run(&mut self) {
        if let Some(run) = self.session.as_mut().and_then(|session| session.run.take()) {
            debug!(line = run.line, "cancelling run");
            run.handle.abort();
        }
    }

    /// Block until the worker pauses or finishes, recording the outcome
    fn wait(&mut self, handle: RunHandle) -> DebugResult<()> {
        loop {
            match handle.next_event()? {
                WorkerEvent::Paused { line } => {
                    debug!(line, "run paused");
                    if let Some(session) = self.session.as_mut() {
                        session.run = Some(PausedRun { handle, line });
                    }
                    return Ok(());
                }
                WorkerEvent::Finished(result) => {
                    handle.join();
                    debug!(ok = result.is_ok(), "run finished");
                    return result.map_err(DebugError::from);
                }
                WorkerEvent::Evaluated(_) => {
                    warn!("discarding evaluation result outside of evaluate");
                }
            }
        }
    }
}

impl Drop for Debugger {
    fn drop(&mut self) {
        self.abort_run();
    }
}
