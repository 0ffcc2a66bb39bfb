//! Worker thread running one debugged program
//!
//! The controller and the worker talk over two single-slot channels. The
//! controller is blocked on `events` whenever the worker is executing, and the
//! worker only reads `commands` while it is suspended inside the hook, so at
//! most one side is ever active.

use crate::breakpoints::BreakpointTable;
use crate::error::{DebugError, DebugResult};
use crate::hook::DebugHook;
use crossbeam::channel::{Receiver, Sender, bounded};
use fun_interpreter::{InterpretError, Interpreter, Output};
use fun_parser::{Expression, Program};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Controller → worker
#[derive(Debug)]
pub enum WorkerCommand {
    Resume,
    Abort,
    Evaluate(Expression),
}

/// Worker → controller
#[derive(Debug)]
pub enum WorkerEvent {
    Paused { line: usize },
    Evaluated(Result<i32, InterpretError>),
    Finished(Result<(), InterpretError>),
}

/// Controller-side handle to a live run
pub struct RunHandle {
    commands: Sender<WorkerCommand>,
    events: Receiver<WorkerEvent>,
    thread: Option<JoinHandle<()>>,
}

impl RunHandle {
    /// Start `program` on a fresh interpreter in its own thread
    pub fn spawn(
        program: Arc<Program>,
        breakpoints: BreakpointTable,
        output: Output,
    ) -> DebugResult<Self> {
        let (command_sender, command_receiver) = bounded(1);
        let (event_sender, event_receiver) = bounded(1);

        let thread = thread::Builder::new()
            .name("fun-debuggee".to_string())
            .spawn(move || {
                let hook = DebugHook::new(
                    breakpoints,
                    output.clone(),
                    command_receiver,
                    event_sender.clone(),
                );
                let mut interpreter = Interpreter::with_hook(output, hook);
                let result = interpreter.interpret(&program);
                debug!(ok = result.is_ok(), "debuggee finished");
                // The controller may already be gone
                let _ = event_sender.send(WorkerEvent::Finished(result));
            })?;

        Ok(Self {
            commands: command_sender,
            events: event_receiver,
            thread: Some(thread),
        })
    }

    pub fn send(&self, command: WorkerCommand) -> DebugResult<()> {
        self.commands
            .send(command)
            .map_err(|_| DebugError::WorkerLost)
    }

    /// Block until the worker reports something
    pub fn next_event(&self) -> DebugResult<WorkerEvent> {
        self.events.recv().map_err(|_| DebugError::WorkerLost)
    }

    /// Wait for the thread after it reported `Finished`
    pub fn join(mut self) {
        self.join_thread();
    }

    /// Force-terminate the run and wait for the thread to exit
    pub fn abort(mut self) {
        self.terminate();
    }

    fn terminate(&mut self) {
        if self.thread.is_none() {
            return;
        }
        // Fails harmlessly if the worker already finished
        let _ = self.commands.send(WorkerCommand::Abort);
        while let Ok(event) = self.events.recv() {
            debug!(?event, "draining event from aborted run");
        }
        self.join_thread();
    }

    fn join_thread(&mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("debuggee thread panicked");
            }
        }
    }
}

impl Drop for RunHandle {
    fn drop(&mut self) {
        self.terminate();
    }
}
