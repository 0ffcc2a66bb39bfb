//! Statement hook installed in the debugged interpreter
//!
//! Runs on the worker thread. When a breakpoint trips it prints the stop
//! message, reports `Paused` to the controller and then serves commands until
//! told to resume or abort.

use crate::breakpoints::BreakpointTable;
use crate::worker::{WorkerCommand, WorkerEvent};
use crossbeam::channel::{Receiver, Sender};
use fun_interpreter::{InterpretError, Interpreter, Output, Result, StatementHook};
use fun_parser::Span;
use tracing::{debug, trace};

pub struct DebugHook {
    breakpoints: BreakpointTable,
    output: Output,
    commands: Receiver<WorkerCommand>,
    events: Sender<WorkerEvent>,
}

impl DebugHook {
    pub fn new(
        breakpoints: BreakpointTable,
        output: Output,
        commands: Receiver<WorkerCommand>,
        events: Sender<WorkerEvent>,
    ) -> Self {
        Self {
            breakpoints,
            output,
            commands,
            events,
        }
    }

    /// Serve controller commands while paused on `line`
    fn suspend(&mut self, line: usize, interpreter: &mut Interpreter<'_>) -> Result<()> {
        if self.events.send(WorkerEvent::Paused { line }).is_err() {
            return Err(InterpretError::Interrupted);
        }

        loop {
            // A dropped controller is treated the same as an abort
            let Ok(command) = self.commands.recv() else {
                debug!(line, "controller disconnected while paused");
                return Err(InterpretError::Interrupted);
            };

            match command {
                WorkerCommand::Resume => {
                    debug!(line, "resuming");
                    return Ok(());
                }
                WorkerCommand::Abort => {
                    debug!(line, "aborting paused run");
                    return Err(InterpretError::Interrupted);
                }
                WorkerCommand::Evaluate(expression) => {
                    let result = interpreter.evaluate_expression(&expression);
                    if self.events.send(WorkerEvent::Evaluated(result)).is_err() {
                        return Err(InterpretError::Interrupted);
                    }
                }
            }
        }
    }
}

impl StatementHook for DebugHook {
    fn before_statement(&mut self, span: Span, interpreter: &mut Interpreter<'_>) -> Result<()> {
        let line = span.line;
        let Some(breakpoint) = self.breakpoints.get(line) else {
            return Ok(());
        };

        let trips = breakpoint.should_stop(interpreter)?;
        trace!(line, trips, "breakpoint reached");
        if !trips {
            return Ok(());
        }

        self.output.write_line(&breakpoint.stop_message(line))?;
        self.suspend(line, interpreter)
    }
}
