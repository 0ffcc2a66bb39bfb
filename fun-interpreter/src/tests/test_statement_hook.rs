//! Tests for the per-statement hook used by the debugger

use crate::{InterpretError, Interpreter, Output, Result, StatementHook};
use fun_parser::{Span, parse_expression, parse_program};
use std::cell::RefCell;
use std::rc::Rc;

/// Records the line of every statement it is called for
struct LineRecorder {
    lines: Rc<RefCell<Vec<usize>>>,
}

impl StatementHook for LineRecorder {
    fn before_statement(&mut self, span: Span, _interpreter: &mut Interpreter<'_>) -> Result<()> {
        self.lines.borrow_mut().push(span.line);
        Ok(())
    }
}

const LOOP: &str = "var i = 1
while (i <= 3) {
    println(i)
    i = i + 1
}
";

#[test]
fn test_hook_sees_every_statement() {
    let program = parse_program("var a = 1\nprintln(a)\n{\n  a = 2\n}").unwrap();
    let lines = Rc::new(RefCell::new(Vec::new()));
    let (output, captured) = Output::captured();

    let mut interpreter = Interpreter::with_hook(
        output,
        LineRecorder {
            lines: Rc::clone(&lines),
        },
    );
    interpreter.interpret(&program).unwrap();

    assert_eq!(*lines.borrow(), vec![1, 2, 3, 4]);
    assert_eq!(captured.contents(), "1\n");
}

#[test]
fn test_hook_fires_before_each_loop_check() {
    let program = parse_program(LOOP).unwrap();
    let lines = Rc::new(RefCell::new(Vec::new()));
    let (output, _captured) = Output::captured();

    let mut interpreter = Interpreter::with_hook(
        output,
        LineRecorder {
            lines: Rc::clone(&lines),
        },
    );
    interpreter.interpret(&program).unwrap();

    let loop_trips = lines.borrow().iter().filter(|line| **line == 2).count();
    assert_eq!(loop_trips, 4);
    assert_eq!(*lines.borrow(), vec![1, 2, 3, 4, 2, 3, 4, 2, 3, 4, 2]);
}

/// Evaluates an expression in the live context whenever a given line is reached
struct Inspector {
    line: usize,
    expression: fun_parser::Expression,
    seen: Rc<RefCell<Vec<i32>>>,
}

impl StatementHook for Inspector {
    fn before_statement(&mut self, span: Span, interpreter: &mut Interpreter<'_>) -> Result<()> {
        if span.line == self.line {
            let value = interpreter.evaluate_expression(&self.expression)?;
            self.seen.borrow_mut().push(value);
        }
        Ok(())
    }
}

#[test]
fn test_hook_evaluates_in_live_frames_without_reentry() {
    let source = "fun twice(n) {\n  return n * 2\n}\nvar i = 1\nwhile (i <= 3) {\n  i = i + 1\n}";
    let program = parse_program(source).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (output, _captured) = Output::captured();

    // twice() runs statements of its own; the hook must not be re-entered for them
    let mut interpreter = Interpreter::with_hook(
        output,
        Inspector {
            line: 6,
            expression: parse_expression("twice(i)").unwrap(),
            seen: Rc::clone(&seen),
        },
    );
    interpreter.interpret(&program).unwrap();

    assert_eq!(*seen.borrow(), vec![2, 4, 6]);
}

struct Interrupter {
    line: usize,
}

impl StatementHook for Interrupter {
    fn before_statement(&mut self, span: Span, _interpreter: &mut Interpreter<'_>) -> Result<()> {
        if span.line == self.line {
            return Err(InterpretError::Interrupted);
        }
        Ok(())
    }
}

#[test]
fn test_hook_error_aborts_run() {
    let program = parse_program(LOOP).unwrap();
    let (output, captured) = Output::captured();

    let mut interpreter = Interpreter::with_hook(output, Interrupter { line: 4 });
    let error = interpreter.interpret(&program).unwrap_err();

    assert!(error.is_interrupted());
    assert_eq!(captured.contents(), "1\n");
    assert_eq!(interpreter.call_stack().depth(), 1);
}
