//! Core interpreter implementation for evaluating Fun AST nodes.
//!
//! Statements produce an optional integer: `Some` is a control value that
//! makes the enclosing blocks stop early (used by `return`), `None` means
//! execution carries on with the next statement.

use crate::call_stack::{CallStack, Frame};
use crate::error::{InterpretError, Result};
use crate::operators::apply_binary_operator;
use crate::output::Output;
use fun_parser::{
    Block, Expression, ExpressionKind, FunctionCall, Program, ScopedBlock, Span, Statement,
    StatementKind,
};
use tracing::{debug, trace};

/// Callback invoked before every statement is executed.
///
/// While the hook runs it is detached from the interpreter, so anything it
/// evaluates through `interpreter` does not trigger the hook again.
pub trait StatementHook {
    fn before_statement(&mut self, span: Span, interpreter: &mut Interpreter<'_>) -> Result<()>;
}

/// The main interpreter for evaluating Fun programs
pub struct Interpreter<'a> {
    stack: CallStack<'a>,
    output: Output,
    hook: Option<Box<dyn StatementHook + 'a>>,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with a single root frame
    pub fn new(output: Output) -> Self {
        Self {
            stack: CallStack::new(),
            output,
            hook: None,
        }
    }

    pub fn with_hook(output: Output, hook: impl StatementHook + 'a) -> Self {
        Self {
            stack: CallStack::new(),
            output,
            hook: Some(Box::new(hook)),
        }
    }

    pub fn call_stack(&self) -> &CallStack<'a> {
        &self.stack
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Run a whole program in the root frame
    pub fn interpret(&mut self, program: &'a Program) -> Result<()> {
        debug!(statements = program.block.statements.len(), "interpreting program");
        let result = self.execute_block(&program.block);
        match &result {
            Ok(_) => debug!("program finished"),
            Err(error) => debug!(%error, "program failed"),
        }
        result.map(|_| ())
    }

    fn notify_hook(&mut self, span: Span) -> Result<()> {
        let Some(mut hook) = self.hook.take() else {
            return Ok(());
        };
        let result = hook.before_statement(span, self);
        self.hook = Some(hook);
        result
    }

    /// Execute statements in order until one produces a control value
    pub fn execute_block(&mut self, block: &'a Block) -> Result<Option<i32>> {
        for statement in &block.statements {
            let value = self.execute_statement(statement)?;
            if matches!(statement.kind, StatementKind::Expression(_)) {
                continue;
            }
            if value.is_some() {
                return Ok(value);
            }
        }
        Ok(None)
    }

    fn execute_scoped_block(&mut self, scoped: &'a ScopedBlock) -> Result<Option<i32>> {
        self.stack.push_frame(Frame::new());
        let result = self.execute_block(&scoped.block);
        self.stack.pop_frame();
        result
    }

    pub fn execute_statement(&mut self, statement: &'a Statement) -> Result<Option<i32>> {
        self.notify_hook(statement.span)?;
        trace!(line = statement.line(), "executing statement");

        match &statement.kind {
            StatementKind::FunctionDefinition(definition) => {
                self.stack.define_function(definition, definition.name.span)?;
                Ok(None)
            }
            StatementKind::ScopedBlock(scoped) => self.execute_scoped_block(scoped),
            StatementKind::VariableDefinition(definition) => {
                let name = &definition.name;
                self.stack.ensure_variable_undefined(&name.name, name.span)?;
                let value = self.evaluate_expression(&definition.initializer)?;
                self.stack.define_variable(&name.name, value, name.span)?;
                Ok(None)
            }
            StatementKind::WhileLoop(while_loop) => loop {
                if self.evaluate_expression(&while_loop.condition)? == 0 {
                    break Ok(None);
                }
                if let Some(value) = self.execute_scoped_block(&while_loop.body)? {
                    break Ok(Some(value));
                }
                // The condition re-check counts as reaching the loop statement again
                self.notify_hook(statement.span)?;
            },
            StatementKind::IfClause(if_clause) => {
                if self.evaluate_expression(&if_clause.condition)? != 0 {
                    self.execute_scoped_block(&if_clause.then_body)
                } else if let Some(else_body) = &if_clause.else_body {
                    self.execute_scoped_block(else_body)
                } else {
                    Ok(None)
                }
            }
            StatementKind::VariableAssignment(assignment) => {
                let value = self.evaluate_expression(&assignment.value)?;
                self.stack
                    .assign_variable(&assignment.name.name, value, assignment.name.span)?;
                Ok(None)
            }
            StatementKind::PrintCall(print) => {
                let values = print
                    .arguments
                    .iter()
                    .map(|argument| self.evaluate_expression(argument))
                    .collect::<Result<Vec<_>>>()?;
                let line = values
                    .iter()
                    .map(i32::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                self.output.write_line(&line)?;
                Ok(None)
            }
            StatementKind::Return(return_statement) => {
                if self.stack.is_at_root() {
                    return Err(InterpretError::invalid_return(return_statement.span));
                }
                self.evaluate_expression(&return_statement.value).map(Some)
            }
            StatementKind::Expression(expression) => self.evaluate_expression(expression).map(Some),
        }
    }

    /// Evaluate an expression against the current call stack
    pub fn evaluate_expression(&mut self, expression: &Expression) -> Result<i32> {
        match &expression.kind {
            ExpressionKind::Identifier(identifier) => self
                .stack
                .lookup_variable(&identifier.name)
                .ok_or_else(|| InterpretError::undefined_variable(&identifier.name, identifier.span)),
            ExpressionKind::Integer(literal) => Ok(literal.value),
            ExpressionKind::FunctionCall(call) => self.call_function(call),
            ExpressionKind::Parenthesized(inner) => self.evaluate_expression(inner),
            ExpressionKind::BinaryOp(operation) => {
                let left = self.evaluate_expression(&operation.left)?;
                let right = self.evaluate_expression(&operation.right)?;
                apply_binary_operator(operation.operator, left, right, operation.span)
            }
        }
    }

    fn call_function(&mut self, call: &FunctionCall) -> Result<i32> {
        let name = &call.name.name;
        let function = self
            .stack
            .lookup_function(name)
            .ok_or_else(|| InterpretError::undefined_function(name, call.name.span))?;

        let arguments = call
            .arguments
            .iter()
            .map(|argument| self.evaluate_expression(argument))
            .collect::<Result<Vec<_>>>()?;
        if arguments.len() != function.arity() {
            return Err(InterpretError::wrong_arity(
                name,
                function.arity(),
                arguments.len(),
                call.span,
            ));
        }

        let parameters = function
            .parameters
            .iter()
            .map(|parameter| parameter.name.clone());
        self.stack
            .push_frame(Frame::with_variables(parameters.zip(arguments)));
        let result = self.execute_block(&function.body);
        self.stack.pop_frame();

        Ok(result?.unwrap_or(0))
    }
}
