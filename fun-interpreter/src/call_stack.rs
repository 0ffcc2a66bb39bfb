//! Call stack and scope management
//!
//! The call stack is the only environment the interpreter has. Every scoped
//! block and every function call pushes a frame, and name resolution scans the
//! live frames from the innermost outwards. There are no closures: a function
//! body sees its parameters plus whatever its *caller's* frames define at the
//! time of the call.

use crate::error::{InterpretError, Result};
use fun_parser::{FunctionDefinition, Span};
use std::collections::HashMap;

/// One scope's bindings
#[derive(Debug, Clone, Default)]
pub struct Frame<'a> {
    variables: HashMap<String, i32>,
    functions: HashMap<String, &'a FunctionDefinition>,
}

impl<'a> Frame<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frame pre-populated with variable bindings, as built for a function call
    pub fn with_variables(bindings: impl IntoIterator<Item = (String, i32)>) -> Self {
        Self {
            variables: bindings.into_iter().collect(),
            functions: HashMap::new(),
        }
    }

    pub fn variable(&self, name: &str) -> Option<i32> {
        self.variables.get(name).copied()
    }

    pub fn function(&self, name: &str) -> Option<&'a FunctionDefinition> {
        self.functions.get(name).copied()
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

/// Stack of frames, bottom (root) to top
#[derive(Debug, Clone)]
pub struct CallStack<'a> {
    frames: Vec<Frame<'a>>,
}

impl Default for CallStack<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CallStack<'a> {
    /// Create a call stack holding only the root frame
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True when only the root frame is live
    pub fn is_at_root(&self) -> bool {
        self.frames.len() <= 1
    }

    pub fn push_frame(&mut self, frame: Frame<'a>) {
        self.frames.push(frame);
    }

    /// Pop the top frame. The root frame is never popped.
    pub fn pop_frame(&mut self) -> Option<Frame<'a>> {
        if self.is_at_root() {
            return None;
        }
        self.frames.pop()
    }

    pub fn frames(&self) -> impl Iterator<Item = &Frame<'a>> {
        self.frames.iter().rev()
    }

    fn top_mut(&mut self) -> &mut Frame<'a> {
        if self.frames.is_empty() {
            self.frames.push(Frame::new());
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    fn top(&self) -> Option<&Frame<'a>> {
        self.frames.last()
    }

    /// Check that `name` can be defined as a variable in the top frame
    pub fn ensure_variable_undefined(&self, name: &str, position: Span) -> Result<()> {
        match self.top() {
            Some(frame) if frame.has_variable(name) => {
                Err(InterpretError::variable_redefinition(name, position))
            }
            _ => Ok(()),
        }
    }

    /// Bind a new variable in the top frame
    pub fn define_variable(&mut self, name: &str, value: i32, position: Span) -> Result<()> {
        self.ensure_variable_undefined(name, position)?;
        self.top_mut().variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Register a function in the top frame
    pub fn define_function(
        &mut self,
        definition: &'a FunctionDefinition,
        position: Span,
    ) -> Result<()> {
        let name = &definition.name.name;
        let frame = self.top_mut();
        if frame.has_function(name) {
            return Err(InterpretError::function_redefinition(name, position));
        }
        frame.functions.insert(name.clone(), definition);
        Ok(())
    }

    /// Resolve a variable, innermost frame first
    pub fn lookup_variable(&self, name: &str) -> Option<i32> {
        self.frames().find_map(|frame| frame.variable(name))
    }

    /// Resolve a function, innermost frame first
    pub fn lookup_function(&self, name: &str) -> Option<&'a FunctionDefinition> {
        self.frames().find_map(|frame| frame.function(name))
    }

    /// Overwrite the binding in the nearest frame that has `name`
    pub fn assign_variable(&mut self, name: &str, value: i32, position: Span) -> Result<()> {
        let slot = self
            .frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.variables.get_mut(name))
            .ok_or_else(|| InterpretError::undefined_variable(name, position))?;
        *slot = value;
        Ok(())
    }
}
