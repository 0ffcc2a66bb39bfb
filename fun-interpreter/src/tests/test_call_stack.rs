//! Unit tests for frame management and name resolution

use crate::InterpretError;
use crate::call_stack::{CallStack, Frame};
use fun_parser::{Span, parse_program, StatementKind};

#[test]
fn test_new_stack_has_root_frame() {
    let mut stack = CallStack::new();
    assert_eq!(stack.depth(), 1);
    assert!(stack.is_at_root());
    assert!(stack.pop_frame().is_none());
    assert_eq!(stack.depth(), 1);
}

#[test]
fn test_lookup_scans_innermost_first() {
    let mut stack = CallStack::new();
    stack.define_variable("a", 1, Span::detached()).unwrap();
    stack.define_variable("b", 10, Span::detached()).unwrap();

    stack.push_frame(Frame::with_variables([("a".to_string(), 2)]));
    assert_eq!(stack.lookup_variable("a"), Some(2));
    assert_eq!(stack.lookup_variable("b"), Some(10));
    assert_eq!(stack.lookup_variable("c"), None);

    stack.pop_frame();
    assert_eq!(stack.lookup_variable("a"), Some(1));
}

#[test]
fn test_define_rejects_duplicates_in_top_frame_only() {
    let mut stack = CallStack::new();
    stack.define_variable("a", 1, Span::detached()).unwrap();

    let error = stack.define_variable("a", 2, Span::detached()).unwrap_err();
    assert!(matches!(error, InterpretError::VariableRedefinition { .. }));

    stack.push_frame(Frame::new());
    stack.define_variable("a", 3, Span::detached()).unwrap();
    assert_eq!(stack.lookup_variable("a"), Some(3));
}

#[test]
fn test_assign_updates_nearest_binding() {
    let mut stack = CallStack::new();
    stack.define_variable("a", 1, Span::detached()).unwrap();
    stack.push_frame(Frame::new());

    stack.assign_variable("a", 5, Span::detached()).unwrap();
    assert_eq!(stack.frames().next().and_then(|frame| frame.variable("a")), None);

    stack.pop_frame();
    assert_eq!(stack.lookup_variable("a"), Some(5));

    let error = stack.assign_variable("z", 1, Span::detached()).unwrap_err();
    assert!(matches!(error, InterpretError::UndefinedVariable { .. }));
}

#[test]
fn test_functions_resolve_through_frames() {
    let program = parse_program("fun f() {}\nfun g(a) {}").unwrap();
    let definitions: Vec<_> = program
        .block
        .statements
        .iter()
        .filter_map(|statement| match &statement.kind {
            StatementKind::FunctionDefinition(definition) => Some(definition),
            _ => None,
        })
        .collect();

    let mut stack = CallStack::new();
    stack.define_function(definitions[0], Span::detached()).unwrap();
    stack.push_frame(Frame::new());
    stack.define_function(definitions[1], Span::detached()).unwrap();

    assert_eq!(stack.lookup_function("f").map(|f| f.arity()), Some(0));
    assert_eq!(stack.lookup_function("g").map(|g| g.arity()), Some(1));

    let error = stack
        .define_function(definitions[1], Span::detached())
        .unwrap_err();
    assert!(matches!(error, InterpretError::FunctionRedefinition { .. }));

    stack.pop_frame();
    assert!(stack.lookup_function("g").is_none());
}

#[test]
fn test_frame_with_variables() {
    let frame = Frame::with_variables([("b".to_string(), 2), ("a".to_string(), 1)]);
    assert_eq!(frame.variable("a"), Some(1));
    assert_eq!(frame.variable("b"), Some(2));
    assert!(!frame.has_variable("c"));
}
