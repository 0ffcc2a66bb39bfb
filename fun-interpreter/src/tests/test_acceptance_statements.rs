//! Acceptance tests for statements, blocks and scoping

use crate::InterpretError;
use crate::test_harness::FunTestHarness;
use pretty_assertions::assert_eq;

#[test]
fn test_println() {
    let mut harness = FunTestHarness::new();

    harness.assert_prints("println(179)", "179\n").unwrap();
    harness.assert_prints("println()", "\n").unwrap();
    harness.assert_prints("println(1, 2, 3)", "1 2 3\n").unwrap();
    harness.assert_prints("println((1))", "1\n").unwrap();
}

#[test]
fn test_variable_definition_and_use() {
    let mut harness = FunTestHarness::new();

    harness.assert_prints("var _s179 = 179", "").unwrap();
    harness
        .assert_prints("var _s179 = 179\nprintln(_s179)", "179\n")
        .unwrap();
}

#[test]
fn test_reassignment() {
    let mut harness = FunTestHarness::new();

    harness
        .assert_prints("var x = 1\nx = 2\nprintln(x)", "2\n")
        .unwrap();
    harness.assert_prints("var _s179 = 0\n_s179 = 179", "").unwrap();
}

#[test]
fn test_assignment_to_undefined_variable() {
    let mut harness = FunTestHarness::new();

    let error = harness.run_expecting_error("y = 2").unwrap();
    assert!(matches!(error, InterpretError::UndefinedVariable { ref name, .. } if name == "y"));
}

#[test]
fn test_variable_redefinition_in_same_scope() {
    let mut harness = FunTestHarness::new();

    let error = harness
        .run_expecting_error("var a = 1\nprintln(a)\nvar a = 2")
        .unwrap();
    match error {
        InterpretError::VariableRedefinition { name, position, .. } => {
            assert_eq!(name, "a");
            assert_eq!(position.line, 3);
        }
        other => panic!("Expected variable redefinition, got {other:?}"),
    }
    assert_eq!(harness.printed(), "1\n");
}

#[test]
fn test_redefinition_checked_before_initializer() {
    let mut harness = FunTestHarness::new();

    let error = harness.run_expecting_error("var a = 1\nvar a = 1 / 0").unwrap();
    assert!(matches!(error, InterpretError::VariableRedefinition { .. }));
}

#[test]
fn test_shadowing_in_nested_scope() {
    let mut harness = FunTestHarness::new();

    harness
        .assert_prints(
            "var a = 1\n{\n  var a = 2\n  println(a)\n}\nprintln(a)",
            "2\n1\n",
        )
        .unwrap();
}

#[test]
fn test_assignment_reaches_outer_scope() {
    let mut harness = FunTestHarness::new();

    harness
        .assert_prints("var a = 1\n{\n  a = 5\n}\nprintln(a)", "5\n")
        .unwrap();
}

#[test]
fn test_block_scope_ends_with_block() {
    let mut harness = FunTestHarness::new();

    let error = harness
        .run_expecting_error("{\n  var inner = 1\n}\nprintln(inner)")
        .unwrap();
    assert!(matches!(error, InterpretError::UndefinedVariable { .. }));
}

#[test]
fn test_sibling_scopes_are_independent() {
    let mut harness = FunTestHarness::new();

    harness
        .assert_prints("{ var a = 1 println(a) }\n{ var a = 2 println(a) }", "1\n2\n")
        .unwrap();
}

#[test]
fn test_while_loop() {
    let mut harness = FunTestHarness::new();

    harness
        .assert_prints(
            "var i = 1\nwhile (i + 1 > 0) {println(i)i = i - 1}",
            "1\n0\n",
        )
        .unwrap();
    harness
        .assert_prints("while (0) { println(1) }", "")
        .unwrap();
}

#[test]
fn test_while_body_gets_fresh_scope_each_iteration() {
    let mut harness = FunTestHarness::new();

    harness
        .assert_prints(
            "var i = 0\nwhile (i < 3) {\n  var square = i * i\n  println(square)\n  i = i + 1\n}",
            "0\n1\n4\n",
        )
        .unwrap();
}

#[test]
fn test_if_clauses() {
    let mut harness = FunTestHarness::new();

    harness.assert_prints("if (1) {\nprintln(1)\n}", "1\n").unwrap();
    harness.assert_prints("if (0) {\nprintln(1)\n}", "").unwrap();
    harness
        .assert_prints("if (0 - 3) { println(1) } else { println(2) }", "1\n")
        .unwrap();
}

#[test]
fn test_first_sample() {
    let mut harness = FunTestHarness::new();

    harness
        .assert_prints(
            "var a = 10\nvar b = 20\nif (a > b) {\n    println(1)\n} else {\n    println(0)\n}",
            "0\n",
        )
        .unwrap();
}

#[test]
fn test_expression_statements_do_not_stop_a_block() {
    let mut harness = FunTestHarness::new();

    harness
        .assert_prints("1 + 1\n42\nprintln(7)", "7\n")
        .unwrap();
}

#[test]
fn test_return_at_top_level_is_invalid() {
    let mut harness = FunTestHarness::new();

    let error = harness.run_expecting_error("return 179").unwrap();
    assert!(matches!(error, InterpretError::InvalidReturn { .. }));
}

#[test]
fn test_return_inside_top_level_block_ends_program() {
    let mut harness = FunTestHarness::new();

    harness
        .assert_prints("if (1) {\n  return 5\n}\nprintln(1)", "")
        .unwrap();
}

#[test]
fn test_output_before_failure_is_kept() {
    let mut harness = FunTestHarness::new();

    let error = harness
        .run_expecting_error("println(1)\nprintln(2 / 0)\nprintln(3)")
        .unwrap();
    assert!(matches!(error, InterpretError::DivisionByZero { .. }));
    assert_eq!(harness.printed(), "1\n");
}
