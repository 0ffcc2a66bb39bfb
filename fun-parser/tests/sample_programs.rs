// Whole-program parsing tests
// Sample programs exercising every statement kind together

use fun_parser::{ast::*, parse_program};

const FIBONACCI: &str = r#"fun fib(n) {
    if (n <= 1) {
        return 1
    }
    return fib(n - 1) + fib(n - 2)
}

var i = 1
while (i <= 5) {
    println(i, fib(i))
    i = i + 1
}
"#;

const NESTED_FUNCTIONS: &str = r#"fun foo(n) {
    fun bar(m) {
        return m + n
    }

    return bar(1)
}

println(foo(41))
"#;

fn statement_lines(block: &Block) -> Vec<usize> {
    block.statements.iter().map(Statement::line).collect()
}

#[test]
fn test_fibonacci_program() {
    let program = parse_program(FIBONACCI).unwrap();
    assert_eq!(statement_lines(&program.block), vec![1, 8, 9]);

    match &program.block.statements[2].kind {
        StatementKind::WhileLoop(while_loop) => {
            assert_eq!(while_loop.condition.to_string(), "i <= 5");
            assert_eq!(statement_lines(&while_loop.body.block), vec![10, 11]);
        }
        other => panic!("Expected while loop, got {other:?}"),
    }
}

#[test]
fn test_function_body_lines() {
    let program = parse_program(FIBONACCI).unwrap();
    match &program.block.statements[0].kind {
        StatementKind::FunctionDefinition(function) => {
            assert_eq!(function.name.name, "fib");
            assert_eq!(statement_lines(&function.body), vec![2, 5]);
        }
        other => panic!("Expected function definition, got {other:?}"),
    }
}

#[test]
fn test_nested_functions_program() {
    let program = parse_program(NESTED_FUNCTIONS).unwrap();
    assert_eq!(statement_lines(&program.block), vec![1, 9]);

    match &program.block.statements[1].kind {
        StatementKind::PrintCall(print) => {
            assert_eq!(print.arguments.len(), 1);
            assert_eq!(print.arguments[0].to_string(), "foo(41)");
        }
        other => panic!("Expected println call, got {other:?}"),
    }
}

#[test]
fn test_program_with_comments() {
    let input = "// leading comment\nvar x = 1 // trailing\n// between\nx = x * 2\nprintln(x)";
    let program = parse_program(input).unwrap();
    assert_eq!(statement_lines(&program.block), vec![2, 4, 5]);
}

#[test]
fn test_scoped_blocks_nest() {
    let program = parse_program("{\n  var a = 1\n  {\n    var a = 2\n  }\n}").unwrap();
    match &program.block.statements[0].kind {
        StatementKind::ScopedBlock(outer) => {
            assert_eq!(outer.block.statements.len(), 2);
            assert!(matches!(
                outer.block.statements[1].kind,
                StatementKind::ScopedBlock(_)
            ));
        }
        other => panic!("Expected scoped block, got {other:?}"),
    }
}
