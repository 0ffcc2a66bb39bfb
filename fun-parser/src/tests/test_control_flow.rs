use crate::*;

#[test]
fn test_while_loop() {
    let program = parse_program("while (1) {}").unwrap();
    match &program.block.statements[0].kind {
        StatementKind::WhileLoop(while_loop) => {
            assert_eq!(while_loop.condition.to_string(), "1");
            assert!(while_loop.body.block.statements.is_empty());
        }
        other => panic!("Expected while loop, got {other:?}"),
    }
}

#[test]
fn test_if_without_else() {
    let program = parse_program("if (1) {}").unwrap();
    match &program.block.statements[0].kind {
        StatementKind::IfClause(if_clause) => {
            assert_eq!(if_clause.condition.to_string(), "1");
            assert!(if_clause.else_body.is_none());
        }
        other => panic!("Expected if clause, got {other:?}"),
    }
}

#[test]
fn test_if_with_else() {
    let input = "var a = 10\nvar b = 20\nif (a > b) {\n    println(1)\n} else {\n    println(0)\n}";
    let program = parse_program(input).unwrap();
    assert_eq!(program.block.statements.len(), 3);

    match &program.block.statements[2].kind {
        StatementKind::IfClause(if_clause) => {
            assert_eq!(if_clause.condition.to_string(), "a > b");
            assert_eq!(if_clause.then_body.block.statements.len(), 1);
            let else_body = if_clause.else_body.as_ref().unwrap();
            assert_eq!(else_body.block.statements.len(), 1);
            assert_eq!(else_body.block.statements[0].line(), 6);
        }
        other => panic!("Expected if clause, got {other:?}"),
    }
}

#[test]
fn test_nested_control_flow() {
    let input = "while (i < 10) {\n  if (i % 2 == 0) {\n    println(i)\n  }\n  i = i + 1\n}";
    let program = parse_program(input).unwrap();

    match &program.block.statements[0].kind {
        StatementKind::WhileLoop(while_loop) => {
            let body = &while_loop.body.block.statements;
            assert_eq!(body.len(), 2);
            assert!(matches!(body[0].kind, StatementKind::IfClause(_)));
            assert!(matches!(body[1].kind, StatementKind::VariableAssignment(_)));
            assert_eq!(body[1].line(), 5);
        }
        other => panic!("Expected while loop, got {other:?}"),
    }
}

#[test]
fn test_else_requires_braces() {
    assert!(parse_program("if (1) {} else println(1)").is_err());
}
