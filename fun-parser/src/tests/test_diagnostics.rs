use crate::*;
use miette::Diagnostic;

#[test]
fn test_syntax_error_reports_line() {
    let error = parse_program("var a = 1\nvar b = )\n").unwrap_err();
    match &error {
        ParseError::Syntax { line, src, .. } => {
            assert_eq!(*line, 2);
            assert_eq!(src, "var a = 1\nvar b = )\n");
        }
        other => panic!("Expected syntax error, got {other:?}"),
    }
    assert!(error.to_string().starts_with("Could not parse: expected"));
}

#[test]
fn test_syntax_error_diagnostic_code() {
    let error = parse_program("while 1 {}").unwrap_err();
    let code = error.code().map(|code| code.to_string());
    assert_eq!(code.as_deref(), Some("fun::parse::syntax_error"));
    assert!(error.help().is_some());
}

#[test]
fn test_unbalanced_braces() {
    assert!(matches!(
        parse_program("fun f() {\n  return 1\n"),
        Err(ParseError::Syntax { .. })
    ));
    assert!(matches!(parse_program("}"), Err(ParseError::Syntax { .. })));
}

#[test]
fn test_integer_out_of_range() {
    let error = parse_program("var big = 99999999999999999999").unwrap_err();
    match error {
        ParseError::InvalidInteger {
            found, position, ..
        } => {
            assert_eq!(found, "99999999999999999999");
            assert_eq!(position.line, 1);
            assert_eq!(position.column, 11);
        }
        other => panic!("Expected invalid integer error, got {other:?}"),
    }
}

#[test]
fn test_integer_literal_limit() {
    let definition = parse_program("var top = 2147483647").unwrap();
    assert_eq!(definition.to_string(), "var top = 2147483647");

    match parse_expression("2147483648") {
        Err(ParseError::InvalidInteger { found, .. }) => assert_eq!(found, "2147483648"),
        other => panic!("Expected invalid integer error, got {other:?}"),
    }
}

#[test]
fn test_expression_input_rejects_statements() {
    assert!(parse_expression("var a = 1").is_err());
    assert!(parse_expression("a = 1").is_err());
    assert!(parse_expression("1 +").is_err());
    assert!(parse_expression("").is_err());
}

#[test]
fn test_unsupported_operators_rejected() {
    assert!(parse_expression("-1").is_err());
    assert!(parse_expression("!a").is_err());
    assert!(parse_program("a += 1").is_err());
}
