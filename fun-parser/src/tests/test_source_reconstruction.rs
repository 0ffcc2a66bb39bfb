use crate::*;
use pretty_assertions::assert_eq;

#[test]
fn test_expression_rendering() {
    let cases = [
        ("i%2==1", "i % 2 == 1"),
        ("(a+b)*c", "(a + b) * c"),
        ("fib(n-1)+fib(n-2)", "fib(n - 1) + fib(n - 2)"),
        ("f()", "f()"),
        ("x   &&   y", "x && y"),
    ];

    for (input, expected) in cases {
        assert_eq!(parse_expression(input).unwrap().to_string(), expected);
    }
}

#[test]
fn test_constructed_expression_rendering() {
    let expr = Expression::binary(
        Expression::identifier("n"),
        BinaryOperator::LessEqual,
        Expression::parenthesized(Expression::call(
            "max",
            vec![Expression::integer(1), Expression::identifier("m")],
        )),
    );
    assert_eq!(expr.to_string(), "n <= (max(1, m))");
}

#[test]
fn test_program_rendering() {
    let input = "fun fib(n) {\nif (n <= 1) {\nreturn 1\n}\nreturn fib(n - 1) + fib(n - 2)\n}\nvar i = 1\nwhile (i <= 5) {\nprintln(i, fib(i))\ni = i + 1\n}";
    let expected = "fun fib(n) {\n\tif (n <= 1) {\n\t\treturn 1\n\t}\n\treturn fib(n - 1) + fib(n - 2)\n}\nvar i = 1\nwhile (i <= 5) {\n\tprintln(i, fib(i))\n\ti = i + 1\n}";

    let program = parse_program(input).unwrap();
    assert_eq!(program.to_string(), expected);
}

#[test]
fn test_rendered_program_reparses() {
    let input = "var a = 10\nif (a > 5) { println(a) } else { {} }";
    let program = parse_program(input).unwrap();
    let reparsed = parse_program(&program.to_string()).unwrap();
    assert_eq!(reparsed.to_string(), program.to_string());
}
