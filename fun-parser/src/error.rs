// Fun Parser Error Handling
// Error reporting with miette integration

use crate::ast::Span;
use crate::parser::Rule;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Main parse error type with miette integration
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("Could not parse: expected {expected} at {line}:{column}")]
    #[diagnostic(
        code(fun::parse::syntax_error),
        help("Check the syntax near the highlighted location")
    )]
    Syntax {
        #[source_code]
        src: String,
        #[label("error occurred here")]
        span: SourceSpan,
        expected: String,
        line: usize,
        column: usize,
    },

    #[error("Could not parse: invalid integer literal \"{found}\" at {position}")]
    #[diagnostic(
        code(fun::parse::invalid_integer),
        help("Integer literals must fit in a signed 32-bit integer")
    )]
    InvalidInteger {
        #[source_code]
        src: String,
        #[label("invalid integer")]
        span: SourceSpan,
        found: String,
        position: Span,
    },

    #[error("Could not parse: unexpected grammar rule {found:?}, expected {expected}")]
    #[diagnostic(code(fun::parse::unexpected_rule))]
    UnexpectedRule {
        expected: String,
        found: Rule,
        span: Span,
    },

    #[error("Could not parse: missing {expected} at {span}")]
    #[diagnostic(code(fun::parse::missing_element))]
    MissingElement { expected: String, span: Span },
}

impl ParseError {
    /// Create a parse error from a Pest parsing error
    pub fn from_pest_error(error: pest::error::Error<Rule>, src: String) -> Self {
        let span = match error.location {
            pest::error::InputLocation::Pos(pos) => SourceSpan::new(pos.into(), 0),
            pest::error::InputLocation::Span((start, end)) => {
                SourceSpan::new(start.into(), end - start)
            }
        };
        let (line, column) = match error.line_col {
            pest::error::LineColLocation::Pos(position) => position,
            pest::error::LineColLocation::Span(start, _) => start,
        };

        let expected = match &error.variant {
            pest::error::ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
                describe_expected(positives)
            }
            pest::error::ErrorVariant::ParsingError { .. } => "a statement".to_string(),
            pest::error::ErrorVariant::CustomError { message } => message.clone(),
        };

        ParseError::Syntax {
            src,
            span,
            expected,
            line,
            column,
        }
    }

    /// Create an invalid integer error
    pub fn invalid_integer(src: String, position: Span, found: String) -> Self {
        ParseError::InvalidInteger {
            src,
            span: position.into(),
            found,
            position,
        }
    }

    pub fn unexpected_rule(expected: &str, found: Rule, span: Span) -> Self {
        ParseError::UnexpectedRule {
            expected: expected.to_string(),
            found,
            span,
        }
    }

    pub fn missing(expected: &str, span: Span) -> Self {
        ParseError::MissingElement {
            expected: expected.to_string(),
            span,
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

fn describe_expected(rules: &[Rule]) -> String {
    let mut descriptions: Vec<&str> = rules.iter().map(rule_to_user_friendly_description).collect();
    descriptions.dedup();
    match descriptions.as_slice() {
        [single] => single.to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
        [] => "a statement".to_string(),
    }
}

/// Convert a parser rule to a user-friendly description
fn rule_to_user_friendly_description(rule: &Rule) -> &'static str {
    match rule {
        Rule::integer => "a number (like 42)",
        Rule::identifier => "an identifier (like variable_name)",

        Rule::expression | Rule::expression_input => "an expression",
        Rule::function_call => "a function call (like fib(n - 1))",
        Rule::parenthesized => "a parenthesized expression (like (x + y))",
        Rule::argument_list => "an argument list",
        Rule::parameter_list => "a parameter list",

        Rule::function_definition => "a function definition (fun name(a, b) { ... })",
        Rule::variable_definition => "a variable definition (var name = value)",
        Rule::variable_assignment => "an assignment (name = value)",
        Rule::while_loop => "a while loop (while (condition) { ... })",
        Rule::if_clause => "an if clause (if (condition) { ... })",
        Rule::return_statement => "a return statement (return value)",
        Rule::print_call => "a println call (println(a, b))",
        Rule::block | Rule::program => "a statement",
        Rule::braced_block => "a block ({ ... })",

        Rule::keyword_fun => "the 'fun' keyword",
        Rule::keyword_var => "the 'var' keyword",
        Rule::keyword_while => "the 'while' keyword",
        Rule::keyword_if => "the 'if' keyword",
        Rule::keyword_else => "the 'else' keyword",
        Rule::keyword_return => "the 'return' keyword",
        Rule::keyword_println => "the 'println' keyword",
        Rule::keyword => "a keyword",

        Rule::op_logical_or
        | Rule::op_logical_and
        | Rule::op_equal
        | Rule::op_not_equal
        | Rule::op_less_equal
        | Rule::op_less
        | Rule::op_greater_equal
        | Rule::op_greater
        | Rule::op_add
        | Rule::op_subtract
        | Rule::op_multiply
        | Rule::op_divide
        | Rule::op_modulo => "a binary operator",

        Rule::EOI => "end of input",
        _ => "a token",
    }
}
