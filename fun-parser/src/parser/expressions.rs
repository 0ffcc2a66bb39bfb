// Expression parsing module
// Handles operator precedence and primary expressions

use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};

use crate::ast::*;
use crate::error::*;
use crate::parser::{FunParser, Rule};

impl FunParser {
    /// Binary operator precedence parser
    /// Precedence levels from lowest to highest, all left associative
    pub(crate) fn pratt_parser() -> PrattParser<Rule> {
        PrattParser::new()
            // Level 1: Logical OR
            .op(Op::infix(Rule::op_logical_or, Assoc::Left))
            // Level 2: Logical AND
            .op(Op::infix(Rule::op_logical_and, Assoc::Left))
            // Level 3: Equality
            .op(Op::infix(Rule::op_equal, Assoc::Left) | Op::infix(Rule::op_not_equal, Assoc::Left))
            // Level 4: Comparison
            .op(Op::infix(Rule::op_less, Assoc::Left)
                | Op::infix(Rule::op_less_equal, Assoc::Left)
                | Op::infix(Rule::op_greater, Assoc::Left)
                | Op::infix(Rule::op_greater_equal, Assoc::Left))
            // Level 5: Additive
            .op(Op::infix(Rule::op_add, Assoc::Left) | Op::infix(Rule::op_subtract, Assoc::Left))
            // Level 6: Multiplicative
            .op(Op::infix(Rule::op_multiply, Assoc::Left)
                | Op::infix(Rule::op_divide, Assoc::Left)
                | Op::infix(Rule::op_modulo, Assoc::Left))
    }

    /// Parse expression using precedence climbing
    pub(crate) fn parse_expression_with_precedence(
        pairs: Pairs<Rule>,
        source: &str,
    ) -> ParseResult<Expression> {
        let parser = Self::pratt_parser();

        parser
            .map_primary(|pair| Self::parse_primary_expr(pair, source))
            .map_infix(
                |left: ParseResult<Expression>, op: Pair<Rule>, right: ParseResult<Expression>| {
                    let left = left?;
                    let right = right?;

                    let operator = Self::binary_operator(&op)?;
                    let span = Span::new(
                        left.span.start,
                        right.span.end,
                        left.span.line,
                        left.span.column,
                    );

                    Ok(Expression {
                        kind: ExpressionKind::BinaryOp(BinaryOperation {
                            left: Box::new(left),
                            operator,
                            right: Box::new(right),
                            span,
                        }),
                        span,
                    })
                },
            )
            .parse(pairs)
    }

    fn binary_operator(op: &Pair<Rule>) -> ParseResult<BinaryOperator> {
        let operator = match op.as_rule() {
            Rule::op_logical_or => BinaryOperator::LogicalOr,
            Rule::op_logical_and => BinaryOperator::LogicalAnd,
            Rule::op_equal => BinaryOperator::Equal,
            Rule::op_not_equal => BinaryOperator::NotEqual,
            Rule::op_less_equal => BinaryOperator::LessEqual,
            Rule::op_less => BinaryOperator::Less,
            Rule::op_greater_equal => BinaryOperator::GreaterEqual,
            Rule::op_greater => BinaryOperator::Greater,
            Rule::op_add => BinaryOperator::Add,
            Rule::op_subtract => BinaryOperator::Subtract,
            Rule::op_multiply => BinaryOperator::Multiply,
            Rule::op_divide => BinaryOperator::Divide,
            Rule::op_modulo => BinaryOperator::Modulo,
            other => {
                return Err(ParseError::unexpected_rule(
                    "binary operator",
                    other,
                    Self::span_from_pair(op),
                ))
            }
        };
        Ok(operator)
    }

    /// Parse an expression from a Pest pair
    pub(crate) fn parse_expression_from_pair(
        pair: Pair<Rule>,
        source: &str,
    ) -> ParseResult<Expression> {
        match pair.as_rule() {
            Rule::expression => Self::parse_expression_with_precedence(pair.into_inner(), source),
            _ => Self::parse_primary_expr(pair, source),
        }
    }

    /// Parse literals, identifiers, calls and parenthesized expressions
    pub(crate) fn parse_primary_expr(pair: Pair<Rule>, source: &str) -> ParseResult<Expression> {
        let span = Self::span_from_pair(&pair);
        let kind = match pair.as_rule() {
            Rule::integer => ExpressionKind::Integer(Self::parse_integer(pair, source)?),
            Rule::identifier => ExpressionKind::Identifier(Self::parse_identifier(pair)),
            Rule::function_call => {
                ExpressionKind::FunctionCall(Self::parse_function_call(pair, source)?)
            }
            Rule::parenthesized => {
                let inner_pair = Self::expect_rule(&mut pair.into_inner(), Rule::expression, span)?;
                let inner = Self::parse_expression_from_pair(inner_pair, source)?;
                ExpressionKind::Parenthesized(Box::new(inner))
            }
            other => return Err(ParseError::unexpected_rule("expression", other, span)),
        };

        Ok(Expression { kind, span })
    }
}
