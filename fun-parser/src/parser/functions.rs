// Function parsing module
// Handles function definitions, calls and their parameter/argument lists

use pest::iterators::Pair;

use crate::ast::*;
use crate::error::*;
use crate::parser::{FunParser, Rule};

impl FunParser {
    /// Parse `fun name(params) { body }`
    pub(crate) fn parse_function_definition(
        pair: Pair<Rule>,
        source: &str,
    ) -> ParseResult<FunctionDefinition> {
        let span = Self::span_from_pair(&pair);
        let mut inner_pairs = pair.into_inner();

        let name = Self::parse_identifier(Self::expect_rule(
            &mut inner_pairs,
            Rule::identifier,
            span,
        )?);

        let mut parameters = Vec::new();
        let mut body_pair = Self::next_significant(&mut inner_pairs)
            .ok_or_else(|| ParseError::missing("function body", span))?;
        if body_pair.as_rule() == Rule::parameter_list {
            parameters = body_pair
                .into_inner()
                .map(Self::parse_identifier)
                .collect();
            body_pair = Self::next_significant(&mut inner_pairs)
                .ok_or_else(|| ParseError::missing("function body", span))?;
        }

        // The body braces belong to the definition: the call frame is the scope
        let body = Self::parse_scoped_block(body_pair, source)?.block;

        Ok(FunctionDefinition {
            name,
            parameters,
            body,
            span,
        })
    }

    /// Parse `name(args)` in expression position
    pub(crate) fn parse_function_call(pair: Pair<Rule>, source: &str) -> ParseResult<FunctionCall> {
        let span = Self::span_from_pair(&pair);
        let mut inner_pairs = pair.into_inner();

        let name = Self::parse_identifier(Self::expect_rule(
            &mut inner_pairs,
            Rule::identifier,
            span,
        )?);
        let arguments = match inner_pairs.next() {
            Some(arguments_pair) => Self::parse_argument_list(arguments_pair, source)?,
            None => Vec::new(),
        };

        Ok(FunctionCall {
            name,
            arguments,
            span,
        })
    }

    /// Parse a comma separated list of argument expressions
    pub(crate) fn parse_argument_list(
        pair: Pair<Rule>,
        source: &str,
    ) -> ParseResult<Vec<Expression>> {
        let span = Self::span_from_pair(&pair);
        if pair.as_rule() != Rule::argument_list {
            return Err(ParseError::unexpected_rule("argument_list", pair.as_rule(), span));
        }

        pair.into_inner()
            .map(|argument| Self::parse_expression_from_pair(argument, source))
            .collect()
    }
}
