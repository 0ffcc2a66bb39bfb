// Fun parser
// Pest grammar plus the builders that turn parse pairs into AST nodes

mod control_flow;
mod expressions;
mod functions;
mod literals;
mod statements;

use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

use crate::ast::*;
use crate::error::*;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct FunParser;

impl FunParser {
    /// Parse a whole source file
    pub fn parse_program(input: &str) -> ParseResult<Program> {
        let mut pairs = <Self as Parser<Rule>>::parse(Rule::program, input)
            .map_err(|error| ParseError::from_pest_error(error, input.to_string()))?;
        let program_pair = pairs
            .next()
            .ok_or_else(|| ParseError::missing("program", Span::detached()))?;
        let span = Self::span_from_pair(&program_pair);

        let block_pair = Self::expect_rule(&mut program_pair.into_inner(), Rule::block, span)?;
        let block = Self::parse_block(block_pair, input)?;

        Ok(Program { block, span })
    }

    /// Parse a single expression, as typed at the debugger prompt
    pub fn parse_expression(input: &str) -> ParseResult<Expression> {
        let mut pairs = <Self as Parser<Rule>>::parse(Rule::expression_input, input)
            .map_err(|error| ParseError::from_pest_error(error, input.to_string()))?;
        let input_pair = pairs
            .next()
            .ok_or_else(|| ParseError::missing("expression", Span::detached()))?;
        let span = Self::span_from_pair(&input_pair);

        let expression_pair =
            Self::expect_rule(&mut input_pair.into_inner(), Rule::expression, span)?;
        Self::parse_expression_from_pair(expression_pair, input)
    }

    pub(crate) fn span_from_pair(pair: &Pair<Rule>) -> Span {
        let pest_span = pair.as_span();
        let (line, column) = pair.line_col();
        Span::new(pest_span.start(), pest_span.end(), line, column)
    }

    /// Take the next pair, skipping keyword tokens, and check its rule
    pub(crate) fn expect_rule<'i>(
        pairs: &mut Pairs<'i, Rule>,
        expected: Rule,
        parent: Span,
    ) -> ParseResult<Pair<'i, Rule>> {
        let pair = Self::next_significant(pairs)
            .ok_or_else(|| ParseError::missing(&format!("{expected:?}"), parent))?;
        if pair.as_rule() == expected {
            Ok(pair)
        } else {
            Err(ParseError::unexpected_rule(
                &format!("{expected:?}"),
                pair.as_rule(),
                Self::span_from_pair(&pair),
            ))
        }
    }

    /// Keywords are kept as tokens by the grammar but carry no information
    pub(crate) fn next_significant<'i>(pairs: &mut Pairs<'i, Rule>) -> Option<Pair<'i, Rule>> {
        pairs.find(|pair| !Self::is_keyword(pair.as_rule()))
    }

    fn is_keyword(rule: Rule) -> bool {
        matches!(
            rule,
            Rule::keyword
                | Rule::keyword_fun
                | Rule::keyword_var
                | Rule::keyword_while
                | Rule::keyword_if
                | Rule::keyword_else
                | Rule::keyword_return
                | Rule::keyword_println
        )
    }
}
