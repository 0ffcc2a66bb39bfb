// Control flow parsing module
// Handles while loops and if clauses

use pest::iterators::Pair;

use crate::ast::*;
use crate::error::*;
use crate::parser::{FunParser, Rule};

impl FunParser {
    /// Parse a while loop from a Pest pair
    pub(crate) fn parse_while_loop(pair: Pair<Rule>, source: &str) -> ParseResult<WhileLoop> {
        let span = Self::span_from_pair(&pair);
        let mut inner_pairs = pair.into_inner();

        // The "while" keyword is skipped by expect_rule
        let condition = Self::parse_expression_from_pair(
            Self::expect_rule(&mut inner_pairs, Rule::expression, span)?,
            source,
        )?;
        let body = Self::parse_scoped_block(
            Self::expect_rule(&mut inner_pairs, Rule::braced_block, span)?,
            source,
        )?;

        Ok(WhileLoop {
            condition,
            body,
            span,
        })
    }

    /// Parse an if clause with its optional else branch
    pub(crate) fn parse_if_clause(pair: Pair<Rule>, source: &str) -> ParseResult<IfClause> {
        let span = Self::span_from_pair(&pair);
        let mut inner_pairs = pair.into_inner();

        let condition = Self::parse_expression_from_pair(
            Self::expect_rule(&mut inner_pairs, Rule::expression, span)?,
            source,
        )?;
        let then_body = Self::parse_scoped_block(
            Self::expect_rule(&mut inner_pairs, Rule::braced_block, span)?,
            source,
        )?;

        // "else" is a keyword token, so the next significant pair is the else block
        let else_body = match Self::next_significant(&mut inner_pairs) {
            Some(else_pair) => Some(Self::parse_scoped_block(else_pair, source)?),
            None => None,
        };

        Ok(IfClause {
            condition,
            then_body,
            else_body,
            span,
        })
    }
}
