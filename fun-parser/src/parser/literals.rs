// Literal parsing functions for the Fun parser
// Handles integer literals and identifiers

use pest::iterators::Pair;

use super::{FunParser, Rule};
use crate::ast::*;
use crate::error::*;

impl FunParser {
    /// Parse an integer literal from a Pest pair
    pub(super) fn parse_integer(pair: Pair<Rule>, source: &str) -> ParseResult<IntegerLiteral> {
        let span = Self::span_from_pair(&pair);
        let text = pair.as_str();
        let value = text
            .parse::<i32>()
            .map_err(|_| ParseError::invalid_integer(source.to_string(), span, text.to_string()))?;

        Ok(IntegerLiteral { value, span })
    }

    /// Parse an identifier from a Pest pair
    pub(super) fn parse_identifier(pair: Pair<Rule>) -> Identifier {
        Identifier {
            name: pair.as_str().to_string(),
            span: Self::span_from_pair(&pair),
        }
    }
}
