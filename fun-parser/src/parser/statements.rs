// Statement parsing module
// Handles blocks, variable definitions, assignments, println and return

use pest::iterators::Pair;

use crate::ast::*;
use crate::error::*;
use crate::parser::{FunParser, Rule};

impl FunParser {
    /// Parse a block of statements from a Pest pair
    pub(crate) fn parse_block(pair: Pair<Rule>, source: &str) -> ParseResult<Block> {
        let span = Self::span_from_pair(&pair);
        let statements = pair
            .into_inner()
            .map(|statement| Self::parse_statement(statement, source))
            .collect::<ParseResult<Vec<_>>>()?;

        Ok(Block { statements, span })
    }

    /// Parse a `{ ... }` block, which opens a scope when executed
    pub(crate) fn parse_scoped_block(pair: Pair<Rule>, source: &str) -> ParseResult<ScopedBlock> {
        let span = Self::span_from_pair(&pair);
        if pair.as_rule() != Rule::braced_block {
            return Err(ParseError::unexpected_rule("braced_block", pair.as_rule(), span));
        }
        let block_pair = Self::expect_rule(&mut pair.into_inner(), Rule::block, span)?;
        let block = Self::parse_block(block_pair, source)?;

        Ok(ScopedBlock { block, span })
    }

    pub(crate) fn parse_statement(pair: Pair<Rule>, source: &str) -> ParseResult<Statement> {
        let span = Self::span_from_pair(&pair);
        let kind = match pair.as_rule() {
            Rule::function_definition => {
                StatementKind::FunctionDefinition(Self::parse_function_definition(pair, source)?)
            }
            Rule::variable_definition => {
                StatementKind::VariableDefinition(Self::parse_variable_definition(pair, source)?)
            }
            Rule::variable_assignment => {
                StatementKind::VariableAssignment(Self::parse_variable_assignment(pair, source)?)
            }
            Rule::while_loop => StatementKind::WhileLoop(Self::parse_while_loop(pair, source)?),
            Rule::if_clause => StatementKind::IfClause(Self::parse_if_clause(pair, source)?),
            Rule::return_statement => {
                StatementKind::Return(Self::parse_return_statement(pair, source)?)
            }
            Rule::print_call => StatementKind::PrintCall(Self::parse_print_call(pair, source)?),
            Rule::braced_block => {
                StatementKind::ScopedBlock(Self::parse_scoped_block(pair, source)?)
            }
            Rule::expression => {
                StatementKind::Expression(Self::parse_expression_from_pair(pair, source)?)
            }
            other => return Err(ParseError::unexpected_rule("statement", other, span)),
        };

        Ok(Statement { kind, span })
    }

    fn parse_variable_definition(
        pair: Pair<Rule>,
        source: &str,
    ) -> ParseResult<VariableDefinition> {
        let span = Self::span_from_pair(&pair);
        let mut inner_pairs = pair.into_inner();

        let name = Self::parse_identifier(Self::expect_rule(
            &mut inner_pairs,
            Rule::identifier,
            span,
        )?);
        let initializer = Self::parse_expression_from_pair(
            Self::expect_rule(&mut inner_pairs, Rule::expression, span)?,
            source,
        )?;

        Ok(VariableDefinition {
            name,
            initializer,
            span,
        })
    }

    fn parse_variable_assignment(
        pair: Pair<Rule>,
        source: &str,
    ) -> ParseResult<VariableAssignment> {
        let span = Self::span_from_pair(&pair);
        let mut inner_pairs = pair.into_inner();

        let name = Self::parse_identifier(Self::expect_rule(
            &mut inner_pairs,
            Rule::identifier,
            span,
        )?);
        let value = Self::parse_expression_from_pair(
            Self::expect_rule(&mut inner_pairs, Rule::expression, span)?,
            source,
        )?;

        Ok(VariableAssignment { name, value, span })
    }

    fn parse_print_call(pair: Pair<Rule>, source: &str) -> ParseResult<PrintCall> {
        let span = Self::span_from_pair(&pair);
        let arguments = match Self::next_significant(&mut pair.into_inner()) {
            Some(arguments_pair) => Self::parse_argument_list(arguments_pair, source)?,
            None => Vec::new(),
        };

        Ok(PrintCall { arguments, span })
    }

    fn parse_return_statement(pair: Pair<Rule>, source: &str) -> ParseResult<ReturnStatement> {
        let span = Self::span_from_pair(&pair);
        let value = Self::parse_expression_from_pair(
            Self::expect_rule(&mut pair.into_inner(), Rule::expression, span)?,
            source,
        )?;

        Ok(ReturnStatement { value, span })
    }
}
