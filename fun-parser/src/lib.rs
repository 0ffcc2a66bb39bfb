// Fun Parser Library
// Pest-based parser for the Fun scripting language

pub mod ast;
pub mod error;
pub mod parser;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;

pub use ast::*;
pub use error::*;
pub use parser::FunParser;

// Re-export parser rule for manual testing
pub use parser::Rule;

// Main parsing functions
pub fn parse_program(input: &str) -> Result<Program, ParseError> {
    parser::FunParser::parse_program(input)
}

pub fn parse_expression(input: &str) -> Result<Expression, ParseError> {
    parser::FunParser::parse_expression(input)
}

// Version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
