//! Acceptance tests for the Fun interpreter
//!
//! Programs are run through the parser → interpreter pipeline with
//! `FunTestHarness`, which captures everything they print.

pub mod test_acceptance_statements;
pub mod test_call_stack;
pub mod test_statement_hook;
