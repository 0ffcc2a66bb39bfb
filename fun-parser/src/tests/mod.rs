//! Unit tests for the Fun parser

mod test_control_flow;
mod test_diagnostics;
mod test_source_reconstruction;
