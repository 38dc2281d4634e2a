//! CLI command implementations

pub mod completions;
pub mod shell;
pub mod tickets;
