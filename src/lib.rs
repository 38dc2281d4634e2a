//! tix: ticket listing shell
//!
//! Lists the new and open tickets of one or all repositories, either from
//! the command line or from an interactive shell, as a table or as
//! tab-separated lines.

pub mod cli;
pub mod core;
