//! Command-line argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::cli::commands::tickets::TicketsCommands;

/// tix - list open tickets across repositories
#[derive(Parser, Debug)]
#[command(name = "tix", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Ticket store file (defaults to the config file, then the user data dir)
    #[arg(long, global = true, env = "TIX_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ticket commands
    #[command(subcommand)]
    Tickets(TicketsCommands),

    /// Start an interactive command shell
    Shell,

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// A single line typed into the interactive shell
#[derive(Parser, Debug)]
#[command(name = "tix", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommands,
}

/// Commands available inside the interactive shell
#[derive(Subcommand, Debug)]
pub enum ShellCommands {
    /// Ticket commands
    #[command(subcommand)]
    Tickets(TicketsCommands),
}
