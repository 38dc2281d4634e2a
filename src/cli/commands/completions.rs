//! `tix completions` command - Shell completion scripts

use clap::CommandFactory;
use clap_complete::Shell;
use miette::Result;
use std::io::Write;

use crate::cli::Cli;

/// Print the completion script for `shell`
pub fn run(shell: Shell) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_completions(shell, &mut out);
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}
