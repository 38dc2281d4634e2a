//! `tix shell` command - Interactive command shell
//!
//! Reads command lines with history and dispatches them through the same
//! argument definitions as the command line, minus the binary name.

use clap::{CommandFactory, Parser};
use console::style;
use miette::{IntoDiagnostic, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{ShellCommands, ShellLine};
use crate::cli::commands::tickets::{open_store, run_list, TicketsCommands};
use crate::cli::GlobalOpts;
use crate::core::config::data_dir;

const PROMPT: &str = "tix> ";

/// What the shell should do after a line
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

fn history_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("history"))
}

/// Run the interactive shell until exit or end of input
pub fn run(global: &GlobalOpts) -> Result<()> {
    let mut rl = DefaultEditor::new().into_diagnostic()?;

    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::debug!(
                    path = %parent.display(),
                    error = %e,
                    "cannot create history directory"
                );
            }
        }
        if let Err(e) = rl.load_history(&path) {
            tracing::debug!(path = %path.display(), error = %e, "no shell history loaded");
        }
    }

    println!(
        "{} interactive shell. Type {} for commands, {} to leave.",
        style("tix").bold(),
        style("help").cyan(),
        style("exit").cyan()
    );

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line) {
                    tracing::debug!(error = %e, "history entry not recorded");
                }

                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                let flow = execute_line(line, global, &mut out);
                let _ = out.flush();
                if flow == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(interrupted)");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("error: {}", err);
                break;
            }
        }
    }

    if let Some(path) = history_path() {
        if let Err(e) = rl.save_history(&path) {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "failed to save shell history"
            );
        }
    }

    Ok(())
}

/// Execute one shell line, reporting errors on stderr
///
/// Words are split with shell quoting rules, so `"my repo"` is one argument.
fn execute_line(line: &str, global: &GlobalOpts, out: &mut dyn Write) -> Flow {
    let Some(words) = shlex::split(line) else {
        eprintln!("error: unbalanced quotes");
        return Flow::Continue;
    };
    let words: Vec<&str> = words.iter().map(String::as_str).collect();

    match words.as_slice() {
        ["exit"] | ["quit"] => return Flow::Exit,
        ["help"] => {
            let _ = writeln!(out, "{}", ShellLine::command_help());
            return Flow::Continue;
        }
        _ => {}
    }

    let parsed = match ShellLine::try_parse_from(words.iter().copied()) {
        Ok(parsed) => parsed,
        Err(e) => {
            // Covers --help output as well as real parse errors
            let _ = e.print();
            return Flow::Continue;
        }
    };

    let result = match parsed.command {
        ShellCommands::Tickets(TicketsCommands::List(args)) => open_store(global)
            .and_then(|store| run_list(&args, &store, &store, out).map_err(Into::into)),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
    }

    Flow::Continue
}

impl ShellLine {
    fn command_help() -> String {
        let mut cmd = ShellLine::command();
        cmd.render_help().to_string()
    }
}
