use clap::Parser;
use miette::Result;
use tix::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TIX_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tickets(cmd) => tix::cli::commands::tickets::run(cmd, &cli.global),
        Commands::Shell => tix::cli::commands::shell::run(&cli.global),
        Commands::Completions { shell } => tix::cli::commands::completions::run(shell),
    }
}
