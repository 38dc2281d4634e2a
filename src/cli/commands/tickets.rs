//! `tix tickets` command - Ticket queries
//!
//! `list` (alias `ls`) shows the tickets still awaiting work, for every
//! repository or for one.

use clap::Subcommand;
use miette::{Diagnostic, IntoDiagnostic, Result};
use std::io::Write;
use thiserror::Error;

use crate::cli::helpers::non_empty;
use crate::cli::output::{ListLayout, OutputMode};
use crate::cli::GlobalOpts;
use crate::core::query::active_tickets_query;
use crate::core::service::{RepositoryRegistry, SearchError, SearchRequest, TicketService};
use crate::core::store::{StoreError, TicketStore};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum TicketsCommands {
    /// List new and open tickets
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Tab-separated output, one ticket per line
    #[arg(long, short = 't')]
    pub tabbed: bool,

    /// Only list tickets of this repository
    #[arg(value_name = "REPOSITORY")]
    pub repository: Option<String>,
}

/// Errors from `tickets list`
#[derive(Debug, Error, Diagnostic)]
pub enum ListError {
    #[error("{0} not found!")]
    #[diagnostic(code(tix::tickets::repository_not_found))]
    RepositoryNotFound(String),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the tickets command
pub fn run(cmd: TicketsCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TicketsCommands::List(args) => {
            let store = open_store(global)?;

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_list(&args, &store, &store, &mut out)?;
            out.flush().into_diagnostic()
        }
    }
}

/// Load the ticket store selected by flags, environment and config
pub fn open_store(global: &GlobalOpts) -> Result<TicketStore> {
    let path = Config::load().store_path(global.store.as_deref());
    TicketStore::load(&path).map_err(|e| match e {
        StoreError::Missing(_) => miette::miette!(
            help = "pass --store <PATH> or set TIX_STORE",
            "{}",
            e
        ),
        other => miette::miette!("{}", other),
    })
}

/// Build the query string for an optional repository
///
/// Fails with `RepositoryNotFound` if the registry does not know the name.
pub fn resolve_query(
    registry: &dyn RepositoryRegistry,
    repository: Option<&str>,
) -> std::result::Result<String, ListError> {
    let repository_id = match non_empty(repository) {
        None => None,
        Some(name) => {
            let handle = registry
                .lookup(name)
                .ok_or_else(|| ListError::RepositoryNotFound(name.to_string()))?;
            Some(handle.internal_id())
        }
    };

    Ok(active_tickets_query(repository_id).build())
}

/// List tickets and write the rendered output to `out`
///
/// Nothing is written unless the search succeeds.
pub fn run_list(
    args: &ListArgs,
    registry: &dyn RepositoryRegistry,
    tickets: &dyn TicketService,
    out: &mut dyn Write,
) -> std::result::Result<(), ListError> {
    let repository = non_empty(args.repository.as_deref());
    let query = resolve_query(registry, repository)?;
    tracing::debug!(%query, "listing tickets");

    let results = tickets.search(&SearchRequest::unbounded(query))?;

    let layout = ListLayout {
        for_repo: repository.is_some(),
        verbose: args.verbose,
    };
    let rendered = OutputMode::from_flags(args.tabbed).render(&results, layout);
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
