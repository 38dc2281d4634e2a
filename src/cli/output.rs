//! Output formatting for ticket lists
//!
//! Two renderers: a bordered table and a tab-separated stream. Both are pure
//! functions from results to text; the caller writes the text in one go.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::helpers::format_date;
use crate::core::ticket::QueryResult;

/// How a ticket list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Tabbed,
}

impl OutputMode {
    pub fn from_flags(tabbed: bool) -> Self {
        if tabbed {
            OutputMode::Tabbed
        } else {
            OutputMode::Table
        }
    }

    /// Render `results` in this mode
    pub fn render(self, results: &[QueryResult], layout: ListLayout) -> String {
        match self {
            OutputMode::Table => render_table(results, layout),
            OutputMode::Tabbed => render_tabbed(results, layout),
        }
    }
}

/// Invocation details that shape the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListLayout {
    /// A single repository was requested
    pub for_repo: bool,
    pub verbose: bool,
}

/// Table headers with the matching row projection
pub struct ColumnSet {
    pub headers: &'static [&'static str],
    pub row: fn(&QueryResult) -> Vec<String>,
}

static ALL_REPOSITORIES: ColumnSet = ColumnSet {
    headers: &["Repository", "ID", "Title", "Status", "Last Modified"],
    row: repository_row,
};

static SINGLE_REPOSITORY: ColumnSet = ColumnSet {
    headers: &["ID", "Title", "Status", "Last Modified"],
    row: ticket_row,
};

fn repository_row(r: &QueryResult) -> Vec<String> {
    let mut row = vec![r.repository.clone()];
    row.extend(ticket_row(r));
    row
}

fn ticket_row(r: &QueryResult) -> Vec<String> {
    vec![
        r.number.to_string(),
        r.title.clone(),
        r.status.to_string(),
        format_date(&r.date()),
    ]
}

// Indexed by (for_repo, verbose). Verbose does not change the columns.
static COLUMN_SETS: [&ColumnSet; 4] = [
    &ALL_REPOSITORIES,  // (false, false)
    &ALL_REPOSITORIES,  // (false, true)
    &SINGLE_REPOSITORY, // (true, false)
    &SINGLE_REPOSITORY, // (true, true)
];

/// Column set for a layout
pub fn column_set(layout: ListLayout) -> &'static ColumnSet {
    COLUMN_SETS[usize::from(layout.for_repo) * 2 + usize::from(layout.verbose)]
}

/// Render a bordered table with a rule under the header
pub fn render_table(results: &[QueryResult], layout: ListLayout) -> String {
    let columns = column_set(layout);

    let mut builder = Builder::default();
    builder.push_record(columns.headers.iter().map(|h| h.to_string()));
    for result in results {
        builder.push_record((columns.row)(result));
    }

    let mut table = builder.build();
    table.with(Style::rounded().remove_vertical());
    format!("{}\n", table)
}

/// Render one tab-separated line per result, no header
///
/// Every field is emitted whatever the verbose flag says.
pub fn render_tabbed(results: &[QueryResult], _layout: ListLayout) -> String {
    let mut out = String::new();
    for r in results {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            r.repository,
            r.number,
            r.title,
            r.status,
            format_date(&r.date())
        ));
    }
    out
}
