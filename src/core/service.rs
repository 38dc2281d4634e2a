//! Service seams - repository registry and ticket search
//!
//! The list command only talks to these traits. `TicketStore` implements
//! both; tests substitute in-memory fakes.

use thiserror::Error;

use crate::core::ticket::QueryResult;

/// A repository known to the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    name: String,
    id: u64,
}

impl RepositoryHandle {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier matched by `rid:` query terms
    pub fn internal_id(&self) -> u64 {
        self.id
    }
}

/// Resolves repository names
pub trait RepositoryRegistry {
    /// Look up a repository by name, `None` if it is unknown
    fn lookup(&self, name: &str) -> Option<RepositoryHandle>;
}

/// Field to order search results by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Updated,
    Number,
    Repository,
}

/// Explicit ordering requested by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub descending: bool,
}

/// Parameters of one search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Number of leading matches to skip
    pub offset: usize,
    /// Maximum matches to return, 0 for all of them
    pub limit: usize,
    /// `None` keeps the service's default ordering
    pub sort: Option<SortOrder>,
    pub include_closed: bool,
}

impl SearchRequest {
    /// Every match for `query`, closed tickets included, default ordering
    pub fn unbounded(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            offset: 0,
            limit: 0,
            sort: None,
            include_closed: true,
        }
    }
}

/// Errors raised by a ticket search
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid query at position {position}: {message}")]
    Syntax { position: usize, message: String },

    #[error("Unknown query field: {0}")]
    UnknownField(String),

    #[error("Ticket index unavailable: {0}")]
    Unavailable(String),
}

/// Runs queries against the ticket index
pub trait TicketService {
    /// Return the tickets matching `request`, in the requested order
    fn search(&self, request: &SearchRequest) -> Result<Vec<QueryResult>, SearchError>;
}
