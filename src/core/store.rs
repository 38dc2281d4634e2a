//! Ticket store - YAML-backed repository registry and ticket index
//!
//! The whole file is read into memory. Searches parse the query string and
//! filter, order and page the stored tickets.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::index::{Document, Filter};
use crate::core::query::Field;
use crate::core::service::{
    RepositoryHandle, RepositoryRegistry, SearchError, SearchRequest, SortField, SortOrder,
    TicketService,
};
use crate::core::ticket::{QueryResult, Status};

/// A repository entry in the store file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryEntry {
    pub name: String,
    pub id: u64,
}

/// A ticket entry in the store file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TicketEntry {
    pub repository: String,
    pub number: u64,
    pub title: String,
    pub status: Status,
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl TicketEntry {
    fn to_result(&self) -> QueryResult {
        QueryResult {
            repository: self.repository.clone(),
            number: self.number,
            title: self.title.clone(),
            status: self.status,
            created: self.created,
            updated: self.updated,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Ticket store not found: {0}")]
    Missing(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Duplicate ticket {repository}#{number}")]
    DuplicateTicket { repository: String, number: u64 },
}

/// In-memory copy of a ticket store file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TicketStore {
    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,
    #[serde(default)]
    pub tickets: Vec<TicketEntry>,
}

impl TicketStore {
    /// Load and validate a store file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::Missing(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_yaml(&content).map_err(|e| match e {
            StoreError::Parse { message, .. } => StoreError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            repositories = store.repositories.len(),
            tickets = store.tickets.len(),
            "loaded ticket store"
        );
        Ok(store)
    }

    /// Parse store content
    pub fn from_yaml(content: &str) -> Result<Self, StoreError> {
        // An empty document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let store: Self = serde_yml::from_str(content).map_err(|e| StoreError::Parse {
            path: PathBuf::new(),
            message: e.to_string(),
        })?;
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for ticket in &self.tickets {
            if !seen.insert((ticket.repository.to_lowercase(), ticket.number)) {
                return Err(StoreError::DuplicateTicket {
                    repository: ticket.repository.clone(),
                    number: ticket.number,
                });
            }
        }
        Ok(())
    }

    fn repository(&self, name: &str) -> Option<&RepositoryEntry> {
        self.repositories
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Repository ids keyed by lower-cased name, first entry wins
    fn repository_ids(&self) -> HashMap<String, u64> {
        let mut ids = HashMap::with_capacity(self.repositories.len());
        for repo in &self.repositories {
            ids.entry(repo.name.to_ascii_lowercase()).or_insert(repo.id);
        }
        ids
    }
}

impl RepositoryRegistry for TicketStore {
    fn lookup(&self, name: &str) -> Option<RepositoryHandle> {
        self.repository(name)
            .map(|r| RepositoryHandle::new(r.name.clone(), r.id))
    }
}

/// A stored ticket as seen by the query evaluator
struct IndexedTicket<'a> {
    ticket: &'a TicketEntry,
    rid: Option<u64>,
}

impl Document for IndexedTicket<'_> {
    fn value(&self, field: Field) -> Option<String> {
        match field {
            Field::Status => Some(self.ticket.status.to_string()),
            Field::RepositoryId => self.rid.map(|id| id.to_string()),
            Field::Repository => Some(self.ticket.repository.clone()),
            Field::Number => Some(self.ticket.number.to_string()),
        }
    }
}

impl TicketService for TicketStore {
    fn search(&self, request: &SearchRequest) -> Result<Vec<QueryResult>, SearchError> {
        let filter = Filter::parse(&request.query)?;
        let ids = self.repository_ids();

        let mut results: Vec<QueryResult> = self
            .tickets
            .iter()
            .filter(|ticket| request.include_closed || !ticket.status.is_closed())
            .filter(|ticket| {
                let doc = IndexedTicket {
                    ticket: *ticket,
                    rid: ids.get(&ticket.repository.to_ascii_lowercase()).copied(),
                };
                filter.matches(&doc)
            })
            .map(TicketEntry::to_result)
            .collect();

        match request.sort {
            Some(order) => results.sort_by(|a, b| compare(a, b, order)),
            None => results.sort_by(default_order),
        }

        let total = results.len();
        let results: Vec<QueryResult> = results
            .into_iter()
            .skip(request.offset)
            .take(if request.limit == 0 {
                usize::MAX
            } else {
                request.limit
            })
            .collect();

        tracing::debug!(
            query = %request.query,
            matched = total,
            returned = results.len(),
            "ticket search"
        );
        Ok(results)
    }
}

/// Most recently modified first, then repository and number
fn default_order(a: &QueryResult, b: &QueryResult) -> Ordering {
    b.date()
        .cmp(&a.date())
        .then_with(|| a.repository.cmp(&b.repository))
        .then_with(|| a.number.cmp(&b.number))
}

fn compare(a: &QueryResult, b: &QueryResult, order: SortOrder) -> Ordering {
    let ordering = match order.field {
        SortField::Updated => a.date().cmp(&b.date()),
        SortField::Number => a.number.cmp(&b.number),
        SortField::Repository => a.repository.cmp(&b.repository),
    };
    if order.descending {
        ordering.reverse()
    } else {
        ordering
    }
}
