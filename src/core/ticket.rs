//! Ticket types - status values and search result records

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Ticket workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Status {
    New,
    Open,
    Resolved,
    Fixed,
    Merged,
    Wontfix,
    Declined,
    Duplicate,
    Invalid,
    Abandoned,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "No Change Required")]
    NoChangeRequired,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[
            Status::New,
            Status::Open,
            Status::Resolved,
            Status::Fixed,
            Status::Merged,
            Status::Wontfix,
            Status::Declined,
            Status::Duplicate,
            Status::Invalid,
            Status::Abandoned,
            Status::OnHold,
            Status::NoChangeRequired,
        ]
    }

    /// Canonical display name, also the value matched by `status:` terms
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Open => "Open",
            Status::Resolved => "Resolved",
            Status::Fixed => "Fixed",
            Status::Merged => "Merged",
            Status::Wontfix => "Wontfix",
            Status::Declined => "Declined",
            Status::Duplicate => "Duplicate",
            Status::Invalid => "Invalid",
            Status::Abandoned => "Abandoned",
            Status::OnHold => "On Hold",
            Status::NoChangeRequired => "No Change Required",
        }
    }

    /// Closed tickets need no further work
    pub fn is_closed(&self) -> bool {
        !matches!(self, Status::New | Status::Open | Status::OnHold)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::all()
            .iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown ticket status: {}", s))
    }
}

/// Read-only projection of a ticket returned by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Repository name
    pub repository: String,
    /// Ticket number within the repository
    pub number: u64,
    pub title: String,
    pub status: Status,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

impl QueryResult {
    /// Last-modified timestamp: the update time, or creation time if never updated
    pub fn date(&self) -> DateTime<Utc> {
        self.updated.unwrap_or(self.created)
    }
}
