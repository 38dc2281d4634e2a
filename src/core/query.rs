//! Query builder - composes boolean filter expressions for the ticket index
//!
//! Expressions are immutable values. Each combinator consumes the expression
//! and returns a new one, so a shared expression (such as the status clause)
//! is never mutated by a caller.

use std::fmt;
use std::sync::LazyLock;

use crate::core::ticket::Status;

/// Indexed ticket fields a predicate can match on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Ticket status name (e.g. `New`)
    Status,
    /// Internal repository identifier
    RepositoryId,
    /// Repository name
    Repository,
    /// Ticket number within its repository
    Number,
}

impl Field {
    /// Name of the field in serialized queries
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Status => "status",
            Field::RepositoryId => "rid",
            Field::Repository => "repository",
            Field::Number => "number",
        }
    }

    /// Build a predicate matching this field against `value` verbatim
    pub fn matches(self, value: impl ToString) -> Predicate {
        Predicate::Match {
            field: self,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Field::Status),
            "rid" => Ok(Field::RepositoryId),
            "repository" => Ok(Field::Repository),
            "number" => Ok(Field::Number),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

/// A single clause of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `field:value`
    Match { field: Field, value: String },
    /// A whole expression nested as one clause, serialized in parentheses
    Subquery(Box<QueryExpression>),
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Match { field, value } => write!(f, "{}:{}", field, value),
            Predicate::Subquery(expr) => write!(f, "({})", expr),
        }
    }
}

/// Boolean combinator joining a clause to the clauses before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

/// Left-associative boolean filter over ticket fields
///
/// Clauses are kept in insertion order. The combinator stored with the
/// first clause is never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryExpression {
    clauses: Vec<(Combinator, Predicate)>,
}

impl QueryExpression {
    /// Create an empty expression
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `predicate` with AND
    pub fn and(self, predicate: Predicate) -> Self {
        self.push(Combinator::And, predicate)
    }

    /// Append `predicate` with OR
    pub fn or(self, predicate: Predicate) -> Self {
        self.push(Combinator::Or, predicate)
    }

    fn push(mut self, combinator: Combinator, predicate: Predicate) -> Self {
        self.clauses.push((combinator, predicate));
        self
    }

    /// Wrap the whole expression so it can be nested in another one
    pub fn as_subquery(&self) -> Predicate {
        Predicate::Subquery(Box::new(self.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Clauses in insertion order
    pub fn clauses(&self) -> &[(Combinator, Predicate)] {
        &self.clauses
    }

    /// Serialize to the query string understood by the ticket index
    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QueryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (combinator, predicate)) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", combinator.as_str())?;
            }
            write!(f, "{}", predicate)?;
        }
        Ok(())
    }
}

/// Tickets still awaiting work: `status:New OR status:Open`
pub static ACTIVE_STATUS_CLAUSE: LazyLock<QueryExpression> = LazyLock::new(|| {
    QueryExpression::new()
        .and(Field::Status.matches(Status::New))
        .or(Field::Status.matches(Status::Open))
});

/// Build the list query, optionally scoped to one repository
///
/// With a repository id the result is `rid:<id> AND (<status clause>)`;
/// without one it is the status clause itself.
pub fn active_tickets_query(repository_id: Option<u64>) -> QueryExpression {
    match repository_id {
        None => ACTIVE_STATUS_CLAUSE.clone(),
        Some(id) => QueryExpression::new()
            .and(Field::RepositoryId.matches(id))
            .and(ACTIVE_STATUS_CLAUSE.as_subquery()),
    }
}
