//! Core module - query building, ticket model and the ticket store

pub mod config;
pub mod index;
pub mod query;
pub mod service;
pub mod store;
pub mod ticket;

pub use config::Config;
pub use index::{Document, Filter};
pub use query::{active_tickets_query, Field, Predicate, QueryExpression, ACTIVE_STATUS_CLAUSE};
pub use service::{
    RepositoryHandle, RepositoryRegistry, SearchError, SearchRequest, SortField, SortOrder,
    TicketService,
};
pub use store::{StoreError, TicketStore};
pub use ticket::{QueryResult, Status};
