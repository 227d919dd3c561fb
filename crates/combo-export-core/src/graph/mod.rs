//! Graph database operations using Dgraph
//!
//! Provides the session handle, query construction, and response decoding.

pub mod query;
pub mod session;

pub use query::{combo_query, decode_nodes};
pub use session::{GraphSession, DEFAULT_ENDPOINT};

use crate::{ComboRecord, PageRequest};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Database connection error: {0}")]
    Connection(String),
    #[error("Query execution error: {0}")]
    Query(String),
    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Something that can hand out `Combo` nodes, one page at a time
#[async_trait]
pub trait NodeSource: Send + Sync {
    /// Fetch the nodes in `page`, or every node when `page` is `None`
    async fn fetch(&self, page: Option<PageRequest>) -> GraphResult<Vec<ComboRecord>>;
}
