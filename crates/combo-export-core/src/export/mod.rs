//! Export orchestration
//!
//! Drains `Combo` nodes from a [`NodeSource`] into a [`RecordSink`].

pub mod csv;
pub mod json;

pub use self::csv::CsvSink;
pub use self::json::JsonSink;

use crate::graph::{GraphError, NodeSource};
use crate::{ComboRecord, PageRequest};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Number of nodes fetched per page by the paginated export
pub const DEFAULT_PAGE_SIZE: usize = 1000;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Page size must be at least 1")]
    InvalidPageSize,
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// How nodes are pulled from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// One query returning every node
    Unpaginated,
    /// `first`/`offset` windows, advanced until a page comes back empty
    Offset { page_size: usize },
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::Offset {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Destination for exported records
pub trait RecordSink {
    /// Accept a batch of records, in order. Returns the number written.
    fn write_batch(&mut self, records: &[ComboRecord]) -> ExportResult<usize>;

    /// Write anything still buffered. Called once, after the last batch.
    fn finish(&mut self) -> ExportResult<()>;
}

/// Statistics from an export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Records handed to the sink
    pub records: usize,
    /// Queries issued against the source, including the terminating empty page
    pub queries: usize,
    pub duration: Duration,
}

impl std::fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Export Statistics:")?;
        writeln!(f, "  Records:  {}", self.records)?;
        writeln!(f, "  Queries:  {}", self.queries)?;
        writeln!(f, "  Duration: {:.2?}", self.duration)?;
        Ok(())
    }
}

/// Drain every `Combo` node from `source` into `sink`
///
/// Any fetch or write error aborts the export; nothing is retried and
/// whatever the sink already wrote stays where it is.
pub async fn export<S, K>(
    source: &S,
    pagination: Pagination,
    sink: &mut K,
) -> ExportResult<ExportSummary>
where
    S: NodeSource + ?Sized,
    K: RecordSink + ?Sized,
{
    let start = Instant::now();
    let mut summary = ExportSummary::default();

    match pagination {
        Pagination::Unpaginated => {
            let nodes = source.fetch(None).await?;
            summary.queries += 1;
            summary.records += sink.write_batch(&nodes)?;
        }
        Pagination::Offset { page_size } => {
            if page_size == 0 {
                return Err(ExportError::InvalidPageSize);
            }

            let mut page = PageRequest::new(page_size, 0);
            loop {
                let nodes = source.fetch(Some(page)).await?;
                summary.queries += 1;

                if nodes.is_empty() {
                    debug!("Empty page at offset {}, export drained", page.offset);
                    break;
                }

                summary.records += sink.write_batch(&nodes)?;
                page = page.next();
            }
        }
    }

    sink.finish()?;
    summary.duration = start.elapsed();

    info!(
        "Exported {} records in {} queries ({:.2?})",
        summary.records, summary.queries, summary.duration
    );

    Ok(summary)
}
