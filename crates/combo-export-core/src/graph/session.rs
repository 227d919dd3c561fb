//! Dgraph session handle

use super::{combo_query, decode_nodes, GraphError, GraphResult, NodeSource};
use crate::{ComboRecord, PageRequest};
use async_trait::async_trait;
use dgraph_tonic::{Client, Query};
use tracing::{debug, info};

/// Dgraph gRPC endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9080";

/// Cheapest query the server will answer; used to surface an unreachable endpoint at connect time
const PROBE_QUERY: &str = "{ probe(func: uid(0x1)) { uid } }";

/// Single long-lived session to a Dgraph cluster
pub struct GraphSession {
    client: Client,
}

impl GraphSession {
    /// Connect to Dgraph and verify the endpoint answers
    pub async fn connect(endpoint: Option<&str>) -> GraphResult<Self> {
        let endpoint = endpoint.unwrap_or(DEFAULT_ENDPOINT);

        let client = Client::new(vec![endpoint]).map_err(|e| GraphError::Connection(e.to_string()))?;

        // The gRPC channel is lazy, so nothing has touched the network yet
        client
            .new_read_only_txn()
            .query(PROBE_QUERY)
            .await
            .map_err(|e| GraphError::Connection(format!("{}: {}", endpoint, e)))?;

        info!("Connected to Dgraph at {}", endpoint);

        Ok(Self { client })
    }

    /// Run a query in a fresh read-only transaction and return the raw JSON payload
    pub async fn run_query(&self, query: &str) -> GraphResult<Vec<u8>> {
        let mut txn = self.client.new_read_only_txn();
        let response = txn
            .query(query)
            .await
            .map_err(|e| GraphError::Query(e.to_string()))?;

        Ok(response.json)
    }
}

#[async_trait]
impl NodeSource for GraphSession {
    async fn fetch(&self, page: Option<PageRequest>) -> GraphResult<Vec<ComboRecord>> {
        let query = combo_query(page);
        let json = self.run_query(&query).await?;
        let nodes = decode_nodes(&json)?;

        match page {
            Some(page) => debug!("Fetched {} nodes ({})", nodes.len(), page),
            None => debug!("Fetched {} nodes", nodes.len()),
        }

        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_fails_when_unreachable() {
        // Port 1 is reserved and nothing listens there in a test environment
        let result = GraphSession::connect(Some("http://127.0.0.1:1")).await;
        assert!(matches!(result, Err(GraphError::Connection(_))));
    }
}
