//! CSV export command implementation

use crate::ExportConfig;
use anyhow::Context;
use combo_export_core::export::{export, CsvSink};
use combo_export_core::graph::GraphSession;
use tracing::debug;

pub async fn run(config: &ExportConfig) -> anyhow::Result<()> {
    // Connect before touching the output file so an unreachable server leaves nothing behind
    let session = GraphSession::connect(config.endpoint.as_deref())
        .await
        .context("Failed to connect to Dgraph")?;

    let mut sink = CsvSink::create(&config.output)
        .with_context(|| format!("Failed to create {}", config.output.display()))?;

    let summary = export(&session, config.pagination, &mut sink)
        .await
        .context("Failed to export nodes")?;
    debug!("{}", summary);

    println!("Data exported to {}", config.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use combo_export_core::export::Pagination;

    #[tokio::test]
    async fn test_unreachable_server_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            endpoint: Some("http://127.0.0.1:1".to_string()),
            output: dir.path().join("export.csv"),
            pagination: Pagination::Offset { page_size: 10 },
        };

        let err = run(&config).await.unwrap_err();
        assert!(err.to_string().contains("Failed to connect"));
        assert!(!config.output.exists());
    }
}
