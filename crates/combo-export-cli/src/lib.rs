//! Combo Export CLI
//!
//! Shared argument parsing, logging setup, and command implementations for the
//! `combo-export-csv` and `combo-export-json` binaries.

pub mod commands;

use clap::{Args, Parser};
use combo_export_core::export::{Pagination, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output file written by `combo-export-csv`
pub const DEFAULT_CSV_OUTPUT: &str = "export.csv";
/// Output file written by `combo-export-json`
pub const DEFAULT_JSON_OUTPUT: &str = "export.json";

/// Options shared by both binaries
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Dgraph gRPC endpoint (default: http://localhost:9080)
    #[arg(long, env = "COMBO_DGRAPH_URI")]
    pub endpoint: Option<String>,
}

/// Export every Combo node to CSV, one page at a time
#[derive(Parser, Debug)]
#[command(name = "combo-export-csv")]
#[command(version)]
pub struct CsvArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_CSV_OUTPUT)]
    pub output: PathBuf,

    /// Nodes fetched per query
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl CsvArgs {
    pub fn config(&self) -> ExportConfig {
        ExportConfig {
            endpoint: self.common.endpoint.clone(),
            output: self.output.clone(),
            pagination: Pagination::Offset {
                page_size: self.page_size,
            },
        }
    }
}

/// Export every Combo node to pretty-printed JSON in a single query
#[derive(Parser, Debug)]
#[command(name = "combo-export-json")]
#[command(version)]
pub struct JsonArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_JSON_OUTPUT)]
    pub output: PathBuf,
}

impl JsonArgs {
    pub fn config(&self) -> ExportConfig {
        ExportConfig {
            endpoint: self.common.endpoint.clone(),
            output: self.output.clone(),
            pagination: Pagination::Unpaginated,
        }
    }
}

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Dgraph endpoint (None = default)
    pub endpoint: Option<String>,
    /// File to write
    pub output: PathBuf,
    /// How nodes are fetched
    pub pagination: Pagination,
}

/// Initialize logging on stderr, leaving stdout for the result line
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_defaults() {
        let args = CsvArgs::try_parse_from(["combo-export-csv"]).unwrap();
        assert!(!args.common.verbose);
        assert_eq!(args.output, PathBuf::from("export.csv"));
        assert_eq!(args.page_size, 1000);
        assert_eq!(
            args.config().pagination,
            Pagination::Offset { page_size: 1000 }
        );
    }

    #[test]
    fn test_json_defaults() {
        let args = JsonArgs::try_parse_from(["combo-export-json"]).unwrap();
        let config = args.config();
        assert_eq!(config.output, PathBuf::from("export.json"));
        assert_eq!(config.pagination, Pagination::Unpaginated);
    }

    #[test]
    fn test_overrides() {
        let args = CsvArgs::try_parse_from([
            "combo-export-csv",
            "--endpoint",
            "http://dgraph:9080",
            "-o",
            "out.csv",
            "--page-size",
            "50",
            "-v",
        ])
        .unwrap();
        assert!(args.common.verbose);
        let config = args.config();
        assert_eq!(config.endpoint.as_deref(), Some("http://dgraph:9080"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.pagination, Pagination::Offset { page_size: 50 });
    }

    #[test]
    fn test_json_has_no_page_size() {
        assert!(JsonArgs::try_parse_from(["combo-export-json", "--page-size", "10"]).is_err());
    }
}
