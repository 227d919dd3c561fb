//! combo-export-csv - export every Combo node from Dgraph to CSV

use clap::Parser;
use combo_export_cli::{commands, init_logging, CsvArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CsvArgs::parse();
    init_logging(args.common.verbose);

    commands::csv::run(&args.config()).await
}
