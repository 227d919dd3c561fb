//! combo-export-json - export every Combo node from Dgraph to JSON

use clap::Parser;
use combo_export_cli::{commands, init_logging, JsonArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = JsonArgs::parse();
    init_logging(args.common.verbose);

    commands::json::run(&args.config()).await
}
