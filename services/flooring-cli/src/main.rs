mod arguments;
mod console;
mod error;
mod menu;

use anyhow::Context;
use arguments::Arguments;
use clap::Parser;
use console::Console;
use menu::Menu;
use order_service::{FileProductCatalog, FileTaxTable, FlooringService};
use persistence::{FileOrderStore, StoreConfig};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    let args = Arguments::parse();

    // Logs go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting flooring order manager\n{}", args);

    let store = FileOrderStore::open(StoreConfig::new(&args.orders_dir))
        .with_context(|| format!("opening orders directory {}", args.orders_dir.display()))?;
    let service = FlooringService::new(
        store,
        FileProductCatalog::new(&args.products_file),
        FileTaxTable::new(&args.taxes_file),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    Menu::new(&service, console, args.export_file.clone()).run()?;

    tracing::info!("Session ended");
    Ok(())
}
