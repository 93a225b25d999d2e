use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// Command line arguments for the order manager.
#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "flooring", about = "Manage flooring installation orders")]
pub struct Arguments {
    /// Directory holding one order file per order date.
    #[clap(long, env = "FLOORING_ORDERS_DIR", default_value = "data/orders")]
    pub orders_dir: PathBuf,

    /// Products reference table.
    #[clap(long, env = "FLOORING_PRODUCTS_FILE", default_value = "data/Products.txt")]
    pub products_file: PathBuf,

    /// State tax reference table.
    #[clap(long, env = "FLOORING_TAXES_FILE", default_value = "data/Taxes.txt")]
    pub taxes_file: PathBuf,

    /// Destination of "Export All Data".
    #[clap(
        long,
        env = "FLOORING_EXPORT_FILE",
        default_value = "data/backup/DataExport.txt"
    )]
    pub export_file: PathBuf,

    /// Log filter used when RUST_LOG is not set.
    #[clap(long, env = "FLOORING_LOG", default_value = "warn")]
    pub log_filter: String,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            orders_dir,
            products_file,
            taxes_file,
            export_file,
            log_filter,
        } = self;

        writeln!(f, "orders_dir: {}", orders_dir.display())?;
        writeln!(f, "products_file: {}", products_file.display())?;
        writeln!(f, "taxes_file: {}", taxes_file.display())?;
        writeln!(f, "export_file: {}", export_file.display())?;
        writeln!(f, "log_filter: {}", log_filter)
    }
}
