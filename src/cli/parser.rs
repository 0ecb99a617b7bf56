use crate::export::ExportFormat;
use crate::models::status::EmploymentStatus;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dtrlogger
/// CLI application to rebuild daily time records from biometric dumps
#[derive(Parser)]
#[command(
    name = "dtrlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rebuild daily time records from raw biometric attendance logs using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Ingest a raw biometric dump (from a file or stdin)
    Ingest {
        /// Batch label shown in the upload history
        #[arg(long)]
        label: String,

        /// Read the raw log from a file instead of stdin
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// List ingested batches, newest first
    Batches {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Print the stored raw text of a batch, unmodified
    Raw {
        /// Batch id
        id: i64,
    },

    /// Re-run the current parser over a stored batch (nothing is persisted)
    Reprocess {
        /// Batch id
        id: i64,
    },

    /// Show the reconstructed month calendar for an employee
    Calendar {
        /// Employee name (canonicalized before lookup)
        employee: String,

        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(long, short)]
        year: Option<i32>,

        #[arg(long, value_enum, help = "Filter punches by employment status")]
        status: Option<EmploymentStatus>,
    },

    /// List employees with punches on file for a month
    Employees {
        #[arg(long, help = "Substring filter on the canonical name")]
        search: Option<String>,

        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(long, short)]
        year: Option<i32>,

        #[arg(long, value_enum)]
        status: Option<EmploymentStatus>,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export an employee's month calendar
    Export {
        /// Employee name (canonicalized before lookup)
        employee: String,

        #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        #[arg(long, short)]
        year: i32,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum)]
        status: Option<EmploymentStatus>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
