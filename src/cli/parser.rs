use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for prodwatch
/// Read-only production line monitor
#[derive(Parser)]
#[command(
    name = "prodwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Read-only production monitor: run progress, pallets, shift schedules, alerts and JSON/CSV export",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple lines)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Read production data from a JSON dataset instead of the built-in sample
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, edit, check or migrate)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,
    },

    /// Show live production runs with progress, pallets, schedule and alerts
    Status {
        /// Only runs scheduled on this shift (A-F)
        #[arg(long, short)]
        shift: Option<String>,

        /// Override the low-pallet alert threshold from the configuration
        #[arg(long)]
        threshold: Option<u32>,
    },

    /// List archived production, optionally filtered
    History {
        #[command(flatten)]
        filter: HistoryFilterArgs,
    },

    /// Export production (or history) data as JSON or CSV
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Export the history archive instead of live production
        #[arg(long)]
        history: bool,

        /// Shift used in the file name (default: A)
        #[arg(long = "for-shift", value_name = "SHIFT", default_value = "A")]
        for_shift: String,

        /// Date used in the file name, YYYY-MM-DD (default: today)
        #[arg(long = "for-date", value_name = "DATE")]
        for_date: Option<String>,

        #[command(flatten)]
        filter: HistoryFilterArgs,

        /// Output directory (default: export_dir from the configuration)
        #[arg(long, value_name = "DIR", conflicts_with = "file")]
        dir: Option<String>,

        /// Output file path, replaces the generated file name
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// History filters. Empty values mean "any".
#[derive(clap::Args, Debug, Clone, Default)]
pub struct HistoryFilterArgs {
    /// Exact date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Shift symbol (A-F)
    #[arg(long)]
    pub shift: Option<String>,

    /// Exact product name
    #[arg(long)]
    pub product: Option<String>,

    /// Weight in grams (e.g. 180 or 180g)
    #[arg(long)]
    pub weight: Option<String>,
}
