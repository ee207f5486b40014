//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scour: data quality assessment and auto-correction for tabular data
#[derive(Parser)]
#[command(name = "scour")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a data file and report quality issues
    Check {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Column names exempt from the non-numeric check
        /// (replaces the default identifier/category allow-list)
        #[arg(long, value_name = "COLUMN")]
        exempt: Vec<String>,
    },

    /// Auto-correct a data file and write the cleaned copy
    Fix {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the cleaned file (default: <stem>.clean.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compute all outlier row-sets against one fixed snapshot and
        /// union-remove them, instead of cascading column by column
        #[arg(long)]
        snapshot_outliers: bool,
    },
}
