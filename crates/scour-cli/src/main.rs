//! Scour CLI - data quality assessment and auto-correction.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file, json, exempt } => commands::check::run(file, json, exempt, cli.verbose),

        Commands::Fix {
            file,
            output,
            snapshot_outliers,
        } => commands::fix::run(file, output, snapshot_outliers, cli.verbose),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
