//! `scour check` - scan a file and print the quality report.

use std::path::PathBuf;

use colored::Colorize;

use scour::{validate, Parser, Result, ValidateConfig};

/// Run the check command. Returns the process exit code: 0 when the
/// data is clean, 1 when issues were found.
pub fn run(file: PathBuf, json: bool, exempt: Vec<String>, verbose: bool) -> Result<i32> {
    let parser = Parser::new();
    let (dataset, source) = parser.parse_file(&file)?;

    if verbose {
        eprintln!(
            "Parsed {} ({}): {} rows x {} columns",
            source.file, source.format, source.row_count, source.column_count
        );
    }

    let config = if exempt.is_empty() {
        ValidateConfig::default()
    } else {
        ValidateConfig::with_exempt_columns(exempt)
    };

    let report = validate(&dataset, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.issues_found() {
        println!("{}", "Data issues detected:".yellow().bold());
        for issue in &report.issues {
            println!("  - {}", issue);
        }
    } else {
        println!("{}", "No major issues found.".green());
    }

    Ok(if report.issues_found() { 1 } else { 0 })
}
