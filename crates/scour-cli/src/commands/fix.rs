//! `scour fix` - auto-correct a file and write the cleaned copy.

use std::fs::File;
use std::path::{Path, PathBuf};

use colored::Colorize;

use scour::{
    write_csv, CorrectConfig, Corrector, OutlierStrategy, Parser, Result, ScourError,
};

/// Run the fix command. Returns the process exit code (always 0 on
/// success).
pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    snapshot_outliers: bool,
    verbose: bool,
) -> Result<i32> {
    let parser = Parser::new();
    let (dataset, source) = parser.parse_file(&file)?;

    if verbose {
        eprintln!(
            "Parsed {} ({}): {} rows x {} columns",
            source.file, source.format, source.row_count, source.column_count
        );
    }

    let corrector = Corrector::with_config(CorrectConfig {
        outlier_strategy: if snapshot_outliers {
            OutlierStrategy::Snapshot
        } else {
            OutlierStrategy::Cascading
        },
    });
    let correction = corrector.run(&dataset)?;

    let output = output.unwrap_or_else(|| default_output_path(&file));
    let out_file = File::create(&output).map_err(|e| ScourError::Io {
        path: output.clone(),
        source: e,
    })?;
    write_csv(&correction.dataset, out_file)?;

    let summary = &correction.summary;
    println!(
        "{} {} -> {}",
        "Cleaned".green().bold(),
        file.display(),
        output.display()
    );
    println!("  duplicate rows removed: {}", summary.duplicate_rows_removed);
    println!("  columns coerced to numeric: {}", summary.columns_coerced);
    println!("  missing cells imputed: {}", summary.cells_imputed);
    println!("  outlier rows removed: {}", summary.outlier_rows_removed);
    println!(
        "  {} rows in, {} rows out",
        dataset.row_count(),
        correction.dataset.row_count()
    );

    Ok(0)
}

/// Default output path: `<stem>.clean.csv` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}.clean.csv", stem))
}
