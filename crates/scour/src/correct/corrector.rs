//! Destructive four-stage repair pipeline.

use std::collections::HashSet;

use crate::dataset::{Cell, ColumnKind, Dataset};
use crate::error::Result;
use crate::stats::{median, Quartiles};

use super::summary::{Correction, CorrectionSummary};

/// How stage 4 computes outlier row-sets across numeric columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutlierStrategy {
    /// Process columns in order; each column's fences are computed over
    /// the rows that survived removal for earlier columns. Later
    /// columns therefore see shifted thresholds. This matches the
    /// original cascading behavior.
    #[default]
    Cascading,
    /// Compute every column's outlier row-set against the single
    /// post-imputation snapshot, then union-remove. Order-independent.
    Snapshot,
}

/// Corrector configuration.
#[derive(Debug, Clone, Default)]
pub struct CorrectConfig {
    /// Stage-4 outlier removal strategy.
    pub outlier_strategy: OutlierStrategy,
}

/// Applies the four-stage repair pipeline: deduplication, all-or-nothing
/// type coercion, median imputation, and IQR outlier removal.
#[derive(Debug, Clone, Default)]
pub struct Corrector {
    config: CorrectConfig,
}

impl Corrector {
    /// Corrector with the default (cascading) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Corrector with explicit configuration.
    pub fn with_config(config: CorrectConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline, returning the cleaned dataset and a summary of
    /// what changed. The input is never modified.
    pub fn run(&self, dataset: &Dataset) -> Result<Correction> {
        let mut dataset = dataset.clone();
        let mut summary = CorrectionSummary::default();

        self.deduplicate(&mut dataset, &mut summary);
        self.coerce_columns(&mut dataset, &mut summary);
        self.impute_missing(&mut dataset, &mut summary)?;
        self.remove_outliers(&mut dataset, &mut summary)?;

        Ok(Correction { dataset, summary })
    }

    /// Stage 1: drop rows that exactly duplicate an earlier row, keeping
    /// the first occurrence and the relative order of the rest.
    fn deduplicate(&self, dataset: &mut Dataset, summary: &mut CorrectionSummary) {
        let row_count = dataset.row_count();
        let mut seen: HashSet<Vec<Cell>> = HashSet::with_capacity(row_count);
        let mut keep = Vec::with_capacity(row_count);
        for idx in 0..row_count {
            keep.push(seen.insert(dataset.row(idx)));
        }
        let removed = keep.iter().filter(|&&k| !k).count();
        if removed > 0 {
            dataset.retain_rows(&keep);
            summary.duplicate_rows_removed = removed;
        }
    }

    /// Stage 2: reinterpret textual columns as numeric, all-or-nothing
    /// per column. A single unparseable non-missing cell leaves the
    /// whole column untouched.
    fn coerce_columns(&self, dataset: &mut Dataset, summary: &mut CorrectionSummary) {
        for col in dataset.columns_mut() {
            if col.kind() != ColumnKind::Textual {
                continue;
            }
            let coerced: Option<Vec<Cell>> =
                col.cells.iter().map(Cell::coerce_numeric).collect();
            if let Some(cells) = coerced {
                col.cells = cells;
                summary.columns_coerced += 1;
            }
        }
    }

    /// Stage 3: fill missing cells in numeric columns with the column
    /// median, computed after coercion. A column with no non-missing
    /// values has no median and is left as-is.
    fn impute_missing(
        &self,
        dataset: &mut Dataset,
        summary: &mut CorrectionSummary,
    ) -> Result<()> {
        for col in dataset.columns_mut() {
            if col.kind() != ColumnKind::Numeric {
                continue;
            }
            let values = col.numeric_values_checked()?;
            let Some(med) = median(&values) else {
                continue;
            };
            for cell in &mut col.cells {
                if cell.is_missing() {
                    *cell = Cell::Float(med);
                    summary.cells_imputed += 1;
                }
            }
        }
        Ok(())
    }

    /// Stage 4: remove rows holding outlier values in numeric columns,
    /// with quartiles computed on the post-imputation data.
    fn remove_outliers(
        &self,
        dataset: &mut Dataset,
        summary: &mut CorrectionSummary,
    ) -> Result<()> {
        match self.config.outlier_strategy {
            OutlierStrategy::Cascading => self.remove_outliers_cascading(dataset, summary),
            OutlierStrategy::Snapshot => self.remove_outliers_snapshot(dataset, summary),
        }
    }

    /// Columns are processed in column order; each removal shrinks the
    /// row population the next column's quartiles are computed over.
    fn remove_outliers_cascading(
        &self,
        dataset: &mut Dataset,
        summary: &mut CorrectionSummary,
    ) -> Result<()> {
        for col_idx in 0..dataset.column_count() {
            let col = &dataset.columns()[col_idx];
            if col.kind() != ColumnKind::Numeric {
                continue;
            }
            let values = col.numeric_values_checked()?;
            let Some(quartiles) = Quartiles::of(&values) else {
                continue;
            };
            let keep: Vec<bool> = col
                .cells
                .iter()
                .map(|cell| match cell.as_number() {
                    Some(v) => !quartiles.is_outlier(v),
                    None => true,
                })
                .collect();
            let removed = keep.iter().filter(|&&k| !k).count();
            if removed > 0 {
                dataset.retain_rows(&keep);
                summary.outlier_rows_removed += removed;
            }
        }
        Ok(())
    }

    /// Every column's outlier row-set is computed against the same
    /// post-imputation snapshot; the union is removed in one pass.
    fn remove_outliers_snapshot(
        &self,
        dataset: &mut Dataset,
        summary: &mut CorrectionSummary,
    ) -> Result<()> {
        let row_count = dataset.row_count();
        let mut keep = vec![true; row_count];
        for col in dataset.columns() {
            if col.kind() != ColumnKind::Numeric {
                continue;
            }
            let values = col.numeric_values_checked()?;
            let Some(quartiles) = Quartiles::of(&values) else {
                continue;
            };
            for (idx, cell) in col.cells.iter().enumerate() {
                if let Some(v) = cell.as_number() {
                    if quartiles.is_outlier(v) {
                        keep[idx] = false;
                    }
                }
            }
        }
        let removed = keep.iter().filter(|&&k| !k).count();
        if removed > 0 {
            dataset.retain_rows(&keep);
            summary.outlier_rows_removed = removed;
        }
        Ok(())
    }
}

/// Clean a dataset with the default configuration.
///
/// Convenience wrapper over [`Corrector::run`] for callers that do not
/// need the change summary.
pub fn correct(dataset: &Dataset) -> Result<Dataset> {
    Ok(Corrector::new().run(dataset)?.dataset)
}
