//! Summary of the changes a correction pass made.

use serde::{Deserialize, Serialize};

/// Counts of the changes applied by one correction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionSummary {
    /// Exact-duplicate rows dropped in stage 1.
    pub duplicate_rows_removed: usize,
    /// Textual columns reinterpreted as numeric in stage 2.
    pub columns_coerced: usize,
    /// Missing cells filled with the column median in stage 3.
    pub cells_imputed: usize,
    /// Rows dropped as outliers in stage 4.
    pub outlier_rows_removed: usize,
}

impl CorrectionSummary {
    /// True iff the pass changed nothing.
    pub fn is_noop(&self) -> bool {
        self.duplicate_rows_removed == 0
            && self.columns_coerced == 0
            && self.cells_imputed == 0
            && self.outlier_rows_removed == 0
    }
}

/// A corrected dataset together with what changed.
#[derive(Debug, Clone)]
pub struct Correction {
    /// The cleaned dataset.
    pub dataset: crate::dataset::Dataset,
    /// Per-stage change counts.
    pub summary: CorrectionSummary,
}
