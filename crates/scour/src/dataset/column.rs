//! Named columns and kind classification.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScourError};

use super::cell::Cell;

/// Derived classification of a column's contents.
///
/// Never stored on the column: cell contents change across pipeline
/// stages (coercion in particular), so the kind is recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-missing cell carries a numeric value.
    Numeric,
    /// At least one non-missing cell is text.
    Textual,
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Cell values, one per row.
    pub cells: Vec<Cell>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Classify the column from its current cell contents.
    ///
    /// A column with no non-missing cells classifies as `Numeric`
    /// (vacuously: every non-missing cell is numeric); statistics over
    /// such a column short-circuit to "no data" downstream.
    pub fn kind(&self) -> ColumnKind {
        let textual = self
            .cells
            .iter()
            .any(|c| !c.is_missing() && !c.is_numeric());
        if textual {
            ColumnKind::Textual
        } else {
            ColumnKind::Numeric
        }
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }

    /// Collect the non-missing numeric values in row order.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.cells.iter().filter_map(|c| c.as_number()).collect()
    }

    /// Collect the non-missing numeric values, rejecting any value that
    /// cannot participate in a total order.
    ///
    /// `Cell::from_raw` and `Cell::coerce_numeric` never admit NaN, so
    /// this only fires for datasets assembled directly from cells.
    pub fn numeric_values_checked(&self) -> Result<Vec<f64>> {
        let mut values = Vec::new();
        for (row, cell) in self.cells.iter().enumerate() {
            if let Some(v) = cell.as_number() {
                if v.is_nan() {
                    return Err(ScourError::UnclassifiableValue {
                        column: self.name.clone(),
                        row,
                    });
                }
                values.push(v);
            }
        }
        Ok(values)
    }
}
