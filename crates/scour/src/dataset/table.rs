//! The rectangular dataset value the pipeline operates on.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScourError};

use super::cell::Cell;
use super::column::Column;

/// An ordered sequence of named columns with aligned rows.
///
/// Rectangularity (equal cell count in every column) is checked at
/// construction and preserved by every mutating method, so the rest of
/// the pipeline can index rows without re-validating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Create a dataset from columns, rejecting unequal column lengths.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            for col in &columns {
                if col.cells.len() != expected {
                    return Err(ScourError::MalformedDataset {
                        column: col.name.clone(),
                        expected,
                        actual: col.cells.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to all columns. Callers must keep the column
    /// lengths aligned.
    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The cells of one row, in column order.
    pub fn row(&self, index: usize) -> Vec<Cell> {
        self.columns
            .iter()
            .map(|c| c.cells[index].clone())
            .collect()
    }

    /// Keep only the rows whose mask entry is true, preserving order.
    ///
    /// The mask length must equal the row count.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.row_count());
        for col in &mut self.columns {
            let mut idx = 0;
            col.cells.retain(|_| {
                let kept = keep[idx];
                idx += 1;
                kept
            });
        }
    }
}
