//! Read-only quality scan over a dataset.

use indexmap::IndexMap;

use crate::dataset::{ColumnKind, Dataset};
use crate::error::Result;
use crate::stats::Quartiles;

use super::issue::{Issue, ValidationReport};

/// Column names exempt from the non-numeric check by default:
/// identifier/category-style columns the caller usually intends to be
/// textual.
pub const DEFAULT_EXEMPT_COLUMNS: &[&str] = &["customer", "region", "product", "category"];

/// Validator configuration.
#[derive(Debug, Clone)]
pub struct ValidateConfig {
    /// Columns exempt from the non-numeric check, matched
    /// case-insensitively.
    pub exempt_columns: Vec<String>,
}

impl ValidateConfig {
    /// Configuration with an explicit exempt list.
    pub fn with_exempt_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exempt_columns: names.into_iter().map(Into::into).collect(),
        }
    }

    fn is_exempt(&self, column: &str) -> bool {
        self.exempt_columns
            .iter()
            .any(|e| e.eq_ignore_ascii_case(column))
    }
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self::with_exempt_columns(DEFAULT_EXEMPT_COLUMNS.iter().copied())
    }
}

/// Scan a dataset for missing values, non-numeric columns, and
/// statistical outliers.
///
/// Pure with respect to its input: the dataset is never mutated and
/// repeated calls return identical reports. The scan runs in a fixed
/// order so report order is stable: missing values, then one issue per
/// non-exempt textual column in column order, then a single combined
/// outlier issue.
pub fn validate(dataset: &Dataset, config: &ValidateConfig) -> Result<ValidationReport> {
    let mut issues = Vec::new();

    // Missing-value scan.
    let mut missing: IndexMap<String, usize> = IndexMap::new();
    for col in dataset.columns() {
        let count = col.missing_count();
        if count > 0 {
            missing.insert(col.name.clone(), count);
        }
    }
    if !missing.is_empty() {
        issues.push(Issue::MissingValues { counts: missing });
    }

    // Type-consistency scan, on the dataset as supplied (pre-coercion):
    // flags columns the caller has not yet recognized as categorical.
    for col in dataset.columns() {
        if col.kind() == ColumnKind::Textual && !config.is_exempt(&col.name) {
            issues.push(Issue::NonNumericColumn {
                column: col.name.clone(),
            });
        }
    }

    // Outlier scan over numeric columns.
    let mut outlier_columns = Vec::new();
    for col in dataset.columns() {
        if col.kind() != ColumnKind::Numeric {
            continue;
        }
        let values = col.numeric_values_checked()?;
        let Some(quartiles) = Quartiles::of(&values) else {
            continue;
        };
        if values.iter().any(|&v| quartiles.is_outlier(v)) {
            outlier_columns.push(col.name.clone());
        }
    }
    if !outlier_columns.is_empty() {
        issues.push(Issue::OutlierColumns {
            columns: outlier_columns,
        });
    }

    Ok(ValidationReport { issues })
}
