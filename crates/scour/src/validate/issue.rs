//! Issue types produced by the validator.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A data quality issue detected by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// One or more columns contain missing cells. Counts are keyed by
    /// column name in column order and only nonzero counts appear.
    MissingValues { counts: IndexMap<String, usize> },

    /// A non-exempt column holds text data where numbers were expected.
    NonNumericColumn { column: String },

    /// Numeric columns containing values beyond the IQR fences.
    OutlierColumns { columns: Vec<String> },
}

impl Issue {
    /// Human-readable description of the issue.
    pub fn message(&self) -> String {
        match self {
            Issue::MissingValues { counts } => {
                let parts: Vec<String> = counts
                    .iter()
                    .map(|(col, n)| format!("'{}': {}", col, n))
                    .collect();
                format!("Missing values detected: {{{}}}", parts.join(", "))
            }
            Issue::NonNumericColumn { column } => format!(
                "Column '{}' has non-numeric data that may affect calculations.",
                column
            ),
            Issue::OutlierColumns { columns } => {
                format!("Outliers detected in: {}", columns.join(", "))
            }
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Ordered collection of issues for one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Issues in report order: missing values first, then non-numeric
    /// columns in column order, then the combined outlier issue.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// True iff the scan found anything.
    pub fn issues_found(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Rendered messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(Issue::message).collect()
    }
}
