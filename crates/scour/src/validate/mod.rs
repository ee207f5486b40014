//! Read-only data quality assessment.

mod issue;
mod validator;

pub use issue::{Issue, ValidationReport};
pub use validator::{validate, ValidateConfig, DEFAULT_EXEMPT_COLUMNS};
