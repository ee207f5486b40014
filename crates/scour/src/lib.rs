//! Scour: data quality assessment and auto-correction for tabular datasets.
//!
//! Scour profiles an in-memory dataset for defects (missing values, type
//! inconsistency, statistical outliers) and, on request, deterministically
//! repairs it (deduplication, type coercion, median imputation, outlier
//! removal).
//!
//! # Core Principles
//!
//! - **Read-only assessment**: [`validate`] never mutates its input
//! - **Deterministic repair**: [`correct`] is a pure function of the dataset
//! - **Explicit data flow**: every call takes and returns an explicit
//!   dataset value; the pipeline holds no state across invocations
//!
//! # Example
//!
//! ```no_run
//! use scour::{correct, validate, Parser, ValidateConfig};
//!
//! let parser = Parser::new();
//! let (dataset, _source) = parser.parse_file("sales.csv").unwrap();
//!
//! let report = validate(&dataset, &ValidateConfig::default()).unwrap();
//! for issue in &report.issues {
//!     println!("- {}", issue);
//! }
//!
//! if report.issues_found() {
//!     let cleaned = correct(&dataset).unwrap();
//!     println!("{} rows after correction", cleaned.row_count());
//! }
//! ```

pub mod correct;
pub mod dataset;
pub mod error;
pub mod input;
pub mod stats;
pub mod validate;

pub use correct::{correct, CorrectConfig, Correction, CorrectionSummary, Corrector, OutlierStrategy};
pub use dataset::{Cell, Column, ColumnKind, Dataset};
pub use error::{Result, ScourError};
pub use input::{write_csv, Parser, ParserConfig, SourceMetadata};
pub use stats::{median, quantile, Quartiles};
pub use validate::{validate, Issue, ValidateConfig, ValidationReport};
