//! In-memory tabular data model.

mod cell;
mod column;
mod table;

pub use cell::{is_missing_marker, Cell};
pub use column::{Column, ColumnKind};
pub use table::Dataset;
