//! Dataset ingestion and egress for the surrounding application.

mod parser;
mod source;

pub use parser::{write_csv, Parser, ParserConfig};
pub use source::SourceMetadata;
