//! Subcommand implementations.

pub mod check;
pub mod fix;
