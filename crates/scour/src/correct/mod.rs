//! Deterministic auto-correction pipeline.

mod corrector;
mod summary;

pub use corrector::{correct, CorrectConfig, Corrector, OutlierStrategy};
pub use summary::{Correction, CorrectionSummary};
