//! Shared column statistics: quantiles, median, IQR outlier fences.
//!
//! Both the validator and the corrector fence outliers with quartile
//! statistics; the computation lives here so the two components cannot
//! drift apart.

use serde::{Deserialize, Serialize};

/// Linear-interpolation quantile over a sorted slice.
///
/// For `n` values the `p`-quantile is interpolated between the two
/// order statistics nearest rank `(n - 1) * p`. Returns `None` for an
/// empty slice; `p` is clamped to `[0, 1]`.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let p = p.clamp(0.0, 1.0);
    let rank = (sorted.len() - 1) as f64 * p;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Median of a set of values. Returns `None` for empty input.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    quantile(&sorted, 0.5)
}

/// First and third quartiles of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Compute quartiles over a set of values. Returns `None` for empty
    /// input so callers short-circuit to "no outliers" instead of
    /// failing.
    pub fn of(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let q1 = quantile(&sorted, 0.25)?;
        let q3 = quantile(&sorted, 0.75)?;
        Some(Self { q1, q3 })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Lower and upper outlier fences at 1.5 * IQR.
    pub fn fences(&self) -> (f64, f64) {
        let iqr = self.iqr();
        (self.q1 - 1.5 * iqr, self.q3 + 1.5 * iqr)
    }

    /// Check a value against the fences. A degenerate column
    /// (IQR of zero) flags nothing.
    pub fn is_outlier(&self, value: f64) -> bool {
        if self.iqr() == 0.0 {
            return false;
        }
        let (lower, upper) = self.fences();
        value < lower || value > upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile(&sorted, 1.0), Some(4.0));
        assert_eq!(quantile(&sorted, 0.25), Some(1.75));
    }

    #[test]
    fn test_quantile_empty() {
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_quantile_clamps_p() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(quantile(&sorted, 1.5), Some(3.0));
        assert_eq!(quantile(&sorted, -0.5), Some(1.0));
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_quartiles_reference_column() {
        // 1..=5 plus an extreme value: Q1=2.25, Q3=4.75, upper fence 8.5.
        let q = Quartiles::of(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert!((q.q1 - 2.25).abs() < 1e-9);
        assert!((q.q3 - 4.75).abs() < 1e-9);
        assert!((q.iqr() - 2.5).abs() < 1e-9);
        assert!(q.is_outlier(100.0));
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            assert!(!q.is_outlier(v));
        }
    }

    #[test]
    fn test_degenerate_column_flags_nothing() {
        let q = Quartiles::of(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(q.iqr(), 0.0);
        assert!(!q.is_outlier(1_000_000.0));
    }

    #[test]
    fn test_quartiles_empty() {
        assert_eq!(Quartiles::of(&[]), None);
    }
}
