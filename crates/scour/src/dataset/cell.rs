//! Cell values and raw-text interpretation.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single cell in a dataset column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Absent value, distinct from zero or the empty string.
    Missing,
    /// Whole number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Text value.
    Text(String),
}

impl Cell {
    /// Interpret a raw text field, recognizing missing-value markers and
    /// numeric literals.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_missing_marker(trimmed) {
            return Cell::Missing;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Cell::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Cell::Float(f);
            }
        }
        Cell::Text(raw.to_string())
    }

    /// Returns true for the absent-value marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Returns true for `Int` and `Float` cells.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }

    /// The numeric value of this cell, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempt to reinterpret this cell as a numeric cell.
    ///
    /// `Missing` and already-numeric cells succeed unchanged; a `Text`
    /// cell succeeds only if it parses as a finite number. Returns `None`
    /// on failure so the caller can make an explicit column-level
    /// decision instead of silently keeping the old value.
    pub fn coerce_numeric(&self) -> Option<Cell> {
        match self {
            Cell::Missing | Cell::Int(_) | Cell::Float(_) => Some(self.clone()),
            Cell::Text(s) => {
                let trimmed = s.trim();
                if let Ok(i) = trimmed.parse::<i64>() {
                    return Some(Cell::Int(i));
                }
                match trimmed.parse::<f64>() {
                    Ok(f) if f.is_finite() => Some(Cell::Float(f)),
                    _ => None,
                }
            }
        }
    }

    /// Render the cell for delimited-text output. Missing cells become
    /// empty fields.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_field())
    }
}

// Float cells never hold NaN (from_raw and coerce_numeric only admit
// finite values), so bitwise equality is a sound Eq.
impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Cell::Missing => 0u8.hash(state),
            Cell::Int(i) => {
                1u8.hash(state);
                i.hash(state);
            }
            Cell::Float(f) => {
                2u8.hash(state);
                f.to_bits().hash(state);
            }
            Cell::Text(s) => {
                3u8.hash(state);
                s.hash(state);
            }
        }
    }
}

/// Check if a raw field represents a missing/null value.
pub fn is_missing_marker(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
        || trimmed == "."
        || trimmed == "-"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_missing_markers() {
        assert_eq!(Cell::from_raw(""), Cell::Missing);
        assert_eq!(Cell::from_raw("NA"), Cell::Missing);
        assert_eq!(Cell::from_raw("n/a"), Cell::Missing);
        assert_eq!(Cell::from_raw("NULL"), Cell::Missing);
        assert_eq!(Cell::from_raw("."), Cell::Missing);
        assert_eq!(Cell::from_raw("-"), Cell::Missing);
    }

    #[test]
    fn test_from_raw_numbers() {
        assert_eq!(Cell::from_raw("42"), Cell::Int(42));
        assert_eq!(Cell::from_raw("-7"), Cell::Int(-7));
        assert_eq!(Cell::from_raw("3.5"), Cell::Float(3.5));
        assert_eq!(Cell::from_raw(" 10 "), Cell::Int(10));
    }

    #[test]
    fn test_from_raw_text() {
        assert_eq!(Cell::from_raw("hello"), Cell::Text("hello".to_string()));
        // Non-finite parses stay textual so quantiles stay total-ordered.
        assert_eq!(Cell::from_raw("inf"), Cell::Text("inf".to_string()));
        assert_eq!(Cell::from_raw("NaN"), Cell::Text("NaN".to_string()));
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(
            Cell::Text("12".to_string()).coerce_numeric(),
            Some(Cell::Int(12))
        );
        assert_eq!(
            Cell::Text("1.25".to_string()).coerce_numeric(),
            Some(Cell::Float(1.25))
        );
        assert_eq!(Cell::Text("x".to_string()).coerce_numeric(), None);
        assert_eq!(Cell::Missing.coerce_numeric(), Some(Cell::Missing));
        assert_eq!(Cell::Int(3).coerce_numeric(), Some(Cell::Int(3)));
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Cell::Int(4).as_number(), Some(4.0));
        assert_eq!(Cell::Float(2.5).as_number(), Some(2.5));
        assert_eq!(Cell::Missing.as_number(), None);
        assert_eq!(Cell::Text("4".to_string()).as_number(), None);
    }
}
