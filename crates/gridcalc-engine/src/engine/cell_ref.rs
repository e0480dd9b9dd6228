//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell references
//! (e.g., "A1", "B2", "G9") and zero-indexed row/column coordinates.
//!
//! Two parsers live here:
//! - [`CellRef::parse_reference`] is the strict formula parser: exactly one
//!   column letter and one digit, checked against the grid bounds.
//! - [`CellRef::from_str`] accepts any A1 shape and is used by hosts to
//!   address cells; callers check bounds with [`super::Grid::contains`].
//!
//! # Examples
//!
//! ```ignore
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.row, 2);  // 0-indexed
//! assert_eq!(cell.col, 1);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::cell::{NUM_COLS, NUM_ROWS};
use super::error::{FormulaError, InvalidFormulaReason};

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from spreadsheet notation (e.g., "A1", "b2", "AA10").
    /// Returns None if the input is invalid. Bounds are not checked.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        Self::parse_a1(name)
    }

    fn parse_a1(name: &str) -> Option<CellRef> {
        let caps = a1_re().captures(name)?;
        let letters = &caps["letters"];
        let numbers = &caps["numbers"];

        let mut col_acc = 0usize;
        for c in letters.to_ascii_uppercase().bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc.checked_mul(26)?.checked_add(digit)?;
        }
        let col = col_acc.checked_sub(1)?;

        let row = numbers.parse::<usize>().ok()?.checked_sub(1)?;

        Some(CellRef::new(row, col))
    }

    /// Parse a reference token as it appears inside a formula.
    ///
    /// The token must be exactly a column letter followed by a single digit
    /// `1`..=`9`. Anything else shaped differently is an
    /// [`FormulaError::InvalidReference`]; a well-shaped token that lands
    /// outside the grid is an out-of-range [`FormulaError::InvalidFormula`].
    pub fn parse_reference(token: &str) -> Result<CellRef, FormulaError> {
        let &[letter, digit] = token.as_bytes() else {
            return Err(FormulaError::InvalidReference(token.to_string()));
        };
        if !letter.is_ascii_alphabetic() || !digit.is_ascii_digit() {
            return Err(FormulaError::InvalidReference(token.to_string()));
        }

        let col = (letter.to_ascii_uppercase() - b'A') as usize;
        let row_number = (digit - b'0') as usize;
        if col >= NUM_COLS || row_number == 0 || row_number > NUM_ROWS {
            return Err(FormulaError::InvalidFormula(InvalidFormulaReason::OutOfRange(
                token.to_string(),
            )));
        }

        Ok(CellRef::new(row_number - 1, col))
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

fn a1_re() -> &'static Regex {
    static A1_RE: OnceLock<Regex> = OnceLock::new();
    A1_RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Za-z]+)(?<numbers>[0-9]+)$")
            .expect("A1 cell reference regex must compile")
    })
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;
    use crate::engine::{FormulaError, InvalidFormulaReason};

    #[test]
    fn test_parse_reference_valid() {
        assert_eq!(CellRef::parse_reference("A1").unwrap(), CellRef::new(0, 0));
        assert_eq!(CellRef::parse_reference("g9").unwrap(), CellRef::new(8, 6));
        assert_eq!(CellRef::parse_reference("c4").unwrap(), CellRef::new(3, 2));
    }

    #[test]
    fn test_parse_reference_bad_shape() {
        for token in ["", "A", "A10", "AA1", "1A", "A-", "hello", "é1"] {
            assert!(
                matches!(
                    CellRef::parse_reference(token),
                    Err(FormulaError::InvalidReference(_))
                ),
                "{token:?} should be an invalid reference"
            );
        }
    }

    #[test]
    fn test_parse_reference_out_of_range() {
        for token in ["H1", "z5", "A0"] {
            assert!(
                matches!(
                    CellRef::parse_reference(token),
                    Err(FormulaError::InvalidFormula(InvalidFormulaReason::OutOfRange(_)))
                ),
                "{token:?} should be out of range"
            );
        }
    }

    #[test]
    fn test_from_str_accepts_any_a1_shape() {
        assert_eq!(CellRef::from_str("A10"), Some(CellRef::new(9, 0)));
        assert_eq!(CellRef::from_str("aa1"), Some(CellRef::new(0, 26)));
        assert!(CellRef::from_str("A0").is_none());
        assert!(CellRef::from_str("A 1").is_none());
    }

    #[test]
    fn test_display_round_trips() {
        let cell = CellRef::new(2, 1);
        assert_eq!(cell.to_string(), "B3");
        assert_eq!(CellRef::from_str(&cell.to_string()), Some(cell));
    }

    #[test]
    fn test_parse_a1_overflow_returns_none() {
        let huge = format!("{}1", "Z".repeat(40));
        assert!(CellRef::from_str(&huge).is_none());
    }
}
