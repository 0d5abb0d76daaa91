//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell references
//! (e.g., "a1", "b2", "z100") and zero-indexed row/column coordinates.
//!
//! Columns are a single lowercase letter, so the sheet is at most 26 columns
//! wide. Multi-letter columns ("aa1") are rejected rather than guessed at.
//!
//! # Examples
//!
//! ```
//! use gridcalc_engine::engine::CellRef;
//!
//! let cell = CellRef::parse("b3").unwrap();
//! assert_eq!(cell.col(), 1); // 0-indexed
//! assert_eq!(cell.row(), 2);
//! assert_eq!(cell.to_string(), "b3");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{EngineError, Result};

/// Number of addressable columns (`a` through `z`).
pub const MAX_COLS: usize = 26;

/// A reference to a cell by row and column indices (0-indexed).
///
/// The column is always below [`MAX_COLS`], so every `CellRef` has a textual
/// form and `parse(r.to_string()) == r`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellRef {
    row: usize,
    col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Result<CellRef> {
        if col >= MAX_COLS {
            return Err(EngineError::MalformedReference {
                text: format!("(row {}, col {})", row, col),
                reason: "column is outside a-z",
            });
        }
        if row == usize::MAX {
            return Err(EngineError::MalformedReference {
                text: format!("(row {}, col {})", row, col),
                reason: "row number does not fit",
            });
        }
        Ok(CellRef { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Parse a cell reference from spreadsheet notation (e.g., "a1", "b2", "z10").
    pub fn parse(text: &str) -> Result<CellRef> {
        let malformed = |reason| EngineError::MalformedReference {
            text: text.to_string(),
            reason,
        };

        let letters_end = text
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(text.len());
        let (letters, digits) = text.split_at(letters_end);

        if letters.is_empty() {
            return Err(malformed("expected a column letter"));
        }
        if digits.is_empty() {
            return Err(malformed("expected a row number"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("row must contain only digits"));
        }
        if letters.len() > 1 {
            return Err(malformed("only single-letter columns a-z are supported"));
        }
        let letter = letters.as_bytes()[0];
        if !letter.is_ascii_lowercase() {
            return Err(malformed("column letter must be lowercase"));
        }
        if digits.starts_with('0') {
            return Err(malformed("row numbers start at 1 without leading zeros"));
        }

        let row = digits
            .parse::<usize>()
            .map_err(|_| malformed("row number does not fit"))?
            - 1;
        CellRef::new(row, (letter - b'a') as usize).map_err(|_| malformed("row number does not fit"))
    }

    /// Convert a column index to its letter (0 -> a, 25 -> z).
    pub fn col_to_letter(col: usize) -> Option<char> {
        (col < MAX_COLS).then(|| (b'a' + col as u8) as char)
    }

    /// Row-major index inside a rectangle `cols` wide.
    pub(crate) fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

impl std::str::FromStr for CellRef {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        CellRef::parse(s)
    }
}

impl TryFrom<String> for CellRef {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self> {
        CellRef::parse(&value)
    }
}

impl From<CellRef> for String {
    fn from(value: CellRef) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}
