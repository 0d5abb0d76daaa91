//! Cell data structures for the spreadsheet grid.
//!
//! - [`CellKind`] - Whether a cell holds a literal or a formula
//! - [`Cell`] - An immutable cell; formulas are parsed once, on construction
//! - [`DerivedValue`] - The text a cell displays after evaluation

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::formula::Formula;

/// The kind of content stored in a cell, as classified by the input source.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[serde(alias = "primitive")]
    Literal,
    Formula,
}

/// A cell in the spreadsheet.
///
/// Cells are never edited in place; an edit replaces the whole cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub enum Cell {
    Literal(String),
    Formula(Formula),
}

impl Cell {
    pub fn literal(text: impl Into<String>) -> Cell {
        Cell::Literal(text.into())
    }

    /// Create a formula cell, parsing the formula text immediately.
    pub fn formula(text: &str) -> Result<Cell> {
        Formula::parse(text).map(Cell::Formula)
    }

    /// Create a cell from text that the caller has already classified.
    pub fn new(text: &str, kind: CellKind) -> Result<Cell> {
        match kind {
            CellKind::Literal => Ok(Cell::literal(text)),
            CellKind::Formula => Cell::formula(text),
        }
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Literal(_) => CellKind::Literal,
            Cell::Formula(_) => CellKind::Formula,
        }
    }

    /// The text the cell was created from.
    pub fn value(&self) -> &str {
        match self {
            Cell::Literal(text) => text,
            Cell::Formula(formula) => formula.source(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawCell {
    value: String,
    #[serde(alias = "type")]
    kind: CellKind,
}

impl TryFrom<RawCell> for Cell {
    type Error = EngineError;

    fn try_from(raw: RawCell) -> Result<Self> {
        Cell::new(&raw.value, raw.kind)
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        RawCell {
            kind: cell.kind(),
            value: match cell {
                Cell::Literal(text) => text,
                Cell::Formula(formula) => formula.source().to_string(),
            },
        }
    }
}

/// The display text of an evaluated cell.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct DerivedValue {
    pub output: String,
}

impl DerivedValue {
    pub fn new(output: impl Into<String>) -> DerivedValue {
        DerivedValue {
            output: output.into(),
        }
    }
}
