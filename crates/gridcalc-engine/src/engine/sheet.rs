//! The sheet model: address text mapped to cells.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cell::{Cell, CellKind};
use super::cell_ref::CellRef;
use super::error::Result;

/// Bounding dimensions of a sheet.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub rows: usize,
    pub cols: usize,
}

/// A snapshot of every cell in a sheet, keyed by address text ("a1", "b2").
///
/// Keys are not validated on insert; a malformed key surfaces as an error
/// when the sheet is rendered. Keys are kept sorted, so the first bad key
/// reported does not depend on insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    cells: BTreeMap<String, Cell>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from `(address, text, kind)` triples.
    pub fn from_entries<I, A, T>(entries: I) -> Result<Sheet>
    where
        I: IntoIterator<Item = (A, T, CellKind)>,
        A: Into<String>,
        T: AsRef<str>,
    {
        let mut sheet = Sheet::new();
        for (address, text, kind) in entries {
            sheet.insert(address, Cell::new(text.as_ref(), kind)?);
        }
        Ok(sheet)
    }

    /// Insert a cell, returning the cell it replaced.
    pub fn insert(&mut self, address: impl Into<String>, cell: Cell) -> Option<Cell> {
        self.cells.insert(address.into(), cell)
    }

    pub fn get(&self, address: &str) -> Option<&Cell> {
        self.cells.get(address)
    }

    pub fn get_ref(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.cells.get(&cell_ref.to_string())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Derive the bounding dimensions from the addresses present.
    ///
    /// Rows span up to the highest row index, columns up to the highest
    /// column letter. Fails on the first key that is not a valid address.
    pub fn dimension(&self) -> Result<Dimension> {
        let mut dim = Dimension::default();
        for key in self.cells.keys() {
            let cell_ref = CellRef::parse(key)?;
            dim.rows = dim.rows.max(cell_ref.row() + 1);
            dim.cols = dim.cols.max(cell_ref.col() + 1);
        }
        Ok(dim)
    }
}

impl FromIterator<(String, Cell)> for Sheet {
    fn from_iter<I: IntoIterator<Item = (String, Cell)>>(iter: I) -> Self {
        Sheet {
            cells: iter.into_iter().collect(),
        }
    }
}
