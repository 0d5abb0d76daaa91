//! Classifying raw cell text as typed by a user.

use gridcalc_engine::engine::{Cell, CellKind};

/// Decide whether raw cell text is a formula.
///
/// Leading spaces are skipped; text whose first remaining character is `=`
/// is a formula, everything else is a literal.
pub fn classify(text: &str) -> CellKind {
    if text.trim_start_matches(' ').starts_with('=') {
        CellKind::Formula
    } else {
        CellKind::Literal
    }
}

/// Build a cell from raw text, classifying it with [`classify`].
pub fn cell_from_input(text: &str) -> gridcalc_engine::engine::Result<Cell> {
    Cell::new(text, classify(text))
}
