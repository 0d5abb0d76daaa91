//! Spreadsheet engine API.
//!
//! This module provides the evaluation pipeline for the spreadsheet:
//!
//! - [`CellRef`] - Cell reference parsing ("b2" ↔ row/col indices)
//! - [`Cell`], [`CellKind`], [`Sheet`] - The immutable sheet model
//! - [`Formula`], [`parse_formula`] - `=OP(ref, ...)` parsing
//! - [`DependencyGraph`] - Edges from each cell to the cells that read it
//! - [`evaluate_graph`] - Kahn-order evaluation with cycle detection
//! - [`evaluate`] - SUM / MUL / AVG over computed inputs
//! - [`render`] - Sheet in, rectangular grid of display values out

mod cell;
mod cell_ref;
mod deps;
mod error;
mod eval;
mod format;
mod formula;
mod render;
mod sheet;
mod topo;

pub use cell::{Cell, CellKind, DerivedValue};
pub use cell_ref::{CellRef, MAX_COLS};
pub use deps::DependencyGraph;
pub use error::{EngineError, Result};
pub use eval::{ArithmeticError, evaluate, parse_input};
pub use format::{Rounding, format_mean};
pub use formula::{Formula, Operator, parse_formula};
pub use render::{
    RenderOptions, RenderedCell, render, render_cells, render_entries, render_outputs, render_with,
};
pub use sheet::{Dimension, Sheet};
pub use topo::evaluate_graph;
