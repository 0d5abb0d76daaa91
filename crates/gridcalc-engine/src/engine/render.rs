//! Grid rendering: the single entry point front-ends call.

use serde::{Deserialize, Serialize};

use super::cell::{CellKind, DerivedValue};
use super::cell_ref::CellRef;
use super::deps::DependencyGraph;
use super::error::Result;
use super::format::Rounding;
use super::sheet::Sheet;
use super::topo::evaluate_graph;

/// Options for a render pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub rounding: Rounding,
}

/// What a front-end shows for one cell: where it is, what was typed, and
/// what it evaluates to.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RenderedCell {
    pub address: CellRef,
    pub input: String,
    pub display: DerivedValue,
}

/// Evaluate `sheet` and return its values indexed `[row][col]`.
pub fn render(sheet: &Sheet) -> Result<Vec<Vec<DerivedValue>>> {
    render_with(sheet, &RenderOptions::default())
}

pub fn render_with(sheet: &Sheet, options: &RenderOptions) -> Result<Vec<Vec<DerivedValue>>> {
    let dim = sheet.dimension()?;
    let _span = tracing::debug_span!("render", rows = dim.rows, cols = dim.cols).entered();

    let graph = DependencyGraph::build(sheet, dim)?;
    let values = evaluate_graph(graph, options.rounding)?;

    let mut values = values.into_iter();
    Ok((0..dim.rows)
        .map(|_| values.by_ref().take(dim.cols).collect())
        .collect())
}

/// Like [`render_with`], but pairs each value with its address and input text.
pub fn render_cells(sheet: &Sheet, options: &RenderOptions) -> Result<Vec<Vec<RenderedCell>>> {
    let grid = render_with(sheet, options)?;
    let mut rendered = Vec::with_capacity(grid.len());
    for (row, values) in grid.into_iter().enumerate() {
        let mut cells = Vec::with_capacity(values.len());
        for (col, display) in values.into_iter().enumerate() {
            let address = CellRef::new(row, col)?;
            let input = sheet
                .get_ref(&address)
                .map(|cell| cell.value().to_string())
                .unwrap_or_default();
            cells.push(RenderedCell {
                address,
                input,
                display,
            });
        }
        rendered.push(cells);
    }
    Ok(rendered)
}

/// Render straight to display strings.
pub fn render_outputs(sheet: &Sheet, options: &RenderOptions) -> Result<Vec<Vec<String>>> {
    Ok(render_with(sheet, options)?
        .into_iter()
        .map(|row| row.into_iter().map(|value| value.output).collect())
        .collect())
}

/// Build a sheet from classified `(address, text, kind)` entries and render it,
/// so construction and evaluation errors come out of one call.
pub fn render_entries<I, A, T>(entries: I, options: &RenderOptions) -> Result<Vec<Vec<String>>>
where
    I: IntoIterator<Item = (A, T, CellKind)>,
    A: Into<String>,
    T: AsRef<str>,
{
    let sheet = Sheet::from_entries(entries)?;
    render_outputs(&sheet, options)
}
