//! Dependency graph construction.
//!
//! Every cell in the sheet rectangle becomes a node, indexed row-major. An edge
//! runs from a dependency to each formula cell that reads it, once per
//! argument, so `SUM(a1, a1)` contributes two edges and an in-degree of two.

use super::cell::Cell;
use super::cell_ref::CellRef;
use super::error::{EngineError, Result};
use super::sheet::{Dimension, Sheet};

/// The dependency graph of one render pass.
///
/// Borrowed from an immutable [`Sheet`] and discarded once the pass ends.
#[derive(Debug)]
pub struct DependencyGraph<'a> {
    pub(crate) dim: Dimension,
    /// Cells in row-major order.
    pub(crate) cells: Vec<&'a Cell>,
    /// For each node, the nodes it reads, in argument order.
    pub(crate) depends_on: Vec<Vec<usize>>,
    /// For each node, the nodes that read it.
    pub(crate) dependents: Vec<Vec<usize>>,
    pub(crate) in_degree: Vec<usize>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph for the rectangle `[0, rows) x [0, cols)`.
    ///
    /// Fails with `MissingCell` if the rectangle has a hole or a formula points
    /// outside it, and with `MalformedReference` for unparsable arguments.
    pub fn build(sheet: &'a Sheet, dim: Dimension) -> Result<Self> {
        // The scan stops at the first hole, so it never runs past sheet.len() + 1
        // addresses even when the derived rectangle is huge.
        let mut cells = Vec::with_capacity(sheet.len());
        for row in 0..dim.rows {
            for col in 0..dim.cols {
                let cell_ref = CellRef::new(row, col)?;
                let cell = sheet.get_ref(&cell_ref).ok_or_else(|| EngineError::MissingCell {
                    address: cell_ref.to_string(),
                    referenced_by: None,
                })?;
                cells.push(cell);
            }
        }

        let mut depends_on = vec![Vec::new(); cells.len()];
        let mut dependents = vec![Vec::new(); cells.len()];
        let mut in_degree = vec![0usize; cells.len()];
        let mut edges = 0usize;

        for (index, cell) in cells.iter().enumerate() {
            let Cell::Formula(formula) = cell else {
                continue;
            };
            let cell_ref = node_ref(index, dim)?;

            for arg in formula.args() {
                let dep = CellRef::parse(arg)?;
                if dep.row() >= dim.rows || dep.col() >= dim.cols {
                    return Err(EngineError::MissingCell {
                        address: dep.to_string(),
                        referenced_by: Some(cell_ref),
                    });
                }
                let dep_index = dep.index(dim.cols);
                depends_on[index].push(dep_index);
                dependents[dep_index].push(index);
                in_degree[index] += 1;
                edges += 1;
            }
        }

        tracing::debug!(rows = dim.rows, cols = dim.cols, edges, "built dependency graph");

        Ok(DependencyGraph {
            dim,
            cells,
            depends_on,
            dependents,
            in_degree,
        })
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Number of nodes (cells in the rectangle).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Dependencies of `cell_ref`, in argument order.
    pub fn dependencies(&self, cell_ref: &CellRef) -> Vec<CellRef> {
        self.neighbours(&self.depends_on, cell_ref)
    }

    /// Cells that read `cell_ref`.
    pub fn dependents(&self, cell_ref: &CellRef) -> Vec<CellRef> {
        self.neighbours(&self.dependents, cell_ref)
    }

    pub fn in_degree(&self, cell_ref: &CellRef) -> usize {
        self.node(cell_ref).map_or(0, |index| self.in_degree[index])
    }

    pub(crate) fn node_ref(&self, index: usize) -> Result<CellRef> {
        node_ref(index, self.dim)
    }

    fn node(&self, cell_ref: &CellRef) -> Option<usize> {
        (cell_ref.row() < self.dim.rows && cell_ref.col() < self.dim.cols)
            .then(|| cell_ref.index(self.dim.cols))
    }

    fn neighbours(&self, adjacency: &[Vec<usize>], cell_ref: &CellRef) -> Vec<CellRef> {
        self.node(cell_ref)
            .map(|index| {
                adjacency[index]
                    .iter()
                    .filter_map(|&n| self.node_ref(n).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn node_ref(index: usize, dim: Dimension) -> Result<CellRef> {
    CellRef::new(index / dim.cols, index % dim.cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CellKind;

    fn r(text: &str) -> CellRef {
        CellRef::parse(text).unwrap()
    }

    fn sheet(entries: &[(&str, &str)]) -> Sheet {
        Sheet::from_entries(entries.iter().map(|(address, text)| {
            let kind = if text.starts_with('=') {
                CellKind::Formula
            } else {
                CellKind::Literal
            };
            (*address, *text, kind)
        }))
        .unwrap()
    }

    #[test]
    fn test_build_records_edges_and_in_degree() {
        let sheet = sheet(&[("a1", "1"), ("a2", "2"), ("b1", "3"), ("b2", "=SUM(a1, a2)")]);
        let graph = DependencyGraph::build(&sheet, sheet.dimension().unwrap()).unwrap();

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.dependencies(&r("b2")), vec![r("a1"), r("a2")]);
        assert_eq!(graph.dependents(&r("a1")), vec![r("b2")]);
        assert!(graph.dependents(&r("b1")).is_empty());
        assert_eq!(graph.in_degree(&r("b2")), 2);
        assert_eq!(graph.in_degree(&r("a1")), 0);
    }

    #[test]
    fn test_build_counts_duplicate_arguments() {
        let sheet = sheet(&[("a1", "5"), ("b1", "=SUM(a1, a1)")]);
        let graph = DependencyGraph::build(&sheet, sheet.dimension().unwrap()).unwrap();

        assert_eq!(graph.in_degree(&r("b1")), 2);
        assert_eq!(graph.dependents(&r("a1")), vec![r("b1"), r("b1")]);
    }

    #[test]
    fn test_build_accepts_self_reference() {
        let sheet = sheet(&[("a1", "=SUM(a1)")]);
        let graph = DependencyGraph::build(&sheet, sheet.dimension().unwrap()).unwrap();
        assert_eq!(graph.in_degree(&r("a1")), 1);
    }

    #[test]
    fn test_build_reports_gap_in_rectangle() {
        let sheet = sheet(&[("a1", "1"), ("b2", "2")]);
        let err = DependencyGraph::build(&sheet, sheet.dimension().unwrap()).unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingCell {
                address: "b1".to_string(),
                referenced_by: None,
            }
        );
    }

    #[test]
    fn test_build_reports_gap_in_huge_rectangle() {
        let sheet = sheet(&[("a1", "1"), ("a999999999999", "2")]);
        let err = DependencyGraph::build(&sheet, sheet.dimension().unwrap()).unwrap_err();
        assert!(matches!(err, EngineError::MissingCell { address, .. } if address == "a2"));
    }

    #[test]
    fn test_build_rejects_reference_outside_rectangle() {
        let sheet = sheet(&[("a1", "1"), ("b1", "=SUM(a1, c5)")]);
        let err = DependencyGraph::build(&sheet, sheet.dimension().unwrap()).unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingCell {
                address: "c5".to_string(),
                referenced_by: Some(r("b1")),
            }
        );
    }

    #[test]
    fn test_build_rejects_malformed_argument() {
        let sheet = sheet(&[("a1", "1"), ("b1", "=SUM(a1, 7)")]);
        let err = DependencyGraph::build(&sheet, sheet.dimension().unwrap()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedReference { text, .. } if text == "7"));
    }

    #[test]
    fn test_build_empty_sheet() {
        let sheet = Sheet::new();
        let graph = DependencyGraph::build(&sheet, Dimension::default()).unwrap();
        assert!(graph.is_empty());
    }
}
