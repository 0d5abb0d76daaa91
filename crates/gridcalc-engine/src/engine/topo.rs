//! Topological evaluation of a dependency graph (Kahn's algorithm).
//!
//! Cells with no unresolved dependencies are queued in row-major order and
//! evaluated first-in first-out. Each evaluation releases the cells that read
//! it; a cell is queued the moment its last dependency is done. Whatever is
//! left with a non-zero in-degree once the queue drains sits on, or behind,
//! a cycle.

use std::collections::VecDeque;

use super::cell::{Cell, DerivedValue};
use super::cell_ref::CellRef;
use super::deps::DependencyGraph;
use super::error::{EngineError, Result};
use super::eval::{ArithmeticError, evaluate, parse_input};
use super::format::Rounding;

/// Evaluate every node of `graph`, returning values in row-major order.
///
/// The graph's in-degree counters are consumed by the pass.
pub fn evaluate_graph(
    mut graph: DependencyGraph<'_>,
    rounding: Rounding,
) -> Result<Vec<DerivedValue>> {
    let mut queue: VecDeque<usize> = (0..graph.len())
        .filter(|&index| graph.in_degree[index] == 0)
        .collect();
    let mut results: Vec<Option<DerivedValue>> = vec![None; graph.len()];

    while let Some(index) = queue.pop_front() {
        let cell = graph.node_ref(index)?;
        let value = derive_value(&graph, cell, index, &results, rounding)?;
        tracing::trace!(%cell, output = %value.output, "evaluated");
        results[index] = Some(value);

        for &dependent in &graph.dependents[index] {
            graph.in_degree[dependent] -= 1;
            if graph.in_degree[dependent] == 0 {
                queue.push_back(dependent);
            }
        }
    }

    let unresolved = graph
        .in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree > 0)
        .map(|(index, _)| graph.node_ref(index))
        .collect::<Result<Vec<CellRef>>>()?;
    if !unresolved.is_empty() {
        tracing::debug!(count = unresolved.len(), "cycle detected");
        return Err(EngineError::CyclicDependency { unresolved });
    }

    // Every node reached in-degree zero, so every node was evaluated.
    Ok(results.into_iter().flatten().collect())
}

fn derive_value(
    graph: &DependencyGraph<'_>,
    cell: CellRef,
    index: usize,
    results: &[Option<DerivedValue>],
    rounding: Rounding,
) -> Result<DerivedValue> {
    let formula = match graph.cells[index] {
        Cell::Literal(text) => return Ok(DerivedValue::new(text.as_str())),
        Cell::Formula(formula) => formula,
    };

    let mut inputs = Vec::with_capacity(graph.depends_on[index].len());
    for &dep in &graph.depends_on[index] {
        let output = results[dep].as_ref().map(|v| v.output.as_str());
        match output.and_then(parse_input) {
            Some(n) => inputs.push(n),
            None => {
                return Err(EngineError::TypeMismatch {
                    cell,
                    dependency: graph.node_ref(dep)?,
                    output: output.unwrap_or_default().to_string(),
                });
            }
        }
    }

    evaluate(formula.operator(), &inputs, rounding).map_err(|err| match err {
        ArithmeticError::DivisionByZero => EngineError::DivisionByZero { cell },
        ArithmeticError::Overflow => EngineError::NumericOverflow { cell },
    })
}
