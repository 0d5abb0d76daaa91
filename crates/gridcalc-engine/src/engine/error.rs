//! Error types for the evaluation engine.

use thiserror::Error;

use super::cell_ref::CellRef;

/// Errors that abort a render pass.
///
/// Every variant carries enough context (address and/or formula text) for a
/// front-end to point the user at the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Malformed cell reference '{text}': {reason}")]
    MalformedReference { text: String, reason: &'static str },

    #[error("Malformed formula '{formula}': {reason}")]
    MalformedFormula { formula: String, reason: &'static str },

    #[error("Unknown operator '{operator}' in formula '{formula}'")]
    UnknownOperator { operator: String, formula: String },

    #[error("Cell {cell} reads {dependency}, whose value '{output}' is not a number")]
    TypeMismatch {
        cell: CellRef,
        dependency: CellRef,
        output: String,
    },

    #[error("Division by zero in {cell}: AVG needs at least one argument")]
    DivisionByZero { cell: CellRef },

    #[error("Numeric overflow while evaluating {cell}")]
    NumericOverflow { cell: CellRef },

    #[error("Circular dependency detected among {}", format_refs(.unresolved))]
    CyclicDependency { unresolved: Vec<CellRef> },

    /// Configuration error: the sheet rectangle has a hole, or a formula
    /// points outside it.
    #[error("{}", missing_cell_message(.address, .referenced_by.as_ref()))]
    MissingCell {
        address: String,
        referenced_by: Option<CellRef>,
    },
}

fn format_refs(refs: &[CellRef]) -> String {
    refs.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn missing_cell_message(address: &str, referenced_by: Option<&CellRef>) -> String {
    match referenced_by {
        Some(cell) => format!("Cell {} references {}, which is not in the sheet", cell, address),
        None => format!("Sheet has no cell at {}", address),
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
