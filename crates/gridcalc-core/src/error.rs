//! Error types for Gridcalc core.

use thiserror::Error;

use gridcalc_engine::engine::EngineError;

/// Errors that can occur while reading, evaluating or writing a sheet
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
