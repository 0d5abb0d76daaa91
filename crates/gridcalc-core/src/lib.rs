//! gridcalc-core - UI-agnostic sheet input classification and storage formats.

pub mod error;
pub mod input;
pub mod storage;

pub use error::{CoreError, Result};
pub use input::classify;
pub use storage::{InputFormat, OutputFormat, read_sheet, read_sheet_content, write_grid};

pub use gridcalc_engine::engine::{CellRef, RenderOptions, Sheet};
