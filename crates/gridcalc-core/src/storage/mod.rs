//! Storage module: reading sheets from .grd/CSV/JSON and writing rendered grids

mod csv;
mod json;
mod md;
mod parser;
mod table;

pub use csv::{parse_csv, parse_csv_content, write_csv};
pub use json::{parse_json, parse_json_content};
pub use md::write_markdown;
pub use parser::{parse_grd, parse_grd_content};
pub use table::write_table;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Result;
use gridcalc_engine::engine::Sheet;

/// Sheet file formats the reader understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputFormat {
    Grd,
    Csv,
    Json,
}

impl InputFormat {
    /// Pick a format from a file extension; anything unknown is read as .grd.
    pub fn from_path(path: &Path) -> InputFormat {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => InputFormat::Csv,
            Some("json") => InputFormat::Json,
            _ => InputFormat::Grd,
        }
    }
}

/// How a rendered grid is printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Table,
    Markdown,
    Csv,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "Unknown output format '{}' (expected table, markdown or csv)",
                other
            )),
        }
    }
}

/// Read a sheet file, choosing the format from its extension.
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let format = InputFormat::from_path(path);
    let sheet = match format {
        InputFormat::Grd => parse_grd(path)?,
        InputFormat::Csv => parse_csv(path)?,
        InputFormat::Json => parse_json(path)?,
    };
    tracing::debug!(path = %path.display(), cells = sheet.len(), ?format, "read sheet");
    Ok(sheet)
}

pub fn read_sheet_content(content: &str, format: InputFormat) -> Result<Sheet> {
    let sheet = match format {
        InputFormat::Grd => parse_grd_content(content)?,
        InputFormat::Csv => parse_csv_content(content)?,
        InputFormat::Json => parse_json_content(content)?,
    };
    tracing::debug!(cells = sheet.len(), ?format, "read sheet");
    Ok(sheet)
}

/// Write a rendered grid of display strings in the chosen format.
pub fn write_grid(grid: &[Vec<String>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => write_table(grid),
        OutputFormat::Markdown => write_markdown(grid),
        OutputFormat::Csv => write_csv(grid),
    }
}
