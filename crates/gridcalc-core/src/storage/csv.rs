//! CSV import/export functionality

use crate::error::{CoreError, Result};
use crate::input::cell_from_input;
use gridcalc_engine::engine::{CellRef, Sheet};
use std::path::Path;

/// Parse a CSV file into a sheet; row `i`, field `j` becomes the cell at (i, j).
pub fn parse_csv(path: &Path) -> Result<Sheet> {
    let content = std::fs::read_to_string(path)?;
    parse_csv_content(&content)
}

/// Parse CSV content from a string.
///
/// Short rows are padded with empty literals so the sheet stays rectangular.
pub fn parse_csv_content(content: &str) -> Result<Sheet> {
    let rows: Vec<Vec<String>> = content.lines().map(parse_csv_line).collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut sheet = Sheet::new();

    for (row_idx, fields) in rows.iter().enumerate() {
        let parse_error = |message: String| CoreError::Parse {
            line: row_idx + 1,
            message,
        };
        for col_idx in 0..width {
            let field = fields.get(col_idx).map(String::as_str).unwrap_or("");
            let cell_ref =
                CellRef::new(row_idx, col_idx).map_err(|err| parse_error(err.to_string()))?;
            let cell = cell_from_input(field).map_err(|err| parse_error(err.to_string()))?;
            sheet.insert(cell_ref.to_string(), cell);
        }
    }

    Ok(sheet)
}

/// Parse a single CSV line, handling quoted fields
pub(crate) fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(current.trim().to_string());
                    current = String::new();
                }
                _ => current.push(c),
            }
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Export a rendered grid as CSV.
pub fn write_csv(grid: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in grid {
        let fields: Vec<String> = row.iter().map(|field| escape_csv_field(field)).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Escape a field for CSV output
fn escape_csv_field(field: &str) -> String {
    // Guard against CSV formula injection in spreadsheet apps; plain numbers
    // such as "-4" are left alone.
    let first_non_space = field.trim_start_matches([' ', '\t']).chars().next();
    let is_number = field.trim().parse::<f64>().is_ok();
    let safe_field = if !is_number && matches!(first_non_space, Some('=' | '+' | '-' | '@')) {
        format!("'{}", field)
    } else {
        field.to_string()
    };

    if safe_field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", safe_field.replace('"', "\"\""))
    } else {
        safe_field
    }
}
