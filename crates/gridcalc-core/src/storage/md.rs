//! Markdown export functionality

use gridcalc_engine::engine::CellRef;

/// Write a rendered grid as a Markdown table with column letters and row numbers.
pub fn write_markdown(grid: &[Vec<String>]) -> String {
    let mut out = String::from("# Sheet\n\n");
    let cols = grid.first().map_or(0, Vec::len);

    if grid.is_empty() || cols == 0 {
        out.push_str("*Empty spreadsheet*\n");
        return out;
    }

    out.push_str("|   |");
    for col in 0..cols {
        let letter = CellRef::col_to_letter(col).unwrap_or('?');
        out.push_str(&format!(" {} |", letter));
    }
    out.push('\n');

    out.push_str("|---|");
    for _ in 0..cols {
        out.push_str("---|");
    }
    out.push('\n');

    for (row, values) in grid.iter().enumerate() {
        out.push_str(&format!("| {} |", row + 1)); // 1-based row numbers
        for value in values {
            out.push_str(&format!(" {} |", escape_markdown(value)));
        }
        out.push('\n');
    }

    out
}

fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
