//! Plain-text table output for terminals.

use gridcalc_engine::engine::CellRef;

/// Write a rendered grid as space-aligned columns headed by column letters,
/// each row prefixed with its 1-based row number.
pub fn write_table(grid: &[Vec<String>]) -> String {
    let cols = grid.first().map_or(0, Vec::len);
    if cols == 0 {
        return String::new();
    }

    let label_width = grid.len().to_string().len();
    let widths: Vec<usize> = (0..cols)
        .map(|col| {
            grid.iter()
                .filter_map(|row| row.get(col))
                .map(|value| value.chars().count())
                .max()
                .unwrap_or(0)
                .max(1)
        })
        .collect();

    let mut lines = Vec::with_capacity(grid.len() + 1);
    let header: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, width)| {
            let letter = CellRef::col_to_letter(col).unwrap_or('?');
            format!("{:<width$}", letter, width = *width)
        })
        .collect();
    lines.push(format!("{:label_width$} | {}", "", header.join(" | ")));

    for (row, values) in grid.iter().enumerate() {
        let cells: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect();
        lines.push(format!("{:>label_width$} | {}", row + 1, cells.join(" | ")));
    }

    let mut out = lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}
