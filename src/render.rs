use std::fmt;

use crate::table::Table;

/// Renders a table as a fixed-width text grid.
///
/// The header row follows the table's column order and every absent value
/// shows up as `NULL` (via the [Value](crate::Value) display impl).
pub fn render_table(table: &Table) -> String {
    let cells: Vec<Vec<String>> = table
        .rows_as_matrix()
        .iter()
        .map(|row| row.iter().map(|value| value.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|column| column.len()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &table.columns, &widths);
    push_separator(&mut out, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        if i + 1 == cells.len() {
            // no trailing padding on the last column
            out.push_str(cell.as_ref());
        } else {
            out.push_str(&format!("{:<width$}", cell.as_ref(), width = widths[i]));
        }
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("-+-");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_table(self))
    }
}
