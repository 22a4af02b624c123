//! Plain text rendering of today's log.

use crate::tasks::TodayLogRow;

const HEADERS: [&str; 6] = ["Task", "Start", "End", "Total (min)", "Language", "Platform"];

const COLUMN_GAP: &str = "  ";

/// Renders rows as an aligned table. The first line is the header, the second one separates the
/// header from the rows.
pub fn table_lines(rows: &[TodayLogRow]) -> Vec<String> {
    let cells = rows.iter().map(row_cells).collect::<Vec<_>>();

    let mut widths = HEADERS.map(|v| v.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_line(&HEADERS.map(String::from), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    for row in &cells {
        lines.push(format_line(row, &widths));
    }
    lines
}

fn row_cells(row: &TodayLogRow) -> [String; 6] {
    [
        row.task_name.clone(),
        row.start_time.clone(),
        row.end_time.clone(),
        row.duration.to_string(),
        row.language.clone(),
        row.platform.clone(),
    ]
}

fn format_line(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}
