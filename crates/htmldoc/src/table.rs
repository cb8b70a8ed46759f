//! Table grid reconstruction.
//!
//! Turns a `<table>` element with row and column spans into [`TableData`]:
//! a rectangular grid size plus one [`TableCell`] per `td`/`th`, each placed
//! at explicit row and column offsets.
//!
//! Rows made only of `th` cells spanning several rows are *row-header rows*.
//! They stack labels on top of the next data row, so they are not counted in
//! `num_rows` and the header row itself does not count towards its cells'
//! row span.

use htmldoc_core::{TableCell, TableData};

use crate::node::{Element, Node};
use crate::utilities::{parse_numeric, CELL_TAGS};

/// Largest `colspan` honoured, as in the HTML table model
pub const MAX_COL_SPAN: usize = 1000;
/// Largest `rowspan` honoured, as in the HTML table model
pub const MAX_ROW_SPAN: usize = 65534;

/// Parse a table element.
///
/// Returns `None` when the table contains another table; such tables are
/// skipped as a whole.
pub fn parse_table_data(table: &Element) -> Option<TableData> {
    if table.contains(&["table"]) {
        log::debug!("Skipping nested table.");
        return None;
    }

    let rows: Vec<Vec<CellInfo>> = table
        .find_all(&["tr"])
        .into_iter()
        .map(|row| row.find_all(CELL_TAGS).into_iter().map(CellInfo::new).collect())
        .collect();

    let num_cols = rows
        .iter()
        .map(|row| {
            row.iter()
                .fold(0usize, |width, cell| width.saturating_add(cell.col_span))
        })
        .max()
        .unwrap_or(0);
    let num_rows = rows.iter().filter(|row| !is_row_header_row(row)).count();
    log::debug!("The table has {num_rows} rows and {num_cols} cols.");

    let mut grid = Grid::new(num_rows, num_cols);
    let mut table_cells = Vec::new();

    // Index of the current data row; -1 until the first one is reached
    let mut row_idx: isize = -1;
    // Row-header rows seen since the last data row
    let mut start_row_span: usize = 0;

    for row in &rows {
        let row_header = is_row_header_row(row);
        let col_header = row.iter().all(|cell| cell.is_header);
        if row_header {
            start_row_span += 1;
        } else {
            row_idx += 1;
            start_row_span = 0;
        }

        // header rows add at least one to row_idx, so the anchor is never negative
        let anchor = usize::try_from(row_idx + start_row_span as isize).unwrap_or(0);
        let mut col_idx = 0;
        for cell in row {
            while col_idx < num_cols && grid.is_occupied(anchor, col_idx) {
                col_idx += 1;
            }

            let row_span = if row_header {
                cell.row_span - 1
            } else {
                cell.row_span
            };
            grid.occupy(anchor, row_span, col_idx, cell.col_span);

            table_cells.push(TableCell {
                text: cell.text.clone(),
                row_span,
                col_span: cell.col_span,
                start_row_offset_idx: anchor,
                end_row_offset_idx: anchor.saturating_add(row_span),
                start_col_offset_idx: col_idx,
                end_col_offset_idx: col_idx.saturating_add(cell.col_span),
                column_header: col_header,
                row_header: !col_header && cell.is_header,
            });
        }
    }

    Some(TableData {
        num_rows,
        num_cols,
        table_cells,
    })
}

/// Extract `(colspan, rowspan)` of a cell.
///
/// Each attribute defaults to 1 when absent, not a plain digit string, or 0,
/// and is capped at [`MAX_COL_SPAN`] / [`MAX_ROW_SPAN`].
pub fn cell_spans(cell: &Element) -> (usize, usize) {
    let span = |name: &str, max: usize| {
        cell.attr(name)
            .and_then(parse_numeric)
            .filter(|value| *value > 0)
            .map_or(1, |value| usize::try_from(value).unwrap_or(max).min(max))
    };
    (span("colspan", MAX_COL_SPAN), span("rowspan", MAX_ROW_SPAN))
}

/// Text of a cell with inline formulas normalised to `$$...$$`
pub fn cell_text(cell: &Element) -> String {
    let mut out = String::new();
    collect_cell_text(cell, &mut out);
    out
}

fn collect_cell_text(element: &Element, out: &mut String) {
    for child in element.children() {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) if inner.tag_name() == "inline-formula" => {
                let raw = inner.text_content();
                let parts: Vec<&str> = raw.split("$$").collect();
                if let [_, formula, _] = parts.as_slice() {
                    out.push_str(&format!("$${formula}$$"));
                } else {
                    out.push_str(&raw);
                }
            }
            Node::Element(inner) => collect_cell_text(inner, out),
        }
    }
}

/// What the placement pass needs to know about a cell
#[derive(Debug, Clone)]
struct CellInfo {
    text: String,
    col_span: usize,
    row_span: usize,
    is_header: bool,
}

impl CellInfo {
    fn new(cell: &Element) -> Self {
        let (col_span, row_span) = cell_spans(cell);
        Self {
            text: cell_text(cell),
            col_span,
            row_span,
            is_header: cell.tag_name() == "th",
        }
    }
}

/// A row is a row-header row when it has no `td` and no cell spanning
/// exactly one row. Rows without cells qualify as well.
fn is_row_header_row(row: &[CellInfo]) -> bool {
    row.iter().all(|cell| cell.is_header && cell.row_span != 1)
}

/// Occupancy of the `num_rows` x `num_cols` grid.
///
/// Slots outside the grid are never occupied and marking them is a no-op.
struct Grid {
    num_cols: usize,
    slots: Vec<Vec<bool>>,
}

impl Grid {
    fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_cols,
            slots: vec![vec![false; num_cols]; num_rows],
        }
    }

    fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.slots
            .get(row)
            .and_then(|cols| cols.get(col))
            .copied()
            .unwrap_or(false)
    }

    fn occupy(&mut self, row: usize, row_span: usize, col: usize, col_span: usize) {
        let end_col = col.saturating_add(col_span).min(self.num_cols);
        for cols in self.slots.iter_mut().skip(row).take(row_span) {
            for slot in cols.iter_mut().take(end_col).skip(col) {
                *slot = true;
            }
        }
    }
}
