//! Table grid types
//!
//! A table is stored as a rectangular grid of `num_rows` x `num_cols` slots and
//! a flat list of cells. Each cell covers the half-open rectangle
//! `[start_row_offset_idx, end_row_offset_idx) x [start_col_offset_idx, end_col_offset_idx)`.

/// A single table cell placed on the grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableCell {
    pub text: String,
    pub row_span: usize,
    pub col_span: usize,
    pub start_row_offset_idx: usize,
    pub end_row_offset_idx: usize,
    pub start_col_offset_idx: usize,
    pub end_col_offset_idx: usize,
    /// Cell belongs to a row made only of header cells
    pub column_header: bool,
    /// Header cell inside a row that also carries data
    pub row_header: bool,
}

impl TableCell {
    /// Whether the grid rectangles of two cells share at least one slot
    pub fn overlaps(&self, other: &TableCell) -> bool {
        self.start_row_offset_idx < other.end_row_offset_idx
            && other.start_row_offset_idx < self.end_row_offset_idx
            && self.start_col_offset_idx < other.end_col_offset_idx
            && other.start_col_offset_idx < self.end_col_offset_idx
    }

    /// Whether the cell covers the given grid slot
    pub fn covers(&self, row: usize, col: usize) -> bool {
        (self.start_row_offset_idx..self.end_row_offset_idx).contains(&row)
            && (self.start_col_offset_idx..self.end_col_offset_idx).contains(&col)
    }
}

/// Reconstructed table content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableData {
    pub num_rows: usize,
    pub num_cols: usize,
    pub table_cells: Vec<TableCell>,
}

impl TableData {
    /// The first cell covering the given grid slot
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.table_cells.iter().find(|cell| cell.covers(row, col))
    }

    /// Texts of the grid, row by row; uncovered slots are empty strings
    pub fn grid(&self) -> Vec<Vec<&str>> {
        (0..self.num_rows)
            .map(|row| {
                (0..self.num_cols)
                    .map(|col| self.cell_at(row, col).map_or("", |c| c.text.as_str()))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str, rows: (usize, usize), cols: (usize, usize)) -> TableCell {
        TableCell {
            text: text.to_string(),
            row_span: rows.1 - rows.0,
            col_span: cols.1 - cols.0,
            start_row_offset_idx: rows.0,
            end_row_offset_idx: rows.1,
            start_col_offset_idx: cols.0,
            end_col_offset_idx: cols.1,
            ..Default::default()
        }
    }

    #[test]
    fn test_overlaps() {
        let a = cell("a", (0, 2), (0, 1));
        let b = cell("b", (1, 2), (0, 2));
        let c = cell("c", (0, 1), (1, 2));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&b));
    }

    #[test]
    fn test_grid() {
        let data = TableData {
            num_rows: 2,
            num_cols: 2,
            table_cells: vec![
                cell("wide", (0, 1), (0, 2)),
                cell("x", (1, 2), (0, 1)),
            ],
        };
        assert_eq!(data.grid(), vec![vec!["wide", "wide"], vec!["x", ""]]);
        assert_eq!(data.cell_at(1, 0).map(|c| c.text.as_str()), Some("x"));
        assert!(data.cell_at(1, 1).is_none());
    }
}
