//! Table types.

use serde::{Deserialize, Serialize};

/// An extracted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// 1-based table number, assigned by position in the result
    pub id: u32,

    /// Number of rows the service reported
    pub row_count: u32,

    /// Number of columns the service reported
    pub column_count: u32,

    /// Table-level confidence, rounded to 3 decimals (0 when the service
    /// reported none)
    pub confidence: f64,

    /// Cells in the service's native enumeration order
    pub cells: Vec<TableCell>,
}

impl Table {
    /// Check if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reconstruct the table as a dense 2-D grid of cell content.
    ///
    /// The grid is sized by the declared row/column counts, expanded to
    /// cover any cell whose index falls outside the declared geometry.
    /// Positions with no cell hold an empty string.
    pub fn grid(&self) -> Vec<Vec<String>> {
        if self.cells.is_empty() {
            return Vec::new();
        }

        let rows = self
            .cells
            .iter()
            .map(|c| c.row_index + 1)
            .max()
            .unwrap_or(0)
            .max(self.row_count) as usize;
        let cols = self
            .cells
            .iter()
            .map(|c| c.column_index + 1)
            .max()
            .unwrap_or(0)
            .max(self.column_count) as usize;

        let mut grid = vec![vec![String::new(); cols]; rows];
        for cell in &self.cells {
            grid[cell.row_index as usize][cell.column_index as usize] = cell.content.clone();
        }
        grid
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text
    pub content: String,

    /// 0-based row position
    pub row_index: u32,

    /// 0-based column position
    pub column_index: u32,

    /// Cell-level confidence, rounded to 3 decimals (0 when the service
    /// reported none)
    pub confidence: f64,
}

impl TableCell {
    /// Create a new cell.
    pub fn new(content: impl Into<String>, row_index: u32, column_index: u32) -> Self {
        Self {
            content: content.into(),
            row_index,
            column_index,
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_placement() {
        let table = Table {
            id: 1,
            row_count: 2,
            column_count: 2,
            confidence: 0.0,
            cells: vec![TableCell::new("A", 0, 0), TableCell::new("B", 1, 1)],
        };

        let grid = table.grid();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec!["A".to_string(), String::new()]);
        assert_eq!(grid[1], vec![String::new(), "B".to_string()]);
    }

    #[test]
    fn test_grid_empty_table() {
        let table = Table {
            id: 1,
            row_count: 3,
            column_count: 3,
            confidence: 0.0,
            cells: Vec::new(),
        };
        assert!(table.is_empty());
        assert!(table.grid().is_empty());
    }

    #[test]
    fn test_grid_expands_for_stray_cells() {
        // A cell outside the declared geometry must not be dropped.
        let table = Table {
            id: 1,
            row_count: 1,
            column_count: 1,
            confidence: 0.0,
            cells: vec![TableCell::new("stray", 2, 3)],
        };

        let grid = table.grid();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0].len(), 4);
        assert_eq!(grid[2][3], "stray");
    }
}
