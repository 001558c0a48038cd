//! In-memory cell grid: the shape every persisted plan is loaded into.
//!
//! Addressing is zero-based `(row, col)`. Reads outside the stored area return
//! the empty string; writes outside it grow the table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Convenience for tests and templates: build from string slices.
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// True when the cell holds nothing but whitespace.
    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        self.get(row, col).trim().is_empty()
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let r = &mut self.rows[row];
        if r.len() <= col {
            r.resize(col + 1, String::new());
        }
        r[col] = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_outside_is_empty() {
        let g = Grid::from_strs(&[&["a", "b"], &["c"]]);
        assert_eq!(g.get(0, 1), "b");
        assert_eq!(g.get(1, 1), "");
        assert_eq!(g.get(7, 0), "");
    }

    #[test]
    fn test_set_grows_ragged_rows() {
        let mut g = Grid::new();
        g.set(2, 3, "x");
        assert_eq!(g.row_count(), 3);
        assert_eq!(g.get(2, 3), "x");
        assert!(g.rows()[0].is_empty());
        assert_eq!(g.rows()[2].len(), 4);

        g.set(2, 1, "y");
        assert_eq!(g.rows()[2].len(), 4);
        assert_eq!(g.get(2, 1), "y");
    }

    #[test]
    fn test_blank_ignores_whitespace() {
        let g = Grid::from_strs(&[&["  ", "v"]]);
        assert!(g.is_blank(0, 0));
        assert!(!g.is_blank(0, 1));
        assert!(g.is_blank(5, 5));
    }
}
