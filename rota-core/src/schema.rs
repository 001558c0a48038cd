//! Named layout of a plan grid and the cell marker vocabulary.
//!
//! Offsets are zero-based. The defaults mirror the dorm spreadsheet:
//! names in row 4 from column C, chores in column B from row 5, and the
//! metadata block in column B from row 17 with purchases from column I.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Row holding person names.
    pub header_row: usize,
    /// Column of the first person name.
    pub first_person_col: usize,
    /// Row of the first task.
    pub first_task_row: usize,
    /// Column holding task labels.
    pub task_label_col: usize,
    /// First row scanned for a free metadata slot.
    pub meta_start_row: usize,
    /// Column receiving due dates.
    pub meta_col: usize,
    /// First column receiving auxiliary items on the metadata row.
    pub items_col: usize,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            header_row: 3,
            first_person_col: 2,
            first_task_row: 4,
            task_label_col: 1,
            meta_start_row: 16,
            meta_col: 1,
            items_col: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Assigned this cycle, not yet completed.
    pub pending: String,
    /// Completed and carried over.
    pub done: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            pending: "X".to_string(),
            done: "✓".to_string(),
        }
    }
}

impl Markers {
    /// Case-insensitive match against the pending marker.
    pub fn is_pending(&self, value: &str) -> bool {
        value.trim().to_uppercase() == self.pending.to_uppercase()
    }

    pub fn is_done(&self, value: &str) -> bool {
        value.trim() == self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_case_insensitive() {
        let m = Markers::default();
        assert!(m.is_pending("X"));
        assert!(m.is_pending("x"));
        assert!(m.is_pending(" x "));
        assert!(!m.is_pending("✓"));
        assert!(!m.is_pending(""));
    }

    #[test]
    fn test_done_is_exact() {
        let m = Markers::default();
        assert!(m.is_done("✓"));
        assert!(m.is_done(" ✓"));
        assert!(!m.is_done("X"));
    }

    #[test]
    fn test_schema_json_shape() {
        let json = serde_json::to_value(Schema::default()).unwrap();
        assert_eq!(json["header_row"], 3);
        assert_eq!(json["items_col"], 8);
    }
}
