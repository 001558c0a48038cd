//! Carry-forward history: pending markers become done markers, and done
//! markers are tallied per person.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::roster::Board;
use crate::schema::Markers;

/// Rewrite every pending marker in the task area to the done marker.
/// Returns the number of cells rewritten.
pub fn normalize_pending(grid: &mut Grid, board: &Board, markers: &Markers) -> usize {
    let mut rewritten = 0;
    for task in &board.tasks {
        for person in &board.people {
            if markers.is_pending(grid.get(task.row, person.col)) {
                grid.set(task.row, person.col, markers.done.clone());
                rewritten += 1;
            }
        }
    }
    rewritten
}

/// Done totals per person, aligned with roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCounts {
    entries: Vec<(String, u32)>,
}

impl CompletionCounts {
    /// Tally done cells across all task rows.
    pub fn tally(grid: &Grid, board: &Board, markers: &Markers) -> Self {
        let entries = board
            .people
            .iter()
            .map(|p| {
                let n = board
                    .tasks
                    .iter()
                    .filter(|t| markers.is_done(grid.get(t.row, p.col)))
                    .count() as u32;
                (p.name.clone(), n)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }

    pub(crate) fn increment(&mut self, name: &str) {
        if let Some((_, c)) = self.entries.iter_mut().find(|(n, _)| n == name) {
            *c += 1;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::fixtures::template;
    use crate::schema::Schema;

    fn board(g: &Grid) -> Board {
        Board::extract(g, &Schema::default()).unwrap()
    }

    #[test]
    fn test_normalize_rewrites_both_cases() {
        let mut g = template(&["A", "B"], &["T1", "T2"]);
        g.set(4, 2, "X");
        g.set(5, 3, "x");
        g.set(5, 2, "✓");
        let b = board(&g);

        let n = normalize_pending(&mut g, &b, &Markers::default());
        assert_eq!(n, 2);
        assert_eq!(g.get(4, 2), "✓");
        assert_eq!(g.get(5, 3), "✓");
        assert_eq!(g.get(5, 2), "✓");
    }

    #[test]
    fn test_normalize_leaves_labels_and_metadata() {
        let mut g = template(&["A"], &["X"]);
        g.set(16, 1, "x");
        let b = board(&g);
        normalize_pending(&mut g, &b, &Markers::default());
        assert_eq!(g.get(4, 1), "X");
        assert_eq!(g.get(16, 1), "x");
    }

    #[test]
    fn test_counts_from_legacy_equal_canonical() {
        let mut legacy = template(&["A", "B", "C"], &["T1", "T2", "T3"]);
        legacy.set(4, 2, "x");
        legacy.set(5, 2, "X");
        legacy.set(6, 4, "X");
        let mut canonical = template(&["A", "B", "C"], &["T1", "T2", "T3"]);
        canonical.set(4, 2, "✓");
        canonical.set(5, 2, "✓");
        canonical.set(6, 4, "✓");

        let m = Markers::default();
        let b = board(&legacy);
        normalize_pending(&mut legacy, &b, &m);
        normalize_pending(&mut canonical, &b, &m);

        let lc = CompletionCounts::tally(&legacy, &b, &m);
        let cc = CompletionCounts::tally(&canonical, &b, &m);
        assert_eq!(lc, cc);
        assert_eq!(lc.get("A"), Some(2));
        assert_eq!(lc.get("B"), Some(0));
        assert_eq!(lc.get("C"), Some(1));
        assert_eq!(lc.total(), 3);
    }

    #[test]
    fn test_counts_follow_roster_order() {
        let g = template(&["Zoe", "Al"], &["T1"]);
        let b = board(&g);
        let c = CompletionCounts::tally(&g, &b, &Markers::default());
        let names: Vec<&str> = c.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zoe", "Al"]);
        assert_eq!(c.get("Nobody"), None);
    }
}
