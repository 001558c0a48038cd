//! Assignment engine: one person per task row for the new week.
//!
//! Rows are processed in board order. For each row the eligible pool is the
//! cycle minus whoever already has the row done and whoever was already
//! given a chore this run. The candidate with the fewest completed chores
//! wins; ties are broken by [`TieBreak`]. The first row with an empty pool
//! halts the run.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AssignError;
use crate::grid::Grid;
use crate::history::CompletionCounts;
use crate::roster::{Board, Person};
use crate::schema::Markers;

/// How to choose among candidates tied at the lowest completion count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Uniformly at random.
    #[default]
    Random,
    /// First tied candidate at or after the rotation pointer, cyclically.
    Rotation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub row: usize,
    pub label: String,
    pub person: String,
}

/// Roster minus absentees, in roster order.
pub fn cycle<'a>(board: &'a Board, absent: &[String]) -> Vec<&'a Person> {
    board
        .people
        .iter()
        .filter(|p| !absent.iter().any(|a| a.trim() == p.name))
        .collect()
}

#[derive(Debug, Clone)]
pub struct AssignmentEngine<'a> {
    board: &'a Board,
    markers: &'a Markers,
    tie_break: TieBreak,
    pointer: usize,
}

impl<'a> AssignmentEngine<'a> {
    pub fn new(board: &'a Board, markers: &'a Markers) -> Self {
        Self {
            board,
            markers,
            tie_break: TieBreak::Random,
            pointer: 0,
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak, pointer: usize) -> Self {
        self.tie_break = tie_break;
        self.pointer = pointer;
        self
    }

    /// Fill every task row with a pending marker for one person.
    ///
    /// `counts` is updated live so later rows see earlier picks. On error the
    /// grid holds the picks made before the failing row and must not be
    /// persisted.
    pub fn run<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        cycle: &[&Person],
        counts: &mut CompletionCounts,
        rng: &mut R,
    ) -> Result<Vec<Assignment>, AssignError> {
        let mut weekly: HashSet<&str> = HashSet::new();
        let mut out = Vec::with_capacity(self.board.tasks.len());

        for task in &self.board.tasks {
            let pool: Vec<&Person> = cycle
                .iter()
                .copied()
                .filter(|p| !weekly.contains(p.name.as_str()))
                .filter(|p| !self.markers.is_done(grid.get(task.row, p.col)))
                .collect();

            let Some(pick) = self.select(&pool, counts, rng) else {
                return Err(AssignError::Unassignable {
                    row: task.row + 1,
                    label: task.label.clone(),
                });
            };

            grid.set(task.row, pick.col, self.markers.pending.clone());
            weekly.insert(pick.name.as_str());
            counts.increment(&pick.name);
            debug!(task = %task.label, person = %pick.name, "assigned");

            out.push(Assignment {
                row: task.row,
                label: task.label.clone(),
                person: pick.name.clone(),
            });
        }

        Ok(out)
    }

    fn select<'p, R: Rng + ?Sized>(
        &self,
        pool: &[&'p Person],
        counts: &CompletionCounts,
        rng: &mut R,
    ) -> Option<&'p Person> {
        let count_of = |p: &Person| counts.get(&p.name).unwrap_or(0);
        let min = pool.iter().map(|p| count_of(*p)).min()?;
        let tied: Vec<&Person> = pool
            .iter()
            .copied()
            .filter(|p| count_of(*p) == min)
            .collect();

        match self.tie_break {
            TieBreak::Random => tied.choose(rng).copied(),
            TieBreak::Rotation => {
                let n = self.board.people.len().max(1);
                tied.into_iter().min_by_key(|p| {
                    let idx = self.board.index_of(&p.name).unwrap_or(0);
                    (idx + n - self.pointer % n) % n
                })
            }
        }
    }
}
