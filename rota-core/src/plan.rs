//! Derive next week's plan from a base grid.
//!
//! Pipeline: extract board -> rotation pointer (from the base as saved) ->
//! normalize pending markers -> tally -> assign -> metadata. No I/O happens
//! here; the caller decides whether and where the result is saved.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assign::{Assignment, AssignmentEngine, TieBreak, cycle};
use crate::error::PlanError;
use crate::grid::Grid;
use crate::history::{CompletionCounts, normalize_pending};
use crate::metadata::write_metadata;
use crate::roster::Board;
use crate::rotation::rotation_pointer;
use crate::schema::{Markers, Schema};

/// Where the new plan starts from.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanBase {
    /// No dated plan exists yet.
    Template(Grid),
    /// The chronologically latest saved plan.
    Previous { date: NaiveDate, grid: Grid },
}

impl PlanBase {
    pub fn previous_date(&self) -> Option<NaiveDate> {
        match self {
            PlanBase::Template(_) => None,
            PlanBase::Previous { date, .. } => Some(*date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub due: NaiveDate,
    pub absent: Vec<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSettings {
    pub schema: Schema,
    pub markers: Markers,
    pub tie_break: TieBreak,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NextPlan {
    pub grid: Grid,
    pub board: Board,
    pub pointer: usize,
    pub assignments: Vec<Assignment>,
    /// Completion counts after this week's picks.
    pub counts: CompletionCounts,
    /// Pending markers carried over as done.
    pub carried_over: usize,
    pub meta_row: usize,
    /// Absent names that are not on the roster.
    pub unknown_absent: Vec<String>,
    /// The due date is on or before the date of the plan it was built from.
    pub backdated: bool,
}

/// Split a comma-separated CLI list, trimming and dropping empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn next_plan<R: Rng + ?Sized>(
    base: PlanBase,
    request: &PlanRequest,
    settings: &PlanSettings,
    rng: &mut R,
) -> Result<NextPlan, PlanError> {
    let previous_date = base.previous_date();
    let backdated = previous_date.is_some_and(|d| request.due <= d);
    if let Some(prev) = previous_date.filter(|_| backdated) {
        warn!(due = %request.due, previous = %prev, "due date is not after the latest plan");
    }

    let (mut grid, carried) = match base {
        PlanBase::Template(grid) => (grid, false),
        PlanBase::Previous { grid, .. } => (grid, true),
    };

    let board = Board::extract(&grid, &settings.schema)?;
    let markers = &settings.markers;

    let pointer = rotation_pointer(carried.then_some(&grid), &board, markers);
    let carried_over = normalize_pending(&mut grid, &board, markers);
    let mut counts = CompletionCounts::tally(&grid, &board, markers);

    let unknown_absent: Vec<String> = request
        .absent
        .iter()
        .filter(|a| board.index_of(a.trim()).is_none())
        .cloned()
        .collect();
    for name in &unknown_absent {
        warn!(name = %name, "absent person is not on the roster; ignoring");
    }

    let cyc = cycle(&board, &request.absent);
    info!(
        people = board.people.len(),
        present = cyc.len(),
        tasks = board.tasks.len(),
        pointer,
        carried_over,
        "assigning week"
    );

    let assignments = AssignmentEngine::new(&board, markers)
        .with_tie_break(settings.tie_break, pointer)
        .run(&mut grid, &cyc, &mut counts, rng)?;

    let meta_row = write_metadata(&mut grid, &settings.schema, request.due, &request.items);

    Ok(NextPlan {
        grid,
        board,
        pointer,
        assignments,
        counts,
        carried_over,
        meta_row,
        unknown_absent,
        backdated,
    })
}
