//! Rotation pointer: who should be first in line this week.
//!
//! The pointer is derived from the previous plan's first task row. It is
//! reported on every run and only steers selection when
//! [`TieBreak::Rotation`](crate::assign::TieBreak) is chosen.

use crate::grid::Grid;
use crate::roster::Board;
use crate::schema::Markers;

/// Index into roster order. `previous` must be the previous plan as it was
/// saved, before pending markers are normalized.
pub fn rotation_pointer(previous: Option<&Grid>, board: &Board, markers: &Markers) -> usize {
    let Some(prev) = previous else {
        return 0;
    };
    let Some(first) = board.tasks.first() else {
        return 0;
    };
    if board.people.is_empty() {
        return 0;
    }

    board
        .people
        .iter()
        .position(|p| markers.is_pending(prev.get(first.row, p.col)))
        .map(|i| (i + 1) % board.people.len())
        .unwrap_or(0)
}
