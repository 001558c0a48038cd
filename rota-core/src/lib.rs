//! rota-core: chore rotation over a weekly plan grid.
//!
//! Everything here is pure: grids come in, grids go out. Loading, saving
//! and publishing live in `rota-store`.

pub mod assign;
pub mod error;
pub mod grid;
pub mod history;
pub mod metadata;
pub mod plan;
pub mod roster;
pub mod rotation;
pub mod schema;
pub mod snapshot;

pub use assign::{Assignment, AssignmentEngine, TieBreak, cycle};
pub use error::{AssignError, PlanError, RotaError};
pub use grid::Grid;
pub use history::{CompletionCounts, normalize_pending};
pub use metadata::{next_meta_row, write_metadata};
pub use plan::{NextPlan, PlanBase, PlanRequest, PlanSettings, next_plan, split_list};
pub use roster::{Board, Person, TaskRow};
pub use rotation::rotation_pointer;
pub use schema::{Markers, Schema};
pub use snapshot::{Snapshot, latest_snapshot, snapshot_file_name};
