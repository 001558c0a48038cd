use thiserror::Error;

/// Structural problems with a plan grid or the snapshot directory.
#[derive(Debug, Error)]
pub enum RotaError {
    #[error("no person names found in header row {row}")]
    EmptyRoster { row: usize },

    #[error("person '{name}' appears more than once in the header row")]
    DuplicatePerson { name: String },

    #[error("no task rows found starting at row {row}")]
    NoTasks { row: usize },

    #[error("metadata block starts at row {meta_start_row} but tasks run through row {last_task_row}")]
    MetadataOverlap {
        meta_start_row: usize,
        last_task_row: usize,
    },

    #[error("invalid date in snapshot name '{name}': {reason}")]
    BadSnapshotDate { name: String, reason: String },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// The assignment engine ran out of eligible people.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error("no eligible person left for task '{label}' (row {row}); time for a fresh plan")]
    Unassignable { row: usize, label: String },
}

/// Anything that stops a new plan from being derived.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Layout(#[from] RotaError),

    #[error(transparent)]
    Assign(#[from] AssignError),
}
