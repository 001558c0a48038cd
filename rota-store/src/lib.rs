//! rota-store: CSV-backed plan storage, the dated plan directory, publishing,
//! and the weekly run that ties them to `rota-core`.

pub mod csv_grid;
pub mod plan_dir;
pub mod publish;
pub mod weekly;

pub use csv_grid::{load_grid, save_grid};
pub use plan_dir::PlanDir;
pub use publish::publish;
pub use weekly::{BaseSource, Paths, RunReport, Tally, WeeklyRun};
