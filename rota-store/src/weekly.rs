//! One weekly run: pick the base plan, derive the next one, save, publish.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rand::Rng;
use rota_core::{
    Assignment, Board, CompletionCounts, Grid, PlanBase, PlanRequest, PlanSettings, next_plan,
    normalize_pending,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::csv_grid::{load_grid, save_grid};
use crate::plan_dir::PlanDir;
use crate::publish::publish;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Blank plan used before any dated plan exists.
    pub template: PathBuf,
    pub plans_dir: PathBuf,
    /// Public copy of the newest plan; `None` skips publishing.
    pub publish: Option<PathBuf>,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            template: PathBuf::from("DormTasks.csv"),
            plans_dir: PathBuf::from("WeeklyPlans"),
            publish: Some(PathBuf::from("docs/WeeklyPlans/Tasks_latest.csv")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseSource {
    Template(PathBuf),
    Previous { date: NaiveDate, path: PathBuf },
}

impl BaseSource {
    pub fn path(&self) -> &Path {
        match self {
            BaseSource::Template(p) => p,
            BaseSource::Previous { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub saved: PathBuf,
    pub published: Option<PathBuf>,
    pub source: BaseSource,
    pub pointer: usize,
    pub assignments: Vec<Assignment>,
    pub counts: CompletionCounts,
}

/// Completion counts of the current base, as they would be seeded next run.
#[derive(Debug, Clone)]
pub struct Tally {
    pub source: BaseSource,
    pub counts: CompletionCounts,
}

#[derive(Debug, Clone, Default)]
pub struct WeeklyRun {
    paths: Paths,
    settings: PlanSettings,
}

impl WeeklyRun {
    pub fn new(paths: Paths, settings: PlanSettings) -> Self {
        Self { paths, settings }
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    /// Latest dated plan, or the template when the directory has none.
    pub fn load_base(&self, plans: &PlanDir) -> Result<(PlanBase, BaseSource)> {
        match plans.latest()? {
            Some((snap, path)) => {
                let grid = load_grid(&path)?;
                info!(path = %path.display(), "using previous plan as base");
                Ok((
                    PlanBase::Previous {
                        date: snap.date,
                        grid,
                    },
                    BaseSource::Previous {
                        date: snap.date,
                        path,
                    },
                ))
            }
            None => {
                let template = &self.paths.template;
                if !template.exists() {
                    bail!(
                        "no dated plan in {} and template not found: {}",
                        plans.root().display(),
                        template.display()
                    );
                }
                let grid = load_grid(template)?;
                info!(path = %template.display(), "no previous plan; using template");
                Ok((PlanBase::Template(grid), BaseSource::Template(template.clone())))
            }
        }
    }

    /// Derive, save and publish the plan for `request.due`.
    ///
    /// Nothing is written when assignment fails.
    pub fn run<R: Rng + ?Sized>(&self, request: &PlanRequest, rng: &mut R) -> Result<RunReport> {
        let plans = PlanDir::open(&self.paths.plans_dir)?;
        let (base, source) = self.load_base(&plans)?;

        let plan = next_plan(base, request, &self.settings, rng)
            .with_context(|| format!("building plan from {}", source.path().display()))?;

        let out = plans.path_for(request.due);
        if out.exists() {
            warn!(path = %out.display(), "overwriting existing plan");
        }
        save_grid(&out, &plan.grid)?;
        info!(path = %out.display(), rows = plan.assignments.len(), "plan saved");

        let published = match &self.paths.publish {
            Some(dest) => {
                publish(&out, dest)?;
                info!(path = %dest.display(), "plan published");
                Some(dest.clone())
            }
            None => None,
        };

        Ok(RunReport {
            saved: out,
            published,
            source,
            pointer: plan.pointer,
            assignments: plan.assignments,
            counts: plan.counts,
        })
    }

    /// Read-only view of the completion counts the next run would start from.
    pub fn tally(&self) -> Result<Tally> {
        let plans = PlanDir::at(&self.paths.plans_dir);
        let (base, source) = self.load_base(&plans)?;
        let mut grid: Grid = match base {
            PlanBase::Template(g) => g,
            PlanBase::Previous { grid, .. } => grid,
        };

        let board = Board::extract(&grid, &self.settings.schema)
            .with_context(|| format!("reading layout of {}", source.path().display()))?;
        normalize_pending(&mut grid, &board, &self.settings.markers);
        let counts = CompletionCounts::tally(&grid, &board, &self.settings.markers);

        Ok(Tally { source, counts })
    }
}
