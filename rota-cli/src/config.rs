use anyhow::{Context, Result, bail};
use rota_core::{Markers, PlanSettings, Schema, TieBreak};
use rota_store::Paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = "rota.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsSection,
    pub layout: LayoutSection,
    pub markers: Markers,
    pub assignment: AssignmentSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub template: PathBuf,
    pub plans_dir: PathBuf,
    pub publish: PathBuf,
}

impl Default for PathsSection {
    fn default() -> Self {
        let p = Paths::default();
        Self {
            template: p.template,
            plans_dir: p.plans_dir,
            publish: p
                .publish
                .unwrap_or_else(|| PathBuf::from("docs/WeeklyPlans/Tasks_latest.csv")),
        }
    }
}

/// Grid layout in spreadsheet terms: rows and columns count from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSection {
    pub header_row: usize,
    pub first_person_col: usize,
    pub first_task_row: usize,
    pub task_label_col: usize,
    pub meta_start_row: usize,
    pub meta_col: usize,
    pub items_col: usize,
}

impl Default for LayoutSection {
    fn default() -> Self {
        let s = Schema::default();
        Self {
            header_row: s.header_row + 1,
            first_person_col: s.first_person_col + 1,
            first_task_row: s.first_task_row + 1,
            task_label_col: s.task_label_col + 1,
            meta_start_row: s.meta_start_row + 1,
            meta_col: s.meta_col + 1,
            items_col: s.items_col + 1,
        }
    }
}

impl LayoutSection {
    pub fn to_schema(&self) -> Result<Schema> {
        let z = |name: &str, v: usize| -> Result<usize> {
            match v.checked_sub(1) {
                Some(i) => Ok(i),
                None => bail!("layout.{name} counts from 1, got 0"),
            }
        };
        Ok(Schema {
            header_row: z("header_row", self.header_row)?,
            first_person_col: z("first_person_col", self.first_person_col)?,
            first_task_row: z("first_task_row", self.first_task_row)?,
            task_label_col: z("task_label_col", self.task_label_col)?,
            meta_start_row: z("meta_start_row", self.meta_start_row)?,
            meta_col: z("meta_col", self.meta_col)?,
            items_col: z("items_col", self.items_col)?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentSection {
    /// "random" (default) or "rotation".
    pub tie_break: TieBreak,
}

impl Config {
    pub fn paths(&self, publish: bool) -> Paths {
        Paths {
            template: self.paths.template.clone(),
            plans_dir: self.paths.plans_dir.clone(),
            publish: publish.then(|| self.paths.publish.clone()),
        }
    }

    pub fn settings(&self) -> Result<PlanSettings> {
        let pending = self.markers.pending.trim();
        let done = self.markers.done.trim();
        if pending.is_empty() || done.is_empty() {
            bail!("markers.pending and markers.done must not be empty");
        }
        if pending.eq_ignore_ascii_case(done) {
            bail!("markers.pending and markers.done must differ");
        }
        Ok(PlanSettings {
            schema: self.layout.to_schema()?,
            markers: Markers {
                pending: pending.to_string(),
                done: done.to_string(),
            },
            tie_break: self.assignment.tie_break,
        })
    }
}

/// Load `path`, or `rota.toml` in the working directory when none is given.
/// A missing default file means defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let (p, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG), false),
    };
    if !p.exists() {
        if explicit {
            bail!("config not found: {}", p.display());
        }
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}
