//! Directory of dated plans (`Tasks_<date>.csv`).

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rota_core::{Snapshot, latest_snapshot, snapshot_file_name};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PlanDir {
    root: PathBuf,
}

impl PlanDir {
    /// Open the directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).with_context(|| format!("create {}", root.display()))?;
        Ok(Self { root })
    }

    /// Refer to the directory without touching the filesystem. A missing
    /// directory lists as empty.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        if !self.root.exists() {
            return Ok(names);
        }
        for entry in
            fs::read_dir(&self.root).with_context(|| format!("list {}", self.root.display()))?
        {
            let entry = entry.with_context(|| format!("list {}", self.root.display()))?;
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Latest dated plan and its full path, if any exist.
    pub fn latest(&self) -> Result<Option<(Snapshot, PathBuf)>> {
        let names = self.file_names()?;
        let latest = latest_snapshot(&names)
            .with_context(|| format!("scanning {}", self.root.display()))?;
        Ok(latest.map(|s| {
            let p = self.root.join(&s.name);
            (s, p)
        }))
    }

    pub fn path_for(&self, due: NaiveDate) -> PathBuf {
        self.root.join(snapshot_file_name(due))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("WeeklyPlans");
        let pd = PlanDir::open(&root).unwrap();
        assert!(root.is_dir());
        assert!(pd.latest().unwrap().is_none());
    }

    #[test]
    fn test_latest_ignores_directories_and_strays() {
        let dir = tempfile::tempdir().unwrap();
        let pd = PlanDir::open(dir.path()).unwrap();
        fs::write(dir.path().join("Tasks_2026-10-05.csv"), "").unwrap();
        fs::write(dir.path().join("Tasks_2026-10-12.csv"), "").unwrap();
        fs::write(dir.path().join("Tasks_latest.csv"), "").unwrap();
        fs::create_dir(dir.path().join("Tasks_2027-01-01.csv")).unwrap();

        let (snap, path) = pd.latest().unwrap().unwrap();
        assert_eq!(snap.name, "Tasks_2026-10-12.csv");
        assert_eq!(path, dir.path().join("Tasks_2026-10-12.csv"));
    }

    #[test]
    fn test_at_does_not_create_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("WeeklyPlans");
        let pd = PlanDir::at(&root);
        assert!(pd.latest().unwrap().is_none());
        assert!(!root.exists());
    }

    #[test]
    fn test_path_for_due_date() {
        let dir = tempfile::tempdir().unwrap();
        let pd = PlanDir::open(dir.path()).unwrap();
        let due = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(pd.path_for(due), dir.path().join("Tasks_2026-10-19.csv"));
    }
}
