//! Dated plan snapshots, selected from plain file names so the choice can be
//! tested without a directory.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RotaError;

pub const SNAPSHOT_PREFIX: &str = "Tasks_";
pub const SNAPSHOT_EXT: &str = "csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub name: String,
}

/// `Tasks_<YYYY-MM-DD>.csv`
pub fn snapshot_file_name(date: NaiveDate) -> String {
    format!("{SNAPSHOT_PREFIX}{}.{SNAPSHOT_EXT}", date.format("%Y-%m-%d"))
}

/// Pick the snapshot with the latest embedded date.
///
/// Names that do not look like snapshots are skipped. A name that looks like
/// one but carries an impossible date is an error.
pub fn latest_snapshot<I, S>(names: I) -> Result<Option<Snapshot>, RotaError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let re = Regex::new(&format!(
        r"^{}(\d{{4}}-\d{{2}}-\d{{2}})\.{}$",
        regex::escape(SNAPSHOT_PREFIX),
        regex::escape(SNAPSHOT_EXT)
    ))?;

    let mut best: Option<Snapshot> = None;
    for name in names {
        let name = name.as_ref();
        let Some(caps) = re.captures(name) else {
            continue;
        };
        let date = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").map_err(|e| {
            RotaError::BadSnapshotDate {
                name: name.to_string(),
                reason: e.to_string(),
            }
        })?;
        if best.as_ref().is_none_or(|b| date > b.date) {
            best = Some(Snapshot {
                date,
                name: name.to_string(),
            });
        }
    }
    Ok(best)
}
