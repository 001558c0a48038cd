//! Roster and task-row extraction from a loaded grid.
//!
//! Both scans are positional and stop at the first blank cell; interleaved
//! data after a gap is not picked up.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RotaError;
use crate::grid::Grid;
use crate::schema::Schema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub row: usize,
    pub label: String,
}

/// People and chores of one grid, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub people: Vec<Person>,
    pub tasks: Vec<TaskRow>,
}

impl Board {
    /// Scan the header row and task column, then validate the result
    /// against the schema.
    pub fn extract(grid: &Grid, schema: &Schema) -> Result<Self, RotaError> {
        let people = scan_people(grid, schema);
        let tasks = scan_tasks(grid, schema);

        if people.is_empty() {
            return Err(RotaError::EmptyRoster {
                row: schema.header_row + 1,
            });
        }

        let mut seen = HashSet::new();
        for p in &people {
            if !seen.insert(p.name.as_str()) {
                return Err(RotaError::DuplicatePerson {
                    name: p.name.clone(),
                });
            }
        }

        let last = match tasks.last() {
            Some(t) => t.row,
            None => {
                return Err(RotaError::NoTasks {
                    row: schema.first_task_row + 1,
                });
            }
        };
        if schema.meta_start_row <= last {
            return Err(RotaError::MetadataOverlap {
                meta_start_row: schema.meta_start_row + 1,
                last_task_row: last + 1,
            });
        }

        Ok(Self { people, tasks })
    }

    /// Roster order as names.
    pub fn names(&self) -> Vec<&str> {
        self.people.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.people.iter().position(|p| p.name == name)
    }
}

fn scan_people(grid: &Grid, schema: &Schema) -> Vec<Person> {
    let mut out = Vec::new();
    let mut col = schema.first_person_col;
    while !grid.is_blank(schema.header_row, col) {
        out.push(Person {
            name: grid.get(schema.header_row, col).trim().to_string(),
            col,
        });
        col += 1;
    }
    out
}

fn scan_tasks(grid: &Grid, schema: &Schema) -> Vec<TaskRow> {
    let mut out = Vec::new();
    let mut row = schema.first_task_row;
    while !grid.is_blank(row, schema.task_label_col) {
        out.push(TaskRow {
            row,
            label: grid.get(row, schema.task_label_col).trim().to_string(),
        });
        row += 1;
    }
    out
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::grid::Grid;
    use crate::schema::Schema;

    /// Grid in the default layout with the given names and chores.
    pub fn template(names: &[&str], chores: &[&str]) -> Grid {
        let s = Schema::default();
        let mut g = Grid::new();
        g.set(0, 1, "Dorm tasks");
        g.set(s.header_row, s.task_label_col, "Task");
        for (i, n) in names.iter().enumerate() {
            g.set(s.header_row, s.first_person_col + i, *n);
        }
        for (i, c) in chores.iter().enumerate() {
            g.set(s.first_task_row + i, s.task_label_col, *c);
        }
        g
    }
}
