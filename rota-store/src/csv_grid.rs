//! Load and save plan grids as CSV.
//!
//! Row and column positions in the file are the grid positions. Blank lines
//! are kept as empty rows so hand-edited templates keep their layout.

use anyhow::{Context, Result};
use rota_core::Grid;
use std::fs;
use std::path::Path;

pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("opening {}", path.display()))?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(data.as_slice());

    let mut rows: Vec<Vec<String>> = Vec::new();

    for result in rdr.records() {
        let record = result.with_context(|| format!("reading {}", path.display()))?;

        // A record's position is where the reader started, before any blank
        // lines it skipped; put those back as empty rows.
        let start = record.position().map(|p| p.byte() as usize).unwrap_or(0);
        for _ in 0..skipped_blank_lines(&data, start) {
            rows.push(Vec::new());
        }

        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Grid::from_rows(rows))
}

/// Line breaks (`\n`, `\r\n` or a lone `\r`) in the run of terminator bytes
/// starting at `from`. A `\n` completing the previous record's `\r\n` is not
/// a blank line.
fn skipped_blank_lines(data: &[u8], from: usize) -> usize {
    let mut i = from;
    if i > 0 && data.get(i) == Some(&b'\n') && data[i - 1] == b'\r' {
        i += 1;
    }

    let mut breaks = 0;
    while let Some(&b) = data.get(i) {
        match b {
            b'\r' => {
                breaks += 1;
                i += if data.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
            }
            b'\n' => {
                breaks += 1;
                i += 1;
            }
            _ => break,
        }
    }
    breaks
}

/// Write every row padded to the widest row, so empty rows survive a reload.
pub fn save_grid(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let width = grid.rows().iter().map(Vec::len).max().unwrap_or(0).max(1);

    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for row in grid.rows() {
        let padded = row
            .iter()
            .map(String::as_str)
            .chain(std::iter::repeat_n("", width - row.len()));
        wtr.write_record(padded)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    wtr.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_become_empty_rows() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("t.csv");
        fs::write(&p, "title\n\n\n,Task,Ann,Bo\n,Sweep,X,\n").unwrap();

        let g = load_grid(&p).unwrap();
        assert_eq!(g.get(0, 0), "title");
        assert_eq!(g.get(3, 2), "Ann");
        assert_eq!(g.get(4, 1), "Sweep");
        assert_eq!(g.get(4, 2), "X");
    }

    #[test]
    fn test_quoted_multiline_cell_keeps_following_rows() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("t.csv");
        fs::write(&p, "\"two\nlines\",b\n\nafter\n").unwrap();

        let g = load_grid(&p).unwrap();
        assert_eq!(g.get(0, 0), "two\nlines");
        assert!(g.rows()[1].is_empty());
        assert_eq!(g.get(2, 0), "after");
    }

    #[test]
    fn test_crlf_blank_lines_and_no_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("t.csv");
        fs::write(&p, "title\r\n\r\n\r\n,Task,Ann\r\n,Sweep").unwrap();

        let g = load_grid(&p).unwrap();
        assert_eq!(g.row_count(), 5);
        assert_eq!(g.get(3, 2), "Ann");
        assert_eq!(g.get(4, 1), "Sweep");
    }

    #[test]
    fn test_blank_line_count_skips_previous_crlf_tail() {
        let data = b"a\r\n\r\nb";
        assert_eq!(skipped_blank_lines(data, 2), 1);
        assert_eq!(skipped_blank_lines(data, 3), 1);
        assert_eq!(skipped_blank_lines(data, 5), 0);
        assert_eq!(skipped_blank_lines(b"a\n\r\rb", 2), 2);
    }

    #[test]
    fn test_leading_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("t.csv");
        fs::write(&p, "\n\nfirst\n").unwrap();

        let g = load_grid(&p).unwrap();
        assert_eq!(g.row_count(), 3);
        assert_eq!(g.get(2, 0), "first");
    }

    #[test]
    fn test_save_then_load_keeps_positions() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("plan.csv");
        let mut g = Grid::new();
        g.set(3, 2, "Ann");
        g.set(4, 1, "Kitchen, floor");
        g.set(4, 2, "✓");
        g.set(16, 8, "milk");

        save_grid(&p, &g).unwrap();
        let back = load_grid(&p).unwrap();
        assert_eq!(back.row_count(), 17);
        assert_eq!(back.get(3, 2), "Ann");
        assert_eq!(back.get(4, 1), "Kitchen, floor");
        assert_eq!(back.get(4, 2), "✓");
        assert_eq!(back.get(16, 8), "milk");
        assert!(back.is_blank(10, 0));
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_grid(dir.path().join("nope.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.csv"));
    }
}
