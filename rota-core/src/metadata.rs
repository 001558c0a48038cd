//! Metadata block: due dates and auxiliary items (e.g. the shopping list).

use chrono::NaiveDate;

use crate::grid::Grid;
use crate::schema::Schema;

/// First blank cell in the metadata column at or below `meta_start_row`.
pub fn next_meta_row(grid: &Grid, schema: &Schema) -> usize {
    let mut row = schema.meta_start_row;
    while !grid.is_blank(row, schema.meta_col) {
        row += 1;
    }
    row
}

/// Write the due date into the next free metadata row and the items,
/// trimmed, into consecutive cells of that row. Returns the row used.
pub fn write_metadata(
    grid: &mut Grid,
    schema: &Schema,
    due: NaiveDate,
    items: &[String],
) -> usize {
    let row = next_meta_row(grid, schema);
    grid.set(row, schema.meta_col, due.format("%Y-%m-%d").to_string());
    for (k, item) in items.iter().enumerate() {
        grid.set(row, schema.items_col + k, item.trim());
    }
    row
}
