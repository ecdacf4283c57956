#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text rendering for loaded labyrinth grids.

use std::io::Write;

use anyhow::{Context, Result as AnyResult};
use labyrinth_world::{query, Grid};

/// Serializes the grid to text, one row per line.
///
/// Rows are emitted top to bottom with characters in column order and a
/// newline terminating every row, nothing else. Rendering a freshly loaded
/// map therefore reproduces its non-blank input lines exactly.
#[must_use]
pub fn render(grid: &Grid) -> String {
    let (columns, rows) = query::dimensions(grid);
    let mut text = String::with_capacity((columns as usize + 1) * rows as usize);
    for row in query::rows(grid) {
        for tile in row {
            text.push(tile.as_char());
        }
        text.push('\n');
    }
    text
}

/// Writes the rendered grid to the provided output stream.
pub fn present<W: Write>(grid: &Grid, writer: &mut W) -> AnyResult<()> {
    writer
        .write_all(render(grid).as_bytes())
        .context("failed to write rendered grid")
}
