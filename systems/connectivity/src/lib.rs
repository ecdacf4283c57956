#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Flood-fill validation that keeps the labyrinth floor a single region.

use labyrinth_core::{CellCoord, Direction, ValidationError};
use labyrinth_world::{query, Grid};

/// Pure system that checks floor connectivity after loading.
#[derive(Debug, Default)]
pub struct Connectivity;

impl Connectivity {
    /// Confirms that every empty cell belongs to one 4-connected area.
    ///
    /// The grid is scanned in row-major order; each unvisited empty cell
    /// seeds a flood fill over its cardinal neighbors. Discovering a second
    /// area short-circuits the scan. A grid without any empty cell is valid.
    pub fn validate(&self, grid: &Grid) -> Result<(), ValidationError> {
        let (columns, rows) = query::dimensions(grid);
        let cell_count = columns as usize * rows as usize;
        let mut visited = vec![false; cell_count];
        let mut areas = 0u32;

        for row in 0..rows {
            for column in 0..columns {
                let cell = CellCoord::new(column, row);
                if !is_empty(grid, cell) || visited[stride_index(cell, columns)] {
                    continue;
                }
                areas += 1;
                if areas > 1 {
                    return Err(ValidationError::MultipleEmptyAreas);
                }
                flood_fill(grid, cell, columns, &mut visited);
            }
        }

        Ok(())
    }
}

// Explicit stack instead of recursion; the traversal order does not affect
// the area count.
fn flood_fill(grid: &Grid, origin: CellCoord, columns: u32, visited: &mut [bool]) {
    let mut stack = vec![origin];
    visited[stride_index(origin, columns)] = true;

    while let Some(cell) = stack.pop() {
        for neighbor in neighbors(grid, cell) {
            let index = stride_index(neighbor, columns);
            if !visited[index] && is_empty(grid, neighbor) {
                visited[index] = true;
                stack.push(neighbor);
            }
        }
    }
}

fn neighbors(grid: &Grid, cell: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
    [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]
    .into_iter()
    .filter_map(move |direction| direction.step_from(cell))
    .filter(move |candidate| query::tile(grid, *candidate).is_some())
}

fn is_empty(grid: &Grid, cell: CellCoord) -> bool {
    query::tile(grid, cell).is_some_and(|tile| tile.is_empty_area())
}

fn stride_index(cell: CellCoord, columns: u32) -> usize {
    cell.row() as usize * columns as usize + cell.column() as usize
}
