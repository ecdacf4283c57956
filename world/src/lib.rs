#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative grid state for the Labyrinth pipeline.
//!
//! The loader constructs a [`Grid`] once per run. The connectivity system
//! borrows it read-only, the movement system plans against it and emits a
//! [`Command`], and [`apply`] executes that command before the renderer
//! serializes the final state.

pub mod loader;

use labyrinth_core::{CellCoord, Command, Event, Tile};

/// Rectangular character grid loaded from a map file.
///
/// Tiles are stored row-major in a flat buffer and addressed with zero-based
/// [`CellCoord`] values; neighbor access is bounds-checked instead of relying
/// on a sentinel border around the playable area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    pub(crate) fn new(columns: u32, rows: u32, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), columns as usize * rows as usize);
        Self {
            columns,
            rows,
            tiles,
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }

    fn set(&mut self, cell: CellCoord, tile: Tile) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.tiles.get_mut(index) {
                *slot = tile;
            }
        }
    }
}

/// Applies the provided command to the grid, mutating state deterministically.
///
/// Both cells of a move are rewritten before control returns, so no
/// intermediate state is observable. Commands that no longer match the grid
/// contents are ignored without an event; the movement system is the
/// authority that reports planning failures.
pub fn apply(grid: &mut Grid, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::MovePlayer { player, from, to } => {
            let origin = query::tile(grid, from);
            let target = query::tile(grid, to);
            if origin == Some(Tile::Player(player)) && target == Some(Tile::Floor) {
                grid.set(from, Tile::Floor);
                grid.set(to, Tile::Player(player));
                out_events.push(Event::PlayerMoved { player, from, to });
            }
        }
        Command::PlacePlayer { player, cell } => {
            if query::tile(grid, cell) == Some(Tile::Floor) {
                grid.set(cell, Tile::Player(player));
                out_events.push(Event::PlayerPlaced { player, cell });
            }
        }
    }
}

/// Query functions that provide read-only access to the grid state.
pub mod query {
    use super::Grid;
    use labyrinth_core::{CellCoord, PlayerId, Tile};

    /// Dimensions of the grid as `(columns, rows)`.
    #[must_use]
    pub fn dimensions(grid: &Grid) -> (u32, u32) {
        (grid.columns, grid.rows)
    }

    /// Retrieves the tile stored at the provided cell, if it is in bounds.
    #[must_use]
    pub fn tile(grid: &Grid, cell: CellCoord) -> Option<Tile> {
        grid.index(cell)
            .and_then(|index| grid.tiles.get(index).copied())
    }

    /// Locates the first cell holding the player's digit in row-major order.
    ///
    /// Duplicate digits are tolerated by the map contract; the first
    /// occurrence wins.
    #[must_use]
    pub fn find_player(grid: &Grid, player: PlayerId) -> Option<CellCoord> {
        position_of(grid, |tile| tile == Tile::Player(player))
    }

    /// Locates the first open floor cell in row-major order.
    #[must_use]
    pub fn first_floor(grid: &Grid) -> Option<CellCoord> {
        position_of(grid, |tile| tile == Tile::Floor)
    }

    /// Iterates over the grid's rows as tile slices, top to bottom.
    pub fn rows(grid: &Grid) -> impl Iterator<Item = &[Tile]> {
        let width = usize::try_from(grid.columns).unwrap_or(usize::MAX).max(1);
        grid.tiles.chunks(width)
    }

    fn position_of(grid: &Grid, matches: impl Fn(Tile) -> bool) -> Option<CellCoord> {
        let width = usize::try_from(grid.columns).ok()?.max(1);
        grid.tiles
            .iter()
            .position(|tile| matches(*tile))
            .map(|index| CellCoord::new((index % width) as u32, (index / width) as u32))
    }
}
