#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Single-step movement planning for labyrinth players.

use labyrinth_core::{Command, Direction, MoveError, PlayerId, Tile};
use labyrinth_world::{query, Grid};

/// Pure system that turns a move request into a grid command.
#[derive(Debug, Default)]
pub struct Movement;

impl Movement {
    /// Plans a single step for the player, or a placement when absent.
    ///
    /// The direction token is validated first, so an unknown token fails even
    /// when the player is missing from the grid. A present player may only
    /// step onto open floor inside the grid. An absent player is placed at
    /// the first open floor cell in row-major order, ignoring the direction.
    pub fn plan(
        &self,
        grid: &Grid,
        player: PlayerId,
        direction_token: &str,
    ) -> Result<Command, MoveError> {
        let direction = Direction::from_token(direction_token)
            .ok_or_else(|| MoveError::UnknownDirection(direction_token.to_owned()))?;

        match query::find_player(grid, player) {
            Some(from) => {
                let to = direction.step_from(from).ok_or(MoveError::OutOfBounds)?;
                match query::tile(grid, to) {
                    None => Err(MoveError::OutOfBounds),
                    Some(Tile::Floor) => Ok(Command::MovePlayer { player, from, to }),
                    Some(_) => Err(MoveError::Blocked),
                }
            }
            None => {
                let cell = query::first_floor(grid).ok_or(MoveError::NoOpenFloor)?;
                Ok(Command::PlacePlayer { player, cell })
            }
        }
    }
}
