#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Labyrinth pipeline.
//!
//! This crate defines the vocabulary that connects the authoritative grid,
//! the pure systems, and the adapters. The loader builds a grid out of
//! [`Tile`] values, systems inspect it through read-only queries and respond
//! with [`Command`] values, and the world executes those commands before
//! broadcasting [`Event`] values. Every failure mode carries a typed error so
//! the command-line adapter can classify it into a diagnostic and an exit
//! status.

use std::io;

use thiserror::Error;

/// Fixed banner emitted by the `--version` flag.
pub const VERSION_BANNER: &str = "Labyrinth Game version 1.0";

/// Largest edge length a map may declare in either dimension.
pub const MAX_MAP_DIMENSION: u32 = 100;

/// Contents of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Impassable wall, never part of an empty area.
    Wall,
    /// Open, unoccupied floor.
    Floor,
    /// Floor currently occupied by the player carrying the digit.
    Player(PlayerId),
}

impl Tile {
    /// Interprets a map character, rejecting anything outside the alphabet.
    #[must_use]
    pub fn from_char(value: char) -> Option<Self> {
        match value {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            digit => PlayerId::from_digit(digit).map(Self::Player),
        }
    }

    /// Serializes the tile back into its map character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Player(player) => player.as_char(),
        }
    }

    /// Reports whether the tile belongs to an empty area.
    ///
    /// Open floor and player-occupied floor both count: players stand on
    /// otherwise open cells and must not split a region in two.
    #[must_use]
    pub const fn is_empty_area(&self) -> bool {
        matches!(self, Self::Floor | Self::Player(_))
    }
}

/// Identifier carried by a player marker, restricted to the digits `0`-`9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates a player identifier from an ASCII digit character.
    #[must_use]
    pub const fn from_digit(value: char) -> Option<Self> {
        if value.is_ascii_digit() {
            Some(Self(value as u8 - b'0'))
        } else {
            None
        }
    }

    /// Retrieves the numeric value of the identifier.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Serializes the identifier back into its digit character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        (self.0 + b'0') as char
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Cardinal movement directions available to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Parses a command-line direction token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Applies the direction's unit offset to the provided cell.
    ///
    /// Returns `None` when the step would leave the grid through the top or
    /// left edge; the grid itself bounds the bottom and right edges.
    #[must_use]
    pub fn step_from(self, cell: CellCoord) -> Option<CellCoord> {
        let column = cell.column();
        let row = cell.row();
        match self {
            Self::Up => row.checked_sub(1).map(|row| CellCoord::new(column, row)),
            Self::Down => row.checked_add(1).map(|row| CellCoord::new(column, row)),
            Self::Left => column
                .checked_sub(1)
                .map(|column| CellCoord::new(column, row)),
            Self::Right => column
                .checked_add(1)
                .map(|column| CellCoord::new(column, row)),
        }
    }
}

/// Upper bounds on the dimensions a loaded map may declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLimits {
    max_columns: u32,
    max_rows: u32,
}

impl GridLimits {
    /// Creates explicit dimension limits.
    #[must_use]
    pub const fn new(max_columns: u32, max_rows: u32) -> Self {
        Self {
            max_columns,
            max_rows,
        }
    }

    /// Largest number of columns a map may declare.
    #[must_use]
    pub const fn max_columns(&self) -> u32 {
        self.max_columns
    }

    /// Largest number of rows a map may declare.
    #[must_use]
    pub const fn max_rows(&self) -> u32 {
        self.max_rows
    }
}

impl Default for GridLimits {
    fn default() -> Self {
        Self::new(MAX_MAP_DIMENSION, MAX_MAP_DIMENSION)
    }
}

/// Commands that express all permissible grid mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests that a player advance one step between two adjacent cells.
    MovePlayer {
        /// Digit identifying the player that moves.
        player: PlayerId,
        /// Cell the player currently occupies.
        from: CellCoord,
        /// Open floor cell the player steps into.
        to: CellCoord,
    },
    /// Requests that an absent player be placed onto an open floor cell.
    PlacePlayer {
        /// Digit identifying the player that appears.
        player: PlayerId,
        /// Open floor cell that receives the player.
        cell: CellCoord,
    },
}

/// Events broadcast by the grid after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a player moved between two adjacent cells.
    PlayerMoved {
        /// Digit identifying the player that moved.
        player: PlayerId,
        /// Cell the player occupied before the step.
        from: CellCoord,
        /// Cell the player occupies after completing the step.
        to: CellCoord,
    },
    /// Confirms that a player was placed onto the grid.
    PlayerPlaced {
        /// Digit identifying the player that appeared.
        player: PlayerId,
        /// Cell that received the player.
        cell: CellCoord,
    },
}

/// Reasons a map fails to load.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be opened or read.
    #[error("could not read map file")]
    NotFound(#[source] io::Error),
    /// The map text violates the structural contract.
    #[error("invalid map: {0}")]
    Invalid(MapDefect),
}

/// Structural violations detected while loading a map.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MapDefect {
    /// The source contained no map rows at all.
    #[error("the map contains no rows")]
    MissingRows,
    /// The first row declared more columns than the configured limit.
    #[error("the map is wider than {limit} columns")]
    TooManyColumns {
        /// Largest number of columns a map may declare.
        limit: u32,
    },
    /// The map declared more rows than the configured limit.
    #[error("the map is taller than {limit} rows")]
    TooManyRows {
        /// Largest number of rows a map may declare.
        limit: u32,
    },
    /// A row's length disagreed with the column count fixed by the first row.
    #[error("row {row} holds {found} characters, expected {expected}")]
    RaggedRow {
        /// One-based index of the offending row within the map text.
        row: u32,
        /// Column count fixed by the first row.
        expected: u32,
        /// Column count found on the offending row.
        found: u32,
    },
    /// A character outside `#`, `.` and the digits appeared.
    #[error("forbidden character '{found}' at row {row}, column {column}")]
    ForbiddenCharacter {
        /// One-based row of the offending character.
        row: u32,
        /// One-based column of the offending character.
        column: u32,
        /// Character that is not part of the map alphabet.
        found: char,
    },
}

/// Reasons a fully-loaded grid fails validation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The open floor splits into more than one 4-connected region.
    #[error("map contains more than one empty area")]
    MultipleEmptyAreas,
}

/// Reasons a requested player move cannot be planned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The direction token is not one of `up`, `down`, `left` or `right`.
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),
    /// The target cell lies outside the grid.
    #[error("move target lies outside the map")]
    OutOfBounds,
    /// The target cell is a wall or already occupied.
    #[error("move target is not open floor")]
    Blocked,
    /// No open floor cell exists to place an absent player.
    #[error("no open floor cell available for placement")]
    NoOpenFloor,
}
