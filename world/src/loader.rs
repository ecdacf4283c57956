//! Map loading with strict shape and alphabet checks.
//!
//! The loader consumes the source line by line, stripping only trailing
//! carriage-return and newline characters. Lines that become empty after
//! stripping are blank separators and do not count as rows. The first
//! non-blank line fixes the column count for the whole map.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use labyrinth_core::{GridLimits, MapDefect, MapError, Tile};

use crate::Grid;

/// Loads a map from the filesystem, enforcing the provided dimension limits.
///
/// The file handle is released on every exit path; a failed load retains no
/// partial state.
pub fn load_from_path(path: &Path, limits: GridLimits) -> Result<Grid, MapError> {
    let file = File::open(path).map_err(MapError::NotFound)?;
    parse(BufReader::new(file), limits)
}

/// Parses map text from any buffered reader.
///
/// The source is consumed as raw bytes, not UTF-8: a byte outside the map
/// alphabet is a map defect, never an I/O failure.
pub fn parse<R: BufRead>(reader: R, limits: GridLimits) -> Result<Grid, MapError> {
    let mut columns: u32 = 0;
    let mut rows: u32 = 0;
    let mut tiles: Vec<Tile> = Vec::new();

    for line in reader.split(b'\n') {
        let mut bytes = line.map_err(MapError::NotFound)?;
        while matches!(bytes.last(), Some(b'\r' | b'\n')) {
            let _ = bytes.pop();
        }
        if bytes.is_empty() {
            continue;
        }

        let found = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        if rows == 0 {
            if found > limits.max_columns() {
                return Err(MapError::Invalid(MapDefect::TooManyColumns {
                    limit: limits.max_columns(),
                }));
            }
            columns = found;
        } else if found != columns {
            return Err(MapError::Invalid(MapDefect::RaggedRow {
                row: rows + 1,
                expected: columns,
                found,
            }));
        }

        if rows == limits.max_rows() {
            return Err(MapError::Invalid(MapDefect::TooManyRows {
                limit: limits.max_rows(),
            }));
        }

        for (offset, byte) in bytes.iter().enumerate() {
            let value = char::from(*byte);
            let tile = Tile::from_char(value).ok_or(MapError::Invalid(
                MapDefect::ForbiddenCharacter {
                    row: rows + 1,
                    column: offset as u32 + 1,
                    found: value,
                },
            ))?;
            tiles.push(tile);
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(MapError::Invalid(MapDefect::MissingRows));
    }

    Ok(Grid::new(columns, rows, tiles))
}
