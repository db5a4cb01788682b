use std::fs;
use std::path::Path;

use log::debug;

use crate::engine::{Grid, Tile};
use crate::error::TilesError;

/// Parses an array of string slices into a [`Grid`].
///
/// Each string slice is one row, starting from row 0. All rows must have the
/// same length, and only `R` (red) and `G` (green) are valid tile characters.
/// Trailing whitespace on a row is ignored.
///
/// # Arguments
/// * `s`: The rows of the grid, top first.
///
/// # Returns
/// * `Ok(Grid)` if parsing is successful.
/// * `Err(TilesError)` if:
///     - `s` is empty or its first row is empty (`EmptyGrid`).
///     - A row's length differs from the first row's (`RaggedRow`).
///     - A character other than `R` or `G` is encountered (`InvalidTile`).
///
/// # Examples
/// ```
/// use tiles_solver::engine::Tile;
/// use tiles_solver::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&["RG", "GG"]).unwrap();
/// assert_eq!(grid.get_tile(0, 0), Tile::Red);
/// assert_eq!(grid.get_tile(1, 1), Tile::Green);
/// assert_eq!(grid.red_count(), 1);
///
/// assert!(grid_from_str_array(&["RXG"]).is_err());
/// assert!(grid_from_str_array(&["RG", "G"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid, TilesError> {
    let mut rows = Vec::with_capacity(s.len());
    for (r, row_str) in s.iter().enumerate() {
        let row = row_str
            .trim_end()
            .chars()
            .enumerate()
            .map(|(c, ch)| {
                Tile::from_char(ch).ok_or(TilesError::InvalidTile { ch, row: r, col: c })
            })
            .collect::<Result<Vec<Tile>, _>>()?;
        rows.push(row);
    }
    Grid::from_rows(rows)
}

/// Parses every puzzle in a puzzle file's contents.
///
/// A puzzle is a line holding the number of rows `N`, followed by `N` rows of
/// `R`/`G` characters. Blank lines between puzzles are skipped.
///
/// # Returns
/// The puzzles in file order, or the first error found. Line numbers in
/// errors are 1-based.
pub fn parse_puzzles(text: &str) -> Result<Vec<Grid>, TilesError> {
    let mut puzzles = Vec::new();
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

    while let Some((line_no, header)) = lines.next() {
        if header.is_empty() {
            continue;
        }
        let dims: usize = match header.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(TilesError::InvalidDimension {
                    line: line_no,
                    text: header.to_string(),
                })
            }
        };

        let rows: Vec<&str> = lines.by_ref().take(dims).map(|(_, row)| row).collect();
        if rows.len() < dims {
            return Err(TilesError::TruncatedPuzzle {
                line: line_no,
                expected: dims,
                found: rows.len(),
            });
        }
        puzzles.push(grid_from_str_array(&rows)?);
    }

    debug!("parsed {} puzzles", puzzles.len());
    Ok(puzzles)
}

/// Reads and parses a puzzle file. See [`parse_puzzles`] for the format.
pub fn read_puzzles<P: AsRef<Path>>(path: P) -> Result<Vec<Grid>, TilesError> {
    let text = fs::read_to_string(path.as_ref())?;
    debug!("read {} bytes from {}", text.len(), path.as_ref().display());
    parse_puzzles(&text)
}

/// Formats a grid as one puzzle of the puzzle file format, ending with a newline.
///
/// # Examples
/// ```
/// use tiles_solver::engine::Grid;
/// use tiles_solver::utils::format_puzzle;
///
/// assert_eq!(format_puzzle(&Grid::new_green(2, 2)), "2\nGG\nGG\n");
/// ```
pub fn format_puzzle(grid: &Grid) -> String {
    format!("{}\n{}\n", grid.rows(), grid)
}
