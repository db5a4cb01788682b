//! Grid mechanics for the colored tiles puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Tile`: A single red or green cell.
//! - `Touch`: The coordinates of a touched cell, the only kind of move.
//! - `Grid`: The rectangular tile grid, including the touch rule and
//!   random scrambling from the solved grid.
use rand::Rng;
use std::fmt;

use crate::error::TilesError;

/// The color of one cell. The puzzle is solved when every cell is green.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Red,
    Green,
}

impl Tile {
    /// Converts the tile to its character in the puzzle file format.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiles_solver::engine::Tile;
    /// assert_eq!(Tile::Red.to_char(), 'R');
    /// assert_eq!(Tile::Green.to_char(), 'G');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Tile::Red => 'R',
            Tile::Green => 'G',
        }
    }

    /// Parses a tile character. Only `R` and `G` are recognized.
    pub fn from_char(ch: char) -> Option<Tile> {
        match ch {
            'R' => Some(Tile::Red),
            'G' => Some(Tile::Green),
            _ => None,
        }
    }

    /// Returns the other color.
    pub fn flipped(&self) -> Tile {
        match self {
            Tile::Red => Tile::Green,
            Tile::Green => Tile::Red,
        }
    }

    /// Returns the ANSI background color code for terminal output.
    fn to_ansi_color_code(&self) -> &'static str {
        match self {
            Tile::Red => "41",
            Tile::Green => "42",
        }
    }
}

/// A move: touch the cell at (`row`, `col`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Touch {
    pub row: usize,
    pub col: usize,
}

impl Touch {
    pub fn new(row: usize, col: usize) -> Self {
        Touch { row, col }
    }
}

impl fmt::Display for Touch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular grid of tiles, stored row-major.
///
/// Grids are small value types: search states own a copy each, and
/// equality and hashing compare the tiles only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a solved grid with every tile green.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new_green(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "a grid needs at least one cell");
        Grid {
            rows,
            cols,
            tiles: vec![Tile::Green; rows * cols],
        }
    }

    /// Creates a grid from rows of tiles.
    ///
    /// # Arguments
    /// * `rows`: The tile rows, top first. Every row must have the length of the first.
    ///
    /// # Returns
    /// The grid, or `TilesError::EmptyGrid` / `TilesError::RaggedRow` if the rows
    /// do not describe a non-empty rectangle.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, TilesError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(TilesError::EmptyGrid);
        }
        let nrows = rows.len();
        let mut tiles = Vec::with_capacity(nrows * cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(TilesError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            tiles.extend(row);
        }
        Ok(Grid {
            rows: nrows,
            cols,
            tiles,
        })
    }

    /// Creates a puzzle by touching `touches` uniformly random cells of a solved grid.
    ///
    /// Every puzzle made this way is solvable in at most `touches` moves. Touches
    /// may repeat or cancel out, so the optimal solution can be shorter.
    ///
    /// # Arguments
    /// * `rows`, `cols`: Grid dimensions, both non-zero.
    /// * `touches`: Number of random touches applied.
    /// * `rng`: Source of randomness; pass a seeded generator for reproducible puzzles.
    pub fn scrambled<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        touches: usize,
        rng: &mut R,
    ) -> Self {
        let mut grid = Grid::new_green(rows, cols);
        for _ in 0..touches {
            let r = rng.gen_range(0..rows);
            let c = rng.gen_range(0..cols);
            grid.touch(r, c);
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the grid.
    pub fn get_tile(&self, r: usize, c: usize) -> Tile {
        self.tiles[self.index(r, c)]
    }

    /// Sets the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the grid.
    pub fn set_tile(&mut self, r: usize, c: usize, tile: Tile) {
        let i = self.index(r, c);
        self.tiles[i] = tile;
    }

    fn index(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.rows && c < self.cols,
            "cell ({r}, {c}) is outside a {}x{} grid",
            self.rows,
            self.cols
        );
        r * self.cols + c
    }

    /// Flips the tile at (`r`, `c`) and each of its orthogonal neighbours that
    /// lies inside the grid.
    ///
    /// Touching the same cell twice restores the grid.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the grid.
    pub fn touch(&mut self, r: usize, c: usize) {
        self.flip(r, c);
        if r > 0 {
            self.flip(r - 1, c);
        }
        if r + 1 < self.rows {
            self.flip(r + 1, c);
        }
        if c > 0 {
            self.flip(r, c - 1);
        }
        if c + 1 < self.cols {
            self.flip(r, c + 1);
        }
    }

    /// Applies a [`Touch`].
    pub fn apply(&mut self, touch: Touch) {
        self.touch(touch.row, touch.col);
    }

    fn flip(&mut self, r: usize, c: usize) {
        let i = self.index(r, c);
        self.tiles[i] = self.tiles[i].flipped();
    }

    /// Every cell of the grid as a [`Touch`], in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Touch> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Touch::new(r, c)))
    }

    pub fn red_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Red).count()
    }

    pub fn green_count(&self) -> usize {
        self.tiles.len() - self.red_count()
    }

    /// `true` if every tile is green.
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(|&t| t == Tile::Green)
    }

    /// Generates a colored terminal rendering of the grid with an optional highlighted cell.
    ///
    /// The output includes row and column numbers and uses ANSI escape codes for
    /// tile colors. If `touch` is given, that cell is marked with `..`.
    ///
    /// # Arguments
    /// * `touch`: The cell to highlight, usually the move that produced this grid.
    ///
    /// # Returns
    /// A `String` suitable for terminal output, one line per row plus a header.
    pub fn to_string_with_highlight(&self, touch: Option<Touch>) -> String {
        let mut output = String::from("  ");
        for c in 0..self.cols {
            output.push_str(&format!("{:<2}", c));
        }
        output.push('\n');

        for r in 0..self.rows {
            output.push_str(&format!("{:<2}", r));
            for c in 0..self.cols {
                let is_highlight = touch == Some(Touch::new(r, c));
                let color_code = self.get_tile(r, c).to_ansi_color_code();
                let content = if is_highlight { ".." } else { "  " };
                output.push_str(&format!("\x1b[1;{};m{}\x1b[m", color_code, content));
            }
            if r + 1 < self.rows {
                output.push('\n');
            }
        }
        output
    }
}

impl fmt::Display for Grid {
    /// Formats the grid as rows of `R`/`G` characters, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.tiles.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid_from_str_array;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_green_is_solved() {
        let grid = Grid::new_green(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(grid.is_solved());
        assert_eq!(grid.red_count(), 0);
        assert_eq!(grid.green_count(), 12);
    }

    #[test]
    fn test_tile_chars() {
        assert_eq!(Tile::from_char('R'), Some(Tile::Red));
        assert_eq!(Tile::from_char('G'), Some(Tile::Green));
        assert_eq!(Tile::from_char('.'), None);
        assert_eq!(Tile::Red.flipped(), Tile::Green);
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert!(matches!(Grid::from_rows(vec![]), Err(TilesError::EmptyGrid)));
        assert!(matches!(
            Grid::from_rows(vec![vec![Tile::Red, Tile::Red], vec![Tile::Red]]),
            Err(TilesError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_touch_center_flips_plus_shape() {
        let mut grid = Grid::new_green(3, 3);
        grid.touch(1, 1);
        assert_eq!(grid.to_string(), "GRG\nRRR\nGRG");
        assert_eq!(grid.red_count(), 5);
    }

    #[test]
    fn test_touch_corner_stays_in_bounds() {
        let mut grid = Grid::new_green(3, 3);
        grid.touch(0, 0);
        assert_eq!(grid.to_string(), "RRG\nRGG\nGGG");
        grid.touch(2, 2);
        assert_eq!(grid.to_string(), "RRG\nRGR\nGRR");
    }

    #[test]
    fn test_touch_on_wide_grid_uses_column_bound() {
        let mut grid = Grid::new_green(2, 5);
        grid.touch(0, 4);
        assert_eq!(grid.to_string(), "GGGRR\nGGGGR");
        grid.touch(1, 2);
        assert_eq!(grid.to_string(), "GGRRR\nGRRRR");
    }

    #[test]
    fn test_touch_twice_is_identity() {
        let start = grid_from_str_array(&["RGR", "GGR", "RRG"]).unwrap();
        for touch in start.cells() {
            let mut grid = start.clone();
            grid.apply(touch);
            assert_ne!(grid, start);
            grid.apply(touch);
            assert_eq!(grid, start);
        }
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new_green(2, 2);
        let cells: Vec<Touch> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                Touch::new(0, 0),
                Touch::new(0, 1),
                Touch::new(1, 0),
                Touch::new(1, 1)
            ]
        );
        assert_eq!(cells[2].to_string(), "(1, 0)");
    }

    #[test]
    fn test_scrambled_is_deterministic_per_seed() {
        let a = Grid::scrambled(4, 4, 6, &mut SmallRng::seed_from_u64(7));
        let b = Grid::scrambled(4, 4, 6, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.rows(), 4);
        assert!(Grid::scrambled(4, 4, 0, &mut SmallRng::seed_from_u64(7)).is_solved());
    }

    #[test]
    fn test_highlight_rendering() {
        let grid = grid_from_str_array(&["RG", "GG"]).unwrap();
        let shown = grid.to_string_with_highlight(Some(Touch::new(0, 0)));
        assert!(shown.starts_with("  0 1 "));
        assert_eq!(shown.lines().count(), 3);
        assert!(shown.contains("\x1b[1;41;m..\x1b[m"));
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 grid")]
    fn test_get_tile_out_of_bounds_panics() {
        Grid::new_green(2, 2).get_tile(2, 0);
    }
}
