use std::fmt;

use super::cell::Cell;

/// Rectangular grid of cells with row 0 at the bottom.
///
/// The grid is taller than the visible play area: hidden rows above the
/// visible height give pieces room to spawn and to be pushed upward by
/// wall kicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    full_height: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// # Panics
    ///
    /// Panics unless both dimensions are positive.
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub fn new(width: i32, full_height: i32) -> Self {
        assert!(width > 0 && full_height > 0);
        Self {
            width,
            full_height,
            cells: vec![Cell::Empty; (width * full_height) as usize],
        }
    }

    /// Columns in the grid.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Total rows, including the hidden rows above the visible area.
    #[must_use]
    pub const fn full_height(&self) -> i32 {
        self.full_height
    }

    #[must_use]
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        0 <= x && x < self.width && 0 <= y && y < self.full_height
    }

    #[expect(clippy::cast_sign_loss)]
    const fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// The cell at `(x, y)`, or `Empty` outside the grid.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).map_or(Cell::Empty, |i| self.cells[i])
    }

    /// Writes a cell; out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    #[must_use]
    pub fn is_row_full(&self, y: i32) -> bool {
        (0..self.width).all(|x| self.cell(x, y).is_full())
    }

    /// Removes row `y`, shifting every row above it down one and leaving
    /// the top row empty.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the grid.
    #[expect(clippy::cast_sign_loss)]
    pub fn shift_rows_down(&mut self, y: i32) {
        assert!(0 <= y && y < self.full_height);
        let width = self.width as usize;
        let start = (y as usize) * width;
        self.cells.copy_within(start + width.., start);
        let len = self.cells.len();
        self.cells[len - width..].fill(Cell::Empty);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.full_height).rev() {
            for x in 0..self.width {
                write!(f, "{}", self.cell(x, y).as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::PieceColor;

    const FULL: Cell = Cell::Full(PieceColor::J);

    fn fill_row(board: &mut Board, y: i32) {
        for x in 0..board.width() {
            board.set(x, y, FULL);
        }
    }

    #[test]
    fn out_of_range_reads_are_empty() {
        let board = Board::new(4, 6);
        assert_eq!(board.cell(-1, 0), Cell::Empty);
        assert_eq!(board.cell(0, -1), Cell::Empty);
        assert_eq!(board.cell(4, 0), Cell::Empty);
        assert_eq!(board.cell(0, 6), Cell::Empty);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut board = Board::new(4, 6);
        let before = board.clone();
        board.set(-1, 3, FULL);
        board.set(4, 3, FULL);
        board.set(2, 6, FULL);
        assert_eq!(board, before);
    }

    #[test]
    fn row_fullness() {
        let mut board = Board::new(4, 6);
        assert!(!board.is_row_full(0));
        fill_row(&mut board, 0);
        assert!(board.is_row_full(0));
        board.set(2, 0, Cell::Shadow);
        assert!(!board.is_row_full(0), "shadow cells do not fill a row");
    }

    #[test]
    fn shift_rows_down_drops_everything_above() {
        let mut board = Board::new(3, 4);
        fill_row(&mut board, 1);
        board.set(0, 2, FULL);
        board.set(2, 3, FULL);

        board.shift_rows_down(1);

        assert_eq!(board.cell(0, 1), FULL);
        assert!((0..3).all(|x| board.cell(x, 0) == Cell::Empty));
        assert_eq!(board.cell(2, 2), FULL);
        assert!((0..3).all(|x| board.cell(x, 3) == Cell::Empty));
    }

    #[test]
    fn shift_rows_down_at_the_top_just_clears_the_row() {
        let mut board = Board::new(3, 4);
        fill_row(&mut board, 3);
        board.shift_rows_down(3);
        assert!((0..3).all(|x| board.cell(x, 3) == Cell::Empty));
    }

    #[test]
    fn display_renders_top_row_first() {
        let mut board = Board::new(2, 2);
        board.set(0, 1, Cell::Full(PieceColor::T));
        board.set(1, 0, Cell::Shadow);
        assert_eq!(board.to_string(), "T.\n.+\n");
    }
}
