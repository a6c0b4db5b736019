//! Accumulated per-cell letters.
//!
//! [`GridState`] records, for every cell of the `rows x cols` rectangle, the
//! set of letters that submissions have written into it. Blocked cells are
//! stored too and simply stay empty. The state is reset at the start of every
//! submission batch and then filled by the scorer; renderers only read it.
//!
//! # Examples
//!
//! ```
//! use crossword_core::{GridDimensions, GridState, Position};
//!
//! let mut grid = GridState::new(GridDimensions::new(3, 3));
//! let pos = Position::new(0, 0);
//!
//! grid.add_letter(pos, 'c');
//! grid.add_letter(pos, 'C');
//! grid.add_letter(pos, 'k');
//! assert_eq!(grid.letters_at(pos).to_string(), "C, K");
//!
//! grid.reset();
//! assert!(grid.is_clear());
//! ```

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::{LetterSet, Position};

/// Size of the puzzle rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl GridDimensions {
    /// Creates dimensions from a row and column count.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns `true` if `pos` lies inside the rectangle.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Largest number of cells a puzzle grid may have.
    pub const MAX_CELLS: usize = 1 << 20;

    /// Returns the total number of cells.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows `usize`.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        match self.checked_cell_count() {
            Some(count) => count,
            None => panic!("grid cell count overflows usize"),
        }
    }

    /// Returns the total number of cells, or `None` on overflow.
    #[must_use]
    pub const fn checked_cell_count(self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Returns every position in row-major order.
    pub fn positions(self) -> impl DoubleEndedIterator<Item = Position> + Clone {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }
}

impl Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Per-cell letter sets accumulated across the words of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    dimensions: GridDimensions,
    cells: Vec<LetterSet>,
}

impl GridState {
    /// Creates a grid with an empty letter set for every cell.
    #[must_use]
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![LetterSet::new(); dimensions.cell_count()],
        }
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Empties every cell, keeping the dimensions.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Empties every cell and re-dimensions the grid.
    pub fn reset_to(&mut self, dimensions: GridDimensions) {
        self.dimensions = dimensions;
        self.cells.clear();
        self.cells
            .resize(dimensions.cell_count(), LetterSet::new());
    }

    /// Records `letter` (upper-cased) at `pos`.
    ///
    /// Returns `true` if the letter was not yet present there. Adding the same
    /// letter again leaves the cell unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn add_letter(&mut self, pos: Position, letter: char) -> bool {
        let index = self.index_of(pos);
        self.cells[index].insert(letter)
    }

    /// Returns the letters recorded at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn letters_at(&self, pos: Position) -> &LetterSet {
        &self.cells[self.index_of(pos)]
    }

    /// Returns the letters recorded at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&LetterSet> {
        self.dimensions
            .contains(pos)
            .then(|| &self.cells[pos.row * self.dimensions.cols + pos.col])
    }

    /// Returns `true` if no cell holds a letter.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(LetterSet::is_empty)
    }

    /// Returns every cell with its letters in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &LetterSet)> {
        self.dimensions.positions().zip(&self.cells)
    }

    fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.dimensions.contains(pos),
            "position {pos} is outside the {} grid",
            self.dimensions
        );
        pos.row * self.dimensions.cols + pos.col
    }
}

impl Index<Position> for GridState {
    type Output = LetterSet;

    fn index(&self, pos: Position) -> &Self::Output {
        self.letters_at(pos)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_grid_is_clear() {
        let grid = GridState::new(GridDimensions::new(2, 4));
        assert!(grid.is_clear());
        assert_eq!(grid.iter().count(), 8);
        assert!(grid.letters_at(Position::new(1, 3)).is_empty());
    }

    #[test]
    fn test_checked_cell_count() {
        assert_eq!(GridDimensions::new(3, 5).checked_cell_count(), Some(15));
        assert_eq!(GridDimensions::new(usize::MAX, 2).checked_cell_count(), None);
    }

    #[test]
    fn test_add_letter_upper_cases() {
        let mut grid = GridState::new(GridDimensions::new(1, 1));
        assert!(grid.add_letter(Position::new(0, 0), 'q'));
        assert!(grid[Position::new(0, 0)].contains('Q'));
        assert_eq!(grid[Position::new(0, 0)].to_string(), "Q");
    }

    #[test]
    fn test_conflicting_letters_accumulate() {
        let mut grid = GridState::new(GridDimensions::new(2, 2));
        let pos = Position::new(1, 0);
        grid.add_letter(pos, 'A');
        grid.add_letter(pos, 'B');
        assert_eq!(grid.letters_at(pos).len(), 2);
        assert!(grid.letters_at(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_reset_keeps_dimensions() {
        let mut grid = GridState::new(GridDimensions::new(3, 2));
        grid.add_letter(Position::new(2, 1), 'x');
        grid.reset();
        assert!(grid.is_clear());
        assert_eq!(grid.dimensions(), GridDimensions::new(3, 2));
    }

    #[test]
    fn test_reset_to_redimensions() {
        let mut grid = GridState::new(GridDimensions::new(1, 1));
        grid.add_letter(Position::new(0, 0), 'x');
        grid.reset_to(GridDimensions::new(4, 5));
        assert!(grid.is_clear());
        assert_eq!(grid.iter().count(), 20);
        assert!(grid.get(Position::new(3, 4)).is_some());
        assert!(grid.get(Position::new(4, 0)).is_none());
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = GridState::new(GridDimensions::new(2, 2));
        let positions: Vec<_> = grid.iter().map(|(pos, _)| pos).collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
    }

    #[test]
    #[should_panic(expected = "is outside the 2x2 grid")]
    fn test_add_letter_out_of_bounds_panics() {
        let mut grid = GridState::new(GridDimensions::new(2, 2));
        grid.add_letter(Position::new(0, 2), 'a');
    }

    proptest! {
        #[test]
        fn prop_add_letter_idempotent(
            row in 0usize..5,
            col in 0usize..5,
            letter in proptest::char::range('a', 'z'),
        ) {
            let pos = Position::new(row, col);
            let mut once = GridState::new(GridDimensions::new(5, 5));
            once.add_letter(pos, letter);
            let mut twice = once.clone();
            prop_assert!(!twice.add_letter(pos, letter));
            prop_assert_eq!(once, twice);
        }
    }
}
