//! Grid cell coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A zero-based `(row, col)` coordinate of a single grid cell.
///
/// Positions are plain values: two positions are equal when both fields are
/// equal, and they order row-major (top to bottom, then left to right).
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 3);
///
/// assert_eq!(pos.step(Direction::Across, 2), Position::new(2, 5));
/// assert_eq!(pos.step(Direction::Down, 2), Position::new(4, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position `n` cells further along `direction`.
    ///
    /// [`Direction::Across`] advances the column, [`Direction::Down`] advances the row.
    ///
    /// # Panics
    ///
    /// Panics if the advanced coordinate overflows `usize`.
    #[must_use]
    #[inline]
    pub const fn step(self, direction: Direction, n: usize) -> Self {
        match self.checked_step(direction, n) {
            Some(pos) => pos,
            None => panic!("position step overflows usize"),
        }
    }

    /// Like [`Position::step`], but returns `None` on overflow.
    #[must_use]
    #[inline]
    pub const fn checked_step(self, direction: Direction, n: usize) -> Option<Self> {
        match direction {
            Direction::Across => match self.col.checked_add(n) {
                Some(col) => Some(Self::new(self.row, col)),
                None => None,
            },
            Direction::Down => match self.row.checked_add(n) {
                Some(row) => Some(Self::new(row, self.col)),
                None => None,
            },
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
