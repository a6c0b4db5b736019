//! Word directions and cell runs.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    str::FromStr,
};

use crate::Position;

/// The direction a word runs in the grid.
///
/// # Examples
///
/// ```
/// use crossword_core::Direction;
///
/// let direction: Direction = "Across".parse().unwrap();
/// assert_eq!(direction, Direction::Across);
/// assert_eq!(direction.other(), Direction::Down);
/// assert_eq!(Direction::Down.to_string(), "Down");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the perpendicular direction.
    #[must_use]
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the label used in puzzle files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Across => "Across",
            Self::Down => "Down",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a direction label is neither `Across` nor `Down`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid direction label: {label:?} (expected \"Across\" or \"Down\")")]
pub struct ParseDirectionError {
    label: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|direction| direction.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseDirectionError {
                label: s.to_owned(),
            })
    }
}

/// Returns an iterator over the `length` cells of a run starting at `start`.
///
/// The run steps the column for [`Direction::Across`] and the row for
/// [`Direction::Down`].
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Position, cells};
///
/// let run: Vec<_> = cells(Position::new(1, 1), Direction::Across, 3).collect();
/// assert_eq!(
///     run,
///     [Position::new(1, 1), Position::new(1, 2), Position::new(1, 3)]
/// );
/// ```
#[must_use]
#[inline]
pub fn cells(start: Position, direction: Direction, length: usize) -> Cells {
    Cells {
        start,
        direction,
        front: 0,
        back: length,
    }
}

/// Iterator over the cells of a straight run. Created by [`cells`].
#[derive(Debug, Clone)]
pub struct Cells {
    start: Position,
    direction: Direction,
    front: usize,
    back: usize,
}

impl Iterator for Cells {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.start.step(self.direction, self.front);
        self.front += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Cells {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.start.step(self.direction, self.back))
    }
}

impl FusedIterator for Cells {}
impl ExactSizeIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("Across".parse::<Direction>(), Ok(Direction::Across));
        assert_eq!("Down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(" down ".parse::<Direction>(), Ok(Direction::Down));
        assert!("Diagonal".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_parse_error_message() {
        let err = "Sideways".parse::<Direction>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid direction label: \"Sideways\" (expected \"Across\" or \"Down\")"
        );
    }

    #[test]
    fn test_cells_down() {
        let run: Vec<_> = cells(Position::new(0, 2), Direction::Down, 3).collect();
        assert_eq!(
            run,
            [
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_cells_empty_run() {
        assert_eq!(cells(Position::new(5, 5), Direction::Across, 0).count(), 0);
    }

    #[test]
    fn test_cells_both_ends() {
        let mut iter = cells(Position::new(0, 0), Direction::Across, 4);
        assert_eq!(iter.next(), Some(Position::new(0, 0)));
        assert_eq!(iter.next_back(), Some(Position::new(0, 3)));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back(), Some(Position::new(0, 2)));
        assert_eq!(iter.next(), Some(Position::new(0, 1)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}
