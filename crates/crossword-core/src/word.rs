//! Puzzle words and their geometry.

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use crate::{Cells, Direction, Position, cells};

/// The clue ordinal of a word, unique across a puzzle.
pub type WordNumber = u32;

/// Errors raised by malformed word definitions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The solution text has no characters.
    #[display("word {number} has an empty solution")]
    EmptyText {
        /// Number of the offending word.
        number: WordNumber,
    },
    /// The word runs past the largest addressable cell coordinate.
    #[display("word {number} starting at {position} runs past the last addressable cell")]
    ExtentOverflow {
        /// Number of the offending word.
        number: WordNumber,
        /// Start cell of the word.
        position: Position,
    },
    /// The computed intersection offset falls outside the other word's text.
    #[display(
        "intersection of word {number} with word {other} falls outside word {other} (offset {offset}, length {length})"
    )]
    IntersectionOutOfRange {
        /// Number of the word the intersection was computed from.
        number: WordNumber,
        /// Number of the word whose text was indexed.
        other: WordNumber,
        /// The signed offset into the other word's text.
        offset: isize,
        /// Length of the other word's text.
        length: usize,
    },
}

/// A single clue-and-answer entry occupying a straight run of cells.
///
/// A word is immutable once constructed. Two words are equal when they occupy
/// the same slot (start position and direction); the clue number is an
/// identity key for lookups but takes no part in equality.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Position, Word};
///
/// let word = Word::new(Position::new(0, 1), Direction::Down, "COW", "Dairy animal", 2)?;
/// assert_eq!(word.len(), 3);
/// assert_eq!(word.end_position(), Position::new(2, 1));
/// assert_eq!(word.display_clue().to_string(), "2. Dairy animal (3)");
/// # Ok::<(), crossword_core::WordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Word {
    position: Position,
    direction: Direction,
    text: String,
    clue: String,
    number: WordNumber,
    length: usize,
}

impl Word {
    /// Creates a word.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::EmptyText`] if `text` is empty, and
    /// [`WordError::ExtentOverflow`] if the cell just past the word's end is not
    /// representable.
    pub fn new(
        position: Position,
        direction: Direction,
        text: impl Into<String>,
        clue: impl Into<String>,
        number: WordNumber,
    ) -> Result<Self, WordError> {
        let text = text.into();
        let length = text.chars().count();
        if length == 0 {
            return Err(WordError::EmptyText { number });
        }
        if position.checked_step(direction, length).is_none() {
            return Err(WordError::ExtentOverflow { number, position });
        }
        Ok(Self {
            position,
            direction,
            text,
            clue: clue.into(),
            number,
            length,
        })
    }

    /// Returns the start cell.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the solution text as stored.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Returns the clue number.
    #[must_use]
    pub fn number(&self) -> WordNumber {
        self.number
    }

    /// Returns the number of characters in the solution.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Always `false`: words are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the last cell occupied by this word.
    #[must_use]
    pub fn end_position(&self) -> Position {
        self.position.step(self.direction, self.length - 1)
    }

    /// Returns the occupied cells from the start cell to the end cell.
    #[must_use]
    pub fn cells(&self) -> Cells {
        cells(self.position, self.direction, self.length)
    }

    /// Returns the offset of `pos` within this word, if the word occupies it.
    #[must_use]
    pub fn offset_of(&self, pos: Position) -> Option<usize> {
        let (fixed, start, moving) = match self.direction {
            Direction::Across => (pos.row == self.position.row, self.position.col, pos.col),
            Direction::Down => (pos.col == self.position.col, self.position.row, pos.row),
        };
        let offset = moving.checked_sub(start)?;
        (fixed && offset < self.length).then_some(offset)
    }

    /// Returns the solution letter this word places at `pos`, if it occupies it.
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.offset_of(pos)
            .and_then(|offset| self.text.chars().nth(offset))
    }

    /// Bounding-box intersection test.
    ///
    /// Returns `true` when the directions differ and the start of one word lies
    /// within the row span of the other while the other's column span brackets
    /// its start column. For straight runs this agrees with [`Word::crossing`],
    /// which also returns the shared cell.
    ///
    /// ```
    /// use crossword_core::{Direction, Position, Word};
    ///
    /// let cat = Word::new(Position::new(0, 0), Direction::Across, "CAT", "", 1)?;
    /// let cow = Word::new(Position::new(0, 0), Direction::Down, "COW", "", 1)?;
    /// let tea = Word::new(Position::new(1, 0), Direction::Across, "TEA", "", 3)?;
    /// assert!(cat.intersects(&cow));
    /// assert!(!cat.intersects(&tea));
    /// # Ok::<(), crossword_core::WordError>(())
    /// ```
    #[must_use]
    pub fn intersects(&self, other: &Word) -> bool {
        if self.direction == other.direction {
            return false;
        }
        Self::brackets(self, other) || Self::brackets(other, self)
    }

    fn brackets(a: &Word, b: &Word) -> bool {
        let a_end = a.end_position();
        let b_end = b.end_position();
        (a.position.row..=a_end.row).contains(&b.position.row)
            && (b.position.col..=b_end.col).contains(&a.position.col)
    }

    /// Returns the cell shared with `other`, checked against both cell runs.
    ///
    /// Returns `None` for same-direction words and for perpendicular words whose
    /// runs do not meet.
    #[must_use]
    pub fn crossing(&self, other: &Word) -> Option<Position> {
        let (across, down) = match (self.direction, other.direction) {
            (Direction::Across, Direction::Down) => (self, other),
            (Direction::Down, Direction::Across) => (other, self),
            _ => return None,
        };
        let pos = Position::new(across.position.row, down.position.col);
        (across.offset_of(pos).is_some() && down.offset_of(pos).is_some()).then_some(pos)
    }

    /// Returns the projected intersection cell with `other`.
    ///
    /// For an across word this is `(other.row, self.col)`, for a down word
    /// `(self.row, other.col)`. The result is only meaningful when
    /// [`Word::intersects`] holds; it is computed regardless.
    #[must_use]
    pub fn intersection(&self, other: &Word) -> Position {
        match self.direction {
            Direction::Across => Position::new(other.position.row, self.position.col),
            Direction::Down => Position::new(self.position.row, other.position.col),
        }
    }

    /// Returns the letter of `other` at the projected intersection cell.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::IntersectionOutOfRange`] if the offset computed from
    /// [`Word::intersection`] falls outside `other`'s text. This indicates an
    /// inconsistent puzzle definition.
    pub fn intersection_letter(&self, other: &Word) -> Result<char, WordError> {
        let intersection = self.intersection(other);
        let (at, start) = match self.direction {
            Direction::Across => (intersection.col, other.position.col),
            Direction::Down => (intersection.row, other.position.row),
        };
        let out_of_range = || WordError::IntersectionOutOfRange {
            number: self.number,
            other: other.number,
            offset: signed_offset(at, start),
            length: other.length,
        };
        let offset = at.checked_sub(start).ok_or_else(out_of_range)?;
        other.text.chars().nth(offset).ok_or_else(out_of_range)
    }

    /// Returns a displayable `"{number}. {clue} ({length})"` label.
    #[must_use]
    pub fn display_clue(&self) -> DisplayClue<'_> {
        DisplayClue { word: self }
    }
}

#[expect(clippy::cast_possible_wrap)]
fn signed_offset(at: usize, start: usize) -> isize {
    at as isize - start as isize
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.direction == other.direction
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.direction.hash(state);
    }
}

/// Clue label of a [`Word`]. Created by [`Word::display_clue`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayClue<'a> {
    word: &'a Word,
}

impl Display for DisplayClue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} ({})",
            self.word.number, self.word.clue, self.word.length
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn word(row: usize, col: usize, direction: Direction, text: &str, number: u32) -> Word {
        Word::new(Position::new(row, col), direction, text, "clue", number).unwrap()
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Across), Just(Direction::Down)]
    }

    fn arb_word() -> impl Strategy<Value = Word> {
        (0usize..12, 0usize..12, arb_direction(), "[A-Z]{1,8}", 1u32..50).prop_map(
            |(row, col, direction, text, number)| word(row, col, direction, &text, number),
        )
    }

    #[test]
    fn test_rejects_empty_text() {
        let err = Word::new(Position::new(0, 0), Direction::Across, "", "clue", 4).unwrap_err();
        assert_eq!(err, WordError::EmptyText { number: 4 });
    }

    #[test]
    fn test_rejects_overflowing_extent() {
        let start = Position::new(usize::MAX - 2, 0);
        let err = Word::new(start, Direction::Down, "COW", "clue", 2).unwrap_err();
        assert_eq!(err, WordError::ExtentOverflow { number: 2, position: start });
        assert!(Word::new(start, Direction::Down, "OX", "clue", 2).is_ok());
        assert!(Word::new(start, Direction::Across, "COW", "clue", 2).is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        let w = word(0, 0, Direction::Across, "ÉTÉ", 1);
        assert_eq!(w.len(), 3);
        assert_eq!(w.end_position(), Position::new(0, 2));
    }

    #[test]
    fn test_end_position() {
        assert_eq!(
            word(2, 3, Direction::Across, "CAT", 1).end_position(),
            Position::new(2, 5)
        );
        assert_eq!(
            word(2, 3, Direction::Down, "CAT", 1).end_position(),
            Position::new(4, 3)
        );
    }

    #[test]
    fn test_equality_ignores_number_and_text() {
        let a = word(1, 1, Direction::Across, "CAT", 1);
        let b = word(1, 1, Direction::Across, "DOG", 7);
        let c = word(1, 1, Direction::Down, "CAT", 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_offset_and_letter_at() {
        let w = word(1, 2, Direction::Down, "COW", 1);
        assert_eq!(w.offset_of(Position::new(1, 2)), Some(0));
        assert_eq!(w.offset_of(Position::new(3, 2)), Some(2));
        assert_eq!(w.offset_of(Position::new(4, 2)), None);
        assert_eq!(w.offset_of(Position::new(0, 2)), None);
        assert_eq!(w.offset_of(Position::new(2, 3)), None);
        assert_eq!(w.letter_at(Position::new(2, 2)), Some('O'));
    }

    #[test]
    fn test_shared_start_intersection() {
        let cat = word(0, 0, Direction::Across, "CAT", 1);
        let cow = word(0, 0, Direction::Down, "COW", 1);
        assert!(cat.intersects(&cow));
        assert_eq!(cat.intersection(&cow), Position::new(0, 0));
        assert_eq!(cat.intersection_letter(&cow), Ok('C'));
        assert_eq!(cow.intersection_letter(&cat), Ok('C'));
        assert_eq!(cat.crossing(&cow), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_intersection_projection() {
        // Down word starting on the across word's row, inside its span.
        let across = word(2, 0, Direction::Across, "PLANE", 1);
        let down = word(2, 3, Direction::Down, "NET", 2);
        assert!(across.intersects(&down));
        assert_eq!(down.intersection(&across), Position::new(2, 0));
        assert_eq!(down.intersection_letter(&across), Ok('P'));
        assert_eq!(across.crossing(&down), Some(Position::new(2, 3)));
    }

    #[test]
    fn test_intersection_letter_out_of_range() {
        let across = word(0, 0, Direction::Across, "AB", 1);
        let down = word(0, 5, Direction::Down, "XYZ", 2);
        let err = across.intersection_letter(&down).unwrap_err();
        assert_eq!(
            err,
            WordError::IntersectionOutOfRange {
                number: 1,
                other: 2,
                offset: -5,
                length: 3,
            }
        );
    }

    #[test]
    fn test_near_miss_does_not_intersect() {
        let across = word(1, 1, Direction::Across, "AB", 1);
        let down = word(0, 0, Direction::Down, "XYZ", 2);
        assert!(!across.intersects(&down));
        assert_eq!(across.crossing(&down), None);

        let across = word(3, 0, Direction::Across, "AB", 1);
        let down = word(0, 0, Direction::Down, "XYZ", 2);
        assert!(!across.intersects(&down));
        assert_eq!(across.crossing(&down), None);
    }

    #[test]
    fn test_display_clue() {
        let w = Word::new(Position::new(0, 0), Direction::Across, "CAT", "Feline", 12).unwrap();
        assert_eq!(w.display_clue().to_string(), "12. Feline (3)");
    }

    proptest! {
        #[test]
        fn prop_cells_shape(w in arb_word()) {
            let cells: Vec<_> = w.cells().collect();
            prop_assert_eq!(cells.len(), w.len());
            prop_assert_eq!(cells[0], w.position());
            prop_assert_eq!(*cells.last().unwrap(), w.end_position());
            for (i, cell) in cells.iter().enumerate() {
                prop_assert_eq!(w.offset_of(*cell), Some(i));
            }
        }

        #[test]
        fn prop_intersects_symmetric(a in arb_word(), b in arb_word()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
            prop_assert_eq!(a.crossing(&b), b.crossing(&a));
            prop_assert_eq!(a.intersects(&b), a.crossing(&b).is_some());
        }

        #[test]
        fn prop_same_direction_never_intersects(
            a in arb_word(),
            row in 0usize..12,
            col in 0usize..12,
            text in "[A-Z]{1,8}",
        ) {
            let b = word(row, col, a.direction(), &text, 99);
            prop_assert!(!a.intersects(&b));
            prop_assert_eq!(a.crossing(&b), None);
        }

        #[test]
        fn prop_crossing_cell_is_shared(a in arb_word(), b in arb_word()) {
            if let Some(pos) = a.crossing(&b) {
                prop_assert!(a.cells().any(|cell| cell == pos));
                prop_assert!(b.cells().any(|cell| cell == pos));
            }
        }
    }
}
