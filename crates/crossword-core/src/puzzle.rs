//! The full set of words making up a puzzle.
//!
//! [`PuzzleSet`] owns the words sorted by clue number and checks, once at
//! construction, that they describe a consistent grid:
//!
//! - at least one across word and one down word exist, so both grid
//!   dimensions are defined;
//! - the grid has at most [`GridDimensions::MAX_CELLS`] cells;
//! - clue numbers are unique;
//! - every occupied cell lies inside the derived rectangle;
//! - crossing words agree on the letter of their shared cell.
//!
//! A value of this type therefore always has well-defined dimensions.

use std::collections::{BTreeSet, HashMap, hash_map::Entry};

use crate::{Direction, GridDimensions, Position, Word, WordNumber, fold_letter};

/// Configuration errors detected while assembling a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// No across word exists, so the column count is undefined.
    #[display("puzzle has no across word")]
    MissingAcross,
    /// No down word exists, so the row count is undefined.
    #[display("puzzle has no down word")]
    MissingDown,
    /// The derived grid has more than [`GridDimensions::MAX_CELLS`] cells.
    #[display("a {rows}x{cols} grid exceeds {} cells", GridDimensions::MAX_CELLS)]
    GridTooLarge {
        /// Derived row count.
        rows: usize,
        /// Derived column count.
        cols: usize,
    },
    /// Two words share a clue number.
    #[display("clue number {number} is used more than once")]
    DuplicateNumber {
        /// The repeated number.
        number: WordNumber,
    },
    /// A word occupies a cell outside the derived grid.
    #[display("word {number} occupies {position}, outside the {rows}x{cols} grid")]
    CellOutOfBounds {
        /// Number of the offending word.
        number: WordNumber,
        /// The out-of-bounds cell.
        position: Position,
        /// Derived row count.
        rows: usize,
        /// Derived column count.
        cols: usize,
    },
    /// Two crossing words disagree on their shared letter.
    #[display(
        "words {across} across and {down} down disagree at {position}: {across_letter:?} vs {down_letter:?}"
    )]
    ConflictingLetters {
        /// Number of the across word.
        across: WordNumber,
        /// Number of the down word.
        down: WordNumber,
        /// The shared cell.
        position: Position,
        /// Letter the across word places there.
        across_letter: char,
        /// Letter the down word places there.
        down_letter: char,
    },
}

/// Computes `(rows, cols)` from a word list.
///
/// Rows are the maximum extent of the down words and columns the maximum
/// extent of the across words.
///
/// # Errors
///
/// Returns [`PuzzleError::MissingAcross`] or [`PuzzleError::MissingDown`] if
/// the respective direction has no word, and [`PuzzleError::GridTooLarge`] if
/// the rectangle has more than [`GridDimensions::MAX_CELLS`] cells.
pub fn grid_dimensions<'a>(
    words: impl IntoIterator<Item = &'a Word>,
) -> Result<GridDimensions, PuzzleError> {
    let mut rows = None;
    let mut cols = None;
    for word in words {
        // `Word::new` guarantees the one-past-the-end coordinate fits in `usize`.
        let pos = word.position();
        match word.direction() {
            Direction::Across => {
                cols = cols.max(Some(pos.col + word.len()));
            }
            Direction::Down => {
                rows = rows.max(Some(pos.row + word.len()));
            }
        }
    }
    let cols = cols.ok_or(PuzzleError::MissingAcross)?;
    let rows = rows.ok_or(PuzzleError::MissingDown)?;
    let dimensions = GridDimensions::new(rows, cols);
    match dimensions.checked_cell_count() {
        Some(count) if count <= GridDimensions::MAX_CELLS => Ok(dimensions),
        _ => Err(PuzzleError::GridTooLarge { rows, cols }),
    }
}

/// A validated, number-ordered collection of words.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, GridDimensions, Position, PuzzleSet, Word};
///
/// let puzzle = PuzzleSet::new(vec![
///     Word::new(Position::new(0, 0), Direction::Down, "COW", "Dairy animal", 2)?,
///     Word::new(Position::new(0, 0), Direction::Across, "CAT", "Feline", 1)?,
/// ])?;
///
/// assert_eq!(puzzle.grid_dimensions(), GridDimensions::new(3, 3));
/// assert_eq!(puzzle.words()[0].number(), 1);
/// assert_eq!(puzzle.valid_cells().len(), 5);
/// assert_eq!(puzzle.word_at(Position::new(0, 0)).map(|w| w.number()), Some(1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSet {
    words: Vec<Word>,
    dimensions: GridDimensions,
}

impl PuzzleSet {
    /// Sorts `words` by clue number and validates them.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::MissingAcross`] / [`PuzzleError::MissingDown`] if either
    ///   direction has no word.
    /// - [`PuzzleError::GridTooLarge`] if the grid would exceed
    ///   [`GridDimensions::MAX_CELLS`] cells.
    /// - [`PuzzleError::DuplicateNumber`] if a clue number repeats.
    /// - [`PuzzleError::CellOutOfBounds`] if an across word lies below the last
    ///   down word's extent, or a down word right of the last across word's extent.
    /// - [`PuzzleError::ConflictingLetters`] if crossing words disagree.
    pub fn new(mut words: Vec<Word>) -> Result<Self, PuzzleError> {
        words.sort_by_key(Word::number);
        let dimensions = grid_dimensions(&words)?;

        for pair in words.windows(2) {
            if pair[0].number() == pair[1].number() {
                return Err(PuzzleError::DuplicateNumber {
                    number: pair[0].number(),
                });
            }
        }

        for word in &words {
            if let Some(position) = word.cells().find(|pos| !dimensions.contains(*pos)) {
                return Err(PuzzleError::CellOutOfBounds {
                    number: word.number(),
                    position,
                    rows: dimensions.rows,
                    cols: dimensions.cols,
                });
            }
        }

        check_crossings(&words)?;

        Ok(Self { words, dimensions })
    }

    /// Returns the words ordered by clue number.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the puzzle has no words, which validation rules out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the `(rows, cols)` rectangle covering every word.
    #[must_use]
    pub fn grid_dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Returns every cell covered by at least one word.
    #[must_use]
    pub fn valid_cells(&self) -> BTreeSet<Position> {
        self.words.iter().flat_map(Word::cells).collect()
    }

    /// Returns `true` if some word covers `pos`.
    #[must_use]
    pub fn is_valid_cell(&self, pos: Position) -> bool {
        self.words.iter().any(|word| word.offset_of(pos).is_some())
    }

    /// Returns the lowest-numbered word that *starts* at `pos`.
    #[must_use]
    pub fn word_at(&self, pos: Position) -> Option<&Word> {
        self.words.iter().find(|word| word.position() == pos)
    }

    /// Returns the word starting at `pos` and running in `direction`.
    #[must_use]
    pub fn word_at_with_direction(&self, pos: Position, direction: Direction) -> Option<&Word> {
        self.words
            .iter()
            .find(|word| word.position() == pos && word.direction() == direction)
    }

    /// Returns the word with clue number `number`.
    #[must_use]
    pub fn word(&self, number: WordNumber) -> Option<&Word> {
        self.words
            .binary_search_by_key(&number, Word::number)
            .ok()
            .map(|i| &self.words[i])
    }

    /// Returns the total number of letters over all words.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.words.iter().map(Word::len).sum()
    }
}

impl<'a> IntoIterator for &'a PuzzleSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

fn check_crossings(words: &[Word]) -> Result<(), PuzzleError> {
    // Cell -> (letter, number, direction) of the first word seen there.
    let mut placed: HashMap<Position, (char, WordNumber, Direction)> = HashMap::new();
    for word in words {
        for (pos, letter) in word.cells().zip(word.text().chars()) {
            match placed.entry(pos) {
                Entry::Vacant(entry) => {
                    entry.insert((letter, word.number(), word.direction()));
                }
                Entry::Occupied(entry) => {
                    let &(seen, number, direction) = entry.get();
                    if direction != word.direction() && fold_letter(seen) != fold_letter(letter) {
                        let (across, across_letter, down, down_letter) = match direction {
                            Direction::Across => (number, seen, word.number(), letter),
                            Direction::Down => (word.number(), letter, number, seen),
                        };
                        return Err(PuzzleError::ConflictingLetters {
                            across,
                            down,
                            position: pos,
                            across_letter,
                            down_letter,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}
