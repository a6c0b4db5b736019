//! Core data structures for crossword puzzles.
//!
//! This crate provides the puzzle model shared by scoring and presentation:
//! where words sit in the grid, how they cross, and which letters have been
//! entered into each cell.
//!
//! # Overview
//!
//! 1. **Geometry**
//!    - [`position`]: zero-based `(row, col)` cell coordinates
//!    - [`direction`]: across/down directions and the [`cells`] run iterator
//!
//! 2. **Words and puzzles**
//!    - [`word`]: a single clue-and-answer entry and its intersection rules
//!    - [`puzzle`]: the validated, number-ordered set of words and the derived
//!      grid dimensions
//!    - [`loader`]: reading a puzzle from a CSV word list
//!
//! 3. **Entered letters**
//!    - [`letter_set`]: the ordered set of letters recorded for one cell
//!    - [`grid_state`]: the per-cell letter sets of the whole grid
//!
//! # Examples
//!
//! ```
//! use crossword_core::{GridState, Position, PuzzleSet};
//!
//! let puzzle: PuzzleSet = "\
//! Row,Col,Direction,Number,Clue,Answer
//! 0,0,Across,1,Feline,CAT
//! 0,0,Down,2,Dairy animal,COW
//! "
//! .parse()?;
//!
//! let mut grid = GridState::new(puzzle.grid_dimensions());
//! for (pos, letter) in puzzle.words()[0].cells().zip("cat".chars()) {
//!     grid.add_letter(pos, letter);
//! }
//!
//! assert_eq!(grid.letters_at(Position::new(0, 2)).to_string(), "T");
//! assert!(!puzzle.is_valid_cell(Position::new(1, 1)));
//! # Ok::<(), crossword_core::LoadError>(())
//! ```

pub mod direction;
pub mod grid_state;
pub mod letter_set;
pub mod loader;
pub mod position;
pub mod puzzle;
pub mod word;

pub use self::{
    direction::{Cells, Direction, ParseDirectionError, cells},
    grid_state::{GridDimensions, GridState},
    letter_set::{LetterSet, fold_letter},
    loader::{LoadError, load_puzzle, parse_words},
    position::Position,
    puzzle::{PuzzleError, PuzzleSet, grid_dimensions},
    word::{DisplayClue, Word, WordError, WordNumber},
};
