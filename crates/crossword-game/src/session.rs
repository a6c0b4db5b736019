use crossword_core::{GridState, PuzzleError, PuzzleSet, Word};
use log::debug;

use crate::{ScoreOptions, Scorecard, Scorer, Submission};

/// A crossword play session.
///
/// Owns the puzzle, the accumulated grid letters, and the result of the last
/// submission. The grid is only changed by [`Session::submit`], which rebuilds
/// it from the submitted batch; renderers read it through [`Session::grid`].
///
/// # Example
///
/// ```
/// use crossword_core::{Position, PuzzleSet};
/// use crossword_game::{ScoreOptions, Session, Submission};
///
/// let puzzle: PuzzleSet = "\
/// Row,Col,Direction,Number,Clue,Answer
/// 0,0,Across,1,Feline,CAT
/// 0,0,Down,2,Dairy animal,COW
/// "
/// .parse()?;
/// let mut session = Session::new(puzzle, ScoreOptions::default());
/// assert_eq!(session.score_line(), "0 / 2");
///
/// session.submit(&Submission::from_iter([(1, "CAT"), (2, "")]));
/// assert_eq!(session.score_line(), "3 / 2");
/// assert_eq!(session.grid().letters_at(Position::new(0, 1)).to_string(), "A");
/// # Ok::<(), crossword_core::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: PuzzleSet,
    grid: GridState,
    scorer: Scorer,
    last: Option<Scorecard>,
}

impl Session {
    /// Creates a session with an empty grid sized to `puzzle`.
    #[must_use]
    pub fn new(puzzle: PuzzleSet, options: ScoreOptions) -> Self {
        let grid = GridState::new(puzzle.grid_dimensions());
        debug!(
            "new session: {} words on a {} grid",
            puzzle.len(),
            puzzle.grid_dimensions()
        );
        Self {
            puzzle,
            grid,
            scorer: Scorer::new(options),
            last: None,
        }
    }

    /// Validates `words` and creates a session for them.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the words do not form a valid puzzle.
    pub fn from_words(words: Vec<Word>, options: ScoreOptions) -> Result<Self, PuzzleError> {
        Ok(Self::new(PuzzleSet::new(words)?, options))
    }

    /// Returns the puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &PuzzleSet {
        &self.puzzle
    }

    /// Returns the letters accumulated by the last submission.
    #[must_use]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Returns the scoring options.
    #[must_use]
    pub fn options(&self) -> ScoreOptions {
        self.scorer.options()
    }

    /// Returns the result of the last submission, if any.
    #[must_use]
    pub fn last_scorecard(&self) -> Option<&Scorecard> {
        self.last.as_ref()
    }

    /// Returns the score of the last submission, or 0 before the first one.
    #[must_use]
    pub fn score(&self) -> usize {
        self.last.as_ref().map_or(0, Scorecard::score)
    }

    /// Returns the `"{score} / {word_count}"` status line.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("{} / {}", self.score(), self.puzzle.len())
    }

    /// Scores `submission`, replacing the grid letters and the last result.
    pub fn submit(&mut self, submission: &Submission) -> &Scorecard {
        let card = self.scorer.score(&self.puzzle, submission, &mut self.grid);
        self.last.insert(card)
    }

    /// Clears the grid and forgets the last result.
    pub fn clear(&mut self) {
        self.grid.reset();
        self.last = None;
    }
}
