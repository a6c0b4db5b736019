use std::fmt::{self, Display};

use crossword_core::{GridState, PuzzleSet, Word, WordNumber, fold_letter};
use log::{debug, warn};

use crate::Submission;

/// Which words of a submission count toward the score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ScoringPolicy {
    /// Every answered word is applied and scored.
    #[default]
    AllWords,
    /// Only the lowest-numbered answered word is applied; the rest of the
    /// batch is ignored. Reproduces the legacy scoring loop, which returned
    /// after its first iteration.
    FirstWordOnly,
}

/// How answers are compared with solutions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CasePolicy {
    /// Answers must match the stored solution exactly.
    #[default]
    Exact,
    /// Answers match when equal after upper-casing each character.
    IgnoreCase,
}

/// Options controlling [`Scorer`].
///
/// # Example
///
/// ```
/// use crossword_game::{CasePolicy, ScoreOptions, ScoringPolicy};
///
/// let options = ScoreOptions::default().case_policy(CasePolicy::IgnoreCase);
/// assert_eq!(options.scoring_policy, ScoringPolicy::AllWords);
/// assert!(options.case_policy.is_ignore_case());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOptions {
    /// Which words count.
    pub scoring_policy: ScoringPolicy,
    /// How answers are compared.
    pub case_policy: CasePolicy,
}

impl ScoreOptions {
    /// Sets the scoring policy.
    #[must_use]
    pub fn scoring_policy(mut self, policy: ScoringPolicy) -> Self {
        self.scoring_policy = policy;
        self
    }

    /// Sets the case policy.
    #[must_use]
    pub fn case_policy(mut self, policy: CasePolicy) -> Self {
        self.case_policy = policy;
        self
    }
}

/// What happened to one word's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum AnswerOutcome {
    /// The answer matched; its letters were written to the grid.
    Correct,
    /// The answer had the right length but did not match; its letters were
    /// still written to the grid.
    Incorrect,
    /// The answer was empty or missing.
    Blank,
    /// The answer had the wrong number of characters and was discarded.
    WrongLength {
        /// Length of the solution.
        expected: usize,
        /// Length of the submitted answer.
        actual: usize,
    },
}

/// A user-facing warning for an answer of the wrong length.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Answer for '{clue}' must be {expected} characters long.")]
pub struct LengthWarning {
    /// Number of the word.
    pub number: WordNumber,
    /// The word's display clue.
    pub clue: String,
    /// Required number of characters.
    pub expected: usize,
}

/// The result of scoring one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    score: usize,
    word_count: usize,
    max_score: usize,
    outcomes: Vec<(WordNumber, AnswerOutcome)>,
    warnings: Vec<LengthWarning>,
    unknown: Vec<WordNumber>,
}

impl Scorecard {
    fn new(puzzle: &PuzzleSet) -> Self {
        Self {
            score: 0,
            word_count: puzzle.len(),
            max_score: puzzle.letter_count(),
            outcomes: vec![],
            warnings: vec![],
            unknown: vec![],
        }
    }

    /// Returns the number of letters in correctly answered words.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Returns the number of words in the puzzle.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the score of a fully solved puzzle.
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.max_score
    }

    /// Returns the outcome of every applied word, by ascending clue number.
    #[must_use]
    pub fn outcomes(&self) -> &[(WordNumber, AnswerOutcome)] {
        &self.outcomes
    }

    /// Returns the outcome for word `number`, if it was applied.
    #[must_use]
    pub fn outcome(&self, number: WordNumber) -> Option<AnswerOutcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, outcome)| *outcome)
    }

    /// Returns the length warnings raised by the submission.
    #[must_use]
    pub fn warnings(&self) -> &[LengthWarning] {
        &self.warnings
    }

    /// Returns answer keys that matched no word of the puzzle.
    #[must_use]
    pub fn unknown_numbers(&self) -> &[WordNumber] {
        &self.unknown
    }
}

/// Formats as `"{score} / {word_count}"`.
impl Display for Scorecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.score, self.word_count)
    }
}

/// Applies submissions to a puzzle and computes scores.
///
/// # Example
///
/// ```
/// use crossword_core::{Direction, GridState, Position, PuzzleSet, Word};
/// use crossword_game::{Scorer, Submission};
///
/// let puzzle = PuzzleSet::new(vec![
///     Word::new(Position::new(0, 0), Direction::Across, "CAT", "Feline", 1)?,
///     Word::new(Position::new(0, 0), Direction::Down, "COW", "Dairy animal", 2)?,
/// ])?;
/// let mut grid = GridState::new(puzzle.grid_dimensions());
///
/// let card = Scorer::default().score(
///     &puzzle,
///     &Submission::from_iter([(1, "CAT"), (2, "COW")]),
///     &mut grid,
/// );
/// assert_eq!(card.score(), 6);
/// assert_eq!(card.to_string(), "6 / 2");
/// assert_eq!(grid.letters_at(Position::new(0, 0)).to_string(), "C");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Scorer {
    options: ScoreOptions,
}

impl Scorer {
    /// Creates a scorer with the given options.
    #[must_use]
    pub fn new(options: ScoreOptions) -> Self {
        Self { options }
    }

    /// Returns the scorer's options.
    #[must_use]
    pub fn options(&self) -> ScoreOptions {
        self.options
    }

    /// Scores `submission` against `puzzle`, rebuilding `grid` from scratch.
    ///
    /// The grid is reset and re-dimensioned to the puzzle first. Words are then
    /// applied in clue-number order:
    ///
    /// - a matching answer adds the word's length to the score;
    /// - any non-empty answer of the right length writes its upper-cased
    ///   characters into the word's cells, matching or not;
    /// - a non-empty answer of the wrong length produces a [`LengthWarning`]
    ///   and changes nothing else;
    /// - an empty or missing answer is skipped.
    ///
    /// Under [`ScoringPolicy::FirstWordOnly`] processing stops after the first
    /// word that has an entry in the submission.
    pub fn score(
        &self,
        puzzle: &PuzzleSet,
        submission: &Submission,
        grid: &mut GridState,
    ) -> Scorecard {
        grid.reset_to(puzzle.grid_dimensions());
        let mut card = Scorecard::new(puzzle);

        for number in submission.numbers() {
            if puzzle.word(number).is_none() {
                warn!("ignoring answer for unknown word {number}");
                card.unknown.push(number);
            }
        }

        for word in puzzle {
            let Some(answer) = submission.answer(word.number()) else {
                continue;
            };
            let outcome = self.apply(word, answer, grid);
            debug!("word {}: {outcome:?}", word.number());
            match outcome {
                AnswerOutcome::Correct => card.score += word.len(),
                AnswerOutcome::WrongLength { expected, .. } => {
                    let warning = LengthWarning {
                        number: word.number(),
                        clue: word.display_clue().to_string(),
                        expected,
                    };
                    warn!("{warning}");
                    card.warnings.push(warning);
                }
                AnswerOutcome::Incorrect | AnswerOutcome::Blank => {}
            }
            card.outcomes.push((word.number(), outcome));

            if self.options.scoring_policy.is_first_word_only() {
                break;
            }
        }

        debug!(
            "scored {} answers: {} (max {})",
            submission.len(),
            card,
            card.max_score
        );
        card
    }

    fn apply(&self, word: &Word, answer: &str, grid: &mut GridState) -> AnswerOutcome {
        if answer.is_empty() {
            return AnswerOutcome::Blank;
        }
        let actual = answer.chars().count();
        if actual != word.len() {
            return AnswerOutcome::WrongLength {
                expected: word.len(),
                actual,
            };
        }
        for (pos, letter) in word.cells().zip(answer.chars()) {
            grid.add_letter(pos, letter);
        }
        if self.matches(word.text(), answer) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    fn matches(&self, text: &str, answer: &str) -> bool {
        match self.options.case_policy {
            CasePolicy::Exact => text == answer,
            CasePolicy::IgnoreCase => text
                .chars()
                .map(fold_letter)
                .eq(answer.chars().map(fold_letter)),
        }
    }
}
