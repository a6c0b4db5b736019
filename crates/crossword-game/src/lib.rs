//! Crossword submission scoring and session management.
//!
//! This crate applies batches of answers to a [`PuzzleSet`]:
//!
//! - [`Submission`]: one batch of raw answers keyed by clue number
//! - [`Scorer`]: resets the grid, writes right-length answers into the cells,
//!   and totals the letters of correct words into a [`Scorecard`]
//! - [`Session`]: owns a puzzle, its [`GridState`], and the last scorecard
//!
//! Letters of every right-length answer are written, correct or not, so the
//! grid shows what was entered rather than the solution. Crossing cells keep
//! every distinct letter written into them.
//!
//! [`PuzzleSet`]: crossword_core::PuzzleSet
//! [`GridState`]: crossword_core::GridState

pub use self::{
    scorer::{
        AnswerOutcome, CasePolicy, LengthWarning, ScoreOptions, Scorecard, Scorer, ScoringPolicy,
    },
    session::Session,
    submission::Submission,
};

mod scorer;
mod session;
mod submission;
