use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crossword_game::{CasePolicy, ScoreOptions, ScoringPolicy};

pub const DEFAULT_PUZZLE_PATH: &str = "crossword_clues.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoringArg {
    /// Score every answered word.
    AllWords,
    /// Score only the first answered word, as the legacy scoring loop did.
    FirstWordOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseArg {
    /// Answers must match the solution exactly.
    Exact,
    /// Answers match regardless of letter case.
    IgnoreCase,
}

/// Play a crossword puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// CSV word list (Row,Col,Direction,Number,Clue,Answer).
    #[arg(value_name = "PUZZLE", default_value = DEFAULT_PUZZLE_PATH)]
    pub puzzle: PathBuf,

    /// Which answered words count toward the score.
    #[arg(long, value_name = "POLICY", default_value = "all-words")]
    pub scoring: ScoringArg,

    /// How answers are compared with solutions.
    #[arg(long = "case", value_name = "POLICY", default_value = "exact")]
    pub case: CaseArg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub puzzle_path: PathBuf,
    pub score: ScoreOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle_path: PathBuf::from(DEFAULT_PUZZLE_PATH),
            score: ScoreOptions::default(),
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        let scoring_policy = match args.scoring {
            ScoringArg::AllWords => ScoringPolicy::AllWords,
            ScoringArg::FirstWordOnly => ScoringPolicy::FirstWordOnly,
        };
        let case_policy = match args.case {
            CaseArg::Exact => CasePolicy::Exact,
            CaseArg::IgnoreCase => CasePolicy::IgnoreCase,
        };
        Self {
            puzzle_path: args.puzzle,
            score: ScoreOptions::default()
                .scoring_policy(scoring_policy)
                .case_policy(case_policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings_default() {
        let args = Args::try_parse_from(["crossword"]).unwrap();
        assert_eq!(Settings::from(args), Settings::default());
    }

    #[test]
    fn test_options() {
        let args = Args::try_parse_from([
            "crossword",
            "puzzles/week1.csv",
            "--scoring",
            "first-word-only",
            "--case",
            "ignore-case",
        ])
        .unwrap();
        let settings = Settings::from(args);
        assert_eq!(settings.puzzle_path, PathBuf::from("puzzles/week1.csv"));
        assert!(settings.score.scoring_policy.is_first_word_only());
        assert!(settings.score.case_policy.is_ignore_case());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Args::try_parse_from(["crossword", "--scoring", "best-word"]).is_err());
    }
}
