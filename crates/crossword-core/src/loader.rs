//! Loading puzzles from CSV word lists.
//!
//! A puzzle file has a header row followed by one word per row:
//!
//! ```text
//! Row,Col,Direction,Number,Clue,Answer
//! 0,0,Across,1,"Feline, often",CAT
//! 0,0,Down,2,Dairy animal,COW
//! ```
//!
//! Fields may be wrapped in double quotes to embed commas; a doubled quote
//! inside a quoted field stands for one quote character. Blank lines are
//! skipped. Quoted fields cannot span lines.

use std::{fs, io, path::PathBuf, str::FromStr};

use crate::{
    Direction, ParseDirectionError, Position, PuzzleError, PuzzleSet, Word, WordError,
};

/// Errors raised while loading a puzzle file.
///
/// Line numbers are 1-based and count the header row.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the puzzle file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The input has no header row.
    #[display("puzzle file is empty")]
    Empty,
    /// A quoted field is not closed before the end of the line.
    #[display("line {line}: unterminated quoted field")]
    UnterminatedQuote {
        /// Offending line.
        line: usize,
    },
    /// A row does not have exactly six fields.
    #[display("line {line}: expected 6 fields, found {found}")]
    FieldCount {
        /// Offending line.
        line: usize,
        /// Number of fields found.
        found: usize,
    },
    /// A numeric field does not parse.
    #[display("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        /// Offending line.
        line: usize,
        /// Name of the field.
        field: &'static str,
        /// The raw field text.
        value: String,
    },
    /// The direction label is not recognized.
    #[display("line {line}: {source}")]
    Direction {
        /// Offending line.
        line: usize,
        /// Underlying parse error.
        source: ParseDirectionError,
    },
    /// The row describes an invalid word.
    #[display("line {line}: {source}")]
    Word {
        /// Offending line.
        line: usize,
        /// Underlying word error.
        source: WordError,
    },
    /// The words do not form a consistent puzzle.
    #[display("invalid puzzle: {_0}")]
    Puzzle(#[from] PuzzleError),
}

/// Parses the rows of a puzzle file into words, in file order.
///
/// # Errors
///
/// Returns a [`LoadError`] describing the first malformed row.
pub fn parse_words(input: &str) -> Result<Vec<Word>, LoadError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines = input.lines().enumerate();
    if lines.next().is_none() {
        return Err(LoadError::Empty);
    }

    let mut words = vec![];
    for (index, raw) in lines {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let fields = split_fields(raw).ok_or(LoadError::UnterminatedQuote { line })?;
        words.push(parse_row(line, &fields)?);
    }
    Ok(words)
}

/// Reads and validates the puzzle file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, and any other
/// [`LoadError`] if its content is malformed.
pub fn load_puzzle(path: impl Into<PathBuf>) -> Result<PuzzleSet, LoadError> {
    let path = path.into();
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) => return Err(LoadError::Io { path, source }),
    };
    content.parse()
}

impl FromStr for PuzzleSet {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PuzzleSet::new(parse_words(s)?)?)
    }
}

fn parse_row(line: usize, fields: &[String]) -> Result<Word, LoadError> {
    let [row, col, direction, number, clue, answer] = fields else {
        return Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        });
    };
    let position = Position::new(
        parse_number(line, "row", row)?,
        parse_number(line, "column", col)?,
    );
    let direction = direction
        .parse::<Direction>()
        .map_err(|source| LoadError::Direction { line, source })?;
    let number = parse_number(line, "number", number)?;
    Word::new(position, direction, answer.trim(), clue.trim(), number)
        .map_err(|source| LoadError::Word { line, source })
}

fn parse_number<T: FromStr>(line: usize, field: &'static str, value: &str) -> Result<T, LoadError> {
    value.trim().parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field,
        value: value.to_owned(),
    })
}

/// Splits one CSV line into fields. Returns `None` on an unterminated quote.
fn split_fields(line: &str) -> Option<Vec<String>> {
    let mut fields = vec![];
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    if in_quotes {
        return None;
    }
    fields.push(field);
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridDimensions;

    const SAMPLE: &str = "\
Row,Col,Direction,Number,Clue,Answer
0,0,Across,1,\"Feline, often\",CAT
0,0,Down,2,Dairy animal,COW

0,2,Down,3,\"Big \"\"toe\"\" part\",TOE
";

    #[test]
    fn test_split_fields() {
        assert_eq!(
            split_fields("a,\"b, c\",\"d\"\"e\",").unwrap(),
            ["a", "b, c", "d\"e", ""]
        );
        assert!(split_fields("a,\"b").is_none());
    }

    #[test]
    fn test_parse_sample() {
        let words = parse_words(SAMPLE).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].clue(), "Feline, often");
        assert_eq!(words[1].direction(), Direction::Down);
        assert_eq!(words[2].clue(), "Big \"toe\" part");
        assert_eq!(words[2].position(), Position::new(0, 2));
    }

    #[test]
    fn test_sample_puzzle() {
        let puzzle: PuzzleSet = SAMPLE.parse().unwrap();
        assert_eq!(puzzle.grid_dimensions(), GridDimensions::new(3, 3));
    }

    #[test]
    fn test_header_only() {
        assert!(parse_words("Row,Col,Direction,Number,Clue,Answer\n").unwrap().is_empty());
        assert!(matches!(parse_words(""), Err(LoadError::Empty)));
    }

    #[test]
    fn test_row_errors_carry_line_numbers() {
        let header = "Row,Col,Direction,Number,Clue,Answer\n";
        let cases = [
            ("0,0,Across,1,Clue\n", "line 2: expected 6 fields, found 5"),
            ("x,0,Across,1,Clue,CAT\n", "line 2: invalid row \"x\""),
            ("0,-1,Across,1,Clue,CAT\n", "line 2: invalid column \"-1\""),
            (
                "0,0,Sideways,1,Clue,CAT\n",
                "line 2: invalid direction label: \"Sideways\" (expected \"Across\" or \"Down\")",
            ),
            ("0,0,Across,1,Clue,\n", "line 2: word 1 has an empty solution"),
            ("0,0,Across,1,\"Clue,CAT\n", "line 2: unterminated quoted field"),
        ];
        for (row, expected) in cases {
            let err = parse_words(&format!("{header}{row}")).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_invalid_puzzle() {
        let err = "h\n0,0,Across,1,Clue,CAT\n".parse::<PuzzleSet>().unwrap_err();
        assert!(matches!(err, LoadError::Puzzle(PuzzleError::MissingDown)));
        assert_eq!(err.to_string(), "invalid puzzle: puzzle has no down word");
    }

    #[test]
    fn test_huge_coordinates_are_rejected() {
        let header = "Row,Col,Direction,Number,Clue,Answer\n";

        let input = format!("{header}0,0,Across,1,Feline,CAT\n18446744073709551615,0,Down,2,Dairy,COW\n");
        let err = input.parse::<PuzzleSet>().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Word {
                line: 3,
                source: WordError::ExtentOverflow { number: 2, .. },
            }
        ));

        let input = format!("{header}0,0,Across,1,Feline,CAT\n5000000,0,Down,2,Dairy,COW\n");
        let err = input.parse::<PuzzleSet>().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Puzzle(PuzzleError::GridTooLarge { rows: 5_000_003, cols: 3 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_puzzle("/nonexistent/crossword_clues.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
