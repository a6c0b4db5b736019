//! Line-based answer collection.

use std::io::{self, BufRead, Write};

use crossword_core::PuzzleSet;
use crossword_game::Submission;

/// Reads one line, without its line terminator. Returns `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Prompts for one answer per word, in clue-number order.
///
/// An empty line leaves the word blank. Returns `None` if the input ends
/// before every word was answered.
///
/// # Errors
///
/// Returns any I/O error raised by `input` or `output`.
pub fn read_submission(
    puzzle: &PuzzleSet,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<Submission>> {
    let mut submission = Submission::new();
    for word in puzzle {
        write!(output, "{}: ", word.display_clue())?;
        output.flush()?;
        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };
        submission.insert(word.number(), answer);
    }
    Ok(Some(submission))
}

/// Asks a yes/no question. Only an answer starting with `y` or `Y` counts as yes.
///
/// # Errors
///
/// Returns any I/O error raised by `input` or `output`.
pub fn confirm(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;
    Ok(read_line(input)?.is_some_and(|line| line.trim_start().starts_with(['y', 'Y'])))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn cat_cow() -> PuzzleSet {
        "\
Row,Col,Direction,Number,Clue,Answer
0,0,Across,1,Feline,CAT
0,0,Down,2,Dairy animal,COW
"
        .parse()
        .unwrap()
    }

    #[test]
    fn test_read_submission() {
        let mut input = Cursor::new("CAT\r\n\n");
        let mut output = Vec::<u8>::new();
        let submission = read_submission(&cat_cow(), &mut input, &mut output)
            .unwrap()
            .unwrap();
        assert_eq!(submission.answer(1), Some("CAT"));
        assert_eq!(submission.answer(2), Some(""));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "1. Feline (3): 2. Dairy animal (3): "
        );
    }

    #[test]
    fn test_read_submission_eof() {
        let mut input = Cursor::new("CAT\n");
        let mut output = Vec::<u8>::new();
        assert!(read_submission(&cat_cow(), &mut input, &mut output)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_confirm() {
        let mut output = Vec::<u8>::new();
        assert!(confirm("Again?", &mut Cursor::new("yes\n"), &mut output).unwrap());
        assert!(!confirm("Again?", &mut Cursor::new("n\n"), &mut output).unwrap());
        assert!(!confirm("Again?", &mut Cursor::new(""), &mut output).unwrap());
    }
}
