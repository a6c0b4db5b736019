use std::io::{self, BufRead, Write};

use crossword_core::{LoadError, load_puzzle};
use crossword_game::Session;
use log::info;

use crate::{
    prompt::{confirm, read_submission},
    render::{render_clues, render_grid, render_scorecard},
    settings::Settings,
};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("{_0}")]
    Load(#[from] LoadError),
    #[display("terminal I/O failed: {_0}")]
    Io(#[from] io::Error),
}

/// Loads the configured puzzle and plays it on `input`/`output`.
pub fn run(
    settings: &Settings,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), AppError> {
    let puzzle = load_puzzle(&settings.puzzle_path)?;
    info!(
        "loaded {} words from {}",
        puzzle.len(),
        settings.puzzle_path.display()
    );
    let mut session = Session::new(puzzle, settings.score);
    play(&mut session, input, output)?;
    Ok(())
}

/// Runs submit rounds until the player stops or input ends.
pub fn play(
    session: &mut Session,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    loop {
        write!(output, "{}", render_grid(session.puzzle(), session.grid()))?;
        writeln!(output)?;
        write!(output, "{}", render_clues(session.puzzle()))?;
        writeln!(output, "Current Score: {}", session.score_line())?;
        writeln!(output)?;

        let Some(submission) = read_submission(session.puzzle(), input, output)? else {
            writeln!(output)?;
            break;
        };
        let card = session.submit(&submission);
        writeln!(output)?;
        write!(output, "{}", render_scorecard(card))?;
        writeln!(output)?;

        if !confirm("Submit again?", input, output)? {
            break;
        }
    }
    info!("final score {}", session.score_line());
    Ok(())
}
