//! Plain-text rendering of the grid, clue list, and score.

use crossword_core::{Direction, GridState, Position, PuzzleSet};
use crossword_game::Scorecard;

const BLOCKED: char = '#';
const MIN_CELL_WIDTH: usize = 3;

/// Renders the grid, one text line per row.
///
/// Valid cells show the clue number of a word starting there followed by the
/// accumulated letters; blocked cells are filled with `#`. Cells are padded
/// to a common width and separated by `" | "`.
#[must_use]
pub fn render_grid(puzzle: &PuzzleSet, grid: &GridState) -> String {
    let dimensions = puzzle.grid_dimensions();
    let valid = puzzle.valid_cells();

    let texts: Vec<Option<String>> = dimensions
        .positions()
        .map(|pos| valid.contains(&pos).then(|| cell_text(puzzle, grid, pos)))
        .collect();
    let width = texts
        .iter()
        .flatten()
        .map(|text| text.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH);
    let blocked = BLOCKED.to_string().repeat(width);

    let mut out = String::new();
    for row in texts.chunks(dimensions.cols) {
        let line = row
            .iter()
            .map(|text| match text {
                Some(text) => format!("{text:<width$}"),
                None => blocked.clone(),
            })
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn cell_text(puzzle: &PuzzleSet, grid: &GridState, pos: Position) -> String {
    let letters = grid.get(pos).map(ToString::to_string).unwrap_or_default();
    match puzzle.word_at(pos) {
        Some(word) if letters.is_empty() => word.number().to_string(),
        Some(word) => format!("{} {letters}", word.number()),
        None => letters,
    }
}

/// Renders the clue list grouped by direction, each group in clue-number order.
#[must_use]
pub fn render_clues(puzzle: &PuzzleSet) -> String {
    let mut out = String::new();
    for direction in Direction::ALL {
        out.push_str(&format!("{direction}:\n"));
        for word in puzzle.words().iter().filter(|w| w.direction() == direction) {
            out.push_str(&format!("  {}\n", word.display_clue()));
        }
    }
    out
}

/// Renders the warnings of a submission followed by the score line.
#[must_use]
pub fn render_scorecard(card: &Scorecard) -> String {
    let warnings = card
        .warnings()
        .iter()
        .map(|warning| format!("warning: {warning}\n"));
    let unknown = card
        .unknown_numbers()
        .iter()
        .map(|number| format!("warning: no word numbered {number}\n"));
    let mut out: String = warnings.chain(unknown).collect();
    out.push_str(&format!("Current Score: {card}\n"));
    out
}
