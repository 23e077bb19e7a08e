//! Text formats for boards and their solved states
//!
//! A board file holds one symbol per cell from the alphabet `_HILT123`, one row
//! per line. A state file uses the same layout with one orientation letter
//! (`N`, `E`, `S`, `W`) per cell and `_` for blank cells.

use std::fs;
use std::path::Path;

use crate::board::{Board, Direction, Position, TileKind};
use crate::io::configuration::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::io::error::{PuzzleError, Result, WithPath};

// Lines are trimmed and trailing blank lines dropped
fn significant_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Parse board text into a fresh board
///
/// Every tile starts facing North, unlocked and unvisited.
///
/// # Errors
///
/// Returns an error if the text is not exactly 10 rows of 7 symbols or
/// contains a symbol outside the board alphabet
pub fn parse_board(text: &str) -> Result<Board> {
    let lines = significant_lines(text);
    let expected = (BOARD_WIDTH, BOARD_HEIGHT);

    let mismatched_width = lines
        .iter()
        .map(|line| line.chars().count())
        .find(|&width| width != BOARD_WIDTH);
    if lines.len() != BOARD_HEIGHT || mismatched_width.is_some() {
        return Err(PuzzleError::InvalidDimensions {
            expected,
            found: (mismatched_width.unwrap_or(BOARD_WIDTH), lines.len()),
        });
    }

    let mut board = Board::new();
    for (y, line) in lines.iter().enumerate() {
        for (x, symbol) in line.chars().enumerate() {
            let kind = TileKind::from_symbol(symbol)
                .ok_or(PuzzleError::UnknownSymbol { symbol, x, y })?;
            board.set_kind(Position::new(x, y), kind)?;
        }
    }
    Ok(board)
}

/// Read and parse a board file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid board
pub fn load_board(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path).with_path(path, "read board")?;
    parse_board(&text)
}

/// Format the current orientations, one letter per cell
///
/// Blank tiles are written as `_`. Rows are separated by newlines with no
/// newline after the last row.
pub fn write_solution(board: &Board) -> String {
    (0..board.height())
        .map(|y| {
            (0..board.width())
                .filter_map(|x| board.get_tile(x, y))
                .map(|tile| {
                    if tile.kind().is_empty() {
                        TileKind::Empty.symbol()
                    } else {
                        tile.orientation().letter()
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the current orientations to a file
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be written
pub fn save_solution(board: &Board, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    fs::write(path, write_solution(board)).with_path(path, "write solution")
}

/// Apply orientation letters from state text to a board
///
/// Blank cells in the state and blank tiles on the board keep their
/// orientation. A state may cover fewer rows or columns than the board.
///
/// # Errors
///
/// Returns an error if the state is larger than the board, contains a symbol
/// other than an orientation letter or `_`, or targets a locked tile
pub fn apply_solution(board: &mut Board, text: &str) -> Result<()> {
    let lines = significant_lines(text);
    let widest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    if lines.len() > board.height() || widest > board.width() {
        return Err(PuzzleError::InvalidDimensions {
            expected: (board.width(), board.height()),
            found: (widest, lines.len()),
        });
    }

    for (y, line) in lines.iter().enumerate() {
        for (x, symbol) in line.chars().enumerate() {
            if symbol == TileKind::Empty.symbol() {
                continue;
            }
            let orientation =
                Direction::from_letter(symbol).ok_or(PuzzleError::UnknownSymbol { symbol, x, y })?;
            let position = Position::new(x, y);
            if board.tile(position).is_some_and(|tile| !tile.kind().is_empty()) {
                board.set_orientation(position, orientation)?;
            }
        }
    }
    Ok(())
}

/// Read a state file and apply it to a board
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid state
pub fn load_solution(board: &mut Board, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).with_path(path, "read state")?;
    apply_solution(board, &text)
}
