//! Board input.

use std::{
    fs,
    io::{self, Read as _},
    path::Path,
};

use chainpaint_core::Grid;

use crate::CliError;

/// Reads a board from `path`, or from standard input if `path` is `-`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the input cannot be read, or
/// [`CliError::Board`] if it is not a board.
pub(crate) fn read_board(path: &Path) -> Result<Grid, CliError> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path)?
    };
    parse_board(&text)
}

/// Parses board text; everything after a `#` on a line is ignored.
///
/// # Errors
///
/// Returns [`CliError::Board`] if the text is not a board.
pub(crate) fn parse_board(text: &str) -> Result<Grid, CliError> {
    let cells: String = text
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(cells, _)| cells))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(cells.parse()?)
}

#[cfg(test)]
mod tests {
    use chainpaint_core::{Color, GridParseError, Position};

    use super::*;

    #[test]
    fn test_comments_are_ignored() {
        let grid = parse_board(
            "# saved board
            ........
            ........
            ........
            ........
            J....... # joker waits
            RB......",
        )
        .unwrap();
        assert_eq!(grid[Position::new(0, 4)], Some(Color::Joker));
        assert_eq!(grid[Position::new(1, 5)], Some(Color::Blue));
        assert_eq!(grid.occupied().len(), 3);
    }

    #[test]
    fn test_short_board_is_rejected() {
        let err = parse_board("RB......").unwrap_err();
        assert!(matches!(
            err,
            CliError::Board(GridParseError::WrongCellCount { count: 8 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_board(Path::new("/nonexistent/chainpaint/board.txt")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
