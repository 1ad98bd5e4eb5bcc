//! Upcoming pieces and how they drop.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use chainpaint_core::{COLUMNS, Color, ColorParseError, Grid, Position, ROWS};

use crate::{DropConvention, SearchError};

const PIECE_COUNT: usize = COLUMNS as usize;

/// The eight upcoming pieces, one per column from left to right.
///
/// Text form is eight color letters, e.g. `RRBBGGYP`; whitespace and commas
/// are ignored.
///
/// # Examples
///
/// ```
/// use chainpaint_core::{Color, Grid, Position};
/// use chainpaint_search::{DropConvention, Pieces};
///
/// let pieces: Pieces = "RBGYPRBG".parse()?;
/// assert_eq!(pieces.get(2), Color::Green);
///
/// let mut grid = Grid::new();
/// pieces.drop_into(&mut grid, DropConvention::Bottommost);
/// assert_eq!(grid[Position::new(0, 5)], Some(Color::Red));
/// # Ok::<(), chainpaint_search::PiecesParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pieces {
    colors: [Color; PIECE_COUNT],
}

impl Pieces {
    /// Creates the piece list from one color per column.
    #[must_use]
    pub const fn new(colors: [Color; PIECE_COUNT]) -> Self {
        Self { colors }
    }

    /// Returns the piece for column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= 8`.
    #[must_use]
    pub const fn get(&self, x: u8) -> Color {
        self.colors[x as usize]
    }

    /// Returns the pieces from left to right.
    #[must_use]
    pub const fn colors(&self) -> &[Color; PIECE_COUNT] {
        &self.colors
    }

    /// Checks that every piece is a normal color.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPiece`] for the leftmost joker piece.
    pub fn validate(&self) -> Result<(), SearchError> {
        for (x, color) in (0..COLUMNS).zip(self.colors) {
            if !color.is_normal() {
                return Err(SearchError::InvalidPiece { column: x, color });
            }
        }
        Ok(())
    }

    /// Drops each piece into its column.
    ///
    /// The piece lands in the cell selected by `convention`; a full column
    /// discards its piece. No gravity is applied afterwards.
    pub fn drop_into(&self, grid: &mut Grid, convention: DropConvention) {
        for (x, color) in (0..COLUMNS).zip(self.colors) {
            let mut rows = (0..ROWS).map(|y| Position::new(x, y));
            let target = match convention {
                DropConvention::Topmost => rows.find(|pos| grid[*pos].is_none()),
                DropConvention::Bottommost => rows.rfind(|pos| grid[*pos].is_none()),
            };
            if let Some(pos) = target {
                grid.set(pos, Some(color));
            }
        }
    }
}

impl Display for Pieces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.colors {
            write!(f, "{}", color.to_char())?;
        }
        Ok(())
    }
}

/// Errors returned when parsing [`Pieces`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PiecesParseError {
    /// A piece is not a color letter.
    #[display("invalid piece: {_0}")]
    InvalidColor(#[from] ColorParseError),
    /// The text does not describe exactly eight pieces.
    #[display("expected 8 pieces, found {count}")]
    WrongCount {
        /// Number of pieces found.
        count: usize,
    },
}

impl FromStr for Pieces {
    type Err = PiecesParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != ',')
            .collect();
        if letters.len() != PIECE_COUNT {
            return Err(PiecesParseError::WrongCount {
                count: letters.len(),
            });
        }
        let mut colors = [Color::Red; PIECE_COUNT];
        for (slot, ch) in colors.iter_mut().zip(letters) {
            *slot = ch.to_string().parse()?;
        }
        Ok(Self { colors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let pieces: Pieces = "r b g y, p r b g".parse().unwrap();
        assert_eq!(pieces.to_string(), "RBGYPRBG");
        assert_eq!(
            "RBG".parse::<Pieces>(),
            Err(PiecesParseError::WrongCount { count: 3 })
        );
        assert!(matches!(
            "RBGYPRBX".parse::<Pieces>(),
            Err(PiecesParseError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_validate_rejects_joker() {
        let pieces: Pieces = "RRRJRRRJ".parse().unwrap();
        assert_eq!(
            pieces.validate(),
            Err(SearchError::InvalidPiece {
                column: 3,
                color: Color::Joker
            })
        );
        assert_eq!("RBGYPRBG".parse::<Pieces>().unwrap().validate(), Ok(()));
    }

    #[test]
    fn test_drop_conventions() {
        let grid: Grid = "
            ........
            B.......
            ........
            B.......
            B.......
            BBBBBBBB"
            .parse()
            .unwrap();
        let pieces = Pieces::new([Color::Yellow; PIECE_COUNT]);

        let mut top = grid;
        pieces.drop_into(&mut top, DropConvention::Topmost);
        assert_eq!(top[Position::new(0, 0)], Some(Color::Yellow));
        assert_eq!(top[Position::new(1, 0)], Some(Color::Yellow));
        assert_eq!(top[Position::new(1, 4)], None);

        let mut bottom = grid;
        pieces.drop_into(&mut bottom, DropConvention::Bottommost);
        assert_eq!(bottom[Position::new(0, 2)], Some(Color::Yellow));
        assert_eq!(bottom[Position::new(1, 4)], Some(Color::Yellow));
        assert_eq!(bottom.occupied().len(), grid.occupied().len() + 8);
    }

    #[test]
    fn test_full_column_discards_piece() {
        let mut grid = Grid::filled(Color::Green);
        "RBGYPRBG"
            .parse::<Pieces>()
            .unwrap()
            .drop_into(&mut grid, DropConvention::Topmost);
        assert_eq!(grid, Grid::filled(Color::Green));
    }
}
