//! Board coordinates.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

/// Number of rows on the board.
pub const ROWS: u8 = 6;

/// Number of columns on the board.
pub const COLUMNS: u8 = 8;

/// Number of cells on the board.
pub const CELLS: usize = ROWS as usize * COLUMNS as usize;

/// A cell position on the 8×6 board.
///
/// `x` is the column (0-7, left to right) and `y` is the row (0-5, top to
/// bottom). Gravity pulls cells toward row 5.
///
/// # Examples
///
/// ```
/// use chainpaint_core::Position;
///
/// let pos = Position::new(3, 2);
/// assert_eq!(pos.x(), 3);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 2 * 8 + 3);
/// assert_eq!(Position::try_new(8, 0), None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    // row-major order: y first
    y: u8,
    x: u8,
}

impl Position {
    /// All 48 positions in row-major order.
    pub const ALL: [Self; CELLS] = {
        let mut all = [Self { x: 0, y: 0 }; CELLS];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELLS {
            all[i] = Self {
                x: (i % COLUMNS as usize) as u8,
                y: (i / COLUMNS as usize) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from a column and a row.
    ///
    /// # Panics
    ///
    /// Panics if `x >= 8` or `y >= 6`.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < COLUMNS && y < ROWS);
        Self { x, y }
    }

    /// Creates a position, returning `None` when out of bounds.
    #[must_use]
    #[inline]
    pub const fn try_new(x: u8, y: u8) -> Option<Self> {
        if x < COLUMNS && y < ROWS {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Creates a position from its row-major index (0-47).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 48`.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < CELLS);
        Self::ALL[index]
    }

    /// Returns the column (0-7).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-5, top to bottom).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index (0-47).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * COLUMNS as usize + self.x as usize
    }

    /// Returns the position offset by `(dx, dy)`, or `None` if it leaves the board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Self::try_new(x, y)
    }

    /// Returns an iterator over the in-bounds 4-neighbors (up, down, left, right).
    #[must_use]
    pub fn neighbors(self) -> Neighbors {
        Neighbors {
            center: self,
            next: 0,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Iterator over the 4-neighbors of a position.
///
/// Created by [`Position::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Position,
    next: u8,
}

impl Neighbors {
    const DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
}

impl Iterator for Neighbors {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = Self::DIRECTIONS.get(usize::from(self.next)) {
            self.next += 1;
            if let Some(pos) = self.center.offset(dx, dy) {
                return Some(pos);
            }
        }
        None
    }
}

impl FusedIterator for Neighbors {}
