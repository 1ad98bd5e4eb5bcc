//! The 6×8 board.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{
    color::Color,
    position::{CELLS, COLUMNS, Position, ROWS},
    position_set::PositionSet,
};

/// A 6-row by 8-column board of cell states.
///
/// Each cell holds `Some(color)` or `None` for an empty cell. The board is a
/// plain value type: copying it is cheap, and search code works on private
/// copies.
///
/// # Text format
///
/// [`FromStr`] and [`Display`] use six rows of eight cells. Colors are written
/// as `R`, `B`, `G`, `Y`, `P` and `J` (joker); `.`, `_` or `0` mark an empty
/// cell. Whitespace is ignored when parsing.
///
/// # Examples
///
/// ```
/// use chainpaint_core::{Color, Grid, Position};
///
/// let grid: Grid = "
///     ........
///     ........
///     ........
///     ........
///     R.......
///     RRJ.....
/// "
/// .parse()?;
/// assert_eq!(grid[Position::new(0, 5)], Some(Color::Red));
/// assert_eq!(grid[Position::new(2, 5)], Some(Color::Joker));
/// assert_eq!(grid.occupied().len(), 4);
/// # Ok::<(), chainpaint_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Color>; CELLS],
}

impl Default for Grid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty board.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// Creates a board with every cell set to `color`.
    #[must_use]
    #[inline]
    pub const fn filled(color: Color) -> Self {
        Self {
            cells: [Some(color); CELLS],
        }
    }

    /// Creates a board by evaluating `f` for every position.
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Position) -> Option<Color>,
    {
        let mut grid = Self::new();
        for pos in Position::ALL {
            grid.cells[pos.index()] = f(pos);
        }
        grid
    }

    /// Returns the cell at `pos`.
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> Option<Color> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos`.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Option<Color>) {
        self.cells[pos.index()] = cell;
    }

    /// Empties the cell at `pos` and returns its previous content.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Color> {
        self.cells[pos.index()].take()
    }

    /// Overwrites every position in `positions` with `color`.
    pub fn paint(&mut self, positions: PositionSet, color: Color) {
        for pos in positions {
            self.cells[pos.index()] = Some(color);
        }
    }

    /// Empties every position in `positions`.
    pub fn clear(&mut self, positions: PositionSet) {
        for pos in positions {
            self.cells[pos.index()] = None;
        }
    }

    /// Returns an iterator over `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Color>)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }

    /// Returns the set of non-empty positions.
    #[must_use]
    pub fn occupied(&self) -> PositionSet {
        self.cells()
            .filter_map(|(pos, cell)| cell.map(|_| pos))
            .collect()
    }

    /// Returns the set of positions holding `color`.
    #[must_use]
    pub fn positions_of(&self, color: Color) -> PositionSet {
        self.cells()
            .filter_map(|(pos, cell)| (cell == Some(color)).then_some(pos))
            .collect()
    }

    /// Returns `true` if every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns `true` if any cell has an empty cell somewhere below it.
    #[must_use]
    pub fn has_floating_cells(&self) -> bool {
        (0..COLUMNS).any(|x| {
            let mut seen_empty = false;
            for y in (0..ROWS).rev() {
                match self.get(Position::new(x, y)) {
                    None => seen_empty = true,
                    Some(_) if seen_empty => return true,
                    Some(_) => {}
                }
            }
            false
        })
    }

    /// Slides every non-empty cell toward the bottom row, column by column.
    ///
    /// Surviving cells keep their relative vertical order; vacated cells at the
    /// top of each column become empty. Returns `true` if anything moved.
    pub fn apply_gravity(&mut self) -> bool {
        let mut marks = PositionSet::EMPTY;
        self.apply_gravity_tracking(&mut marks)
    }

    /// Applies gravity like [`apply_gravity`](Self::apply_gravity) and moves
    /// every mark in `marks` along with the cell it sits on.
    ///
    /// Marks on empty cells are dropped.
    pub fn apply_gravity_tracking(&mut self, marks: &mut PositionSet) -> bool {
        let mut moved = false;
        let mut new_marks = PositionSet::EMPTY;
        for x in 0..COLUMNS {
            let mut dest = ROWS;
            for y in (0..ROWS).rev() {
                let from = Position::new(x, y);
                let Some(color) = self.get(from) else {
                    continue;
                };
                dest -= 1;
                let to = Position::new(x, dest);
                if marks.contains(from) {
                    new_marks.insert(to);
                }
                if to != from {
                    self.set(to, Some(color));
                    self.set(from, None);
                    moved = true;
                }
            }
        }
        *marks = new_marks;
        moved
    }
}

impl Index<Position> for Grid {
    type Output = Option<Color>;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..ROWS {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..COLUMNS {
                let ch = self.get(Position::new(x, y)).map_or('.', Color::to_char);
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// A character is neither a color letter, an empty marker nor whitespace.
    #[display("invalid cell character {ch:?} at cell {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Row-major index of the cell being parsed.
        index: usize,
    },
    /// The text does not describe exactly 48 cells.
    #[display("expected 48 cells, found {count}")]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = if matches!(ch, '.' | '_' | '0') {
                None
            } else {
                let error = GridParseError::InvalidCharacter { ch, index: count };
                Some(Color::from_char(ch).ok_or(error)?)
            };
            if count < CELLS {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != CELLS {
            return Err(GridParseError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn arb_grid() -> impl Strategy<Value = Grid> {
        let cell = prop_oneof![
            2 => Just(None),
            3 => prop::sample::select(Color::ALL.to_vec()).prop_map(Some),
        ];
        prop::collection::vec(cell, CELLS).prop_map(|cells| Grid::from_fn(|pos| cells[pos.index()]))
    }

    fn column(grid: &Grid, x: u8) -> Vec<Color> {
        (0..ROWS)
            .filter_map(|y| grid.get(Position::new(x, y)))
            .collect()
    }

    #[test]
    fn test_parse_and_display() {
        let text = "\
RBGYPJ..
........
........
........
........
.......R";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid[Position::new(5, 0)], Some(Color::Joker));
        assert_eq!(grid[Position::new(7, 5)], Some(Color::Red));
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "RRR".parse::<Grid>(),
            Err(GridParseError::WrongCellCount { count: 3 })
        );
        let bad = format!("X{}", ".".repeat(47));
        assert_eq!(
            bad.parse::<Grid>(),
            Err(GridParseError::InvalidCharacter { ch: 'X', index: 0 })
        );
        let long = ".".repeat(49);
        assert_eq!(
            long.parse::<Grid>(),
            Err(GridParseError::WrongCellCount { count: 49 })
        );
    }

    #[test]
    fn test_gravity_compacts_columns() {
        let mut grid: Grid = "
            R.......
            ........
            B.......
            ........
            G.......
            ........
        "
        .parse()
        .unwrap();
        assert!(grid.has_floating_cells());
        assert!(grid.apply_gravity());
        assert!(!grid.has_floating_cells());
        assert_eq!(grid[Position::new(0, 3)], Some(Color::Red));
        assert_eq!(grid[Position::new(0, 4)], Some(Color::Blue));
        assert_eq!(grid[Position::new(0, 5)], Some(Color::Green));
        assert!(!grid.apply_gravity());
    }

    #[test]
    fn test_gravity_tracking_moves_marks() {
        let mut grid: Grid = "
            .Y......
            .R......
            ........
            ........
            ........
            .B......
        "
        .parse()
        .unwrap();
        let mut marks = PositionSet::from_elem(Position::new(1, 1));
        marks.insert(Position::new(5, 5)); // empty cell, dropped
        grid.apply_gravity_tracking(&mut marks);
        assert_eq!(marks, PositionSet::from_elem(Position::new(1, 4)));
        assert_eq!(grid[Position::new(1, 4)], Some(Color::Red));
        assert_eq!(grid[Position::new(1, 3)], Some(Color::Yellow));
    }

    #[test]
    fn test_paint_and_clear() {
        let mut grid = Grid::filled(Color::Green);
        let set: PositionSet = [Position::new(0, 0), Position::new(1, 1)]
            .into_iter()
            .collect();
        grid.paint(set, Color::Joker);
        assert_eq!(grid.positions_of(Color::Joker), set);
        grid.clear(set);
        assert_eq!(grid.occupied(), !set);
        assert_eq!(grid.take(Position::new(2, 2)), Some(Color::Green));
        assert_eq!(grid.get(Position::new(2, 2)), None);
    }

    proptest! {
        #[test]
        fn prop_gravity_preserves_column_order(grid in arb_grid()) {
            let mut after = grid;
            after.apply_gravity();
            prop_assert_eq!(after.occupied().len(), grid.occupied().len());
            prop_assert!(!after.has_floating_cells());
            for x in 0..COLUMNS {
                prop_assert_eq!(column(&after, x), column(&grid, x));
            }
        }
    }
}
