//! Connected-component queries over 4-directional adjacency.
//!
//! A component is the maximal set of same-colored cells reachable from a start
//! cell through up/down/left/right steps. Every query takes an `excluded` mask:
//! excluded cells are treated as walls, which lets callers ask speculative
//! questions ("what if this cell were gone?") without touching the grid.
//!
//! The `*_with` variants substitute a hypothetical color at the start cell,
//! which answers "what if this cell were painted?" the same way.
//!
//! # Examples
//!
//! ```
//! use chainpaint_core::{Color, Grid, Position, PositionSet, component};
//!
//! let grid: Grid = "
//!     ........
//!     ........
//!     ........
//!     ........
//!     RR......
//!     RBB.....
//! "
//! .parse()?;
//!
//! let start = Position::new(0, 5);
//! assert_eq!(component::component_size(&grid, start, PositionSet::EMPTY), 3);
//!
//! // Painting (1, 5) red would join it to the red group.
//! let painted = Position::new(1, 5);
//! assert_eq!(
//!     component::component_size_with(&grid, painted, Color::Red, PositionSet::EMPTY),
//!     4
//! );
//!
//! // Excluding (0, 4) cuts the start cell off from the rest of the group.
//! let excluded = PositionSet::from_elem(Position::new(0, 4));
//! assert_eq!(component::component_size(&grid, start, excluded), 1);
//! # Ok::<(), chainpaint_core::GridParseError>(())
//! ```

use std::iter::FusedIterator;

use tinyvec::ArrayVec;

use crate::{
    color::Color,
    grid::Grid,
    position::{CELLS, Position},
    position_set::PositionSet,
};

/// Returns the component containing `start`.
///
/// Returns an empty set if `start` is empty or excluded.
#[must_use]
pub fn component(grid: &Grid, start: Position, excluded: PositionSet) -> PositionSet {
    match grid.get(start) {
        Some(color) => component_with(grid, start, color, excluded),
        None => PositionSet::EMPTY,
    }
}

/// Returns the size of the component containing `start`.
#[must_use]
pub fn component_size(grid: &Grid, start: Position, excluded: PositionSet) -> usize {
    component(grid, start, excluded).len()
}

/// Returns the component `start` would belong to if it held `color`.
///
/// The grid is not modified; only the start cell's color is substituted.
/// Returns an empty set if `start` is excluded.
#[must_use]
pub fn component_with(
    grid: &Grid,
    start: Position,
    color: Color,
    excluded: PositionSet,
) -> PositionSet {
    if excluded.contains(start) {
        return PositionSet::EMPTY;
    }

    let mut seen = PositionSet::from_elem(start);
    // every cell is pushed at most once
    let mut stack = ArrayVec::<[Position; CELLS]>::new();
    stack.push(start);
    while let Some(pos) = stack.pop() {
        for next in pos.neighbors() {
            if seen.contains(next) || excluded.contains(next) || grid.get(next) != Some(color) {
                continue;
            }
            seen.insert(next);
            stack.push(next);
        }
    }
    seen
}

/// Returns the size of the component `start` would belong to if it held `color`.
#[must_use]
pub fn component_size_with(
    grid: &Grid,
    start: Position,
    color: Color,
    excluded: PositionSet,
) -> usize {
    component_with(grid, start, color, excluded).len()
}

/// Returns an iterator partitioning all non-empty cells into components.
///
/// Components are yielded in row-major order of their first cell, together
/// with their color. Joker cells form components like any other color.
#[must_use]
pub fn components(grid: &Grid) -> Components<'_> {
    Components {
        grid,
        remaining: grid.occupied(),
    }
}

/// Iterator over the components of a grid.
///
/// Created by [`components`].
#[derive(Debug, Clone)]
pub struct Components<'a> {
    grid: &'a Grid,
    remaining: PositionSet,
}

impl Iterator for Components<'_> {
    type Item = (Color, PositionSet);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.remaining.first()?;
        let color = self.grid.get(start)?;
        let found = component_with(self.grid, start, color, PositionSet::EMPTY);
        self.remaining -= found;
        Some((color, found))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining.len();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Components<'_> {}
