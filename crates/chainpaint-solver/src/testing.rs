//! Test utilities for the match & collapse step.
//!
//! This module provides [`StepTester`], a fluent harness that applies steps to
//! a board and checks what they removed, and [`arb_grid`], a `proptest`
//! strategy for random boards.
//!
//! # Example
//!
//! ```ignore
//! StepTester::from_str("
//!     ........
//!     ........
//!     ........
//!     ........
//!     ........
//!     RRRR....
//! ")
//! .resolve_once()
//! .assert_removed_count(4)
//! .assert_cell(Position::new(0, 5), None);
//! ```

use chainpaint_core::{CELLS, Color, Grid, Position, PositionSet};
use proptest::prelude::*;

use crate::step::{self, StepOutcome};

/// A test harness for match & collapse steps.
///
/// `StepTester` keeps the initial board, the current board, and the outcome of
/// the most recent step, so assertions can compare them.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct StepTester {
    initial: Grid,
    current: Grid,
    last: Option<StepOutcome>,
}

impl StepTester {
    /// Creates a new tester from an initial board.
    pub fn new(initial: Grid) -> Self {
        Self {
            initial,
            current: initial,
            last: None,
        }
    }

    /// Creates a new tester from a board string.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a board.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(s.parse().unwrap())
    }

    /// Applies one step and records its outcome.
    #[must_use]
    pub fn resolve_once(mut self) -> Self {
        self.last = step::resolve_step(&mut self.current);
        self
    }

    #[track_caller]
    fn outcome(&self) -> &StepOutcome {
        self.last
            .as_ref()
            .expect("Expected the last step to remove cells, but it was a no-op")
    }

    /// Asserts that the last step was a no-op and the board is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the last step removed anything.
    #[track_caller]
    pub fn assert_no_change(self) -> Self {
        assert!(
            self.last.is_none(),
            "Expected no removal, but removed {:?}",
            self.last.as_ref().map(StepOutcome::removed)
        );
        assert_eq!(
            self.initial, self.current,
            "Expected the board to stay unchanged"
        );
        self
    }

    /// Asserts that the last step was a no-op, whatever earlier steps did.
    ///
    /// # Panics
    ///
    /// Panics if the last step removed anything.
    #[track_caller]
    pub fn assert_stable(self) -> Self {
        assert!(
            self.last.is_none(),
            "Expected a stable board, but removed {:?}",
            self.last.as_ref().map(StepOutcome::removed)
        );
        self
    }

    /// Asserts that the last step removed exactly `positions`.
    ///
    /// # Panics
    ///
    /// Panics if the removal set differs.
    #[track_caller]
    pub fn assert_removed<P>(self, positions: P) -> Self
    where
        P: IntoIterator<Item = Position>,
    {
        let expected = PositionSet::from_iter(positions);
        let removed = self.outcome().removed();
        assert_eq!(
            removed, expected,
            "Expected removal set {expected:?}, but removed {removed:?}"
        );
        self
    }

    /// Asserts that the last step removed at least `positions`.
    ///
    /// # Panics
    ///
    /// Panics if any of the positions was not removed.
    #[track_caller]
    pub fn assert_removed_includes<P>(self, positions: P) -> Self
    where
        P: IntoIterator<Item = Position>,
    {
        let expected = PositionSet::from_iter(positions);
        let removed = self.outcome().removed();
        assert!(
            expected.is_subset(removed),
            "Expected {expected:?} to be removed, but removed {removed:?}"
        );
        self
    }

    /// Asserts the size of the last removal set.
    ///
    /// # Panics
    ///
    /// Panics if the size differs.
    #[track_caller]
    pub fn assert_removed_count(self, count: usize) -> Self {
        let removed = self.outcome().removed();
        assert_eq!(
            removed.len(),
            count,
            "Expected {count} removed cells, but removed {removed:?}"
        );
        self
    }

    /// Asserts that every position in `positions` was removed with `color`.
    ///
    /// # Panics
    ///
    /// Panics if a position was not removed or had another color.
    #[track_caller]
    pub fn assert_colors_before<P>(self, positions: P, color: Color) -> Self
    where
        P: IntoIterator<Item = Position>,
    {
        for pos in positions {
            let before = self.outcome().color_before(pos);
            assert_eq!(
                before,
                Some(color),
                "Expected {pos:?} to be removed as {color:?}, but recorded {before:?}"
            );
        }
        self
    }

    /// Asserts the current content of one cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell differs.
    #[track_caller]
    pub fn assert_cell(self, pos: Position, cell: Option<Color>) -> Self {
        let current = self.current.get(pos);
        assert_eq!(
            current, cell,
            "Expected {pos:?} to hold {cell:?}, but it holds {current:?}"
        );
        self
    }

    /// Asserts the whole current board.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed or the board differs.
    #[track_caller]
    pub fn assert_grid(self, expected: &str) -> Self {
        let expected: Grid = expected.parse().unwrap();
        assert_eq!(
            self.current, expected,
            "Expected board\n{expected}\nbut found\n{}",
            self.current
        );
        self
    }
}

/// A `proptest` strategy for random boards with a mix of empty, normal and
/// joker cells.
pub fn arb_grid() -> impl Strategy<Value = Grid> {
    let cell = prop_oneof![
        1 => Just(None),
        4 => prop::sample::select(Color::ALL.to_vec()).prop_map(Some),
    ];
    prop::collection::vec(cell, CELLS).prop_map(|cells| Grid::from_fn(|pos| cells[pos.index()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_methods_chain() {
        StepTester::from_str(
            "
            ........
            ........
            ........
            ........
            B.......
            RRRR....",
        )
        .resolve_once()
        .assert_removed_count(4)
        .assert_colors_before([Position::new(3, 5)], Color::Red)
        .assert_cell(Position::new(0, 5), Some(Color::Blue))
        .resolve_once()
        .assert_stable();
    }

    #[test]
    #[should_panic(expected = "Expected no removal")]
    fn test_assert_no_change_fails_on_removal() {
        StepTester::from_str(
            "
            ........
            ........
            ........
            ........
            ........
            GGGG....",
        )
        .resolve_once()
        .assert_no_change();
    }
}
