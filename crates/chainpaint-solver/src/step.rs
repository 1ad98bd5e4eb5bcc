//! The match & collapse step.
//!
//! One step partitions the board into components, marks every normal-colored
//! component of at least [`MATCH_SIZE`] cells, sweeps in joker cells touching a
//! marked cell, empties the whole removal set and lets the columns fall.
//!
//! Joker components never qualify on their own, whatever their size.

use chainpaint_core::{Color, Grid, MATCH_SIZE, Position, PositionSet, component};

/// Returns the removal set a step would clear, without touching the grid.
///
/// The set is the union of all normal-colored components of size
/// [`MATCH_SIZE`] or more, plus every joker cell 4-adjacent to one of them.
/// An empty set means the grid is stable.
///
/// # Examples
///
/// ```
/// use chainpaint_core::{Grid, Position};
/// use chainpaint_solver::step;
///
/// let grid: Grid = "
///     ........
///     ........
///     ........
///     ........
///     J.......
///     GGGGJ...
/// "
/// .parse()?;
/// let matched = step::find_matches(&grid);
/// assert_eq!(matched.len(), 6);
/// assert!(matched.contains(Position::new(0, 4)));
/// # Ok::<(), chainpaint_core::GridParseError>(())
/// ```
#[must_use]
pub fn find_matches(grid: &Grid) -> PositionSet {
    let matched = component::components(grid)
        .filter(|(color, found)| color.is_normal() && found.len() >= MATCH_SIZE)
        .fold(PositionSet::EMPTY, |acc, (_, found)| acc | found);
    if matched.is_empty() {
        return matched;
    }
    matched | adjacent_jokers(grid, matched)
}

/// Returns `true` if a step on `grid` would clear anything.
#[must_use]
pub fn has_match(grid: &Grid) -> bool {
    component::components(grid).any(|(color, found)| color.is_normal() && found.len() >= MATCH_SIZE)
}

fn adjacent_jokers(grid: &Grid, matched: PositionSet) -> PositionSet {
    grid.positions_of(Color::Joker)
        .iter()
        .filter(|pos| pos.neighbors().any(|next| matched.contains(next)))
        .collect()
}

/// What a productive step removed.
///
/// Positions refer to the board as it was before the step's gravity pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    removed: PositionSet,
    removed_marked: PositionSet,
    before: Grid,
}

impl StepOutcome {
    /// Returns the removal set.
    #[must_use]
    pub fn removed(&self) -> PositionSet {
        self.removed
    }

    /// Returns the removed positions that carried a tracking mark.
    ///
    /// Always empty for [`resolve_step`].
    #[must_use]
    pub fn removed_marked(&self) -> PositionSet {
        self.removed_marked
    }

    /// Returns the number of removed cells, jokers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.removed.len()
    }

    /// Returns `true` if nothing was removed.
    ///
    /// Never true for an outcome returned by a step function.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    /// Returns the color a removed cell had before it was cleared.
    ///
    /// Returns `None` for positions outside the removal set.
    #[must_use]
    pub fn color_before(&self, pos: Position) -> Option<Color> {
        if self.removed.contains(pos) {
            self.before.get(pos)
        } else {
            None
        }
    }

    /// Returns an iterator over removed positions and their pre-removal colors.
    pub fn removed_colors(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        self.removed
            .iter()
            .filter_map(|pos| self.before.get(pos).map(|color| (pos, color)))
    }

    /// Returns the number of removed cells that count toward the score.
    ///
    /// A cell scores if its pre-removal color is normal and it carried no
    /// tracking mark.
    #[must_use]
    pub fn scoring_count(&self) -> usize {
        self.removed_colors()
            .filter(|(pos, color)| color.is_normal() && !self.removed_marked.contains(*pos))
            .count()
    }
}

/// Performs one match & collapse step.
///
/// Returns `None` and leaves the grid untouched when nothing matches.
/// Otherwise clears the removal set, applies gravity, and reports what was
/// removed.
///
/// # Examples
///
/// ```
/// use chainpaint_core::{Color, Grid, Position};
/// use chainpaint_solver::step;
///
/// let mut grid: Grid = "
///     ........
///     ........
///     Y.......
///     R.......
///     R.......
///     RR......
/// "
/// .parse()?;
/// let outcome = step::resolve_step(&mut grid).expect("four reds match");
/// assert_eq!(outcome.len(), 4);
/// assert_eq!(outcome.color_before(Position::new(1, 5)), Some(Color::Red));
/// // the yellow cell fell to the bottom row
/// assert_eq!(grid[Position::new(0, 5)], Some(Color::Yellow));
/// # Ok::<(), chainpaint_core::GridParseError>(())
/// ```
pub fn resolve_step(grid: &mut Grid) -> Option<StepOutcome> {
    let mut marks = PositionSet::EMPTY;
    resolve_step_tracking(grid, &mut marks)
}

/// Performs one match & collapse step while tracking marked cells.
///
/// Marks on removed cells are reported through
/// [`StepOutcome::removed_marked`] and dropped; the remaining marks follow
/// their cells through gravity.
pub fn resolve_step_tracking(grid: &mut Grid, marks: &mut PositionSet) -> Option<StepOutcome> {
    let removed = find_matches(grid);
    if removed.is_empty() {
        return None;
    }

    let before = *grid;
    let removed_marked = removed & *marks;
    grid.clear(removed);
    *marks -= removed;
    grid.apply_gravity_tracking(marks);

    Some(StepOutcome {
        removed,
        removed_marked,
        before,
    })
}

#[cfg(test)]
mod tests {
    use chainpaint_core::{COLUMNS, ROWS};
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{StepTester, arb_grid};

    fn column(grid: &Grid, x: u8, skip: PositionSet) -> Vec<Color> {
        (0..ROWS)
            .map(|y| Position::new(x, y))
            .filter(|pos| !skip.contains(*pos))
            .filter_map(|pos| grid.get(pos))
            .collect()
    }

    #[test]
    fn test_three_in_a_row_is_stable() {
        StepTester::from_str(
            "
            ........
            ........
            ........
            ........
            ........
            RRRBBBGG",
        )
        .resolve_once()
        .assert_no_change();
    }

    #[test]
    fn test_l_shape_after_recolor() {
        // three reds in column 0, a lone red at (1, 2); painting (0, 2) red
        // joins them into a five-cell group
        let mut grid: Grid = "
            BG......
            GB......
            YR......
            RB......
            RG......
            RY......"
            .parse()
            .unwrap();
        assert!(!has_match(&grid));
        grid.set(Position::new(0, 2), Some(Color::Red));

        let expected = [
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(0, 3),
            Position::new(0, 4),
            Position::new(0, 5),
        ];
        StepTester::new(grid)
            .resolve_once()
            .assert_removed(expected)
            .assert_colors_before(expected, Color::Red)
            .assert_grid(
                "
                ........
                .G......
                .B......
                .B......
                BG......
                GY......",
            );
    }

    #[test]
    fn test_joker_swept_only_when_adjacent() {
        StepTester::from_str(
            "
            ........
            ........
            ........
            J.....J.
            BJ......
            BBBJ..JJ",
        )
        .resolve_once()
        .assert_removed([
            Position::new(0, 3),
            Position::new(0, 4),
            Position::new(1, 4),
            Position::new(0, 5),
            Position::new(1, 5),
            Position::new(2, 5),
            Position::new(3, 5),
        ])
        .assert_cell(Position::new(0, 5), None)
        .assert_cell(Position::new(6, 4), Some(Color::Joker))
        .assert_cell(Position::new(6, 5), Some(Color::Joker))
        .assert_cell(Position::new(7, 5), Some(Color::Joker));
    }

    #[test]
    fn test_large_joker_group_never_clears() {
        let mut grid = Grid::filled(Color::Joker);
        assert!(!has_match(&grid));
        assert!(resolve_step(&mut grid).is_none());
        assert_eq!(grid, Grid::filled(Color::Joker));
    }

    #[test]
    fn test_shared_joker_is_removed_once() {
        StepTester::from_str(
            "
            ........
            ........
            ........
            ........
            .....B..
            RRRRJBBB",
        )
        .resolve_once()
        .assert_removed_count(9)
        .assert_removed_includes([Position::new(4, 5)]);
    }

    #[test]
    fn test_tracking_drops_removed_marks_and_moves_others() {
        let mut grid: Grid = "
            ........
            ........
            ........
            Y.......
            G.......
            GGGG...."
            .parse()
            .unwrap();
        let mut marks: PositionSet = [Position::new(0, 3), Position::new(1, 5)]
            .into_iter()
            .collect();
        let outcome = resolve_step_tracking(&mut grid, &mut marks).unwrap();
        assert_eq!(outcome.len(), 5);
        assert_eq!(
            outcome.removed_marked(),
            PositionSet::from_elem(Position::new(1, 5))
        );
        assert_eq!(marks, PositionSet::from_elem(Position::new(0, 5)));
        assert_eq!(grid[Position::new(0, 5)], Some(Color::Yellow));
        assert_eq!(outcome.scoring_count(), 4);
    }

    proptest! {
        #[test]
        fn prop_stable_grid_is_a_true_no_op(grid in arb_grid()) {
            prop_assume!(!has_match(&grid));
            prop_assert!(find_matches(&grid).is_empty());
            let mut after = grid;
            prop_assert!(resolve_step(&mut after).is_none());
            prop_assert_eq!(after, grid);
        }

        #[test]
        fn prop_collapse_conserves_mass_and_order(grid in arb_grid()) {
            let mut after = grid;
            match resolve_step(&mut after) {
                None => prop_assert_eq!(after, grid),
                Some(outcome) => {
                    prop_assert_eq!(
                        after.occupied().len(),
                        grid.occupied().len() - outcome.len()
                    );
                    prop_assert!(!after.has_floating_cells());
                    for x in 0..COLUMNS {
                        prop_assert_eq!(
                            column(&after, x, PositionSet::EMPTY),
                            column(&grid, x, outcome.removed())
                        );
                    }
                }
            }
        }

        #[test]
        fn prop_joker_never_self_triggers(grid in arb_grid()) {
            let matched = find_matches(&grid);
            let normal_matched: PositionSet = matched
                .iter()
                .filter(|pos| grid.get(*pos).is_some_and(Color::is_normal))
                .collect();
            for pos in matched - normal_matched {
                prop_assert_eq!(grid.get(pos), Some(Color::Joker));
                prop_assert!(pos.neighbors().any(|next| normal_matched.contains(next)));
            }
            prop_assert_eq!(matched.is_empty(), normal_matched.is_empty());
        }
    }
}
