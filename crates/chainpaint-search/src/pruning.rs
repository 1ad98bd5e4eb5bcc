//! Candidate pruning.
//!
//! Both filters assume the grid has no pending match; the search checks that
//! before pruning runs.
//!
//! - Recolor candidates are the cells that can be painted on their own without
//!   clearing at once. The check is local to the painted cell and has no false
//!   negatives: a rejected cell always forms a component of four or more when
//!   painted alone.
//! - Trigger candidates are the cells whose removal might start a chain. The
//!   filter only affects how many trials run, never which results qualify.

use chainpaint_core::{Color, Grid, MATCH_SIZE, Position, PositionSet, component};
use chainpaint_solver::step;

use crate::{StabilityCheck, TriggerHeuristic};

/// Returns `true` if painting `pos` with `color` is worth trying.
///
/// The cell must be non-empty, hold a different color, and not form a
/// component of [`MATCH_SIZE`] or more once painted. Painting a joker never
/// forms a match.
#[must_use]
pub fn is_recolor_candidate(grid: &Grid, pos: Position, color: Color) -> bool {
    match grid.get(pos) {
        None => false,
        Some(current) if current == color => false,
        Some(_) if color.is_joker() => true,
        Some(_) => {
            component::component_size_with(grid, pos, color, PositionSet::EMPTY) < MATCH_SIZE
        }
    }
}

/// Returns every recolor candidate of `grid` for `color`.
///
/// # Examples
///
/// ```
/// use chainpaint_core::{Color, Grid, Position};
/// use chainpaint_search::pruning;
///
/// let grid: Grid = "
///     ........
///     ........
///     ........
///     ........
///     ........
///     RRRBG...
/// "
/// .parse()?;
/// let candidates = pruning::recolor_candidates(&grid, Color::Red);
/// // painting (3, 5) red would clear four reds at once
/// assert!(!candidates.contains(Position::new(3, 5)));
/// assert!(candidates.contains(Position::new(4, 5)));
/// assert_eq!(candidates.len(), 1);
/// # Ok::<(), chainpaint_core::GridParseError>(())
/// ```
#[must_use]
pub fn recolor_candidates(grid: &Grid, color: Color) -> PositionSet {
    grid.occupied()
        .iter()
        .filter(|pos| is_recolor_candidate(grid, *pos, color))
        .collect()
}

/// Returns `true` if clearing `pos` might start a chain.
#[must_use]
pub fn is_trigger_candidate(grid: &Grid, pos: Position, heuristic: TriggerHeuristic) -> bool {
    if grid.get(pos).is_none() {
        return false;
    }
    match heuristic {
        TriggerHeuristic::Neighborhood => {
            let excluded = PositionSet::from_elem(pos);
            pos.neighbors().any(|next| {
                grid.get(next).is_some_and(Color::is_normal)
                    && component::component_size(grid, next, excluded) >= MATCH_SIZE - 1
            })
        }
        TriggerHeuristic::Collapse => {
            let mut after = *grid;
            after.take(pos);
            after.apply_gravity();
            step::has_match(&after)
        }
        TriggerHeuristic::Exhaustive => true,
    }
}

/// Returns every trigger candidate of `grid`.
#[must_use]
pub fn trigger_candidates(grid: &Grid, heuristic: TriggerHeuristic) -> PositionSet {
    grid.occupied()
        .iter()
        .filter(|pos| is_trigger_candidate(grid, *pos, heuristic))
        .collect()
}

/// Returns `true` if a grid whose cells at `changed` were just painted now
/// has a match.
///
/// [`StabilityCheck::Local`] only inspects the components of normal-colored
/// cells at or next to a changed cell, which is enough when the grid had no
/// match before painting.
#[must_use]
pub fn has_match_after_recolor(grid: &Grid, changed: PositionSet, check: StabilityCheck) -> bool {
    match check {
        StabilityCheck::Full => step::has_match(grid),
        StabilityCheck::Local => {
            let focus = changed
                .iter()
                .fold(changed, |acc, pos| acc | pos.neighbors().collect::<PositionSet>());
            let mut seen = PositionSet::EMPTY;
            for pos in focus {
                if seen.contains(pos) || !grid.get(pos).is_some_and(Color::is_normal) {
                    continue;
                }
                let found = component::component(grid, pos, PositionSet::EMPTY);
                if found.len() >= MATCH_SIZE {
                    return true;
                }
                seen |= found;
            }
            false
        }
    }
}
