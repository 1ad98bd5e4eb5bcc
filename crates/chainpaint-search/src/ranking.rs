//! Trial results and the bounded ranking that keeps the best of them.

use std::slice;

use chainpaint_core::{Color, Grid, Position, PositionSet};
use chainpaint_solver::ChainStats;

/// The outcome of one qualifying trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    stats: ChainStats,
    recolor: PositionSet,
    trigger: Position,
}

impl TrialResult {
    /// Creates a result from chain statistics, the recolor pattern and the
    /// trigger cell.
    #[must_use]
    pub const fn new(stats: ChainStats, recolor: PositionSet, trigger: Position) -> Self {
        Self {
            stats,
            recolor,
            trigger,
        }
    }

    /// Returns the chain statistics.
    #[must_use]
    pub const fn stats(&self) -> &ChainStats {
        &self.stats
    }

    /// Returns the number of chain links.
    #[must_use]
    pub const fn chain_count(&self) -> usize {
        self.stats.chain_count()
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.stats.score()
    }

    /// Returns the largest single-step clear.
    #[must_use]
    pub const fn peak_clear(&self) -> usize {
        self.stats.peak_clear()
    }

    /// Returns the recolored cells.
    #[must_use]
    pub const fn recolor(&self) -> PositionSet {
        self.recolor
    }

    /// Returns the trigger cell.
    #[must_use]
    pub const fn trigger(&self) -> Position {
        self.trigger
    }

    /// Returns the ranking key: score, then chain count, then peak clear.
    #[must_use]
    pub const fn rank_key(&self) -> (usize, usize, usize) {
        (self.score(), self.chain_count(), self.peak_clear())
    }

    /// Returns `base` with this result's recolor pattern painted in `paint`.
    #[must_use]
    pub fn recolored(&self, base: &Grid, paint: Color) -> Grid {
        let mut grid = *base;
        grid.paint(self.recolor, paint);
        grid
    }
}

/// The best [`TopResults::CAPACITY`] results seen so far, best first.
///
/// Results are ordered by [`TrialResult::rank_key`] descending. A result tying
/// with one already kept goes after it, so earlier trials win ties.
///
/// # Examples
///
/// ```
/// use chainpaint_core::{Color, Grid, Position, PositionSet};
/// use chainpaint_search::{TopResults, TrialResult};
/// use chainpaint_solver::{ChainBoard, ChainSimulator};
///
/// let stats = ChainSimulator::new().run(&mut ChainBoard::new(Grid::filled(Color::Red)));
/// let result = TrialResult::new(stats, PositionSet::EMPTY, Position::new(0, 0));
///
/// let mut top = TopResults::new();
/// for _ in 0..5 {
///     top.offer(result);
/// }
/// assert_eq!(top.len(), TopResults::CAPACITY);
/// assert_eq!(top.best().map(TrialResult::score), Some(48));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TopResults {
    results: Vec<TrialResult>,
}

impl TopResults {
    /// Maximum number of kept results.
    pub const CAPACITY: usize = 3;

    /// Creates an empty ranking.
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: Vec::with_capacity(Self::CAPACITY + 1),
        }
    }

    /// Offers a result; returns `true` if it was kept.
    pub fn offer(&mut self, result: TrialResult) -> bool {
        let key = result.rank_key();
        let index = self
            .results
            .iter()
            .position(|kept| kept.rank_key() < key)
            .unwrap_or(self.results.len());
        if index >= Self::CAPACITY {
            return false;
        }
        self.results.insert(index, result);
        self.results.truncate(Self::CAPACITY);
        true
    }

    /// Returns the best result.
    #[must_use]
    pub fn best(&self) -> Option<&TrialResult> {
        self.results.first()
    }

    /// Returns the number of kept results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if nothing was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the kept results, best first.
    #[must_use]
    pub fn as_slice(&self) -> &[TrialResult] {
        &self.results
    }

    /// Returns an iterator over the kept results, best first.
    pub fn iter(&self) -> slice::Iter<'_, TrialResult> {
        self.results.iter()
    }

    /// Consumes the ranking and returns the kept results, best first.
    #[must_use]
    pub fn into_vec(self) -> Vec<TrialResult> {
        self.results
    }
}

impl<'a> IntoIterator for &'a TopResults {
    type Item = &'a TrialResult;
    type IntoIter = slice::Iter<'a, TrialResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
