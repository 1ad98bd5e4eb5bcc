//! Multi-step chain simulation.
//!
//! A chain repeats the match & collapse step until the board is stable. Each
//! productive step is one link of the chain; [`ChainStats`] accumulates the
//! count, the score and the largest single clear.
//!
//! Cells that must never score (recolored cells) are tracked by identity
//! through [`ChainBoard`]: the marks move with their cells when columns fall,
//! so a mark never passes to a different cell that lands in the same spot.

use chainpaint_core::{Grid, Position, PositionSet};

use crate::step::{self, StepOutcome};

/// A board under simulation, with origin-tracked zero-score cells.
///
/// # Examples
///
/// ```
/// use chainpaint_core::{Grid, Position, PositionSet};
/// use chainpaint_solver::{ChainBoard, ChainSimulator};
///
/// let grid: Grid = "
///     ........
///     ........
///     ........
///     ........
///     ........
///     RRRR....
/// "
/// .parse()?;
/// let painted = PositionSet::from_elem(Position::new(3, 5));
/// let mut board = ChainBoard::with_zero_score(grid, painted);
///
/// let stats = ChainSimulator::new().run(&mut board);
/// assert_eq!(stats.chain_count(), 1);
/// assert_eq!(stats.score(), 3);
/// # Ok::<(), chainpaint_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainBoard {
    grid: Grid,
    zero_score: PositionSet,
}

impl ChainBoard {
    /// Creates a board with no zero-score cells.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::with_zero_score(grid, PositionSet::EMPTY)
    }

    /// Creates a board whose cells at `zero_score` never count toward the
    /// score.
    ///
    /// Marks on empty cells are ignored.
    #[must_use]
    pub fn with_zero_score(grid: Grid, zero_score: PositionSet) -> Self {
        let zero_score = zero_score & grid.occupied();
        Self { grid, zero_score }
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current positions of the zero-score cells still on the
    /// board.
    #[must_use]
    pub fn zero_score(&self) -> PositionSet {
        self.zero_score
    }

    /// Consumes the board and returns its grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Removes the cell at `pos` without scoring it and lets its column fall.
    ///
    /// Returns `false` and leaves the board untouched if the cell is empty.
    pub fn clear_cell(&mut self, pos: Position) -> bool {
        if self.grid.take(pos).is_none() {
            return false;
        }
        self.zero_score.remove(pos);
        self.grid.apply_gravity_tracking(&mut self.zero_score);
        true
    }

    /// Applies one match & collapse step, moving the zero-score marks along.
    pub fn resolve_step(&mut self) -> Option<StepOutcome> {
        step::resolve_step_tracking(&mut self.grid, &mut self.zero_score)
    }
}

/// Statistics collected over a chain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChainStats {
    chain_count: usize,
    score: usize,
    peak_clear: usize,
    cleared: usize,
}

impl ChainStats {
    /// Creates empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain_count: 0,
            score: 0,
            peak_clear: 0,
            cleared: 0,
        }
    }

    /// Returns the number of productive steps.
    #[must_use]
    pub const fn chain_count(&self) -> usize {
        self.chain_count
    }

    /// Returns the number of removed normal-colored cells that were not
    /// zero-score cells.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the largest number of cells removed by a single step, jokers
    /// included.
    #[must_use]
    pub const fn peak_clear(&self) -> usize {
        self.peak_clear
    }

    /// Returns the total number of removed cells, jokers included.
    #[must_use]
    pub const fn cleared(&self) -> usize {
        self.cleared
    }

    fn record(&mut self, outcome: &StepOutcome) {
        self.chain_count += 1;
        self.score += outcome.scoring_count();
        self.peak_clear = self.peak_clear.max(outcome.len());
        self.cleared += outcome.len();
    }
}

/// Runs chains to completion.
///
/// A chain can be driven one step at a time with [`step`](Self::step) or all
/// at once with [`run`](Self::run).
///
/// # Step-by-step simulation
///
/// ```
/// use chainpaint_core::{Color, Grid};
/// use chainpaint_solver::{ChainBoard, ChainSimulator, ChainStats};
///
/// let simulator = ChainSimulator::new();
/// let mut board = ChainBoard::new(Grid::filled(Color::Green));
/// let mut stats = ChainStats::new();
///
/// while simulator.step(&mut board, &mut stats) {
///     println!("link {} cleared {} cells", stats.chain_count(), stats.cleared());
/// }
/// assert_eq!(stats.peak_clear(), 48);
/// assert!(board.grid().is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ChainSimulator;

impl ChainSimulator {
    /// Creates a new simulator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies one match & collapse step and records it in `stats`.
    ///
    /// Returns `false` when the board is stable; `stats` is then unchanged.
    pub fn step(&self, board: &mut ChainBoard, stats: &mut ChainStats) -> bool {
        let Some(outcome) = board.resolve_step() else {
            return false;
        };
        stats.record(&outcome);
        log::trace!(
            "chain link {}: removed {} cells, {} scoring",
            stats.chain_count,
            outcome.len(),
            outcome.scoring_count()
        );
        true
    }

    /// Runs the chain until the board is stable and returns its statistics.
    ///
    /// Terminates because every productive step strictly reduces the number
    /// of non-empty cells.
    pub fn run(&self, board: &mut ChainBoard) -> ChainStats {
        let mut stats = ChainStats::new();
        self.run_with_stats(board, &mut stats);
        stats
    }

    /// Runs the chain until the board is stable, accumulating into `stats`.
    pub fn run_with_stats(&self, board: &mut ChainBoard, stats: &mut ChainStats) {
        while self.step(board, stats) {}
    }
}
