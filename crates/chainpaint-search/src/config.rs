//! Search configuration.

use std::time::Duration;

use chainpaint_core::{Color, Position};
use chainpaint_solver::ChainStats;

use crate::SearchError;

/// Largest supported recolor count.
pub const MAX_RECOLOR: usize = 12;

/// Default progress reporting interval.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Which recolor pattern sizes are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RecolorWindow {
    /// Sizes from `max_recolor - width` (saturating at 0) to `max_recolor`.
    Width(usize),
    /// Sizes from `min` to `max`, both inclusive.
    Range {
        /// Smallest pattern size.
        min: usize,
        /// Largest pattern size.
        max: usize,
    },
}

impl Default for RecolorWindow {
    fn default() -> Self {
        Self::Width(4)
    }
}

impl RecolorWindow {
    /// Returns the inclusive size bounds for a given maximum recolor count.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidWindow`] if a range is reversed or
    /// reaches above `max_recolor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainpaint_search::RecolorWindow;
    ///
    /// assert_eq!(RecolorWindow::Width(4).bounds(6)?, (2, 6));
    /// assert_eq!(RecolorWindow::Width(4).bounds(2)?, (0, 2));
    /// assert!(RecolorWindow::Range { min: 3, max: 1 }.bounds(6).is_err());
    /// # Ok::<(), chainpaint_search::SearchError>(())
    /// ```
    pub fn bounds(self, max_recolor: usize) -> Result<(usize, usize), SearchError> {
        match self {
            Self::Width(width) => Ok((max_recolor.saturating_sub(width), max_recolor)),
            Self::Range { min, max } if min <= max && max <= max_recolor => Ok((min, max)),
            Self::Range { min, max } => Err(SearchError::InvalidWindow { min, max }),
        }
    }
}

/// Which cells are tried as the trigger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TriggerMode {
    /// Always clear this cell.
    Fixed(Position),
    /// Try every trigger candidate of the recolored grid.
    #[default]
    Search,
}

/// How strictly trigger candidates are filtered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TriggerHeuristic {
    /// A non-joker neighbor belongs to a component of at least three cells
    /// once the candidate is taken away.
    #[default]
    Neighborhood,
    /// Clearing the cell and letting its column fall creates a match.
    Collapse,
    /// Every non-empty cell.
    Exhaustive,
}

/// Where an upcoming piece lands in its column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropConvention {
    /// The first empty cell scanning down from the top row.
    #[default]
    Topmost,
    /// The lowest empty cell.
    Bottommost,
}

/// How a recolored grid is checked for an immediate match.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StabilityCheck {
    /// Only components touching a recolored cell are inspected.
    #[default]
    Local,
    /// The whole grid is scanned.
    Full,
}

/// Which trials qualify as results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptancePolicy {
    /// At least `n` chain links.
    MinChains(usize),
    /// At least `chains` links and a score of at least `score`.
    MinChainsAndScore {
        /// Minimum chain count.
        chains: usize,
        /// Minimum score.
        score: usize,
    },
    /// At least `chains` links, or a single step clearing at least `peak`
    /// cells.
    ChainsOrPeak {
        /// Minimum chain count.
        chains: usize,
        /// Minimum peak simultaneous clear.
        peak: usize,
    },
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self::MinChains(1)
    }
}

impl AcceptancePolicy {
    /// Returns `true` if a chain with these statistics qualifies.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainpaint_core::{Color, Grid};
    /// use chainpaint_search::AcceptancePolicy;
    /// use chainpaint_solver::{ChainBoard, ChainSimulator};
    ///
    /// let stats = ChainSimulator::new().run(&mut ChainBoard::new(Grid::filled(Color::Blue)));
    /// assert!(AcceptancePolicy::MinChains(1).accepts(&stats));
    /// assert!(!AcceptancePolicy::MinChains(6).accepts(&stats));
    /// assert!(AcceptancePolicy::ChainsOrPeak { chains: 6, peak: 16 }.accepts(&stats));
    /// ```
    #[must_use]
    pub fn accepts(&self, stats: &ChainStats) -> bool {
        match *self {
            Self::MinChains(chains) => stats.chain_count() >= chains,
            Self::MinChainsAndScore { chains, score } => {
                stats.chain_count() >= chains && stats.score() >= score
            }
            Self::ChainsOrPeak { chains, peak } => {
                stats.chain_count() >= chains || stats.peak_clear() >= peak
            }
        }
    }
}

/// Whether every qualifying trial competes for the top results, or only the
/// best trial of each recolor pattern.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ResultGrouping {
    /// Every qualifying trial is offered.
    #[default]
    PerTrial,
    /// Only the best trial of each pattern is offered.
    BestPerPattern,
}

/// Configuration of a search.
///
/// Built with [`SearchConfig::new`] or [`Default`] and adjusted with the
/// `with_*` methods.
///
/// # Examples
///
/// ```
/// use chainpaint_core::Color;
/// use chainpaint_search::{AcceptancePolicy, DropConvention, SearchConfig};
///
/// let config = SearchConfig::new(Color::Purple)
///     .with_max_recolor(3)
///     .with_drop(DropConvention::Bottommost)
///     .with_acceptance(AcceptancePolicy::MinChains(2));
/// assert_eq!(config.paint(), Color::Purple);
/// assert_eq!(config.window_bounds()?, (0, 3));
/// # Ok::<(), chainpaint_search::SearchError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    paint: Color,
    max_recolor: usize,
    window: RecolorWindow,
    trigger: TriggerMode,
    heuristic: TriggerHeuristic,
    drop: DropConvention,
    stability: StabilityCheck,
    acceptance: AcceptancePolicy,
    grouping: ResultGrouping,
    progress_interval: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Color::Red)
    }
}

impl SearchConfig {
    /// Creates a configuration painting with `paint` and defaults elsewhere.
    #[must_use]
    pub fn new(paint: Color) -> Self {
        Self {
            paint,
            max_recolor: MAX_RECOLOR,
            window: RecolorWindow::default(),
            trigger: TriggerMode::default(),
            heuristic: TriggerHeuristic::default(),
            drop: DropConvention::default(),
            stability: StabilityCheck::default(),
            acceptance: AcceptancePolicy::default(),
            grouping: ResultGrouping::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Sets the recolor target color.
    #[must_use]
    pub fn with_paint(self, paint: Color) -> Self {
        Self { paint, ..self }
    }

    /// Sets the maximum recolor count.
    #[must_use]
    pub fn with_max_recolor(self, max_recolor: usize) -> Self {
        Self {
            max_recolor,
            ..self
        }
    }

    /// Sets the recolor window.
    #[must_use]
    pub fn with_window(self, window: RecolorWindow) -> Self {
        Self { window, ..self }
    }

    /// Sets the trigger mode.
    #[must_use]
    pub fn with_trigger(self, trigger: TriggerMode) -> Self {
        Self { trigger, ..self }
    }

    /// Sets the trigger candidate heuristic.
    #[must_use]
    pub fn with_heuristic(self, heuristic: TriggerHeuristic) -> Self {
        Self { heuristic, ..self }
    }

    /// Sets the piece drop convention.
    #[must_use]
    pub fn with_drop(self, drop: DropConvention) -> Self {
        Self { drop, ..self }
    }

    /// Sets the post-recolor stability check.
    #[must_use]
    pub fn with_stability(self, stability: StabilityCheck) -> Self {
        Self { stability, ..self }
    }

    /// Sets the acceptance policy.
    #[must_use]
    pub fn with_acceptance(self, acceptance: AcceptancePolicy) -> Self {
        Self { acceptance, ..self }
    }

    /// Sets the result grouping.
    #[must_use]
    pub fn with_grouping(self, grouping: ResultGrouping) -> Self {
        Self { grouping, ..self }
    }

    /// Sets the minimum interval between progress reports.
    #[must_use]
    pub fn with_progress_interval(self, progress_interval: Duration) -> Self {
        Self {
            progress_interval,
            ..self
        }
    }

    /// Returns the recolor target color.
    #[must_use]
    pub fn paint(&self) -> Color {
        self.paint
    }

    /// Returns the maximum recolor count.
    #[must_use]
    pub fn max_recolor(&self) -> usize {
        self.max_recolor
    }

    /// Returns the recolor window.
    #[must_use]
    pub fn window(&self) -> RecolorWindow {
        self.window
    }

    /// Returns the trigger mode.
    #[must_use]
    pub fn trigger(&self) -> TriggerMode {
        self.trigger
    }

    /// Returns the trigger candidate heuristic.
    #[must_use]
    pub fn heuristic(&self) -> TriggerHeuristic {
        self.heuristic
    }

    /// Returns the piece drop convention.
    #[must_use]
    pub fn drop(&self) -> DropConvention {
        self.drop
    }

    /// Returns the post-recolor stability check.
    #[must_use]
    pub fn stability(&self) -> StabilityCheck {
        self.stability
    }

    /// Returns the acceptance policy.
    #[must_use]
    pub fn acceptance(&self) -> AcceptancePolicy {
        self.acceptance
    }

    /// Returns the result grouping.
    #[must_use]
    pub fn grouping(&self) -> ResultGrouping {
        self.grouping
    }

    /// Returns the minimum interval between progress reports.
    #[must_use]
    pub fn progress_interval(&self) -> Duration {
        self.progress_interval
    }

    /// Validates the recolor count and returns the window's inclusive size
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::RecolorCountOutOfRange`] if the maximum recolor
    /// count exceeds [`MAX_RECOLOR`], or [`SearchError::InvalidWindow`] if the
    /// window is invalid.
    pub fn window_bounds(&self) -> Result<(usize, usize), SearchError> {
        if self.max_recolor > MAX_RECOLOR {
            return Err(SearchError::RecolorCountOutOfRange {
                count: self.max_recolor,
            });
        }
        self.window.bounds(self.max_recolor)
    }
}
