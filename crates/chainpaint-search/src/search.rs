//! The search orchestrator.

use chainpaint_core::{Grid, Position, PositionSet};
use chainpaint_solver::{ChainBoard, ChainSimulator, step};

use crate::{
    CancelToken, NoProgress, Pieces, ProgressObserver, ResultGrouping, SearchConfig, SearchError,
    SearchFailure, SearchProgress, TopResults, TrialResult, TriggerMode,
    combinations::{self, Combinations},
    progress::ProgressReporter,
    pruning,
};

/// The board and pieces a search starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    base: Grid,
    pieces: Pieces,
}

impl SearchRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(base: Grid, pieces: Pieces) -> Self {
        Self { base, pieces }
    }

    /// Returns the base grid.
    #[must_use]
    pub const fn base(&self) -> &Grid {
        &self.base
    }

    /// Returns the upcoming pieces.
    #[must_use]
    pub const fn pieces(&self) -> &Pieces {
        &self.pieces
    }
}

/// What a search found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    results: Vec<TrialResult>,
    recolor_candidates: Option<PositionSet>,
    trigger_candidates: Option<PositionSet>,
    failure: Option<SearchFailure>,
    cancelled: bool,
    progress: SearchProgress,
}

impl SearchOutcome {
    fn aborted(failure: SearchFailure) -> Self {
        Self {
            results: vec![],
            recolor_candidates: None,
            trigger_candidates: None,
            failure: Some(failure),
            cancelled: false,
            progress: SearchProgress::default(),
        }
    }

    /// Returns up to three results, best first.
    #[must_use]
    pub fn results(&self) -> &[TrialResult] {
        &self.results
    }

    /// Returns the best result.
    #[must_use]
    pub fn best(&self) -> Option<&TrialResult> {
        self.results.first()
    }

    /// Returns the recolor candidates of the base grid.
    ///
    /// `None` if the search stopped before pruning.
    #[must_use]
    pub fn recolor_candidates(&self) -> Option<PositionSet> {
        self.recolor_candidates
    }

    /// Returns the trigger candidates of the base grid.
    ///
    /// `None` if the search stopped before pruning.
    #[must_use]
    pub fn trigger_candidates(&self) -> Option<PositionSet> {
        self.trigger_candidates
    }

    /// Returns why no result was found, if none was.
    #[must_use]
    pub fn failure(&self) -> Option<SearchFailure> {
        self.failure
    }

    /// Returns `true` if the search was cancelled before finishing.
    ///
    /// A cancelled search may still carry the results found so far.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Returns the final progress snapshot.
    #[must_use]
    pub fn progress(&self) -> &SearchProgress {
        &self.progress
    }

    /// Consumes the outcome and returns its results, best first.
    #[must_use]
    pub fn into_results(self) -> Vec<TrialResult> {
        self.results
    }
}

/// Runs exhaustive recolor-and-trigger searches.
///
/// For every recolor pattern in the configured window, the searcher paints a
/// copy of the base grid, rejects it if the paint alone clears anything, drops
/// the upcoming pieces, then clears each trigger cell in turn and runs the
/// chain. Recolored cells never score, wherever they fall.
///
/// # Examples
///
/// ```
/// use chainpaint_core::{Color, Grid, Position};
/// use chainpaint_search::{RecolorWindow, SearchConfig, SearchRequest, Searcher, TriggerMode};
///
/// let base: Grid = "
///     BYPGBYPG
///     PGBYPGBY
///     RYPGBYPG
///     PGBYPGBY
///     RYPGBYPG
///     RGBYPGBY
/// "
/// .parse()?;
/// let request = SearchRequest::new(base, "PPPPPPPP".parse()?);
/// let config = SearchConfig::new(Color::Red)
///     .with_max_recolor(1)
///     .with_window(RecolorWindow::Range { min: 1, max: 1 })
///     .with_trigger(TriggerMode::Fixed(Position::new(0, 3)));
///
/// let outcome = Searcher::new(config).run(&request)?;
/// let best = outcome.best().expect("a fourth red completes the group");
/// assert_eq!(best.chain_count(), 1);
/// // the painted cell clears too, but never scores
/// assert_eq!(best.score(), 3);
/// assert_eq!(best.peak_clear(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    simulator: ChainSimulator,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            simulator: ChainSimulator::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs a search without progress reports or cancellation.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the request or configuration is
    /// malformed.
    pub fn run(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        self.run_with(request, &mut NoProgress, &CancelToken::new())
    }

    /// Runs a search, reporting progress to `observer` and stopping early
    /// once `cancel` is set.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the request or configuration is
    /// malformed.
    pub fn run_with<O>(
        &self,
        request: &SearchRequest,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome, SearchError>
    where
        O: ProgressObserver + ?Sized,
    {
        let (min_size, max_size) = self.config.window_bounds()?;
        request.pieces.validate()?;
        if let TriggerMode::Fixed(pos) = self.config.trigger() {
            log::debug!("fixed trigger at {pos}");
        }

        let base = &request.base;
        if step::has_match(base) {
            log::debug!("base grid already has a match");
            return Ok(SearchOutcome::aborted(SearchFailure::BaseGridHasMatch));
        }

        let recolor_candidates = pruning::recolor_candidates(base, self.config.paint());
        let trigger_candidates = pruning::trigger_candidates(base, self.config.heuristic());
        let mut outcome = SearchOutcome {
            recolor_candidates: Some(recolor_candidates),
            trigger_candidates: Some(trigger_candidates),
            ..SearchOutcome::aborted(SearchFailure::NoRecolorCandidates)
        };
        log::debug!(
            "{} recolor candidates, {} trigger candidates",
            recolor_candidates.len(),
            trigger_candidates.len()
        );
        if recolor_candidates.is_empty() {
            return Ok(outcome);
        }

        let candidates: Vec<Position> = recolor_candidates.iter().collect();
        let patterns_total = combinations::pattern_count(candidates.len(), min_size, max_size);
        if patterns_total == 0 {
            outcome.failure = Some(SearchFailure::EmptySearchSpace);
            return Ok(outcome);
        }
        let triggers_per_pattern = match self.config.trigger() {
            TriggerMode::Fixed(_) => 1,
            TriggerMode::Search => trigger_candidates.len().max(1),
        };
        let per_pattern = u64::try_from(triggers_per_pattern).unwrap_or(u64::MAX);
        let trials_estimated = patterns_total.saturating_mul(per_pattern);
        log::debug!(
            "sizes {min_size}..={max_size}: {patterns_total} patterns, ~{trials_estimated} trials"
        );

        let mut reporter = ProgressReporter::new(
            observer,
            self.config.progress_interval(),
            patterns_total,
            trials_estimated,
        );
        let mut top = TopResults::new();
        let mut patterns_done = 0_u64;
        let mut trials_done = 0_u64;
        let mut cancelled = false;

        'sizes: for k in min_size..=max_size.min(candidates.len()) {
            let mut subsets = Combinations::new(candidates.len(), k);
            while let Some(indices) = subsets.next_combination() {
                if cancel.is_cancelled() {
                    cancelled = true;
                    break 'sizes;
                }
                let pattern: PositionSet = indices.iter().map(|&i| candidates[i]).collect();
                trials_done += self.run_pattern(request, pattern, &mut top);
                patterns_done += 1;
                reporter.update(patterns_done, trials_done);
            }
        }

        let progress = reporter.finish(patterns_done, trials_done, !cancelled);
        log::info!(
            "search {}: {} results after {} patterns and {} trials in {:.1?}",
            if cancelled { "cancelled" } else { "finished" },
            top.len(),
            patterns_done,
            trials_done,
            progress.elapsed()
        );

        outcome.failure = match (top.is_empty(), cancelled) {
            (false, _) => None,
            (true, true) => Some(SearchFailure::Cancelled),
            (true, false) => Some(SearchFailure::NoQualifyingTrial),
        };
        outcome.results = top.into_vec();
        outcome.cancelled = cancelled;
        outcome.progress = progress;
        Ok(outcome)
    }

    /// Runs every trial of one recolor pattern and returns the number of
    /// trials.
    fn run_pattern(
        &self,
        request: &SearchRequest,
        pattern: PositionSet,
        top: &mut TopResults,
    ) -> u64 {
        let config = &self.config;
        let mut grid = request.base;
        grid.paint(pattern, config.paint());
        if pruning::has_match_after_recolor(&grid, pattern, config.stability()) {
            return 0;
        }

        let triggers = match config.trigger() {
            TriggerMode::Fixed(pos) => PositionSet::from_elem(pos),
            TriggerMode::Search => pruning::trigger_candidates(&grid, config.heuristic()),
        };
        request.pieces.drop_into(&mut grid, config.drop());

        let mut trials = 0;
        let mut best_of_pattern: Option<TrialResult> = None;
        for trigger in triggers {
            trials += 1;
            let mut board = ChainBoard::with_zero_score(grid, pattern);
            if !board.clear_cell(trigger) {
                continue;
            }
            let stats = self.simulator.run(&mut board);
            if !config.acceptance().accepts(&stats) {
                continue;
            }
            let result = TrialResult::new(stats, pattern, trigger);
            match config.grouping() {
                ResultGrouping::PerTrial => {
                    top.offer(result);
                }
                ResultGrouping::BestPerPattern => {
                    if best_of_pattern.is_none_or(|best| result.rank_key() > best.rank_key()) {
                        best_of_pattern = Some(result);
                    }
                }
            }
        }
        if let Some(best) = best_of_pattern {
            top.offer(best);
        }
        trials
    }
}
