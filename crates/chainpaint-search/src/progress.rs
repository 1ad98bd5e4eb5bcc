//! Progress reporting and cooperative cancellation.

use std::{
    fmt::{self, Display},
    sync::Arc,
    time::{Duration, Instant},
};

use portable_atomic::{AtomicBool, Ordering};

/// A snapshot of a running search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    percent: u8,
    patterns_done: u64,
    patterns_total: u64,
    trials_done: u64,
    trials_estimated: u64,
    elapsed: Duration,
}

impl SearchProgress {
    /// Returns the completed share of patterns, 0 to 100.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Returns the number of recolor patterns processed so far.
    #[must_use]
    pub fn patterns_done(&self) -> u64 {
        self.patterns_done
    }

    /// Returns the number of recolor patterns in the window.
    #[must_use]
    pub fn patterns_total(&self) -> u64 {
        self.patterns_total
    }

    /// Returns the number of trigger trials run so far.
    #[must_use]
    pub fn trials_done(&self) -> u64 {
        self.trials_done
    }

    /// Returns the estimated total number of trials.
    ///
    /// The estimate assumes every pattern tries as many triggers as the base
    /// grid has trigger candidates (at least one).
    #[must_use]
    pub fn trials_estimated(&self) -> u64 {
        self.trials_estimated
    }

    /// Returns the time since the search started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Display for SearchProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% | patterns {}/{} | trials {}/~{} | {}s elapsed",
            self.percent,
            self.patterns_done,
            self.patterns_total,
            self.trials_done,
            self.trials_estimated,
            self.elapsed.as_secs()
        )
    }
}

/// Receives progress snapshots from a running search.
///
/// Implemented for every `FnMut(&SearchProgress)` closure.
pub trait ProgressObserver {
    /// Called with the latest snapshot.
    fn on_progress(&mut self, progress: &SearchProgress);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&SearchProgress),
{
    fn on_progress(&mut self, progress: &SearchProgress) {
        self(progress);
    }
}

/// An observer that ignores every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _progress: &SearchProgress) {}
}

/// A shared flag that asks a running search to stop.
///
/// Clones share the same flag, so one clone can be handed to another thread
/// or a timer while the search holds the other. The search checks the flag
/// once per recolor pattern.
///
/// # Examples
///
/// ```
/// use chainpaint_search::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Default, Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Throttles progress reports to one per interval, and only when the
/// percentage changed.
pub(crate) struct ProgressReporter<'a, O: ?Sized> {
    observer: &'a mut O,
    interval: Duration,
    started: Instant,
    last_report: Option<Instant>,
    progress: SearchProgress,
}

impl<'a, O> ProgressReporter<'a, O>
where
    O: ProgressObserver + ?Sized,
{
    pub(crate) fn new(
        observer: &'a mut O,
        interval: Duration,
        patterns_total: u64,
        trials_estimated: u64,
    ) -> Self {
        Self {
            observer,
            interval,
            started: Instant::now(),
            last_report: None,
            progress: SearchProgress {
                patterns_total,
                trials_estimated,
                ..SearchProgress::default()
            },
        }
    }

    pub(crate) fn update(&mut self, patterns_done: u64, trials_done: u64) {
        let now = Instant::now();
        let percent = percent_of(patterns_done, self.progress.patterns_total);
        let due = self
            .last_report
            .is_none_or(|last| now.duration_since(last) >= self.interval);
        let changed = self.last_report.is_none() || percent != self.progress.percent;

        self.progress.patterns_done = patterns_done;
        self.progress.trials_done = trials_done;
        self.progress.elapsed = now.duration_since(self.started);
        if due && changed {
            self.progress.percent = percent;
            self.last_report = Some(now);
            self.observer.on_progress(&self.progress);
        }
    }

    /// Sends the final report and returns it.
    ///
    /// A completed search always reports 100%.
    pub(crate) fn finish(
        mut self,
        patterns_done: u64,
        trials_done: u64,
        completed: bool,
    ) -> SearchProgress {
        self.progress.patterns_done = patterns_done;
        self.progress.trials_done = trials_done;
        self.progress.elapsed = self.started.elapsed();
        self.progress.percent = if completed {
            100
        } else {
            percent_of(patterns_done, self.progress.patterns_total)
        };
        self.observer.on_progress(&self.progress);
        self.progress
    }
}

fn percent_of(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = u128::from(done) * 100 / u128::from(total);
    u8::try_from(percent.min(100)).unwrap_or(100)
}
