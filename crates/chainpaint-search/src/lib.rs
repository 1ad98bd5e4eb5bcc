//! Exhaustive recolor-and-trigger search for the chainpaint board.
//!
//! Given a stable board and the eight upcoming pieces, the search paints
//! every subset of cells in a size window with one color, drops the pieces,
//! clears a trigger cell and runs the chain. The three best trials by score,
//! chain count and peak clear are kept.
//!
//! # Overview
//!
//! - [`pruning`]: recolor and trigger candidate filters
//! - [`combinations`]: index-based `k`-subset enumeration
//! - [`SearchConfig`]: paint color, pattern window, trigger strategy and the
//!   other knobs of a search
//! - [`Searcher`]: the orchestrator; returns a [`SearchOutcome`]
//! - [`ProgressObserver`] and [`CancelToken`]: cooperative hooks for long
//!   searches
//!
//! # Examples
//!
//! ```
//! use chainpaint_core::{Color, Grid, Position};
//! use chainpaint_search::{RecolorWindow, SearchConfig, SearchFailure, SearchRequest, Searcher};
//!
//! // a single red cell: nothing can ever clear
//! let mut base = Grid::new();
//! base.set(Position::new(0, 5), Some(Color::Red));
//! let request = SearchRequest::new(base, "BBBBBBBB".parse()?);
//! let config = SearchConfig::new(Color::Green)
//!     .with_max_recolor(1)
//!     .with_window(RecolorWindow::Width(1));
//!
//! let outcome = Searcher::new(config).run(&request)?;
//! assert_eq!(outcome.failure(), Some(SearchFailure::NoQualifyingTrial));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    config::{
        AcceptancePolicy, DEFAULT_PROGRESS_INTERVAL, DropConvention, MAX_RECOLOR, RecolorWindow,
        ResultGrouping, SearchConfig, StabilityCheck, TriggerHeuristic, TriggerMode,
    },
    error::{SearchError, SearchFailure},
    pieces::{Pieces, PiecesParseError},
    progress::{CancelToken, NoProgress, ProgressObserver, SearchProgress},
    ranking::{TopResults, TrialResult},
    search::{SearchOutcome, SearchRequest, Searcher},
};

pub mod combinations;
mod config;
mod error;
mod pieces;
mod progress;
pub mod pruning;
mod ranking;
mod search;
