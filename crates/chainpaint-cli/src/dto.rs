//! JSON report.

use chainpaint_core::{Grid, Position};
use chainpaint_search::SearchOutcome;
use serde::Serialize;

use crate::render;

/// JSON form of a search outcome.
///
/// Positions are `[x, y]` pairs; boards are six rows using the annotated
/// text form of [`render::annotated_rows`].
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OutcomeDto {
    pub(crate) recolor_candidates: Option<usize>,
    pub(crate) trigger_candidates: Option<usize>,
    pub(crate) failure: Option<String>,
    pub(crate) cancelled: bool,
    pub(crate) patterns_done: u64,
    pub(crate) patterns_total: u64,
    pub(crate) trials_done: u64,
    pub(crate) elapsed_ms: u128,
    pub(crate) results: Vec<ResultDto>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ResultDto {
    pub(crate) rank: usize,
    pub(crate) score: usize,
    pub(crate) chains: usize,
    pub(crate) peak_clear: usize,
    pub(crate) trigger: [u8; 2],
    pub(crate) recolor: Vec<[u8; 2]>,
    pub(crate) board: Vec<String>,
}

impl OutcomeDto {
    pub(crate) fn new(base: &Grid, outcome: &SearchOutcome) -> Self {
        let progress = outcome.progress();
        let results = outcome
            .results()
            .iter()
            .enumerate()
            .map(|(i, result)| ResultDto {
                rank: i + 1,
                score: result.score(),
                chains: result.chain_count(),
                peak_clear: result.peak_clear(),
                trigger: coords(result.trigger()),
                recolor: result.recolor().iter().map(coords).collect(),
                board: render::annotated_rows(base, result),
            })
            .collect();
        Self {
            recolor_candidates: outcome.recolor_candidates().map(|set| set.len()),
            trigger_candidates: outcome.trigger_candidates().map(|set| set.len()),
            failure: outcome.failure().map(|failure| failure.to_string()),
            cancelled: outcome.is_cancelled(),
            patterns_done: progress.patterns_done(),
            patterns_total: progress.patterns_total(),
            trials_done: progress.trials_done(),
            elapsed_ms: progress.elapsed().as_millis(),
            results,
        }
    }
}

fn coords(pos: Position) -> [u8; 2] {
    [pos.x(), pos.y()]
}
