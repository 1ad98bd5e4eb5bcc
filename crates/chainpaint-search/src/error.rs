//! Search errors and failure reasons.

use chainpaint_core::Color;

/// Errors returned when a search request or configuration is malformed.
///
/// These are rejected before any work starts. Conditions that arise while
/// searching are reported through [`SearchFailure`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// An upcoming piece is not a normal color.
    #[display("piece for column {column} must be a normal color, found {color}")]
    InvalidPiece {
        /// Column the piece drops into.
        column: u8,
        /// The offending color.
        color: Color,
    },
    /// The maximum recolor count is above the supported limit.
    #[display("recolor count {count} is out of range 0..=12")]
    RecolorCountOutOfRange {
        /// The requested count.
        count: usize,
    },
    /// The recolor window is empty or exceeds the maximum recolor count.
    #[display("invalid recolor window {min}..={max}")]
    InvalidWindow {
        /// Requested lower bound.
        min: usize,
        /// Requested upper bound.
        max: usize,
    },
}

/// Why a search produced no result.
///
/// A failure is a normal outcome, not an error: the search call itself
/// succeeded and the outcome still carries the candidate counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SearchFailure {
    /// The base grid clears on its own before any recolor.
    #[display("the base grid already has a match before recoloring")]
    BaseGridHasMatch,
    /// Every cell would clear immediately if recolored, or none can change.
    #[display("no cell can be recolored without clearing immediately")]
    NoRecolorCandidates,
    /// The recolor window selects no pattern.
    #[display("the recolor window selects no pattern")]
    EmptySearchSpace,
    /// The search ran to completion but no trial met the acceptance policy.
    #[display("no trial met the acceptance policy")]
    NoQualifyingTrial,
    /// The search was cancelled before any result was found.
    #[display("the search was cancelled before any result was found")]
    Cancelled,
}
