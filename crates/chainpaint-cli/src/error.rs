//! Errors reported by the command.

use std::io;

use chainpaint_core::GridParseError;
use chainpaint_search::SearchError;

/// Errors that end a `chainpaint` run.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// Reading the board or writing the report failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    /// The board text is malformed.
    #[display("invalid board: {_0}")]
    Board(#[from] GridParseError),
    /// The search rejected its input.
    #[display("invalid search input: {_0}")]
    Search(#[from] SearchError),
    /// The JSON report could not be written.
    #[display("failed to write JSON report: {_0}")]
    Json(#[from] serde_json::Error),
}
