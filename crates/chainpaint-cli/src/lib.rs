//! The `chainpaint` command-line shell.
//!
//! Reads a board and the upcoming pieces, runs a
//! [`Searcher`](chainpaint_search::Searcher), and prints the ranked results
//! with an annotated board for each: `X` marks the trigger cell and `*` the
//! recolored cells.

use std::io::{self, Write as _};

use chainpaint_search::{CancelToken, SearchRequest, Searcher};

pub use self::{args::Args, error::CliError};
use self::{
    dto::OutcomeDto,
    monitor::{Deadline, LogProgress},
};

mod args;
mod dto;
mod error;
mod input;
mod monitor;
mod render;

/// Runs one search as described by `args` and writes the report to standard
/// output.
///
/// # Errors
///
/// Returns a [`CliError`] if the board cannot be read, the search input is
/// invalid, or the report cannot be written.
pub fn run(args: &Args) -> Result<(), CliError> {
    let base = input::read_board(&args.board)?;
    let request = SearchRequest::new(base, args.next);
    let searcher = Searcher::new(args.search_config());
    log::debug!("searching with {:?}", searcher.config());

    let cancel = CancelToken::new();
    let deadline = args
        .time_limit()
        .map(|limit| Deadline::start(limit, cancel.clone()));
    let outcome = searcher.run_with(&request, &mut LogProgress, &cancel)?;
    drop(deadline);

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &OutcomeDto::new(&base, &outcome))?;
        writeln!(out)?;
    } else {
        render::write_report(&mut out, &base, &outcome)?;
    }
    out.flush()?;
    Ok(())
}
