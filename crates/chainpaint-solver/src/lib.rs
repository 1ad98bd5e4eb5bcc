//! Match resolution and chain simulation for the chainpaint board.
//!
//! # Overview
//!
//! - [`step`]: one match & collapse step. Normal-colored components of four or
//!   more cells clear together with the jokers touching them, then every
//!   column falls.
//! - [`ChainSimulator`]: repeats the step until the board is stable and
//!   collects [`ChainStats`].
//! - [`ChainBoard`]: a board whose recolored cells are tracked through
//!   gravity so they never score.
//!
//! # Examples
//!
//! ```
//! use chainpaint_core::{Color, Grid};
//! use chainpaint_solver::{ChainBoard, ChainSimulator};
//!
//! let mut board = ChainBoard::new(Grid::filled(Color::Red));
//! let stats = ChainSimulator::new().run(&mut board);
//! assert_eq!(stats.chain_count(), 1);
//! assert_eq!(stats.peak_clear(), 48);
//! ```

pub use self::chain::*;

mod chain;
pub mod step;

#[cfg(test)]
mod testing;
