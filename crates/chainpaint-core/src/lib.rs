//! Core data structures for the chainpaint board.
//!
//! This crate provides the fixed 6×8 board model and the connectivity queries
//! shared by the chain solver and the search.
//!
//! # Overview
//!
//! 1. **Board model**
//!    - [`color`]: the five normal colors and the joker marker
//!    - [`position`]: board coordinates and 4-neighbor iteration
//!    - [`position_set`]: a 48-bit set of positions
//!    - [`grid`]: the board itself, with gravity and a text format
//!
//! 2. **Connectivity**
//!    - [`component`]: flood-fill component queries with exclusion masks and
//!      hypothetical colors
//!
//! # Examples
//!
//! ```
//! use chainpaint_core::{Color, Grid, Position, PositionSet, component};
//!
//! let mut grid = Grid::new();
//! for x in 0..3 {
//!     grid.set(Position::new(x, 5), Some(Color::Blue));
//! }
//!
//! let size = component::component_size(&grid, Position::new(0, 5), PositionSet::EMPTY);
//! assert_eq!(size, 3);
//! ```

pub mod color;
pub mod component;
pub mod grid;
pub mod position;
pub mod position_set;

pub use self::{
    color::{Color, ColorParseError},
    grid::{Grid, GridParseError},
    position::{CELLS, COLUMNS, Position, ROWS},
    position_set::PositionSet,
};

/// Minimum size of a same-colored component that clears.
pub const MATCH_SIZE: usize = 4;
