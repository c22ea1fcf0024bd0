#![cfg_attr(feature = "unstable", feature(test))]

//! Generates word-search puzzles.
//!
//! Words from a [`WordList`] are placed one by one on a square grid, in the directions enabled by
//! [`DirectionFlags`], preferring spots where they cross letters already on the grid. Remaining
//! cells are filled with random letters. The resulting [`Puzzle`] records where every word went
//! so the solution can be highlighted.

mod data;
mod engine;
mod grid;
mod orientation;
mod results;
mod worksheet;

/// The smallest supported grid.
pub const MIN_GRID_SIZE: usize = 5;
/// The largest supported grid.
pub const MAX_GRID_SIZE: usize = 20;
/// The grid size used when none is given.
pub const DEFAULT_GRID_SIZE: usize = 10;

pub use data::*;
pub use engine::*;
pub use grid::*;
pub use orientation::*;
pub use results::*;
pub use worksheet::*;
