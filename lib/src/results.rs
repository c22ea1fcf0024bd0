use crate::grid::Grid;
use crate::orientation::Orientation;
use std::collections::HashSet;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Indicates that an error occurred while building a word list or generating a puzzle.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PuzzleError {
    /// Indicates that generation was requested without any words.
    #[error("please add at least one word")]
    NoWords,
    /// Indicates that the given word could not be placed anywhere on the grid.
    #[error("unable to place word: {0}. try increasing the grid size or removing some words.")]
    UnplaceableWord(Arc<str>),
    /// Indicates that the given word contains something other than the letters a-z or A-Z.
    #[error("invalid word: {0:?}. words may only contain the letters a-z")]
    InvalidWord(String),
    /// Indicates that the requested grid size is outside the supported range.
    #[error("grid size {0} is not supported, it must be between 5 and 20")]
    GridSizeOutOfRange(usize),
    /// Indicates that the given name does not identify a word list style.
    #[error("unknown word list style: {0:?}")]
    UnknownWordListStyle(String),
    /// Indicates that a grid was built from cells that do not form a non-empty square.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),
    /// Indicates that reading a word list failed.
    #[error("failed to read words: {0}")]
    Io(String),
}

impl From<io::Error> for PuzzleError {
    fn from(e: io::Error) -> Self {
        PuzzleError::Io(e.to_string())
    }
}

/// A cell in the grid. `x` is the column and `y` is the row, both starting from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Position {
        Position { x, y }
    }
}

/// Where a single word was written in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedWord {
    pub word: Arc<str>,
    pub orientation: Orientation,
    /// The cells holding each letter of the word, in the same order as the letters.
    pub positions: Vec<Position>,
}

/// A completed word search: a fully filled grid and the location of every word in it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PuzzleParts")
)]
pub struct Puzzle {
    grid: Grid,
    placed_words: Vec<PlacedWord>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PuzzleParts {
    grid: Grid,
    placed_words: Vec<PlacedWord>,
}

#[cfg(feature = "serde")]
impl TryFrom<PuzzleParts> for Puzzle {
    type Error = PuzzleError;

    fn try_from(parts: PuzzleParts) -> Result<Puzzle, PuzzleError> {
        let size = parts.grid.size();
        for placed in &parts.placed_words {
            if let Some(position) = placed
                .positions
                .iter()
                .find(|position| position.x >= size || position.y >= size)
            {
                return Err(PuzzleError::MalformedGrid(format!(
                    "{} is placed at ({}, {}), outside the {}x{} grid",
                    placed.word, position.x, position.y, size, size
                )));
            }
        }
        Ok(Puzzle::new(parts.grid, parts.placed_words))
    }
}

impl Puzzle {
    pub(crate) fn new(grid: Grid, placed_words: Vec<PlacedWord>) -> Puzzle {
        Puzzle { grid, placed_words }
    }

    /// The letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The width (and height) of the grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Every placed word, in the order they were placed. Duplicate words appear once per
    /// occurrence in the word list.
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed_words
    }

    /// Returns the cells of the first placement of `word`, if it was placed.
    pub fn positions_of(&self, word: &str) -> Option<&[Position]> {
        self.placed_words
            .iter()
            .find(|placed| &*placed.word == word)
            .map(|placed| placed.positions.as_slice())
    }

    /// Returns `true` iff the given cell holds a letter of at least one placed word.
    pub fn is_part_of_word(&self, position: Position) -> bool {
        self.placed_words
            .iter()
            .any(|placed| placed.positions.contains(&position))
    }

    /// All cells that belong to at least one word, for highlighting the solution.
    pub fn solution_cells(&self) -> HashSet<Position> {
        self.placed_words
            .iter()
            .flat_map(|placed| placed.positions.iter().copied())
            .collect()
    }

    /// Reads the letters along a word's recorded positions.
    pub fn read(&self, positions: &[Position]) -> String {
        positions
            .iter()
            .map(|position| self.grid[*position])
            .collect()
    }
}
