use crate::orientation::Orientation;
use crate::results::Position;
use crate::results::PuzzleError;
use rand::Rng;
use std::fmt;
use std::ops::Index;

/// The letters used to fill cells that no word claims.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A completed, square letter grid. Every cell holds a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridCells")
)]
pub struct Grid {
    size: usize,
    /// Row-major letters.
    cells: Vec<char>,
}

/// The serialized form of a [`Grid`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridCells {
    size: usize,
    cells: Vec<char>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridCells> for Grid {
    type Error = PuzzleError;

    fn try_from(raw: GridCells) -> Result<Grid, PuzzleError> {
        if raw.size == 0 || raw.cells.len() != raw.size * raw.size {
            return Err(PuzzleError::MalformedGrid(format!(
                "{} cells cannot make a {}x{} grid",
                raw.cells.len(),
                raw.size,
                raw.size
            )));
        }
        Ok(Grid {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Builds a grid from its rows.
    ///
    /// Returns [`PuzzleError::MalformedGrid`] unless there is at least one row and every row is
    /// as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Grid, PuzzleError> {
        let size = rows.len();
        if size == 0 {
            return Err(PuzzleError::MalformedGrid("a grid needs at least one row".to_string()));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(PuzzleError::MalformedGrid(format!(
                "row of length {} in a grid with {} rows",
                row.len(),
                size
            )));
        }
        Ok(Grid {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// The width (and height) of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `(x, y)`, or `None` if it is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y * self.size + x])
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }
}

impl Index<Position> for Grid {
    type Output = char;

    fn index(&self, position: Position) -> &char {
        assert!(position.x < self.size && position.y < self.size);
        &self.cells[position.y * self.size + position.x]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|letter| letter.to_ascii_uppercase().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A grid under construction. Cells are empty until a word or filler letter is written.
#[derive(Debug, Clone)]
pub struct PartialGrid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl PartialGrid {
    /// Constructs an empty `size` x `size` grid.
    pub fn new(size: usize) -> PartialGrid {
        PartialGrid {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `(x, y)`, or `None` if the cell is empty or out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[y * self.size + x]
    }

    /// Converts a possibly negative coordinate into an in-bounds position.
    fn position(&self, (x, y): (isize, isize)) -> Option<Position> {
        let size = self.size as isize;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some(Position::new(x as usize, y as usize))
    }

    /// Returns `true` iff `word` can be written starting at `(x, y)` in the given orientation:
    /// every letter lands inside the grid, on a cell that is empty or already holds that same
    /// letter.
    pub fn fits(&self, word: &str, x: usize, y: usize, orientation: Orientation) -> bool {
        word.chars().enumerate().all(|(index, letter)| {
            match self.position(orientation.offset(x, y, index)) {
                Some(position) => match self.get(position.x, position.y) {
                    None => true,
                    Some(existing) => existing == letter,
                },
                None => false,
            }
        })
    }

    /// Counts the cells that already hold the letter `word` would write there.
    pub fn overlap(&self, word: &str, x: usize, y: usize, orientation: Orientation) -> usize {
        word.chars()
            .enumerate()
            .filter(|(index, letter)| {
                self.position(orientation.offset(x, y, *index))
                    .and_then(|position| self.get(position.x, position.y))
                    == Some(*letter)
            })
            .count()
    }

    /// Writes `word` starting at `(x, y)` and returns the cells it occupies, in letter order.
    ///
    /// Returns `None` and leaves the grid untouched if the word doesn't [fit](PartialGrid::fits)
    /// there.
    pub fn place(
        &mut self,
        word: &str,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Option<Vec<Position>> {
        if !self.fits(word, x, y, orientation) {
            return None;
        }
        let positions: Vec<Position> = (0..word.chars().count())
            .filter_map(|index| self.position(orientation.offset(x, y, index)))
            .collect();
        for (position, letter) in positions.iter().zip(word.chars()) {
            self.cells[position.y * self.size + position.x] = Some(letter);
        }
        Some(positions)
    }

    /// Fills every empty cell with a letter drawn uniformly from [`ALPHABET`], producing the
    /// completed grid.
    pub fn fill_remaining<R: Rng + ?Sized>(self, rng: &mut R) -> Grid {
        Grid {
            size: self.size,
            cells: self
                .cells
                .into_iter()
                .map(|cell| {
                    cell.unwrap_or_else(|| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                })
                .collect(),
        }
    }
}
