use crate::data::*;
use crate::grid::PartialGrid;
use crate::orientation::*;
use crate::results::*;
use crate::DEFAULT_GRID_SIZE;
use crate::MAX_GRID_SIZE;
use crate::MIN_GRID_SIZE;
use log::debug;
use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use std::result::Result;
use std::sync::Arc;

/// Everything that controls how a puzzle is laid out, apart from the words themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleSettings {
    /// The width (and height) of the grid. Must be within [`MIN_GRID_SIZE`] and
    /// [`MAX_GRID_SIZE`].
    pub grid_size: usize,
    pub directions: DirectionFlags,
    pub word_list_style: WordListStyle,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        PuzzleSettings {
            grid_size: DEFAULT_GRID_SIZE,
            directions: DirectionFlags::default(),
            word_list_style: WordListStyle::default(),
        }
    }
}

/// A candidate location for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
    /// The number of cells that already hold the letter this word would write.
    pub overlap: usize,
}

/// Searches every allowed orientation and every starting cell for places `word` fits, and
/// returns the one sharing the most letters with words already on the grid.
///
/// Orientations and starting cells are visited in a random order, and the first placement found
/// wins ties, so equally good placements are picked at random. Returns `None` if the word fits
/// nowhere.
pub fn try_place_word<R: Rng + ?Sized>(
    grid: &PartialGrid,
    word: &str,
    orientations: &[Orientation],
    rng: &mut R,
) -> Option<Placement> {
    let size = grid.size();
    let mut shuffled_orientations = orientations.to_vec();
    shuffled_orientations.shuffle(rng);

    let mut best: Option<Placement> = None;
    for orientation in shuffled_orientations {
        let mut cells: Vec<(usize, usize)> = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .collect();
        cells.shuffle(rng);

        for (x, y) in cells {
            if !grid.fits(word, x, y, orientation) {
                continue;
            }
            let overlap = grid.overlap(word, x, y, orientation);
            if best.map_or(true, |current| overlap > current.overlap) {
                best = Some(Placement {
                    x,
                    y,
                    orientation,
                    overlap,
                });
            }
        }
    }
    best
}

/// Generates a puzzle using the thread-local random number generator.
///
/// See [`generate_with_rng`].
pub fn generate(words: &WordList, settings: &PuzzleSettings) -> Result<Puzzle, PuzzleError> {
    generate_with_rng(words, settings, &mut rand::thread_rng())
}

/// Generates a puzzle hiding every word in `words`, drawing all randomness from `rng`.
///
/// Words are placed one at a time in the order given by the settings' [`WordListStyle`]. If any
/// word cannot be placed, generation stops and [`PuzzleError::UnplaceableWord`] names it; no
/// partial puzzle is returned and the grid is never enlarged automatically.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use word_search_generator::*;
///
/// let words = WordList::from_iterator(["sphinx", "pharaoh", "nile"]).unwrap();
/// let settings = PuzzleSettings {
///     grid_size: 10,
///     directions: DirectionFlags::all(),
///     word_list_style: WordListStyle::ByLength,
/// };
///
/// let puzzle = generate_with_rng(&words, &settings, &mut StdRng::seed_from_u64(3)).unwrap();
///
/// let positions = puzzle.positions_of("sphinx").unwrap();
/// assert_eq!(puzzle.read(positions), "sphinx");
/// ```
pub fn generate_with_rng<R: Rng + ?Sized>(
    words: &WordList,
    settings: &PuzzleSettings,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    if words.is_empty() {
        return Err(PuzzleError::NoWords);
    }
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&settings.grid_size) {
        return Err(PuzzleError::GridSizeOutOfRange(settings.grid_size));
    }

    let orientations = select_orientations(&settings.directions);
    let ordered_words = order_words(words, settings.word_list_style, rng);

    let mut grid = PartialGrid::new(settings.grid_size);
    let mut placed_words = Vec::with_capacity(ordered_words.len());
    for word in ordered_words {
        let placed = try_place_word(&grid, &word, &orientations, rng).and_then(|placement| {
            grid.place(&word, placement.x, placement.y, placement.orientation)
                .map(|positions| (placement, positions))
        });
        let (placement, positions) = match placed {
            Some(placed) => placed,
            None => {
                warn!(
                    "Could not place {:?} on a {}x{} grid",
                    word, settings.grid_size, settings.grid_size
                );
                return Err(PuzzleError::UnplaceableWord(Arc::clone(&word)));
            }
        };
        debug!(
            "Placed {:?} at ({}, {}) going {:?}, sharing {} letters",
            word, placement.x, placement.y, placement.orientation, placement.overlap
        );
        placed_words.push(PlacedWord {
            word,
            orientation: placement.orientation,
            positions,
        });
    }

    Ok(Puzzle::new(grid.fill_remaining(rng), placed_words))
}
