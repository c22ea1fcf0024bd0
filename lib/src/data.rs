use crate::results::PuzzleError;
use crate::MAX_GRID_SIZE;
use crate::MIN_GRID_SIZE;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::str::FromStr;
use std::sync::Arc;

/// Contains the words to hide in a puzzle.
///
/// Every word is non-empty, contains only the letters a-z, and is stored in lower case.
/// Duplicates are kept, and are placed independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Arc<str>>,
    max_word_length: usize,
}

impl WordList {
    /// Constructs a new `WordList` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Surrounding whitespace is trimmed, blank
    /// lines are skipped, and each word is converted to lower case.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, PuzzleError> {
        let lines = word_reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        WordList::from_iterator(lines)
    }

    /// Constructs a new `WordList` using the words from the given iterator.
    ///
    /// Surrounding whitespace is trimmed, blank entries are skipped, and each word is converted
    /// to lower case. Returns [`PuzzleError::InvalidWord`] if an entry contains anything other
    /// than ASCII letters.
    pub fn from_iterator<S, I>(words: I) -> Result<Self, PuzzleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut list = WordList::default();
        for word in words {
            list.push(word.as_ref())?;
        }
        Ok(list)
    }

    /// Validates and appends a single word. Blank input is ignored.
    pub fn push(&mut self, word: &str) -> Result<(), PuzzleError> {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        if !is_valid_word(trimmed) {
            return Err(PuzzleError::InvalidWord(trimmed.to_string()));
        }
        self.max_word_length = self.max_word_length.max(trimmed.len());
        self.words.push(Arc::from(trimmed.to_ascii_lowercase()));
        Ok(())
    }

    /// Removes the word at the given index, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<Arc<str>> {
        if index >= self.words.len() {
            return None;
        }
        let removed = self.words.remove(index);
        self.max_word_length = self.words.iter().map(|word| word.len()).max().unwrap_or(0);
        Some(removed)
    }

    /// Returns the length of the longest word in the list.
    pub fn max_word_len(&self) -> usize {
        self.max_word_length
    }

    /// The smallest grid that can hold the longest word in a straight line, never less than
    /// [`MIN_GRID_SIZE`].
    pub fn min_grid_size(&self) -> usize {
        self.max_word_length.max(MIN_GRID_SIZE)
    }

    /// Adjusts a requested grid size to this word list.
    ///
    /// Sizes at or above [`WordList::min_grid_size`] are kept. Smaller sizes are bumped to two
    /// more than the minimum, capped at [`MAX_GRID_SIZE`].
    pub fn fit_grid_size(&self, requested: usize) -> usize {
        let min = self.min_grid_size();
        if requested < min {
            (min + 2).min(MAX_GRID_SIZE)
        } else {
            requested
        }
    }
}

impl Deref for WordList {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

/// Returns `true` iff the word is non-empty and made only of the letters a-z or A-Z.
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|letter| letter.is_ascii_alphabetic())
}

/// The order in which words are placed in the grid, and listed next to it.
///
/// Earlier words claim cells first, so the order also changes the layout of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordListStyle {
    /// Ascending lexicographic order.
    #[default]
    Alphabetical,
    /// Longest words first. Words of the same length keep their relative order.
    ByLength,
    /// A fresh random order each time.
    Random,
    /// The order the words were given in.
    AsEntered,
}

impl FromStr for WordListStyle {
    type Err = PuzzleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "alphabetical" => Ok(WordListStyle::Alphabetical),
            "byLength" | "by-length" => Ok(WordListStyle::ByLength),
            "random" => Ok(WordListStyle::Random),
            "as-entered" => Ok(WordListStyle::AsEntered),
            _ => Err(PuzzleError::UnknownWordListStyle(name.to_string())),
        }
    }
}

/// Returns a copy of `words` arranged according to `style`. The input is left untouched.
pub fn order_words<R: Rng + ?Sized>(
    words: &[Arc<str>],
    style: WordListStyle,
    rng: &mut R,
) -> Vec<Arc<str>> {
    let mut ordered = words.to_vec();
    match style {
        WordListStyle::Alphabetical => ordered.sort(),
        WordListStyle::ByLength => ordered.sort_by(|a, b| b.len().cmp(&a.len())),
        WordListStyle::Random => ordered.shuffle(rng),
        WordListStyle::AsEntered => {}
    }
    debug!("Word order ({:?}): {:?}", style, ordered);
    ordered
}
