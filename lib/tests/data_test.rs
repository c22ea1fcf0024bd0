#[macro_use]
extern crate assert_matches;

use word_search_generator::*;

use std::io::Cursor;
use std::result::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

#[test]
fn word_list_from_reader_succeeds() -> Result<(), PuzzleError> {
    let mut cursor = Cursor::new(String::from("\n\nPyramid\n sphinx \nNILE\n"));

    let words = WordList::from_reader(&mut cursor)?;

    assert_eq!(words.len(), 3);
    assert_arc_eq!(&words, &["pyramid", "sphinx", "nile"]);
    assert_eq!(words.max_word_len(), 7);
    Ok(())
}

#[test]
fn word_list_from_iterator_succeeds() -> Result<(), PuzzleError> {
    let words = WordList::from_iterator(vec!["", "Tomb", "scarab ", "tomb"])?;

    assert_eq!(words.len(), 3);
    assert_arc_eq!(&words, &["tomb", "scarab", "tomb"]);
    assert_eq!(words.max_word_len(), 6);
    Ok(())
}

#[test]
fn word_list_from_string_iterator_succeeds() -> Result<(), PuzzleError> {
    let words = WordList::from_iterator(vec!["delta".to_string(), "  ".to_string()])?;

    assert_arc_eq!(&words, &["delta"]);
    Ok(())
}

#[test]
fn word_list_from_reader_invalid_word_fails() {
    let mut cursor = Cursor::new(String::from("papyrus\nking tut\n"));

    assert_matches!(
        WordList::from_reader(&mut cursor),
        Err(PuzzleError::InvalidWord(word)) if word == "king tut"
    );
}

#[test]
fn word_list_from_iterator_rejects_digits_and_accents() {
    assert_matches!(
        WordList::from_iterator(vec!["ra2"]),
        Err(PuzzleError::InvalidWord(_))
    );
    assert_matches!(
        WordList::from_iterator(vec!["Ré"]),
        Err(PuzzleError::InvalidWord(_))
    );
}

#[test]
fn word_list_push_and_remove() -> Result<(), PuzzleError> {
    let mut words = WordList::default();
    words.push("Obelisk")?;
    words.push("")?;
    words.push("ankh")?;

    assert_arc_eq!(&words, &["obelisk", "ankh"]);
    assert_eq!(words.min_grid_size(), 7);

    words.remove(0);
    assert_arc_eq!(&words, &["ankh"]);
    assert_eq!(words.min_grid_size(), MIN_GRID_SIZE);
    Ok(())
}

#[test]
fn word_list_fit_grid_size_stays_under_max() {
    let words = WordList::from_iterator(vec!["abcdefghijklmnopqrst"]).unwrap();

    assert_eq!(words.min_grid_size(), 20);
    assert_eq!(words.fit_grid_size(DEFAULT_GRID_SIZE), MAX_GRID_SIZE);
}
