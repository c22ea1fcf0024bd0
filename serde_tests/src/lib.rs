#[cfg(test)]
mod tests {

    use std::error::Error;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ron;
    use word_search_generator::*;

    #[test]
    fn puzzle_settings_serde() {
        let settings = PuzzleSettings {
            grid_size: 12,
            directions: DirectionFlags::new(true, false, true),
            word_list_style: WordListStyle::ByLength,
        };

        let ser = ron::to_string(&settings);
        assert!(ser.is_ok());

        let deser = ron::from_str::<PuzzleSettings>(&ser.unwrap());
        assert!(deser.is_ok());
        assert_eq!(deser.unwrap(), settings);
    }

    #[test]
    fn puzzle_serde() -> Result<(), Box<dyn Error>> {
        let words = WordList::from_iterator(vec!["pyramid", "sphinx", "nile", "delta"])?;
        let settings = PuzzleSettings {
            directions: DirectionFlags::all(),
            ..PuzzleSettings::default()
        };
        let puzzle = generate_with_rng(&words, &settings, &mut StdRng::seed_from_u64(17))?;

        let ser = ron::to_string(&puzzle)?;
        let deser = ron::from_str::<Puzzle>(&ser)?;

        assert_eq!(deser, puzzle);
        for placed in deser.placed_words() {
            assert_eq!(deser.read(&placed.positions), &*placed.word);
        }
        Ok(())
    }

    #[test]
    fn grid_deserialize_rejects_malformed_cells() {
        assert!(ron::from_str::<Grid>("(size: 0, cells: [])").is_err());
        assert!(ron::from_str::<Grid>("(size: 2, cells: ['a', 'b', 'c'])").is_err());
        assert!(ron::from_str::<Grid>("(size: 1, cells: ['a'])").is_ok());
    }

    #[test]
    fn puzzle_deserialize_rejects_positions_off_the_grid() {
        let puzzle = "(grid: (size: 1, cells: ['a']), placed_words: [\
            (word: \"a\", orientation: Horizontal, positions: [(x: 3, y: 0)])])";

        assert!(ron::from_str::<Puzzle>(puzzle).is_err());
        assert!(ron::from_str::<Puzzle>(&puzzle.replace("x: 3", "x: 0")).is_ok());
    }
}
