use crate::data::WordListStyle;
use crate::engine::PuzzleSettings;
use crate::results::Position;
use crate::results::Puzzle;
use std::fmt;

/// Builds the instructions printed above the puzzle from the current settings.
///
/// ```
/// use word_search_generator::*;
///
/// let settings = PuzzleSettings {
///     directions: DirectionFlags::new(true, false, true),
///     ..PuzzleSettings::default()
/// };
/// assert_eq!(
///     instructions(&settings, false),
///     "Find these vocabulary words in the puzzle! \
///      Words can go forward, backward, diagonal and diagonal backward. \
///      Words are listed in alphabetical order."
/// );
/// ```
pub fn instructions(settings: &PuzzleSettings, include_time: bool) -> String {
    let mut parts = vec!["Find these vocabulary words in the puzzle!".to_string()];

    let flags = &settings.directions;
    let mut directions = vec!["forward"];
    if flags.backwards {
        directions.push("backward");
    }
    if flags.upwards {
        directions.push("upward");
    }
    if flags.diagonal {
        directions.push("diagonal");
        if flags.backwards {
            directions.push("diagonal backward");
        }
    }
    if let Some((last, rest)) = directions.split_last() {
        if !rest.is_empty() {
            parts.push(format!("Words can go {} and {}.", rest.join(", "), last));
        }
    }

    match settings.word_list_style {
        WordListStyle::Alphabetical => {
            parts.push("Words are listed in alphabetical order.".to_string())
        }
        WordListStyle::ByLength => {
            parts.push("Words are listed by length, longest first.".to_string())
        }
        WordListStyle::Random => parts.push("Words are listed in random order.".to_string()),
        WordListStyle::AsEntered => {}
    }

    if include_time {
        parts.push("Record your start and end time.".to_string());
    }

    parts.join(" ")
}

/// Header information for a printed worksheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    pub title: String,
    pub class_name: String,
    /// Adds start and end time lines for students to fill in.
    pub include_time: bool,
}

impl Worksheet {
    /// Renders a plain text worksheet: header, instructions, the grid and the word list.
    pub fn render(&self, puzzle: &Puzzle, settings: &PuzzleSettings) -> String {
        PrintedWorksheet {
            worksheet: self,
            puzzle,
            settings,
        }
        .to_string()
    }
}

struct PrintedWorksheet<'a> {
    worksheet: &'a Worksheet,
    puzzle: &'a Puzzle,
    settings: &'a PuzzleSettings,
}

impl fmt::Display for PrintedWorksheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let worksheet = self.worksheet;
        if !worksheet.title.is_empty() {
            writeln!(f, "{}", worksheet.title.to_uppercase())?;
        }
        if !worksheet.class_name.is_empty() {
            writeln!(f, "Class: {}", worksheet.class_name)?;
        }
        writeln!(f, "Name: ____________________")?;
        if worksheet.include_time {
            writeln!(f, "Start time: ________  End time: ________")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", instructions(self.settings, worksheet.include_time))?;
        writeln!(f)?;
        write!(f, "{}", self.puzzle.grid())?;
        writeln!(f)?;
        writeln!(f, "WORDS")?;
        for placed in self.puzzle.placed_words() {
            writeln!(f, "  {}", placed.word)?;
        }
        Ok(())
    }
}

/// Renders the answer key: letters belonging to a word in upper case, every other cell as `.`.
pub fn render_solution(puzzle: &Puzzle) -> String {
    AnswerKey(puzzle).to_string()
}

struct AnswerKey<'a>(&'a Puzzle);

impl fmt::Display for AnswerKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.0.solution_cells();
        for (y, row) in self.0.grid().rows().enumerate() {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(x, letter)| {
                    if solution.contains(&Position::new(x, y)) {
                        letter.to_ascii_uppercase().to_string()
                    } else {
                        ".".to_string()
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::orientation::DirectionFlags;

    fn settings(directions: DirectionFlags, word_list_style: WordListStyle) -> PuzzleSettings {
        PuzzleSettings {
            grid_size: 10,
            directions,
            word_list_style,
        }
    }

    #[test]
    fn instructions_forward_only() {
        assert_eq!(
            instructions(
                &settings(DirectionFlags::default(), WordListStyle::Alphabetical),
                false
            ),
            "Find these vocabulary words in the puzzle! Words are listed in alphabetical order."
        );
    }

    #[test]
    fn instructions_all_directions() {
        assert_eq!(
            instructions(&settings(DirectionFlags::all(), WordListStyle::ByLength), true),
            "Find these vocabulary words in the puzzle! \
             Words can go forward, backward, upward, diagonal and diagonal backward. \
             Words are listed by length, longest first. \
             Record your start and end time."
        );
    }

    #[test]
    fn instructions_upward_only() {
        assert_eq!(
            instructions(
                &settings(DirectionFlags::new(false, true, false), WordListStyle::Random),
                false
            ),
            "Find these vocabulary words in the puzzle! \
             Words can go forward and upward. \
             Words are listed in random order."
        );
    }

    #[test]
    fn instructions_as_entered_has_no_style_sentence() {
        assert_eq!(
            instructions(
                &settings(DirectionFlags::default(), WordListStyle::AsEntered),
                false
            ),
            "Find these vocabulary words in the puzzle!"
        );
    }

    #[test]
    fn render_writes_every_section_in_order() {
        let grid = crate::grid::Grid::from_rows(vec![
            "rax".chars().collect(),
            "xxx".chars().collect(),
            "xxx".chars().collect(),
        ])
        .unwrap();
        let puzzle = Puzzle::new(
            grid,
            vec![crate::results::PlacedWord {
                word: "ra".into(),
                orientation: crate::orientation::Orientation::Horizontal,
                positions: vec![Position::new(0, 0), Position::new(1, 0)],
            }],
        );
        let worksheet = Worksheet {
            title: "Gods".to_string(),
            class_name: String::new(),
            include_time: false,
        };

        assert_eq!(
            worksheet.render(
                &puzzle,
                &settings(DirectionFlags::default(), WordListStyle::AsEntered)
            ),
            "GODS\n\
             Name: ____________________\n\
             \n\
             Find these vocabulary words in the puzzle!\n\
             \n\
             R A X\nX X X\nX X X\n\
             \n\
             WORDS\n  ra\n"
        );
        assert_eq!(render_solution(&puzzle), "R A .\n. . .\n. . .\n");
    }
}
