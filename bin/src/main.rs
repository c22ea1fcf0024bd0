use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::fs::File;
use std::io;
use std::process;
use std::time::Instant;
use word_search_generator::*;

/// Generates printable word-search puzzles from a list of words.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains the words to hide, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: Option<String>,

    /// A word to hide, in addition to any from the words file. May be repeated.
    #[clap(short, long = "word", global = true)]
    words: Vec<String>,

    /// The width and height of the grid. Raised automatically if the longest word doesn't fit.
    #[clap(short, long, default_value_t = DEFAULT_GRID_SIZE, global = true)]
    size: usize,

    /// Allow words written right to left.
    #[clap(long, global = true)]
    backwards: bool,

    /// Allow words written bottom to top.
    #[clap(long, global = true)]
    upwards: bool,

    /// Allow diagonal words.
    #[clap(long, global = true)]
    diagonal: bool,

    /// Word order: alphabetical, byLength, random or as-entered. This also changes the layout.
    #[clap(long, default_value = "alphabetical", global = true)]
    style: WordListStyle,

    /// Seed for the random number generator, for reproducible puzzles.
    #[clap(long, global = true)]
    seed: Option<u64>,

    /// Log every placement decision.
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a single puzzle and print it as a worksheet.
    Generate {
        /// Title printed at the top of the worksheet.
        #[clap(long, default_value = "")]
        title: String,
        /// Class printed under the title.
        #[clap(long = "class", default_value = "")]
        class_name: String,
        /// Add lines for the start and end time.
        #[clap(long)]
        include_time: bool,
        /// Also print the answer key.
        #[clap(long)]
        solution: bool,
    },
    /// Generate many puzzles with the current settings and report how often every word fit.
    Benchmark {
        /// Number of puzzles to generate.
        #[clap(short, long, default_value_t = 1000)]
        rounds: u64,
    },
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: Args) -> Result<(), PuzzleError> {
    let words = load_words(&args)?;
    let grid_size = words.fit_grid_size(args.size);
    if grid_size != args.size {
        warn!(
            "Grid size {} is too small for words of {} letters, using {} instead",
            args.size,
            words.max_word_len(),
            grid_size
        );
    }
    let settings = PuzzleSettings {
        grid_size,
        directions: DirectionFlags::new(args.backwards, args.upwards, args.diagonal),
        word_list_style: args.style,
    };
    info!("Generating with {:?}", settings);

    match args.command {
        Command::Generate {
            title,
            class_name,
            include_time,
            solution,
        } => {
            let worksheet = Worksheet {
                title,
                class_name,
                include_time,
            };
            print_worksheet(&words, &settings, &worksheet, args.seed, solution)
        }
        Command::Benchmark { rounds } => {
            run_benchmark(&words, &settings, args.seed.unwrap_or(0), rounds);
            Ok(())
        }
    }
}

fn load_words(args: &Args) -> Result<WordList, PuzzleError> {
    let mut words = match &args.words_file {
        Some(path) => {
            info!("Reading words from {}", path);
            WordList::from_reader(io::BufReader::new(File::open(path)?))?
        }
        None => WordList::default(),
    };
    for word in &args.words {
        words.push(word)?;
    }
    Ok(words)
}

fn print_worksheet(
    words: &WordList,
    settings: &PuzzleSettings,
    worksheet: &Worksheet,
    seed: Option<u64>,
    show_solution: bool,
) -> Result<(), PuzzleError> {
    let puzzle = match seed {
        Some(seed) => generate_with_rng(words, settings, &mut StdRng::seed_from_u64(seed))?,
        None => generate(words, settings)?,
    };

    print!("{}", worksheet.render(&puzzle, settings));
    if show_solution {
        println!("\nANSWER KEY");
        print!("{}", render_solution(&puzzle));
    }
    Ok(())
}

fn run_benchmark(words: &WordList, settings: &PuzzleSettings, first_seed: u64, rounds: u64) {
    let start_time = Instant::now();
    let failures: Vec<PuzzleError> = (first_seed..first_seed + rounds)
        .into_par_iter()
        .filter_map(|seed| {
            generate_with_rng(words, settings, &mut StdRng::seed_from_u64(seed)).err()
        })
        .collect();

    let successes = rounds - failures.len() as u64;
    println!(
        "Generated {} of {} puzzles on a {}x{} grid ({:.1}%).",
        successes,
        rounds,
        settings.grid_size,
        settings.grid_size,
        100.0 * successes as f64 / rounds.max(1) as f64
    );

    let mut unplaceable: Vec<(String, usize)> = Vec::new();
    for failure in &failures {
        let word = match failure {
            PuzzleError::UnplaceableWord(word) => word.to_string(),
            other => other.to_string(),
        };
        match unplaceable.iter_mut().find(|(existing, _)| *existing == word) {
            Some((_, count)) => *count += 1,
            None => unplaceable.push((word, 1)),
        }
    }
    unplaceable.sort_by(|a, b| b.1.cmp(&a.1));
    if !unplaceable.is_empty() {
        println!("|Word|Failures|");
        println!("|----|--------|");
        for (word, count) in &unplaceable {
            println!("|{}|{}|", word, count);
        }
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
}
