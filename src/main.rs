use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
#[macro_use]
extern crate text_io;

use boggle_solver::boggle::batch::{solve_boards, BoardSolution};
use boggle_solver::boggle::{BoggleBoard, Dictionary, Solver};
use boggle_solver::utils;
use boggle_solver::utils::word_list::load_word_list;

/// Finds every dictionary word hidden in a Boggle grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list, one word per line or comma separated
    #[arg(short, long, default_value = "words.csv")]
    words: PathBuf,

    /// JSON file holding one matrix or a list of matrices of single letters
    #[arg(short, long)]
    boards: Option<PathBuf>,

    /// Solve this many randomly generated boards instead
    #[arg(long, conflicts_with = "boards")]
    random: Option<usize>,

    /// Rows of a random board
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Columns of a random board
    #[arg(long, default_value_t = 4)]
    cols: usize,

    /// Seed for random boards
    #[arg(long)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Search the start positions of interactively entered boards in parallel
    #[arg(long)]
    parallel: bool,

    /// Size of the worker pool (defaults to one thread per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    utils::log::init_logger(cli.debug);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the thread pool")?;
    }

    let t_load = Instant::now();
    let words = load_word_list(&cli.words)
        .with_context(|| format!("failed to load word list {}", cli.words.display()))?;
    if words.is_empty() {
        warn!("Word list {} is empty, no words can be found", cli.words.display());
    }
    let dictionary = Arc::new(Dictionary::new(&words)?);
    info!(
        "Loaded {} words ({} unique) in {:.3}s",
        words.len(),
        dictionary.len(),
        t_load.elapsed().as_secs_f64()
    );

    if let Some(path) = &cli.boards {
        let boards = BoggleBoard::from_file(path)
            .with_context(|| format!("failed to read boards from {}", path.display()))?;
        solve_batch(boards, dictionary, cli.json)
    } else if let Some(n_boards) = cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let boards = (0..n_boards)
            .map(|_| BoggleBoard::random(cli.rows, cli.cols, &mut rng))
            .collect();
        solve_batch(boards, dictionary, cli.json)
    } else {
        play(dictionary, cli.parallel);
        Ok(())
    }
}

fn solve_batch(
    boards: Vec<BoggleBoard>,
    dictionary: Arc<Dictionary>,
    json: bool,
) -> anyhow::Result<()> {
    let t_solve = Instant::now();
    let n_boards = boards.len();
    let solutions = solve_boards(boards.clone(), dictionary);
    info!(
        "Solved {} boards in {:.3}s",
        n_boards,
        t_solve.elapsed().as_secs_f64()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&solutions)?);
    } else {
        for (board, solution) in boards.iter().zip(solutions.iter()) {
            print_solution(board, solution);
        }
    }
    Ok(())
}

fn print_solution(board: &BoggleBoard, solution: &BoardSolution) {
    println!("============ Board {} ============", solution.matrix_index + 1);
    print!("{}", board);
    println!("Found {} words:", solution.found_words.len());
    for word in solution.found_words.iter() {
        println!("  {}", word);
    }
}

/// Reads boards from stdin until an empty line, e.g. "bncd eigh iarl mrod"
fn play(dictionary: Arc<Dictionary>, parallel: bool) {
    loop {
        println!("Enter Board (rows separated by spaces, empty line to quit):");
        let line: String = match try_read!("{}\n") {
            Ok(line) => line,
            Err(_) => break,
        };
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let board = match BoggleBoard::parse_line(line) {
            Ok(board) => board,
            Err(e) => {
                warn!("Invalid board: {}", e);
                continue;
            }
        };

        let solver = Solver::with_dictionary(board, dictionary.clone());
        let t_solve = Instant::now();
        let found = if parallel {
            solver.solve_parallel()
        } else {
            solver.solve()
        };
        info!("Solved in {:.3}s", t_solve.elapsed().as_secs_f64());

        print!("{}", solver.board());
        println!("Found {} words: {:?}", found.len(), found);
    }
}
