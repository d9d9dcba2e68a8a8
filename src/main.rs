//! Command-line driver for the lock-path search: load a wheel configuration
//! and a word list, run the genetic search, print the best opening order.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use tracing::Level;

use lockpath::error::{Result, ResultExt};
use lockpath::lock::Lock;
use lockpath::rng::RandomNumberGenerator;
use lockpath::search::{Optimizer, SearchOptions};
use lockpath::source;

#[derive(Parser, Debug)]
#[command(
    name = "lockpath",
    about = "Genetic search for low-latency opening orders on multi-wheel combination locks"
)]
struct Args {
    /// Wheel configuration: first line the wheel count, then one wheel per line.
    wheels: PathBuf,

    /// Word list of whitespace-separated `word frequency` pairs.
    #[arg(long, default_value = "words_with_frequency.txt")]
    words: PathBuf,

    /// Seed for the random number generator; identical seeds reproduce runs.
    #[arg(long, default_value_t = 4)]
    seed: u64,

    /// Population target size.
    #[arg(long, default_value_t = 100)]
    population_size: usize,

    /// Number of generations to run.
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Minimum distance from the initial word for a combination to count.
    #[arg(long, default_value_t = 0)]
    min_distance: u32,

    /// Print the best path word by word.
    #[arg(long)]
    show_path: bool,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let wheel_file = File::open(&args.wheels).context(format!(
        "failed to open wheel configuration {}",
        args.wheels.display()
    ))?;
    let wheels = source::parse_wheels(BufReader::new(wheel_file))?;
    let words = source::load_word_list(&args.words)?;

    let lock = Rc::new(Lock::new(&wheels, words, args.min_distance)?);
    println!("Total words: {}", lock.word_count());
    println!("Lock lower bound fitness: {}", lock.lower_bound_fitness());

    let options = SearchOptions::builder()
        .population_size(args.population_size)
        .generations(args.generations)
        .build();
    let optimizer = Optimizer::new(lock, options)?;

    let mut rng = RandomNumberGenerator::from_seed(args.seed);
    let result = optimizer.run(&mut rng)?;

    println!("Best solution, score: {}", result.score);
    if args.show_path {
        for word in result.best.words() {
            println!("{}", word.trim_end());
        }
    }
    Ok(())
}
