use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::info;
use mulhash::{tally, ArrayedList, HashTable, Multiplier, WordCounts};

#[derive(Parser, Debug)]
struct Args {
    /// Text file to count; tokens are split on whitespace.
    #[arg(default_value = "pg1497.txt")]
    input: PathBuf,

    /// Expected number of distinct words (defaults to the token count).
    #[arg(short = 'n', long = "expected_size")]
    expected_size: Option<usize>,

    /// Fixed hashing multiplier, for reproducible bucket placement.
    #[arg(short = 'z', long = "multiplier")]
    multiplier: Option<u32>,

    /// Words whose counts are reported.
    #[arg(short = 'w', long = "word", default_values_t = ["the", "of", "and", "nature"].map(String::from))]
    words: Vec<String>,
}

fn load_tokens(path: &Path) -> io::Result<ArrayedList<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut tokens = ArrayedList::new();
    for line in reader.lines() {
        tokens.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(tokens)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    print!("Loading words... ");
    io::stdout().flush()?;
    let tokens = load_tokens(&args.input)
        .map_err(|e| format!("cannot open {}: {e}", args.input.display()))?;
    println!("{} tokens in document", tokens.len());
    println!("Counting word frequencies...");

    let expected_size = args.expected_size.unwrap_or(tokens.len()).max(1);
    let mut counts = match args.multiplier {
        Some(z) => HashTable::with_multiplier(expected_size, Multiplier::new(z))?,
        None => HashTable::with_expected_size(expected_size)?,
    };
    let start = Instant::now();
    info!("multiplier {:#010x}", counts.multiplier().get());

    let distinct = tally(&mut counts, &tokens);
    println!("Number of distinct words: {distinct}");
    println!();
    for w in &args.words {
        println!("Occurrences of '{w}': {}", counts.count_of(w));
    }
    let elapsed = start.elapsed();

    let stats = counts.stats();
    println!(
        "Buckets: {} ({} empty), load factor {:.3}, longest chain {}, mean chain {:.3}",
        stats.capacity,
        stats.empty_buckets,
        stats.load_factor(),
        stats.longest_chain,
        stats.mean_chain_len()
    );
    println!("Elapsed time = {:.6} sec.", elapsed.as_secs_f64());
    Ok(())
}
