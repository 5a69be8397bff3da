use anyhow::{Context, Result};
use clap::Parser;
use palinset::command::{run, write_palindromes};
use palinset::generate::{DEFAULT_MAX_LEN, random_strings};
use palinset::{BUCKET_COUNT, StringSet};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(version, about = "Hash-table string set driven by +/-/? commands", long_about = None)]
struct Args {
    /// Read commands from this file instead of stdin
    #[arg(short = 'x', long)]
    input: Option<String>,

    /// Number of random strings to insert before reading commands
    #[arg(short, long, default_value_t = 0)]
    populate: usize,

    /// Maximum length of a random string
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Number of hash buckets
    #[arg(long, default_value_t = BUCKET_COUNT)]
    buckets: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut set = StringSet::with_buckets(args.buckets)?;

    if args.populate > 0 {
        let start = Instant::now();
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let strings = random_strings(&mut rng, args.populate, args.max_len)?;
        for s in &strings {
            set.add(s);
        }
        log::debug!(
            "populated {} distinct strings in {:.3}s (load factor {:.3})",
            set.len(),
            start.elapsed().as_secs_f64(),
            set.load_factor()
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.input {
        Some(ref path) => {
            let file = File::open(path).context(format!("failed to open input {}", path))?;
            run(&mut set, BufReader::new(file), &mut out)?;
        }
        None => {
            let stdin = io::stdin();
            run(&mut set, stdin.lock(), &mut out)?;
        }
    }

    let n = write_palindromes(&set, &mut out)?;
    out.flush()?;
    log::debug!("{} palindromes out of {} strings", n, set.len());

    Ok(())
}
