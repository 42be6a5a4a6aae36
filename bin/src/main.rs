mod report;
mod round;

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use indicatif::ProgressBar;
use log::info;
use lw_core::data;
use lw_core::draw::{FrequencyTable, DEFAULT_VOWELS};
use lw_core::{LetterBag, Strategy};
use longest_word_core as lw_core;
use rand::{rngs::StdRng, SeedableRng};

use round::{RoundConfig, DEFAULT_TICKS};

const WORDS_PATH: &str = "fr-mlpl-flat-strict.txt";

/// Le Mot le plus Long: find the longest words hidden in a draw of letters
#[derive(Parser, Debug)]
#[command(name = "longest-word", version, about, long_about = None)]
struct Args {
    /// Word list, one lowercase unaccented word per line
    #[arg(short, long, default_value = WORDS_PATH)]
    dictionary: PathBuf,

    /// Search strategy: exhaustive, pruned or memoized
    #[arg(short, long, default_value = "exhaustive")]
    strategy: Strategy,

    /// Log progress (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw letters, run the countdown, then show the best words
    Play {
        /// Vowels in the draw, the rest are consonants
        #[arg(long, default_value_t = DEFAULT_VOWELS)]
        vowels: usize,

        #[arg(long, default_value_t = DEFAULT_TICKS)]
        ticks: u64,

        #[arg(long, default_value_t = 1000)]
        tick_ms: u64,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = 1)]
        rounds: usize,

        #[arg(long)]
        json: bool,
    },
    /// Solve the given letters right away
    Solve {
        letters: String,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let index = data::load_words(&args.dictionary)
        .with_context(|| format!("Unable to load dictionary {}", args.dictionary.display()))?;
    let index = Arc::new(index);

    match args.command {
        Command::Play {
            vowels,
            ticks,
            tick_ms,
            seed,
            rounds,
            json,
        } => {
            let config = RoundConfig {
                ticks,
                tick: Duration::from_millis(tick_ms),
                strategy: args.strategy,
            };
            let table = FrequencyTable::default();
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            for n in 1..=rounds {
                let bag = table.draw(&mut rng, vowels)?;
                info!("Round {n}: drew {bag}");

                let progress = if json {
                    ProgressBar::hidden()
                } else {
                    println!("{}", bag.tiles());
                    round::countdown_bar(ticks)?
                };
                let round = round::run_round(Arc::clone(&index), bag, &config, &progress)?;
                report::print(&round, json)?;
            }
        }
        Command::Solve { letters, json } => {
            let bag = LetterBag::new(&letters)
                .with_context(|| format!("Cannot solve \"{letters}\""))?;
            let config = RoundConfig {
                ticks: 0,
                strategy: args.strategy,
                ..RoundConfig::default()
            };
            let round = round::run_round(index, bag, &config, &ProgressBar::hidden())?;
            report::print(&round, json)?;
        }
    }

    Ok(())
}
