use std::{
    sync::{mpsc, Arc},
    thread,
    time::{Duration, Instant},
};

use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use longest_word_core::{solvers, LetterBag, SearchResult, Strategy, WordIndex};
use serde::Serialize;

/// Length of the countdown, in ticks.
pub const DEFAULT_TICKS: u64 = 30;

#[derive(Debug, Clone, Copy)]
pub struct RoundConfig {
    pub ticks: u64,
    pub tick: Duration,
    pub strategy: Strategy,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            tick: Duration::from_secs(1),
            strategy: Strategy::default(),
        }
    }
}

/// Outcome of one round, handed to the presentation step.
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    pub bag: LetterBag,
    pub strategy: Strategy,
    pub result: Option<SearchResult>,
    pub solve_ms: u64,
}

/// A bare bar, without count or percentage.
pub fn countdown_bar(ticks: u64) -> Result<ProgressBar> {
    let bar = ProgressBar::new(ticks);
    bar.set_style(ProgressStyle::with_template("{bar:50.cyan/blue}")?);
    Ok(bar)
}

/// Solves `bag` on its own thread while the countdown runs, and returns once
/// both are over. The countdown never cuts the solver short.
pub fn run_round(
    index: Arc<WordIndex>,
    bag: LetterBag,
    config: &RoundConfig,
    progress: &ProgressBar,
) -> Result<Round> {
    let (sender, receiver) = mpsc::channel();
    let strategy = config.strategy;

    let solver = thread::spawn(move || {
        let start = Instant::now();
        let result = solvers::solve_with(&index, &bag, strategy);
        // The receiver only goes away if the round was abandoned.
        let _ = sender.send((result, start.elapsed()));
    });

    countdown(progress, config.ticks, config.tick);
    debug!("Countdown over, waiting for the solver");

    let (result, elapsed) = receiver
        .recv()
        .context("Solver thread stopped without a result")?;
    solver
        .join()
        .map_err(|_| anyhow!("Solver thread panicked"))?;

    info!(
        "Solved {bag} in {}ms: {}",
        elapsed.as_millis(),
        result
            .as_ref()
            .map_or("no match".to_string(), |r| format!("{} letters", r.length))
    );

    Ok(Round {
        bag,
        strategy,
        result,
        solve_ms: elapsed.as_millis() as u64,
    })
}

fn countdown(progress: &ProgressBar, ticks: u64, tick: Duration) {
    progress.set_length(ticks);
    for _ in 0..ticks {
        thread::sleep(tick);
        progress.inc(1);
    }
    progress.finish_and_clear();
}
