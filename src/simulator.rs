//! Repeated simulation of independent games.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::game::Game;
use crate::options::GameOptions;
use crate::result::ResultSet;

/// Default number of games per run.
pub const DEFAULT_GAMES: usize = 1_000_000;

/// Games per random stream when running in parallel.
#[cfg(feature = "parallel")]
pub const BLOCK_SIZE: usize = 4096;

/// Runs many games and collects their drink counts.
///
/// ```
/// use busdriver::Simulator;
///
/// let results = Simulator::new(42).with_games(100).run();
/// assert_eq!(results.len(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    games: usize,
    seed: u64,
    options: GameOptions,
}

impl Simulator {
    /// Creates a simulator with a fixed seed and default settings.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            games: DEFAULT_GAMES,
            seed,
            options: GameOptions::default(),
        }
    }

    /// Creates a simulator seeded from the wall clock.
    #[must_use]
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::new(seed)
    }

    /// Sets the number of games.
    #[must_use]
    pub const fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Sets the game options.
    #[must_use]
    pub const fn with_options(mut self, options: GameOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the number of games per run.
    #[must_use]
    pub const fn games(&self) -> usize {
        self.games
    }

    /// Returns the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Runs all games on a single random stream.
    #[must_use]
    pub fn run(&self) -> ResultSet {
        self.run_with_progress(|_| {})
    }

    /// Runs all games on a single random stream, calling `report` with the
    /// completed percentage roughly every 1%.
    ///
    /// Every game builds and shuffles a fresh deck from the shared stream, so
    /// results depend only on the seed, the options and the game count.
    pub fn run_with_progress<F: FnMut(u8)>(&self, mut report: F) -> ResultSet {
        log::debug!(
            "simulating {} games (seed {}, {:?})",
            self.games,
            self.seed,
            self.options
        );
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut results = ResultSet::with_capacity(self.games);
        let interval = (self.games / 100).max(1);

        for done in 1..=self.games {
            let mut deck = Deck::shuffled(&mut rng);
            results.push(Game::new(self.options).play(&mut deck, &mut rng).drinks);

            if done % interval == 0 || done == self.games {
                report(percent(done, self.games));
            }
        }
        results
    }

    /// Runs all games across the rayon thread pool.
    ///
    /// Games are split into blocks of [`BLOCK_SIZE`]; block `i` uses its own
    /// ChaCha stream `i` under the shared seed. Results come back in game
    /// order and do not depend on the number of threads, but differ from
    /// [`run`](Self::run).
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn run_parallel(&self) -> ResultSet {
        self.run_parallel_with_progress(|_| {})
    }

    /// Parallel variant of [`run_with_progress`](Self::run_with_progress).
    ///
    /// `report` is called from worker threads after finished blocks, one call
    /// at a time and with strictly increasing percentages.
    #[cfg(feature = "parallel")]
    pub fn run_parallel_with_progress<F: Fn(u8) + Sync>(&self, report: F) -> ResultSet {
        use core::sync::atomic::{AtomicUsize, Ordering};
        use rayon::prelude::*;
        use std::sync::{Mutex, PoisonError};

        log::debug!(
            "simulating {} games in parallel (seed {}, {:?})",
            self.games,
            self.seed,
            self.options
        );
        let done = AtomicUsize::new(0);
        let reported = Mutex::new(0u8);
        let blocks = self.games.div_ceil(BLOCK_SIZE);

        let drinks: Vec<Vec<u32>> = (0..blocks)
            .into_par_iter()
            .map(|block| {
                let start = block * BLOCK_SIZE;
                let len = BLOCK_SIZE.min(self.games - start);
                let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
                rng.set_stream(block as u64);

                let drinks: Vec<u32> = (0..len)
                    .map(|_| {
                        let mut deck = Deck::shuffled(&mut rng);
                        Game::new(self.options).play(&mut deck, &mut rng).drinks
                    })
                    .collect();

                // Held across `report` so percentages arrive in order.
                let mut last = reported.lock().unwrap_or_else(PoisonError::into_inner);
                let finished = done.fetch_add(len, Ordering::Relaxed) + len;
                let pct = percent(finished, self.games);
                if pct > *last {
                    *last = pct;
                    report(pct);
                }
                drop(last);
                drinks
            })
            .collect();

        drinks.into_iter().flatten().collect()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::from_time()
    }
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (done.saturating_mul(100) / total).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(percent(0, 10), 0);
        assert_eq!(percent(5, 10), 50);
        assert_eq!(percent(10, 10), 100);
        assert_eq!(percent(0, 0), 100);
    }

    #[test]
    fn progress_reaches_one_hundred() {
        let mut seen = Vec::new();
        let results = Simulator::new(3)
            .with_games(250)
            .run_with_progress(|pct| seen.push(pct));
        assert_eq!(results.len(), 250);
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.len() >= 100);
    }

    #[test]
    fn zero_games_yield_empty_results() {
        let results = Simulator::new(3).with_games(0).run();
        assert!(results.is_empty());
        assert!(results.summary().is_none());
    }
}
