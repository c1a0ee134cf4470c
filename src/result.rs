//! Game and simulation result types.

use std::collections::BTreeMap;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The last round was guessed correctly.
    Completed,
    /// The last round was guessed wrong.
    LastRoundMissed,
    /// The deck ran out.
    Exhausted,
    /// A comparison round was entered without enough cards on the pile.
    ShortPile,
}

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Number of wrong guesses.
    pub drinks: u32,
    /// Number of cards drawn.
    pub draws: u32,
    /// How the game ended.
    pub outcome: Outcome,
}

/// Drink counts of every simulated game, in simulation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    drinks: Vec<u32>,
}

impl ResultSet {
    /// Creates an empty result set with room for `games` results.
    #[must_use]
    pub fn with_capacity(games: usize) -> Self {
        Self {
            drinks: Vec::with_capacity(games),
        }
    }

    /// Appends the drink count of the next game.
    pub fn push(&mut self, drinks: u32) {
        self.drinks.push(drinks);
    }

    /// Returns the number of games recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    /// Returns whether no games were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    /// Returns the drink counts in simulation order.
    #[must_use]
    pub fn drinks(&self) -> &[u32] {
        &self.drinks
    }

    /// Computes summary statistics, or `None` if the set is empty.
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        let (&first, rest) = self.drinks.split_first()?;
        let mut summary = Summary {
            games: 1,
            mean: 0.0,
            min: first,
            max: first,
            histogram: BTreeMap::from([(first, 1)]),
        };
        let mut total = u64::from(first);
        for &drinks in rest {
            summary.games += 1;
            summary.min = summary.min.min(drinks);
            summary.max = summary.max.max(drinks);
            *summary.histogram.entry(drinks).or_default() += 1;
            total += u64::from(drinks);
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for drink totals"
        )]
        let mean = total as f64 / summary.games as f64;
        summary.mean = mean;
        Some(summary)
    }
}

impl From<Vec<u32>> for ResultSet {
    fn from(drinks: Vec<u32>) -> Self {
        Self { drinks }
    }
}

impl FromIterator<u32> for ResultSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            drinks: iter.into_iter().collect(),
        }
    }
}

/// Summary statistics over a [`ResultSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of games.
    pub games: usize,
    /// Mean drinks per game.
    pub mean: f64,
    /// Fewest drinks in a game.
    pub min: u32,
    /// Most drinks in a game.
    pub max: u32,
    /// Number of games per drink count.
    pub histogram: BTreeMap<u32, usize>,
}
