//! Round and transition types.

use crate::options::MissPolicy;
use crate::result::Outcome;

/// Number of rounds in a game.
pub const ROUNDS: usize = 4;

/// A guessing round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Round {
    /// Guess the suit of the next card.
    Suit,
    /// Guess red or black.
    Color,
    /// Guess whether the next card ranks higher, lower or the same as the
    /// previous one.
    HigherLower,
    /// Guess whether the next card falls inside or outside the two previous
    /// ones.
    InsideOutside,
}

impl Round {
    /// Minimum pile size required when the round is entered.
    ///
    /// Entering a round with a smaller pile ends the game with
    /// [`Outcome::ShortPile`].
    #[must_use]
    pub const fn min_pile(self) -> usize {
        match self {
            Self::Suit | Self::Color => 0,
            Self::HigherLower => 2,
            Self::InsideOutside => 3,
        }
    }
}

/// State change after a guess has been judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move on to the next round.
    Advance,
    /// Go back to the first round.
    Restart,
    /// Play the same round again.
    Repeat,
    /// The game is over.
    Finish(Outcome),
}

/// Returns the transition out of the round at `stage` (zero-based).
///
/// | hit | stage      | `Restart`                   | `Retry`   |
/// |-----|------------|-----------------------------|-----------|
/// | yes | 0..=2      | `Advance`                   | `Advance` |
/// | yes | 3          | `Finish(Completed)`         | `Finish(Completed)` |
/// | no  | 0..=2      | `Restart`                   | `Repeat`  |
/// | no  | 3          | `Finish(LastRoundMissed)`   | `Repeat`  |
#[must_use]
pub const fn transition(stage: usize, hit: bool, policy: MissPolicy) -> Transition {
    let last = stage + 1 >= ROUNDS;
    match (hit, last, policy) {
        (true, true, _) => Transition::Finish(Outcome::Completed),
        (true, false, _) => Transition::Advance,
        (false, true, MissPolicy::Restart) => Transition::Finish(Outcome::LastRoundMissed),
        (false, false, MissPolicy::Restart) => Transition::Restart,
        (false, _, MissPolicy::Retry) => Transition::Repeat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_misses_restart() {
        for stage in 0..ROUNDS - 1 {
            assert_eq!(
                transition(stage, false, MissPolicy::Restart),
                Transition::Restart
            );
            assert_eq!(
                transition(stage, true, MissPolicy::Restart),
                Transition::Advance
            );
        }
    }

    #[test]
    fn last_round_always_finishes_under_restart() {
        assert_eq!(
            transition(ROUNDS - 1, true, MissPolicy::Restart),
            Transition::Finish(Outcome::Completed)
        );
        assert_eq!(
            transition(ROUNDS - 1, false, MissPolicy::Restart),
            Transition::Finish(Outcome::LastRoundMissed)
        );
    }

    #[test]
    fn retry_repeats_every_round() {
        for stage in 0..ROUNDS {
            assert_eq!(
                transition(stage, false, MissPolicy::Retry),
                Transition::Repeat
            );
        }
        assert_eq!(
            transition(ROUNDS - 1, true, MissPolicy::Retry),
            Transition::Finish(Outcome::Completed)
        );
    }
}
