//! Game configuration options.

use crate::game::Round;

/// Order in which the first two rounds are played.
///
/// The last two rounds are always higher/lower followed by inside/outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundOrder {
    /// Suit, then color.
    #[default]
    SuitFirst,
    /// Color, then suit.
    ColorFirst,
}

impl RoundOrder {
    /// Returns the four rounds in play order.
    #[must_use]
    pub const fn rounds(self) -> [Round; 4] {
        match self {
            Self::SuitFirst => [
                Round::Suit,
                Round::Color,
                Round::HigherLower,
                Round::InsideOutside,
            ],
            Self::ColorFirst => [
                Round::Color,
                Round::Suit,
                Round::HigherLower,
                Round::InsideOutside,
            ],
        }
    }
}

/// What happens after a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MissPolicy {
    /// A miss in the first three rounds sends the player back to the first
    /// round. A miss in the last round ends the game.
    #[default]
    Restart,
    /// A miss in any round replays the same round with the next card.
    Retry,
}

/// Configuration options for a Bus Driver game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use busdriver::{GameOptions, MissPolicy, RoundOrder};
///
/// let options = GameOptions::default()
///     .with_order(RoundOrder::ColorFirst)
///     .with_miss_policy(MissPolicy::Retry);
/// assert_eq!(options.order, RoundOrder::ColorFirst);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Round order.
    pub order: RoundOrder,
    /// Behavior after a wrong guess.
    pub miss_policy: MissPolicy,
}

impl GameOptions {
    /// Sets the round order.
    ///
    /// # Example
    ///
    /// ```
    /// use busdriver::{GameOptions, RoundOrder};
    ///
    /// let options = GameOptions::default().with_order(RoundOrder::ColorFirst);
    /// assert_eq!(options.order, RoundOrder::ColorFirst);
    /// ```
    #[must_use]
    pub const fn with_order(mut self, order: RoundOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the behavior after a wrong guess.
    ///
    /// # Example
    ///
    /// ```
    /// use busdriver::{GameOptions, MissPolicy};
    ///
    /// let options = GameOptions::default().with_miss_policy(MissPolicy::Retry);
    /// assert_eq!(options.miss_policy, MissPolicy::Retry);
    /// ```
    #[must_use]
    pub const fn with_miss_policy(mut self, policy: MissPolicy) -> Self {
        self.miss_policy = policy;
        self
    }
}
