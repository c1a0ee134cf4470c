//! Player guesses and how they are judged.

use core::cmp::Ordering;

use rand::Rng;

use crate::card::{Card, Color, Suit};

use super::state::Round;

/// Rank of the next card relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Strictly higher.
    Higher,
    /// Strictly lower.
    Lower,
    /// Same rank.
    Same,
}

impl Direction {
    /// All directions.
    pub const ALL: [Self; 3] = [Self::Higher, Self::Lower, Self::Same];

    /// Returns the direction from `previous` to `next`.
    #[must_use]
    pub fn between(previous: Card, next: Card) -> Self {
        match next.rank.cmp(&previous.rank) {
            Ordering::Greater => Self::Higher,
            Ordering::Less => Self::Lower,
            Ordering::Equal => Self::Same,
        }
    }
}

/// Rank of the next card relative to two bounding cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// Strictly between the bounds.
    Inside,
    /// Strictly below the lower or above the upper bound.
    Outside,
}

impl Span {
    /// Both spans.
    pub const ALL: [Self; 2] = [Self::Inside, Self::Outside];

    /// Returns where `card` falls relative to the open interval spanned by
    /// `a` and `b`.
    ///
    /// Returns `None` when the rank equals either bound.
    #[must_use]
    pub fn of(a: Card, b: Card, card: Card) -> Option<Self> {
        let low = a.rank.min(b.rank);
        let high = a.rank.max(b.rank);
        if card.rank == low || card.rank == high {
            None
        } else if low < card.rank && card.rank < high {
            Some(Self::Inside)
        } else {
            Some(Self::Outside)
        }
    }
}

/// A guess for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    /// Suit guess.
    Suit(Suit),
    /// Color guess.
    Color(Color),
    /// Higher, lower or same.
    Direction(Direction),
    /// Inside or outside.
    Span(Span),
}

impl Guess {
    /// Picks a uniformly random guess for `round`.
    pub fn random<R: Rng + ?Sized>(round: Round, rng: &mut R) -> Self {
        match round {
            Round::Suit => Self::Suit(Suit::ALL[rng.random_range(0..Suit::ALL.len())]),
            Round::Color => Self::Color(Color::ALL[rng.random_range(0..Color::ALL.len())]),
            Round::HigherLower => {
                Self::Direction(Direction::ALL[rng.random_range(0..Direction::ALL.len())])
            }
            Round::InsideOutside => Self::Span(Span::ALL[rng.random_range(0..Span::ALL.len())]),
        }
    }

    /// Returns the round this guess belongs to.
    #[must_use]
    pub const fn round(self) -> Round {
        match self {
            Self::Suit(_) => Round::Suit,
            Self::Color(_) => Round::Color,
            Self::Direction(_) => Round::HigherLower,
            Self::Span(_) => Round::InsideOutside,
        }
    }

    /// Judges the guess against a freshly drawn `card`.
    ///
    /// `history` is the pile before `card` was drawn. Comparison guesses are
    /// wrong when the history is too short to compare against.
    #[must_use]
    pub fn is_correct(self, card: Card, history: &[Card]) -> bool {
        match self {
            Self::Suit(suit) => card.suit == suit,
            Self::Color(color) => card.color() == color,
            Self::Direction(direction) => history
                .last()
                .is_some_and(|&previous| Direction::between(previous, card) == direction),
            Self::Span(span) => match history {
                [.., a, b] => Span::of(*a, *b, card) == Some(span),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn span_excludes_bounds() {
        let a = card(Suit::Clubs, 8);
        let b = card(Suit::Hearts, 12);
        assert_eq!(Span::of(a, b, card(Suit::Spades, 10)), Some(Span::Inside));
        assert_eq!(Span::of(b, a, card(Suit::Spades, 7)), Some(Span::Outside));
        assert_eq!(Span::of(a, b, card(Suit::Spades, 14)), Some(Span::Outside));
        assert_eq!(Span::of(a, b, card(Suit::Spades, 8)), None);
        assert_eq!(Span::of(a, b, card(Suit::Spades, 12)), None);
    }

    #[test]
    fn span_with_equal_bounds_is_never_inside() {
        let a = card(Suit::Clubs, 10);
        let b = card(Suit::Hearts, 10);
        for rank in 7..=14 {
            assert_ne!(Span::of(a, b, card(Suit::Spades, rank)), Some(Span::Inside));
        }
    }

    #[test]
    fn direction_compares_ranks_only() {
        let previous = card(Suit::Clubs, 9);
        assert_eq!(
            Direction::between(previous, card(Suit::Hearts, 9)),
            Direction::Same
        );
        assert_eq!(
            Direction::between(previous, card(Suit::Hearts, 13)),
            Direction::Higher
        );
        assert_eq!(
            Direction::between(previous, card(Suit::Hearts, 7)),
            Direction::Lower
        );
    }

    #[test]
    fn comparison_guesses_need_history() {
        let drawn = card(Suit::Diamonds, 11);
        assert!(!Guess::Direction(Direction::Higher).is_correct(drawn, &[]));
        assert!(!Guess::Span(Span::Outside).is_correct(drawn, &[card(Suit::Clubs, 7)]));
        assert!(Guess::Span(Span::Inside).is_correct(
            drawn,
            &[card(Suit::Clubs, 7), card(Suit::Clubs, 14)]
        ));
    }

    #[test]
    fn color_follows_suit() {
        assert!(Guess::Color(Color::Red).is_correct(card(Suit::Diamonds, 7), &[]));
        assert!(Guess::Color(Color::Black).is_correct(card(Suit::Spades, 7), &[]));
        assert!(!Guess::Color(Color::Red).is_correct(card(Suit::Clubs, 7), &[]));
    }
}
