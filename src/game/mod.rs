//! The four-round game state machine.

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::TurnError;
use crate::options::GameOptions;
use crate::result::{GameResult, Outcome};

mod guess;
pub mod state;

pub use guess::{Direction, Guess, Span};
pub use state::{ROUNDS, Round, Transition, transition};

/// A single game in progress.
///
/// The game owns the pile of drawn cards and the drink counter. The deck is
/// borrowed per turn so callers can inspect it between turns.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    rounds: [Round; ROUNDS],
    /// Zero-based index into `rounds`.
    stage: usize,
    pile: Vec<Card>,
    drinks: u32,
    outcome: Option<Outcome>,
}

impl Game {
    /// Creates a game in its first round.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            rounds: options.order.rounds(),
            stage: 0,
            pile: Vec::new(),
            drinks: 0,
            outcome: None,
        }
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the zero-based stage of the current round.
    #[must_use]
    pub const fn stage(&self) -> usize {
        self.stage
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> Round {
        self.rounds[self.stage]
    }

    /// Returns the cards drawn so far, oldest first.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Returns the number of wrong guesses so far.
    #[must_use]
    pub const fn drinks(&self) -> u32 {
        self.drinks
    }

    /// Returns how the game ended, or `None` while it is still running.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Plays one turn with a random guess drawn from `rng`.
    ///
    /// Returns the outcome once the game is over. Calling `step` on a
    /// finished game returns the same outcome without drawing.
    pub fn step<R: Rng + ?Sized>(&mut self, deck: &mut Deck, rng: &mut R) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }
        if let Some(outcome) = self.enter(deck) {
            return Some(outcome);
        }
        let guess = Guess::random(self.round(), rng);
        self.resolve(deck, guess)
    }

    /// Plays one turn with the given guess.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or the guess does not
    /// belong to the current round.
    pub fn play_turn(&mut self, deck: &mut Deck, guess: Guess) -> Result<Option<Outcome>, TurnError> {
        if self.outcome.is_some() {
            return Err(TurnError::Finished);
        }
        if guess.round() != self.round() {
            return Err(TurnError::WrongRound {
                expected: self.round(),
                found: guess.round(),
            });
        }
        if let Some(outcome) = self.enter(deck) {
            return Ok(Some(outcome));
        }
        Ok(self.resolve(deck, guess))
    }

    /// Plays the game to completion.
    pub fn play<R: Rng + ?Sized>(mut self, deck: &mut Deck, rng: &mut R) -> GameResult {
        let outcome = loop {
            if let Some(outcome) = self.step(deck, rng) {
                break outcome;
            }
        };
        log::trace!(
            "game over: {outcome:?} after {} draws, {} drinks",
            self.pile.len(),
            self.drinks
        );
        GameResult {
            drinks: self.drinks,
            draws: self.pile.len() as u32,
            outcome,
        }
    }

    /// Checks the guards for entering the current round.
    fn enter(&mut self, deck: &Deck) -> Option<Outcome> {
        if self.pile.len() < self.round().min_pile() {
            return Some(self.finish(Outcome::ShortPile));
        }
        if deck.is_empty() {
            return Some(self.finish(Outcome::Exhausted));
        }
        None
    }

    /// Draws a card, judges `guess` against it and applies the transition.
    fn resolve(&mut self, deck: &mut Deck, guess: Guess) -> Option<Outcome> {
        let Some(card) = deck.draw() else {
            return Some(self.finish(Outcome::Exhausted));
        };
        let hit = guess.is_correct(card, &self.pile);
        log::trace!("{:?} drew {card}, guessed {guess:?}: {hit}", self.round());
        self.pile.push(card);
        if !hit {
            self.drinks += 1;
        }

        match transition(self.stage, hit, self.options.miss_policy) {
            Transition::Advance => self.stage += 1,
            Transition::Restart => self.stage = 0,
            Transition::Repeat => {}
            Transition::Finish(outcome) => return Some(self.finish(outcome)),
        }
        None
    }

    const fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.outcome = Some(outcome);
        outcome
    }
}

/// Plays one game with default options on an already shuffled deck.
///
/// Returns the number of drinks.
///
/// ```
/// use busdriver::{Deck, play_game};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut deck = Deck::shuffled(&mut rng);
/// let drinks = play_game(&mut deck, &mut rng);
/// assert!(drinks as usize <= busdriver::DECK_SIZE);
/// ```
pub fn play_game<R: Rng + ?Sized>(deck: &mut Deck, rng: &mut R) -> u32 {
    Game::new(GameOptions::default()).play(deck, rng).drinks
}
