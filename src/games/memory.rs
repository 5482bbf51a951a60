//! Memory match: find all pairs among face-down cards.

use rand::{Rng, seq::SliceRandom};

pub const SYMBOLS: [&str; 8] = ["🎵", "🐱", "🌙", "⭐", "🍎", "🚗", "🌸", "🐟"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Hidden,
    Revealed,
    Matched,
}

#[derive(Debug, Clone)]
pub struct Card {
    pub symbol: &'static str,
    pub state: CardState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    FirstCard,
    Match,
    /// Both cards stay face-up until [`MemoryGame::hide_mismatch`].
    Mismatch,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipError {
    OutOfRange,
    NotHidden,
    AwaitingHide,
    Finished,
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    cards: Vec<Card>,
    first: Option<usize>,
    mismatch: Option<(usize, usize)>,
    moves: u32,
}

impl MemoryGame {
    /// Deals `pairs` pairs (clamped to the symbol set) in random order.
    pub fn new<R: Rng>(pairs: usize, rng: &mut R) -> Self {
        let pairs = pairs.clamp(1, SYMBOLS.len());
        let mut cards: Vec<Card> = SYMBOLS[..pairs]
            .iter()
            .flat_map(|&symbol| {
                [
                    Card { symbol, state: CardState::Hidden },
                    Card { symbol, state: CardState::Hidden },
                ]
            })
            .collect();
        cards.shuffle(rng);

        Self {
            cards,
            first: None,
            mismatch: None,
            moves: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of completed pair attempts.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|card| card.state == CardState::Matched)
    }

    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, FlipError> {
        if self.is_complete() {
            return Err(FlipError::Finished);
        }
        if self.mismatch.is_some() {
            return Err(FlipError::AwaitingHide);
        }
        let card = self.cards.get(index).ok_or(FlipError::OutOfRange)?;
        if card.state != CardState::Hidden {
            return Err(FlipError::NotHidden);
        }

        self.cards[index].state = CardState::Revealed;
        let Some(first) = self.first.take() else {
            self.first = Some(index);
            return Ok(FlipOutcome::FirstCard);
        };

        self.moves += 1;
        if self.cards[first].symbol == self.cards[index].symbol {
            self.cards[first].state = CardState::Matched;
            self.cards[index].state = CardState::Matched;
            if self.is_complete() {
                Ok(FlipOutcome::Completed)
            } else {
                Ok(FlipOutcome::Match)
            }
        } else {
            self.mismatch = Some((first, index));
            Ok(FlipOutcome::Mismatch)
        }
    }

    /// Turns a mismatched pair face-down again. Returns false if nothing was pending.
    pub fn hide_mismatch(&mut self) -> bool {
        let Some((a, b)) = self.mismatch.take() else {
            return false;
        };
        self.cards[a].state = CardState::Hidden;
        self.cards[b].state = CardState::Hidden;
        true
    }
}
