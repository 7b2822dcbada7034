// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck for dealing unique cards.
use rand::prelude::*;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned by the [Deck].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card in the deck has already been dealt.
    #[error("all cards have been dealt")]
    AllCardsDealt,
}

/// A cards Deck.
///
/// A deck owns the cards that have not been dealt yet, each card is dealt only
/// once until the deck is [reset](Deck::reset).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::AllCardsDealt)
    }

    /// Puts all dealt cards back in the deck and shuffles it.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new_and_shuffled(rng);
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deal_unique_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            cards.insert(deck.deal().unwrap());
        }

        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(deck.deal(), Err(DeckError::AllCardsDealt));
    }

    #[test]
    fn deck_reset() {
        let mut rng = rand::rng();
        let mut deck = Deck::new_and_shuffled(&mut rng);

        for _ in 0..10 {
            deck.deal().unwrap();
        }
        assert_eq!(deck.count(), Deck::SIZE - 10);

        deck.reset(&mut rng);
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        deck.remove(ad);
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), Deck::SIZE - 2);
        assert!(deck.into_iter().all(|c| c != ad));
    }

    #[test]
    fn independent_decks() {
        let mut d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let mut d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));

        // Dealing from one deck doesn't exhaust the other.
        while d1.deal().is_ok() {}
        assert!(d1.is_empty());
        assert_eq!(d2.count(), Deck::SIZE);

        // Same seed same order.
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(d2.deal(), d3.into_iter().last().ok_or(DeckError::AllCardsDealt));
    }
}
