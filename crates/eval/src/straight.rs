// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straights and straight flushes.
use log::trace;
use std::{cmp::Ordering, fmt};

use crate::{Card, CardSequence, EvalError, Rank, Result};

/// A five cards straight, possibly a straight flush.
///
/// Cards are ordered from the lowest to the highest, the ace comes first in a
/// wheel (A-2-3-4-5) and last in a broadway (T-J-Q-K-A). A straight flush is
/// greater than any straight, otherwise the straight with the highest card is
/// greater.
#[derive(Debug, Clone)]
pub struct Straight {
    cards: Vec<Card>,
    flush: bool,
}

impl Straight {
    /// The number of cards in a straight.
    pub const LEN: usize = 5;

    /// Creates a straight from five cards with consecutive ranks in any order.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut cards = cards.into_iter().collect::<Vec<_>>();
        if cards.len() != Self::LEN {
            return Err(EvalError::WrongCardCount {
                expected: Self::LEN,
                found: cards.len(),
            });
        }

        cards.sort();

        // The ace plays low in a wheel.
        if cards[0].rank() == Rank::Deuce && cards[4].rank() == Rank::Ace {
            cards.rotate_right(1);
        }

        let consecutive = cards.windows(2).all(|w| {
            w[1].rank().is_successor_of(w[0].rank())
                || (w[0].rank() == Rank::Ace && w[1].rank() == Rank::Deuce)
        });

        if !consecutive {
            return Err(EvalError::NotConsecutive(cards));
        }

        Ok(Self::from_run(&cards))
    }

    /// Finds the best straight in a sequence with at least five positions.
    ///
    /// All the combinations that pick one card per position are searched for
    /// five cards runs so that a straight flush is found even when the higher
    /// straight is not suited.
    pub fn best(sequence: &CardSequence) -> Result<Self> {
        if sequence.len() < Self::LEN {
            return Err(EvalError::SequenceTooShort(sequence.len()));
        }

        let combinations = sequence
            .positions()
            .iter()
            .fold(vec![Vec::new()], |combinations, position| {
                combinations
                    .iter()
                    .flat_map(|prefix: &Vec<Card>| {
                        position.iter().map(move |card| {
                            let mut combination = prefix.clone();
                            combination.push(*card);
                            combination
                        })
                    })
                    .collect::<Vec<_>>()
            });

        trace!(
            "Searching straights in {} combinations of {sequence}",
            combinations.len()
        );

        combinations
            .iter()
            .flat_map(|combination| combination.windows(Self::LEN).map(Self::from_run))
            .max()
            .ok_or(EvalError::SequenceTooShort(sequence.len()))
    }

    /// Builds a straight from a run already checked for consecutive ranks.
    fn from_run(cards: &[Card]) -> Self {
        let suit = cards[0].suit();
        Self {
            cards: cards.to_vec(),
            flush: cards.iter().all(|c| c.suit() == suit),
        }
    }

    /// Checks if this is a straight flush.
    pub fn is_flush(&self) -> bool {
        self.flush
    }

    /// Checks if this is an ace high straight flush.
    pub fn is_royal(&self) -> bool {
        self.flush && self.high_card().rank() == Rank::Ace
    }

    /// The highest card in the straight, a five for a wheel.
    pub fn high_card(&self) -> Card {
        self.cards[Self::LEN - 1]
    }

    /// The straight cards from lowest to highest.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl PartialEq for Straight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Straight {}

impl PartialOrd for Straight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Straight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.flush
            .cmp(&other.flush)
            .then_with(|| self.high_card().rank().cmp(&other.high_card().rank()))
    }
}

impl fmt::Display for Straight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.is_royal() {
            "royal flush"
        } else if self.flush {
            "straight flush"
        } else {
            "straight"
        };

        write!(f, "{name} [")?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
