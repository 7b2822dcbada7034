// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flushes.
use std::{cmp::Ordering, fmt};

use crate::{Card, EvalError, Result};

/// A five cards flush that is not a straight flush.
///
/// Flushes are compared by their highest card, then by the next highest card
/// and so on, suits never break ties.
#[derive(Debug, Clone)]
pub struct Flush {
    // Sorted from lowest to highest.
    cards: Vec<Card>,
}

impl Flush {
    /// The number of cards in a flush.
    pub const LEN: usize = 5;

    /// Makes the best flush from five or more cards of the same suit.
    ///
    /// Straight flushes are found by [Straight::best](crate::Straight::best)
    /// before looking for a flush, so the five highest cards make the flush.
    pub fn best(suited: &[Card]) -> Result<Self> {
        let Some(first) = suited.first() else {
            return Err(EvalError::InsufficientCards {
                requested: Self::LEN,
                available: 0,
            });
        };

        if suited.iter().any(|c| c.suit() != first.suit()) {
            return Err(EvalError::MixedSuits(suited.to_vec()));
        }

        let mut cards = suited.to_vec();
        cards.sort();
        cards.dedup();

        if cards.len() < Self::LEN {
            return Err(EvalError::InsufficientCards {
                requested: Self::LEN,
                available: cards.len(),
            });
        }

        let cards = cards.split_off(cards.len() - Self::LEN);
        Ok(Self { cards })
    }

    /// The highest card.
    pub fn high_card(&self) -> Card {
        self.cards[Self::LEN - 1]
    }

    /// The flush cards from lowest to highest.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl PartialEq for Flush {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Flush {}

impl PartialOrd for Flush {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Flush {
    fn cmp(&self, other: &Self) -> Ordering {
        let ours = self.cards.iter().rev().map(|c| c.rank());
        let theirs = other.cards.iter().rev().map(|c| c.rank());
        ours.cmp(theirs)
    }
}

impl fmt::Display for Flush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flush [")?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, tests::cards};

    #[test]
    fn best_flush() {
        let flush = Flush::best(&cards("2h 9h Kh 4h 7h Jh")).unwrap();
        assert_eq!(flush.cards(), cards("4h 7h 9h Jh Kh"));
        assert_eq!(flush.high_card().rank(), Rank::King);
    }

    #[test]
    fn flush_errors() {
        assert!(matches!(
            Flush::best(&cards("2h 9h Kh 4h 7c")),
            Err(EvalError::MixedSuits(_))
        ));
        assert_eq!(
            Flush::best(&cards("2h 9h Kh 4h")),
            Err(EvalError::InsufficientCards {
                requested: 5,
                available: 4
            })
        );
    }

    #[test]
    fn flush_ordering() {
        let f1 = Flush::best(&cards("2h 9h Kh 4h 7h")).unwrap();
        let f2 = Flush::best(&cards("3d 9d Kd 4d 7d")).unwrap();
        let f3 = Flush::best(&cards("2c 9c Ac 4c 7c")).unwrap();
        let f4 = Flush::best(&cards("2s 9s Ks 4s 7s")).unwrap();

        // The lowest card decides.
        assert!(f2 > f1);
        // The highest card decides.
        assert!(f3 > f2);
        // Suits don't matter.
        assert_eq!(f1, f4);
    }
}
