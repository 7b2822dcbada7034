// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and evaluation results.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Breakdown, Card, HandValue};

/// The category of a Poker hand, from High Card to Royal Flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandCategory {
    /// The category strength, 1 for High Card up to 10 for Royal Flush.
    pub fn strength(&self) -> u8 {
        *self as u8
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The result of evaluating a hand.
///
/// Results are ordered by hand strength, a greater result is a better hand. The
/// category decides first, then the breakdown values are compared in order.
/// The identifier is not used for comparisons.
#[derive(Debug, Clone)]
pub struct HandResult {
    category: HandCategory,
    breakdown: Breakdown,
    id: String,
}

impl HandResult {
    pub(crate) fn new(category: HandCategory, breakdown: Breakdown, id: impl Into<String>) -> Self {
        Self {
            category,
            breakdown,
            id: id.into(),
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The breakdown of the best five cards.
    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    /// The breakdown values from most to least important.
    pub fn values(&self) -> Vec<HandValue<'_>> {
        self.breakdown.values()
    }

    /// The best five cards.
    pub fn cards(&self) -> Vec<Card> {
        self.breakdown.cards()
    }

    /// The identifier of the evaluated hand.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandResult {}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.breakdown.cmp(&other.breakdown))
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, breaks down as: {}", self.category, self.breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate, tests::cards};

    #[test]
    fn category_strength() {
        use HandCategory::*;
        let categories = [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ];

        for (idx, category) in categories.iter().enumerate() {
            assert_eq!(category.strength() as usize, idx + 1);
        }

        assert!(categories.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn category_decides_first() {
        let pair = evaluate(&cards("2c 2d 3h 4s 6c"), "pair").unwrap();
        let high = evaluate(&cards("Ac Kd Qh Js 9c"), "high").unwrap();
        assert!(pair > high);
    }

    #[test]
    fn identifier_is_ignored() {
        let r1 = evaluate(&cards("2c 2d 3h 4s 6c"), "one").unwrap();
        let r2 = evaluate(&cards("2h 2s 3c 4d 6d"), "two").unwrap();
        assert_eq!(r1, r2);
        assert_ne!(r1.id(), r2.id());
    }

    #[test]
    fn result_display() {
        let r = evaluate(&cards("Kc Kd 3h 3s 6c"), "p1").unwrap();
        assert_eq!(
            r.to_string(),
            "Two Pair, breaks down as: [2 of a kind [KC KD], 2 of a kind [3H 3S], 1 of a kind [6C]]"
        );
    }
}
