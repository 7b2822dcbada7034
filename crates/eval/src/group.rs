// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! N-of-a-kind groups and cards partitioning.
use ahash::AHashMap;
use std::{cmp::Ordering, fmt};

use crate::{Card, EvalError, Rank, Result, Suit};

/// A group of cards that share one rank.
///
/// Pairs, three and four of a kinds are rank groups, a group with one card is
/// a kicker used to fill a hand up to five cards. Groups are ordered by number
/// of cards and then by rank, a pair of deuces is greater than an ace kicker.
#[derive(Debug, Clone)]
pub struct RankGroup {
    // Sorted by suit, never empty.
    cards: Vec<Card>,
}

impl RankGroup {
    /// Creates a group from cards that must all have the same rank.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut cards = cards.into_iter().collect::<Vec<_>>();
        cards.sort();
        cards.dedup();

        let Some(first) = cards.first() else {
            return Err(EvalError::EmptyGroup);
        };

        if cards.iter().any(|c| c.rank() != first.rank()) {
            return Err(EvalError::MixedRanks(cards));
        }

        Ok(Self { cards })
    }

    /// Creates a one card group.
    pub fn kicker(card: Card) -> Self {
        Self { cards: vec![card] }
    }

    /// The group rank.
    pub fn rank(&self) -> Rank {
        self.cards[0].rank()
    }

    /// The number of cards in this group.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A group is never empty, for clippy.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The group cards sorted by suit.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if this group contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns a new group with the `n` best cards of this group.
    ///
    /// Used to turn a three of a kind into the pair of a full house.
    pub fn best(&self, n: usize) -> Result<RankGroup> {
        if n == 0 {
            return Err(EvalError::EmptyGroup);
        }

        let available = self.cards.len();
        if n > available {
            return Err(EvalError::InsufficientCards {
                requested: n,
                available,
            });
        }

        Ok(Self {
            cards: self.cards[available - n..].to_vec(),
        })
    }
}

impl PartialEq for RankGroup {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankGroup {}

impl PartialOrd for RankGroup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankGroup {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl fmt::Display for RankGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of a kind [", self.len())?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Partitions cards by rank, the returned groups are sorted from best to worst.
pub fn rank_groups(cards: &[Card]) -> Vec<RankGroup> {
    let mut by_rank = AHashMap::<Rank, Vec<Card>>::with_capacity(cards.len());
    for card in cards {
        by_rank.entry(card.rank()).or_default().push(*card);
    }

    let mut groups = by_rank
        .into_values()
        .map(|mut cards| {
            cards.sort();
            cards.dedup();
            RankGroup { cards }
        })
        .collect::<Vec<_>>();

    groups.sort_by(|a, b| b.cmp(a));
    groups
}

/// Partitions cards by suit, every suit has an entry even if it has no cards.
pub fn suit_groups(cards: &[Card]) -> AHashMap<Suit, Vec<Card>> {
    let mut by_suit = Suit::suits()
        .map(|s| (s, Vec::new()))
        .collect::<AHashMap<_, _>>();

    for card in cards {
        by_suit.entry(card.suit()).or_default().push(*card);
    }

    by_suit
}
