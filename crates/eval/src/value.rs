// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values and hand breakdowns.
use std::fmt;

use crate::{Card, Flush, FullHouse, RankGroup, Straight};

/// A group of cards with showdown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandValue<'a> {
    /// A n-of-a-kind or a kicker.
    Group(&'a RankGroup),
    /// A flush.
    Flush(&'a Flush),
    /// A straight or straight flush.
    Straight(&'a Straight),
    /// A full house.
    FullHouse(&'a FullHouse),
}

impl<'a> HandValue<'a> {
    /// The cards in this value.
    pub fn cards(&self) -> &'a [Card] {
        match self {
            HandValue::Group(g) => g.cards(),
            HandValue::Flush(f) => f.cards(),
            HandValue::Straight(s) => s.cards(),
            HandValue::FullHouse(fh) => fh.cards(),
        }
    }
}

impl fmt::Display for HandValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandValue::Group(g) => write!(f, "{g}"),
            HandValue::Flush(fl) => write!(f, "{fl}"),
            HandValue::Straight(s) => write!(f, "{s}"),
            HandValue::FullHouse(fh) => write!(f, "{fh}"),
        }
    }
}

/// How the best five cards of a hand break down into hand values.
///
/// The breakdown is ordered from the most to the least important value, and
/// breakdowns of the same shape are compared value by value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakdown {
    /// A straight, straight flush or royal flush.
    Straight(Straight),
    /// A four of a kind and its kicker.
    FourOfAKind {
        /// The four cards with the same rank.
        quads: RankGroup,
        /// The best of the other cards.
        kicker: RankGroup,
    },
    /// A full house.
    FullHouse(FullHouse),
    /// A flush.
    Flush(Flush),
    /// Three of a kind, two pair, one pair or high card, filled with kickers
    /// up to five cards.
    Groups(Vec<RankGroup>),
}

impl Breakdown {
    /// The hand values in this breakdown from most to least important.
    pub fn values(&self) -> Vec<HandValue<'_>> {
        match self {
            Breakdown::Straight(s) => vec![HandValue::Straight(s)],
            Breakdown::FourOfAKind { quads, kicker } => {
                vec![HandValue::Group(quads), HandValue::Group(kicker)]
            }
            Breakdown::FullHouse(fh) => vec![HandValue::FullHouse(fh)],
            Breakdown::Flush(f) => vec![HandValue::Flush(f)],
            Breakdown::Groups(groups) => groups.iter().map(HandValue::Group).collect(),
        }
    }

    /// All the cards in this breakdown.
    pub fn cards(&self) -> Vec<Card> {
        self.values()
            .iter()
            .flat_map(|v| v.cards().iter().copied())
            .collect()
    }

    /// Checks if a card is part of this breakdown.
    pub fn contains(&self, card: Card) -> bool {
        self.values().iter().any(|v| v.cards().contains(&card))
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.values().iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::cards;

    #[test]
    fn breakdown_cards() {
        let quads = RankGroup::new(cards("7c 7d 7h 7s")).unwrap();
        let kicker = RankGroup::kicker("Ad".parse().unwrap());
        let breakdown = Breakdown::FourOfAKind { quads, kicker };

        assert_eq!(breakdown.values().len(), 2);
        assert_eq!(breakdown.cards(), cards("7c 7d 7h 7s Ad"));
        assert!(breakdown.contains("Ad".parse().unwrap()));
        assert!(!breakdown.contains("Ac".parse().unwrap()));
        assert_eq!(
            breakdown.to_string(),
            "[4 of a kind [7C 7D 7H 7S], 1 of a kind [AD]]"
        );
    }

    #[test]
    fn groups_compare_in_order() {
        let b1 = Breakdown::Groups(vec![
            RankGroup::new(cards("9c 9d")).unwrap(),
            RankGroup::kicker("Kc".parse().unwrap()),
            RankGroup::kicker("7c".parse().unwrap()),
            RankGroup::kicker("3c".parse().unwrap()),
        ]);
        let b2 = Breakdown::Groups(vec![
            RankGroup::new(cards("9h 9s")).unwrap(),
            RankGroup::kicker("Kd".parse().unwrap()),
            RankGroup::kicker("7d".parse().unwrap()),
            RankGroup::kicker("4d".parse().unwrap()),
        ]);

        // The last kicker decides.
        assert!(b2 > b1);
    }
}
