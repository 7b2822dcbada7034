// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Full houses.
use std::{cmp::Ordering, fmt};

use crate::{Card, EvalError, RankGroup, Result};

/// A three of a kind and a pair of a different rank.
#[derive(Debug, Clone)]
pub struct FullHouse {
    trips: RankGroup,
    pair: RankGroup,
    cards: Vec<Card>,
}

impl FullHouse {
    /// Creates a full house from a three of a kind and a pair.
    pub fn new(trips: RankGroup, pair: RankGroup) -> Result<Self> {
        if trips.len() != 3 || pair.len() != 2 || trips.rank() == pair.rank() {
            return Err(EvalError::NotAFullHouse);
        }

        let cards = trips.cards().iter().chain(pair.cards()).copied().collect();
        Ok(Self { trips, pair, cards })
    }

    /// Makes the best full house from rank groups sorted from best to worst.
    ///
    /// The best group must be a three of a kind and the second best at least a
    /// pair. The pair is the highest ranked among the other groups with two or
    /// more cards, so a second three of a kind can give a better pair than the
    /// actual pairs.
    pub fn best(groups: &[RankGroup]) -> Result<Self> {
        let [trips, rest @ ..] = groups else {
            return Err(EvalError::NotAFullHouse);
        };

        if trips.len() != 3 || rest.first().is_none_or(|g| g.len() < 2) {
            return Err(EvalError::NotAFullHouse);
        }

        let pair = rest
            .iter()
            .max_by(|a, b| {
                (a.len() > 1)
                    .cmp(&(b.len() > 1))
                    .then_with(|| a.rank().cmp(&b.rank()))
            })
            .ok_or(EvalError::NotAFullHouse)?;

        Self::new(trips.clone(), pair.best(2)?)
    }

    /// The three of a kind.
    pub fn trips(&self) -> &RankGroup {
        &self.trips
    }

    /// The pair.
    pub fn pair(&self) -> &RankGroup {
        &self.pair
    }

    /// The three of a kind cards followed by the pair cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl PartialEq for FullHouse {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FullHouse {}

impl PartialOrd for FullHouse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FullHouse {
    fn cmp(&self, other: &Self) -> Ordering {
        self.trips
            .rank()
            .cmp(&other.trips.rank())
            .then_with(|| self.pair.rank().cmp(&other.pair.rank()))
    }
}

impl fmt::Display for FullHouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "full house {}, {}", self.trips, self.pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, rank_groups, tests::cards};

    #[test]
    fn pair_from_second_trips() {
        let groups = rank_groups(&cards("Qc Qd Qh Jc Jd Js Tc Th 2d"));
        let fh = FullHouse::best(&groups).unwrap();
        assert_eq!(fh.trips().rank(), Rank::Queen);
        assert_eq!(fh.pair().rank(), Rank::Jack);
        // The two best jacks.
        assert_eq!(fh.pair().cards(), cards("Jd Js"));
        assert_eq!(fh.cards().len(), 5);
    }

    #[test]
    fn pair_beats_higher_kicker() {
        let groups = rank_groups(&cards("5c 5d 5h 3c 3d As Kd"));
        let fh = FullHouse::best(&groups).unwrap();
        assert_eq!(fh.trips().rank(), Rank::Five);
        assert_eq!(fh.pair().rank(), Rank::Trey);
    }

    #[test]
    fn not_a_full_house() {
        let groups = rank_groups(&cards("5c 5d 5h 3c 4d As Kd"));
        assert_eq!(FullHouse::best(&groups), Err(EvalError::NotAFullHouse));

        let groups = rank_groups(&cards("5c 5d 3h 3c 4d As Kd"));
        assert_eq!(FullHouse::best(&groups), Err(EvalError::NotAFullHouse));

        assert_eq!(FullHouse::best(&[]), Err(EvalError::NotAFullHouse));

        let trips = RankGroup::new(cards("5c 5d 5h")).unwrap();
        let pair = RankGroup::new(cards("5c 5d")).unwrap();
        assert_eq!(FullHouse::new(trips, pair), Err(EvalError::NotAFullHouse));
    }

    #[test]
    fn full_house_ordering() {
        let nines_full = FullHouse::best(&rank_groups(&cards("9c 9d 9h 2c 2d"))).unwrap();
        let eights_full = FullHouse::best(&rank_groups(&cards("8c 8d 8h Ac Ad"))).unwrap();
        let nines_full_of_threes =
            FullHouse::best(&rank_groups(&cards("9c 9d 9s 3c 3d"))).unwrap();

        assert!(nines_full > eights_full);
        assert!(nines_full_of_threes > nines_full);
    }
}
