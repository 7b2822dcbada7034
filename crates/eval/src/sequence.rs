// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sequences of consecutive ranks.
use log::trace;
use std::{fmt, mem};

use crate::{Card, Rank};

/// A sequence of cards with consecutive ranks.
///
/// Each position in the sequence holds all the cards of one rank, so that a
/// straight search can choose among cards with the same rank and find a
/// straight flush. For example 6S, 7H, 7S, 8C, 9D, 9H gives the sequence:
///
/// ```text
/// [6S] [7H 7S] [8C] [9D 9H]
/// ```
///
/// The ace can be either at the start of a sequence that starts with a deuce or
/// at the end of one that ends with a king. The [longest_sequence] function is
/// responsible for building sequences with consecutive ranks, this type doesn't
/// check it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSequence {
    positions: Vec<Vec<Card>>,
}

impl CardSequence {
    /// Creates a sequence from a list of positions.
    pub fn from_positions(positions: Vec<Vec<Card>>) -> Self {
        Self { positions }
    }

    /// The number of positions (ranks) in this sequence.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Checks if this sequence has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The cards at each position.
    pub fn positions(&self) -> &[Vec<Card>] {
        &self.positions
    }

    /// The rank of the first position.
    pub fn first_rank(&self) -> Option<Rank> {
        self.positions
            .first()
            .and_then(|p| p.first())
            .map(|c| c.rank())
    }

    /// The rank of the last position.
    pub fn last_rank(&self) -> Option<Rank> {
        self.positions
            .last()
            .and_then(|p| p.first())
            .map(|c| c.rank())
    }

    fn append(&mut self, card: Card) {
        self.positions.push(vec![card]);
    }

    fn prepend(&mut self, card: Card) {
        self.positions.insert(0, vec![card]);
    }

    fn add_to_first(&mut self, card: Card) {
        if let Some(p) = self.positions.first_mut() {
            p.push(card);
        }
    }

    fn add_to_last(&mut self, card: Card) {
        if let Some(p) = self.positions.last_mut() {
            p.push(card);
        }
    }

    /// Adds an ace to a wheel or broadway sequence, other sequences are left
    /// untouched.
    fn add_ace(&mut self, ace: Card) {
        match (self.first_rank(), self.last_rank()) {
            (Some(Rank::Ace), _) => self.add_to_first(ace),
            (_, Some(Rank::Ace)) => self.add_to_last(ace),
            (Some(Rank::Deuce), _) => self.prepend(ace),
            (_, Some(Rank::King)) => self.append(ace),
            _ => {}
        }
    }
}

impl fmt::Display for CardSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos_idx, pos) in self.positions.iter().enumerate() {
            if pos_idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "[")?;
            for (card_idx, card) in pos.iter().enumerate() {
                if card_idx > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{card}")?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

/// Finds the longest sequence of consecutive ranks in a set of cards.
///
/// If there are more sequences with the same length it returns the one that
/// ends with the highest rank. A sequence can be as short as one position or
/// empty if there are no cards or only aces.
pub fn longest_sequence(cards: &[Card]) -> CardSequence {
    let mut sorted = cards.to_vec();
    sorted.sort();
    sorted.dedup();

    let mut sequences = Vec::new();
    let mut current = CardSequence::default();

    // Aces sort last so they see every sequence built from the other cards.
    for card in sorted {
        let rank = card.rank();
        let last = current.last_rank();

        if rank == Rank::Ace {
            for seq in sequences.iter_mut().chain([&mut current]) {
                seq.add_ace(card);
            }
        } else if last.is_none_or(|last| rank.is_successor_of(last)) {
            current.append(card);
        } else if last == Some(rank) {
            current.add_to_last(card);
        } else {
            sequences.push(mem::take(&mut current));
            current.append(card);
        }
    }

    sequences.push(current);

    let longest = sequences
        .into_iter()
        .reduce(|best, seq| {
            let longer = seq.len() > best.len();
            let higher = seq.len() == best.len() && seq.last_rank() > best.last_rank();
            if longer || higher { seq } else { best }
        })
        .unwrap_or_default();

    trace!("Longest sequence {longest}");
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::cards;

    fn ranks(seq: &CardSequence) -> Vec<Rank> {
        seq.positions().iter().map(|p| p[0].rank()).collect()
    }

    #[test]
    fn simple_sequence() {
        let seq = longest_sequence(&cards("9d 5c 6h 7s 8c"));
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.first_rank(), Some(Rank::Five));
        assert_eq!(seq.last_rank(), Some(Rank::Nine));
    }

    #[test]
    fn same_rank_cards_share_position() {
        let seq = longest_sequence(&cards("6s 7h 7s 8c 9d 9h Kc"));
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.positions()[1], cards("7h 7s"));
        assert_eq!(seq.positions()[3], cards("9d 9h"));
        assert_eq!(seq.to_string(), "[6S] [7H 7S] [8C] [9D 9H]");
    }

    #[test]
    fn wheel_sequence() {
        let seq = longest_sequence(&cards("As 2d 3c 4h 5s"));
        assert_eq!(
            ranks(&seq),
            vec![Rank::Ace, Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five]
        );
    }

    #[test]
    fn broadway_sequence() {
        let seq = longest_sequence(&cards("Ts Jd Qc Kh Ah Ac"));
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.last_rank(), Some(Rank::Ace));
        assert_eq!(seq.positions()[4], cards("Ac Ah"));
    }

    #[test]
    fn ace_extends_earlier_sequence() {
        // The wheel run is not the last sequence when the ace is seen.
        let seq = longest_sequence(&cards("2c 3d 4h 5s 9c Jd Ad"));
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.first_rank(), Some(Rank::Ace));
        assert_eq!(seq.last_rank(), Some(Rank::Five));

        // More aces are added to the same position.
        let seq = longest_sequence(&cards("2c 3d 4h 5s 9c Ad As"));
        assert_eq!(seq.positions()[0], cards("Ad As"));
    }

    #[test]
    fn ties_prefer_higher_sequence() {
        let seq = longest_sequence(&cards("2c 3d 4h 8s 9c Td"));
        assert_eq!(
            ranks(&seq),
            vec![Rank::Eight, Rank::Nine, Rank::Ten]
        );
    }

    #[test]
    fn no_sequence() {
        assert!(longest_sequence(&[]).is_empty());
        assert!(longest_sequence(&cards("Ac Ad")).is_empty());

        let seq = longest_sequence(&cards("2c 5d 9h"));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.last_rank(), Some(Rank::Nine));
    }
}
