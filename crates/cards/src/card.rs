// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// Cards are plain values, two cards with the same rank and suit are the same
/// card. Cards are ordered by rank first and by suit when ranks are equal, the
/// suit order is a fixed tiebreak that has no meaning in Poker:
///
/// ```
/// # use showdown_cards::{Card, Rank, Suit};
/// let ah = Card::new(Rank::Ace, Suit::Hearts);
/// let as_ = Card::new(Rank::Ace, Suit::Spades);
/// let kd = Card::new(Rank::King, Suit::Diamonds);
/// assert!(kd < ah && ah < as_);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error returned when parsing a card shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The shortcut is not two characters long.
    #[error("invalid card shortcut {0:?}, expected rank and suit like \"As\"")]
    InvalidLength(String),
    /// The first character is not a rank.
    #[error("invalid rank {0:?}")]
    InvalidRank(char),
    /// The second character is not a suit.
    #[error("invalid suit {0:?}")]
    InvalidSuit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card from a shortcut like `As` (Ace of spades) or `8c` (Eight of
    /// clubs), both characters are case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::from_shortcut(r).ok_or(ParseCardError::InvalidRank(r))?;
                let suit = Suit::from_shortcut(s).ok_or(ParseCardError::InvalidSuit(s))?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(ParseCardError::InvalidLength(s.to_string())),
        }
    }
}

/// Card rank.
///
/// The discriminant is the rank strength, from 1 for a Deuce to 13 for an Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 1,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank strength, Deuce is 1 and Ace is 13.
    pub fn strength(&self) -> u8 {
        *self as u8
    }

    /// Checks if this rank comes right after `other`, the Ace is only a
    /// successor of the King.
    pub fn is_successor_of(&self, other: Rank) -> bool {
        self.strength() == other.strength() + 1
    }

    /// The rank full name.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Trey",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Returns the rank for a shortcut character (case insensitive).
    pub fn from_shortcut(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 1,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits, from Clubs to Spades.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit full name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// Returns the suit for a shortcut character (case insensitive).
    pub fn from_shortcut(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("As".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("td".parse(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!(" 9C ".parse(), Ok(Card::new(Rank::Nine, Suit::Clubs)));

        assert_eq!(
            "1s".parse::<Card>(),
            Err(ParseCardError::InvalidRank('1'))
        );
        assert_eq!(
            "Ax".parse::<Card>(),
            Err(ParseCardError::InvalidSuit('x'))
        );
        assert!(matches!(
            "10s".parse::<Card>(),
            Err(ParseCardError::InvalidLength(_))
        ));
    }

    #[test]
    fn card_ordering() {
        // Rank first.
        let kd = Card::new(Rank::King, Suit::Spades);
        let ac = Card::new(Rank::Ace, Suit::Clubs);
        assert!(kd < ac);

        // Suit breaks rank ties.
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        assert!(ac < ah && ah < as_);
    }

    #[test]
    fn rank_strength() {
        let strengths = Rank::ranks().map(|r| r.strength()).collect::<Vec<_>>();
        assert_eq!(strengths, (1..=13).collect::<Vec<_>>());

        assert!(Rank::Ace.is_successor_of(Rank::King));
        assert!(Rank::Trey.is_successor_of(Rank::Deuce));
        assert!(!Rank::Deuce.is_successor_of(Rank::Ace));
        assert!(!Rank::Five.is_successor_of(Rank::Trey));
    }
}
