// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands and hand evaluation.
use ahash::AHashSet;
use log::debug;

use crate::{
    Breakdown, Card, EvalError, Flush, FullHouse, HandCategory, HandResult, RankGroup, Result,
    Straight, Suit, longest_sequence, rank_groups, suit_groups,
};

/// The number of cards in the best hand.
const BEST_HAND_LEN: usize = 5;

/// A Poker hand with up to seven unique cards.
///
/// The hand identifier is passed on to the [HandResult] so that results in a
/// [HandResultLedger](crate::HandResultLedger) can be traced back to the hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    id: String,
    cards: Vec<Card>,
}

impl Hand {
    /// The maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 7;

    /// Creates an empty hand with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cards: Vec::with_capacity(Self::MAX_CARDS),
        }
    }

    /// Creates a hand from a list of cards.
    pub fn from_cards(id: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut hand = Self::new(id);
        for card in cards {
            hand.add_card(card)?;
        }
        Ok(hand)
    }

    /// Creates a hand from space separated card shortcuts like `"As Kd 7c"`.
    pub fn from_shortcuts(id: impl Into<String>, shortcuts: &str) -> Result<Self> {
        let cards = shortcuts
            .split_whitespace()
            .map(str::parse::<Card>)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::from_cards(id, cards)
    }

    /// Adds a card to this hand.
    ///
    /// Fails if the hand is full or it already has this card.
    pub fn add_card(&mut self, card: Card) -> Result<()> {
        if self.cards.len() >= Self::MAX_CARDS || self.cards.contains(&card) {
            return Err(EvalError::IllegalHand);
        }

        self.cards.push(card);
        Ok(())
    }

    /// The hand identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates this hand.
    pub fn evaluate(&self) -> Result<HandResult> {
        evaluate(&self.cards, self.id.as_str())
    }
}

/// Evaluates five to seven unique cards.
///
/// Finds the best five cards hand category checking from the strongest to the
/// weakest category:
///
/// ```
/// # use showdown_eval::*;
/// let cards = ["As", "2d", "3c", "4h", "5s"].map(|c| c.parse::<Card>().unwrap());
/// let result = evaluate(&cards, "wheel").unwrap();
/// assert_eq!(result.category(), HandCategory::Straight);
/// assert_eq!(result.id(), "wheel");
/// ```
///
/// When more suits have five or more cards the flush is made with the first of
/// these suits in clubs, diamonds, hearts, spades order.
pub fn evaluate(cards: &[Card], id: impl Into<String>) -> Result<HandResult> {
    let id = id.into();

    let mut seen = AHashSet::with_capacity(cards.len());
    if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(EvalError::DuplicateCard(*card));
    }

    if !(BEST_HAND_LEN..=Hand::MAX_CARDS).contains(&cards.len()) {
        return Err(EvalError::UnevaluableHand(id));
    }

    let (category, breakdown) = categorize(cards, &id)?;
    debug!("Hand {id} evaluated as {category}");

    Ok(HandResult::new(category, breakdown, id))
}

/// Returns the hand category and the breakdown of the best five cards.
fn categorize(cards: &[Card], id: &str) -> Result<(HandCategory, Breakdown)> {
    let sequence = longest_sequence(cards);
    let groups = rank_groups(cards);
    let suits = suit_groups(cards);

    let mut straight = None;
    if sequence.len() >= Straight::LEN {
        let best = Straight::best(&sequence)?;
        if best.is_royal() {
            return Ok((HandCategory::RoyalFlush, Breakdown::Straight(best)));
        } else if best.is_flush() {
            return Ok((HandCategory::StraightFlush, Breakdown::Straight(best)));
        }

        straight = Some(best);
    }

    let first = groups.first().map(RankGroup::len).unwrap_or_default();
    let second = groups.get(1).map(RankGroup::len).unwrap_or_default();

    if first == 4 {
        let mut values = fill_with_kickers(cards, groups[..1].to_vec())?.into_iter();
        if let (Some(quads), Some(kicker)) = (values.next(), values.next()) {
            return Ok((
                HandCategory::FourOfAKind,
                Breakdown::FourOfAKind { quads, kicker },
            ));
        }
    }

    if first == 3 && second >= 2 {
        let full_house = FullHouse::best(&groups)?;
        return Ok((HandCategory::FullHouse, Breakdown::FullHouse(full_house)));
    }

    // Suits are checked in a fixed order, the first suit with enough cards
    // makes the flush.
    let flush_suit = Suit::suits().find_map(|s| suits.get(&s).filter(|c| c.len() >= Flush::LEN));
    if let Some(suited) = flush_suit {
        return Ok((HandCategory::Flush, Breakdown::Flush(Flush::best(suited)?)));
    }

    if let Some(straight) = straight {
        return Ok((HandCategory::Straight, Breakdown::Straight(straight)));
    }

    let (category, made) = match (first, second) {
        (3, _) => (HandCategory::ThreeOfAKind, 1),
        (2, 2) => (HandCategory::TwoPair, 2),
        (2, _) => (HandCategory::OnePair, 1),
        (1, _) => (HandCategory::HighCard, 1),
        _ => return Err(EvalError::UnevaluableHand(id.to_string())),
    };

    let values = fill_with_kickers(cards, groups[..made].to_vec())?;
    Ok((category, Breakdown::Groups(values)))
}

/// Appends the best cards not in `values` as kickers until there are five
/// cards in the values.
fn fill_with_kickers(cards: &[Card], mut values: Vec<RankGroup>) -> Result<Vec<RankGroup>> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));

    let mut count = values.iter().map(RankGroup::len).sum::<usize>();
    for card in sorted {
        if count == BEST_HAND_LEN {
            break;
        }

        if !values.iter().any(|v| v.contains(card)) {
            values.push(RankGroup::kicker(card));
            count += 1;
        }
    }

    if count != BEST_HAND_LEN {
        return Err(EvalError::InsufficientCards {
            requested: BEST_HAND_LEN,
            available: count,
        });
    }

    Ok(values)
}
