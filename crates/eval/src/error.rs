// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::{Card, ParseCardError};

/// An error from building hand values, evaluating hands or ranking results.
///
/// All these errors are caused by input that breaks the contract of the
/// function that returned them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A group of cards that should share one rank has mixed ranks.
    #[error("cards {0:?} don't have the same rank")]
    MixedRanks(Vec<Card>),
    /// A flush or straight flush has mixed suits.
    #[error("cards {0:?} don't have the same suit")]
    MixedSuits(Vec<Card>),
    /// A value was built with the wrong number of cards.
    #[error("expected {expected} cards, found {found}")]
    WrongCardCount {
        /// The required number of cards.
        expected: usize,
        /// The number of cards supplied.
        found: usize,
    },
    /// A rank group was built without cards.
    #[error("a rank group needs at least one card")]
    EmptyGroup,
    /// Requested more cards than available.
    #[error("requested {requested} cards but only {available} are available")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards available.
        available: usize,
    },
    /// Cards that don't make a run of consecutive ranks.
    #[error("cards {0:?} are not consecutive")]
    NotConsecutive(Vec<Card>),
    /// A straight was requested from a sequence shorter than 5 ranks.
    #[error("a sequence of {0} ranks is too short for a straight")]
    SequenceTooShort(usize),
    /// The groups passed to the full house builder don't make a full house.
    #[error("rank groups don't make a full house")]
    NotAFullHouse,
    /// No hand category matches the hand cards.
    #[error("hand {0:?} cannot be evaluated")]
    UnevaluableHand(String),
    /// A card appears more than once in a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card cannot be added to a hand.
    #[error("a hand holds at most 7 unique cards")]
    IllegalHand,
    /// A card shortcut cannot be parsed.
    #[error(transparent)]
    ParseCard(#[from] ParseCardError),
    /// A ledger lookup for an identifier that is not in the ledger.
    #[error("no result with id {0:?}")]
    UnknownId(String),
}

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, EvalError>;
