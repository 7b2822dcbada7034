// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Evaluates hands of 5, 6 and 7 cards, finds the best five cards category
//! (from High Card to Royal Flush) and breaks the five cards down into hand
//! values used to break ties and to show the winning hand:
//!
//! ```
//! # use showdown_eval::*;
//! let board = Hand::from_shortcuts("board", "Ks Kd 7c 7h 2s")?;
//! let p1 = Hand::from_cards("p1", board.cards().iter().copied().chain([
//!     "Kc".parse()?,
//!     "3d".parse()?,
//! ]))?;
//! let p2 = Hand::from_cards("p2", board.cards().iter().copied().chain([
//!     "Ac".parse()?,
//!     "Ad".parse()?,
//! ]))?;
//!
//! let r1 = p1.evaluate()?;
//! let r2 = p2.evaluate()?;
//! assert_eq!(r1.category(), HandCategory::FullHouse);
//! assert_eq!(r2.category(), HandCategory::TwoPair);
//! assert!(r1 > r2);
//! # Ok::<(), EvalError>(())
//! ```
//!
//! Many results can be ranked with a [HandResultLedger] that groups tied
//! results in the same placement.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
mod flush;
mod full_house;
mod group;
mod hand;
mod ledger;
mod result;
mod sequence;
mod straight;
mod value;

pub use error::{EvalError, Result};
pub use flush::Flush;
pub use full_house::FullHouse;
pub use group::{RankGroup, rank_groups, suit_groups};
pub use hand::{Hand, evaluate};
pub use ledger::{HandResultLedger, SharedLedger};
pub use result::{HandCategory, HandResult};
pub use sequence::{CardSequence, longest_sequence};
pub use straight::Straight;
pub use value::{Breakdown, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, DeckError, ParseCardError, Rank, Suit};
