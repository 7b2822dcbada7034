// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "Kd".parse::<Card>().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type that deals unique cards until it is exhausted:
//!
//! ```
//! # use showdown_cards::{Deck, DeckError};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! for _ in 0..Deck::SIZE {
//!     deck.deal().unwrap();
//! }
//! assert_eq!(deck.deal(), Err(DeckError::AllCardsDealt));
//!
//! deck.reset(&mut rand::rng());
//! assert_eq!(deck.count(), Deck::SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::{Deck, DeckError};
