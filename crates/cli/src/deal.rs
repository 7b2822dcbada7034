// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals a board and hole cards and ranks the players hands.
use anyhow::{Result, bail};
use log::info;
use rand::prelude::*;
use serde::Serialize;
use std::fmt;

use showdown_eval::{Card, Deck, Hand, HandCategory, HandResultLedger};

/// The number of board cards.
pub const BOARD_SIZE: usize = 5;

/// The maximum number of players, each player gets two cards.
pub const MAX_PLAYERS: usize = (Deck::SIZE - BOARD_SIZE) / 2;

/// The deal configuration.
#[derive(Debug, Clone)]
pub struct DealConfig {
    /// Number of players.
    pub players: usize,
    /// Seed for a reproducible deal, if None the deal is random.
    pub seed: Option<u64>,
    /// The board cards, if None the board is dealt.
    pub board: Option<Vec<Card>>,
    /// Print the report as JSON.
    pub json: bool,
}

/// Deals a hand and prints the players ranking.
pub fn run(config: DealConfig) -> Result<()> {
    let mut deal = deal(&config)?;
    let report = Report::new(&mut deal);

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }

    Ok(())
}

/// Parses a board from space separated shortcuts like `"As Kd 7c 7h 2s"`.
pub fn parse_board(s: &str) -> Result<Vec<Card>> {
    let cards = s
        .split_whitespace()
        .map(str::parse::<Card>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cards)
}

/// The outcome of a deal.
#[derive(Debug)]
pub struct Deal {
    /// The board cards.
    pub board: Vec<Card>,
    /// The players hands, board cards first.
    pub hands: Vec<Hand>,
    /// The ranked hands results.
    pub ledger: HandResultLedger,
}

/// Deals cards to the players and ranks their hands.
pub fn deal(config: &DealConfig) -> Result<Deal> {
    if !(2..=MAX_PLAYERS).contains(&config.players) {
        bail!("Players must be between 2 and {MAX_PLAYERS}");
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut deck = Deck::new_and_shuffled(&mut rng);

    let board = match &config.board {
        Some(board) => {
            if board.len() != BOARD_SIZE {
                bail!("The board must have {BOARD_SIZE} cards, found {}", board.len());
            }

            for (idx, card) in board.iter().enumerate() {
                if board[..idx].contains(card) {
                    bail!("Duplicate board card {card}");
                }
                deck.remove(*card);
            }

            board.clone()
        }
        None => (0..BOARD_SIZE)
            .map(|_| deck.deal())
            .collect::<Result<Vec<_>, _>>()?,
    };

    let mut hands = Vec::with_capacity(config.players);
    let mut ledger = HandResultLedger::default();

    for player in 1..=config.players {
        let hole = [deck.deal()?, deck.deal()?];
        let hand = Hand::from_cards(format!("Player {player}"), board.iter().copied().chain(hole))?;
        ledger.insert_hand(&hand)?;
        hands.push(hand);
    }

    info!(
        "Dealt {} players, {} cards left in the deck",
        config.players,
        deck.count()
    );

    Ok(Deal {
        board,
        hands,
        ledger,
    })
}

/// A ranked player in a report.
#[derive(Debug, Serialize)]
pub struct PlayerReport {
    /// The hand identifier.
    pub id: String,
    /// The hand category.
    pub category: HandCategory,
    /// The best five cards.
    pub best: Vec<Card>,
}

/// The players at a placement.
#[derive(Debug, Serialize)]
pub struct PlacementReport {
    /// The placement, 1 is the winner.
    pub place: usize,
    /// The tied players at this placement.
    pub players: Vec<PlayerReport>,
}

/// The deal report.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The board cards.
    pub board: Vec<Card>,
    /// The placements from best to worst.
    pub placements: Vec<PlacementReport>,
    #[serde(skip)]
    details: Vec<(usize, Vec<String>)>,
    #[serde(skip)]
    hole_cards: Vec<(String, Vec<Card>)>,
}

impl Report {
    /// Creates a report for a deal.
    pub fn new(deal: &mut Deal) -> Self {
        let hole_cards = deal
            .hands
            .iter()
            .map(|h| (h.id().to_string(), h.cards()[BOARD_SIZE..].to_vec()))
            .collect();

        let mut placements = Vec::new();
        let mut details = Vec::new();
        for (place, results) in deal.ledger.placements() {
            placements.push(PlacementReport {
                place,
                players: results
                    .iter()
                    .map(|r| PlayerReport {
                        id: r.id().to_string(),
                        category: r.category(),
                        best: r.cards(),
                    })
                    .collect(),
            });

            details.push((
                place,
                results
                    .iter()
                    .map(|r| format!("{} with: {r}", r.id()))
                    .collect(),
            ));
        }

        Self {
            board: deal.board.clone(),
            placements,
            details,
            hole_cards,
        }
    }

    /// The report as pretty printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board:")?;
        for card in &self.board {
            write!(f, " {card}")?;
        }
        writeln!(f)?;

        for (id, cards) in &self.hole_cards {
            write!(f, "{id} hole cards:")?;
            for card in cards {
                write!(f, " {card}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "---")?;

        for (place, results) in &self.details {
            writeln!(
                f,
                "Place {place} contains {} results and they are:",
                results.len()
            )?;
            for result in results {
                writeln!(f, "  -- {result}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
