// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown command line, deals a hand of Texas Hold'em and ranks the players.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;

mod deal;

use deal::DealConfig;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 9, value_parser = clap::value_parser!(u8).range(2..=23))]
    players: u8,
    /// Seed for a reproducible deal.
    #[clap(long, short)]
    seed: Option<u64>,
    /// The board cards, for example "As Kd 7c 7h 2s".
    #[clap(long, short)]
    board: Option<String>,
    /// Print the ranking as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let board = cli.board.as_deref().map(deal::parse_board).transpose()?;
    deal::run(DealConfig {
        players: cli.players as usize,
        seed: cli.seed,
        board,
        json: cli.json,
    })
}
