// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranking of many hand results with ties.
use log::debug;
use parking_lot::Mutex;
use std::{ops::Range, sync::Arc};

use crate::{EvalError, Hand, HandResult, Result};

/// A ledger that ranks hand results.
///
/// Results that compare equal share a placement and placements are dense, the
/// placement after a tie is the next integer:
///
/// ```
/// # use showdown_eval::*;
/// let mut ledger = HandResultLedger::default();
/// ledger.insert_hand(&Hand::from_shortcuts("p1", "As Ad 7c 8d 2h")?)?;
/// ledger.insert_hand(&Hand::from_shortcuts("p2", "Ah Ac 7s 8h 2c")?)?;
/// ledger.insert_hand(&Hand::from_shortcuts("p3", "Ks Kd 7h 8c 2d")?)?;
///
/// assert_eq!(ledger.placement_of("p1")?, 1);
/// assert_eq!(ledger.placement_of("p2")?, 1);
/// assert_eq!(ledger.placement_of("p3")?, 2);
/// # Ok::<(), EvalError>(())
/// ```
///
/// Inserting a result marks the ledger dirty and results are sorted again on
/// the next read, this is why reads take a mutable reference.
#[derive(Debug, Default, Clone)]
pub struct HandResultLedger {
    results: Vec<HandResult>,
    placements: Vec<Range<usize>>,
    dirty: bool,
}

impl HandResultLedger {
    /// Adds a result to the ledger.
    pub fn insert(&mut self, result: HandResult) {
        self.results.push(result);
        self.dirty = true;
    }

    /// Evaluates a hand and adds its result to the ledger.
    pub fn insert_hand(&mut self, hand: &Hand) -> Result<()> {
        self.insert(hand.evaluate()?);
        Ok(())
    }

    /// The number of results in the ledger.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Checks if the ledger has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The placement of the result with the given id, 1 is the best placement.
    pub fn placement_of(&mut self, id: &str) -> Result<usize> {
        self.placements()
            .find(|(_, results)| results.iter().any(|r| r.id() == id))
            .map(|(place, _)| place)
            .ok_or_else(|| EvalError::UnknownId(id.to_string()))
    }

    /// The results at a placement, empty if there is no such placement.
    pub fn results_at_placement(&mut self, place: usize) -> &[HandResult] {
        self.sort_if_dirty();

        place
            .checked_sub(1)
            .and_then(|idx| self.placements.get(idx))
            .map(|range| &self.results[range.clone()])
            .unwrap_or_default()
    }

    /// The number of distinct placements.
    pub fn placement_count(&mut self) -> usize {
        self.sort_if_dirty();
        self.placements.len()
    }

    /// Iterates the placements from best to worst with their results.
    pub fn placements(&mut self) -> impl Iterator<Item = (usize, &[HandResult])> {
        self.sort_if_dirty();

        let results = &self.results;
        self.placements
            .iter()
            .enumerate()
            .map(move |(idx, range)| (idx + 1, &results[range.clone()]))
    }

    fn sort_if_dirty(&mut self) {
        if !self.dirty {
            return;
        }

        // Stable sort, tied results keep the insertion order.
        self.results.sort_by(|a, b| b.cmp(a));

        self.placements.clear();
        let mut start = 0;
        for idx in 1..=self.results.len() {
            if idx == self.results.len() || self.results[idx] != self.results[start] {
                self.placements.push(start..idx);
                start = idx;
            }
        }

        debug!(
            "Ranked {} results into {} placements",
            self.results.len(),
            self.placements.len()
        );

        self.dirty = false;
    }
}

impl FromIterator<HandResult> for HandResultLedger {
    fn from_iter<I: IntoIterator<Item = HandResult>>(iter: I) -> Self {
        let mut ledger = Self::default();
        for result in iter {
            ledger.insert(result);
        }
        ledger
    }
}

/// A ledger that can be shared by many threads.
///
/// All operations lock the ledger, so there is one writer or reader at a time.
#[derive(Debug, Default, Clone)]
pub struct SharedLedger(Arc<Mutex<HandResultLedger>>);

impl SharedLedger {
    /// Adds a result to the ledger.
    pub fn insert(&self, result: HandResult) {
        self.0.lock().insert(result);
    }

    /// Evaluates a hand and adds its result to the ledger.
    pub fn insert_hand(&self, hand: &Hand) -> Result<()> {
        // Evaluate before locking.
        let result = hand.evaluate()?;
        self.insert(result);
        Ok(())
    }

    /// The number of results in the ledger.
    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    /// Checks if the ledger has no results.
    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// The placement of the result with the given id.
    pub fn placement_of(&self, id: &str) -> Result<usize> {
        self.0.lock().placement_of(id)
    }

    /// A copy of the results at a placement.
    pub fn results_at_placement(&self, place: usize) -> Vec<HandResult> {
        self.0.lock().results_at_placement(place).to_vec()
    }

    /// The number of distinct placements.
    pub fn placement_count(&self) -> usize {
        self.0.lock().placement_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate, tests::cards};
    use std::thread;

    fn result(id: &str, s: &str) -> HandResult {
        evaluate(&cards(s), id).unwrap()
    }

    #[test]
    fn dense_placements() {
        let mut ledger = [
            result("low", "Kc Kd 3h 4s 6c"),
            result("high1", "Ac Ad 3h 4s 6c"),
            result("high2", "Ah As 3c 4d 6d"),
        ]
        .into_iter()
        .collect::<HandResultLedger>();

        assert_eq!(ledger.placement_of("high1"), Ok(1));
        assert_eq!(ledger.placement_of("high2"), Ok(1));
        assert_eq!(ledger.placement_of("low"), Ok(2));
        assert_eq!(ledger.placement_count(), 2);
        assert_eq!(ledger.len(), 3);

        let first = ledger
            .results_at_placement(1)
            .iter()
            .map(|r| r.id())
            .collect::<Vec<_>>();
        assert_eq!(first, vec!["high1", "high2"]);
        assert_eq!(ledger.results_at_placement(2).len(), 1);
        assert!(ledger.results_at_placement(0).is_empty());
        assert!(ledger.results_at_placement(3).is_empty());
    }

    #[test]
    fn placements_after_insert() {
        let mut ledger = HandResultLedger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.placement_count(), 0);

        ledger.insert(result("pair", "Kc Kd 3h 4s 6c"));
        assert_eq!(ledger.placement_of("pair"), Ok(1));

        // A new better result moves the pair down.
        ledger.insert(result("trips", "2c 2d 2h 4d 6d"));
        assert_eq!(ledger.placement_of("trips"), Ok(1));
        assert_eq!(ledger.placement_of("pair"), Ok(2));

        ledger.insert(result("high", "Ac Jd 2s 4c 6h"));
        ledger.insert(result("pair2", "Kh Ks 3c 4h 6s"));
        let places = ledger
            .placements()
            .map(|(place, results)| (place, results.len()))
            .collect::<Vec<_>>();
        assert_eq!(places, vec![(1, 1), (2, 2), (3, 1)]);
    }

    #[test]
    fn unknown_id() {
        let mut ledger = HandResultLedger::default();
        ledger.insert(result("p1", "Kc Kd 3h 4s 6c"));
        assert_eq!(
            ledger.placement_of("p2"),
            Err(EvalError::UnknownId("p2".to_string()))
        );
    }

    #[test]
    fn shared_ledger() {
        let ledger = SharedLedger::default();
        let hands = [
            ("p1", "As Ad 7c 8d 2h Kc Qd"),
            ("p2", "Ah Ac 7s 8h 2c Kd Qs"),
            ("p3", "Ks Kh 7h 8c 2d 3c 4d"),
            ("p4", "9s 9h 9d 8c 2d 3c 4d"),
        ];

        thread::scope(|s| {
            for (id, shortcuts) in hands {
                let ledger = ledger.clone();
                s.spawn(move || {
                    let hand = Hand::from_shortcuts(id, shortcuts).unwrap();
                    ledger.insert_hand(&hand).unwrap();
                });
            }
        });

        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.placement_count(), 3);
        assert_eq!(ledger.placement_of("p4"), Ok(1));
        assert_eq!(ledger.placement_of("p1"), Ok(2));
        assert_eq!(ledger.placement_of("p2"), Ok(2));
        assert_eq!(ledger.placement_of("p3"), Ok(3));
        assert_eq!(ledger.results_at_placement(2).len(), 2);
    }
}
