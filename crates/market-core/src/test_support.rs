//! Shared test helpers for market-core and downstream crates.
//!
//! `ScriptedDice` replays a fixed sequence of die faces so a test can pin
//! every roll of a negotiation or a generation pass.

use crate::collab::MarketObserver;
use crate::contract::Contract;
use crate::dice::Dice;
use std::collections::VecDeque;

/// Dice that replay scripted values.
///
/// `roll(n)` consumes `n` faces and sums them; `pick(upper)` consumes one
/// value and reduces it modulo `upper`. Once the script runs dry every face
/// is `fallback`.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: VecDeque<i32>,
    fallback: i32,
    consumed: usize,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = i32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            fallback: 3,
            consumed: 0,
        }
    }

    pub fn with_fallback(mut self, fallback: i32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    fn next_face(&mut self) -> i32 {
        self.consumed += 1;
        self.faces.pop_front().unwrap_or(self.fallback)
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, count: u32) -> i32 {
        (0..count).map(|_| self.next_face()).sum()
    }

    fn pick(&mut self, upper: usize) -> usize {
        let v = self.next_face();
        if upper == 0 {
            return 0;
        }
        usize::try_from(v).unwrap_or(0) % upper
    }
}

/// Observer that records every notification.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub refreshes: Vec<usize>,
    pub reports: Vec<String>,
}

impl MarketObserver for RecordingObserver {
    fn offers_changed(&mut self, offers: &[Contract]) {
        self.refreshes.push(offers.len());
    }

    fn report(&mut self, line: &str) {
        self.reports.push(line.to_string());
    }
}
