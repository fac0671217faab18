//! Deterministic helpers for tests.

use crate::progression::RandomSource;
use doubleup_types::progression::{Amount, Configuration, Session};
use std::collections::VecDeque;

/// Replays a fixed sequence of draws.
///
/// Panics when asked for more draws than it was given, so a test that
/// consumes an unexpected draw fails loudly.
#[derive(Clone, Debug, Default)]
pub struct FixedDraws {
    draws: VecDeque<f64>,
    consumed: usize,
}

impl FixedDraws {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Source that must never be drawn from.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for FixedDraws {
    fn next_unit(&mut self) -> f64 {
        let draw = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("fixed draws exhausted after {} draws", self.consumed));
        self.consumed += 1;
        draw
    }
}

/// Draw that wins at the given win chance.
pub fn winning_draw(probability: f64) -> f64 {
    (1.0 - probability).max(0.0)
}

/// Draw that loses at the given win chance (requires `probability < 1`).
pub fn losing_draw(probability: f64) -> f64 {
    ((1.0 - probability) / 2.0).max(0.0)
}

pub fn amount(value: f64) -> Amount {
    Amount::new(value).expect("test amount must be valid")
}

/// Session with a balance and bet already configured.
pub fn create_session(balance: f64, bet: f64) -> Session {
    Session::with_config(
        balance,
        Configuration {
            default_bet: bet,
            ..Configuration::default()
        },
    )
}
