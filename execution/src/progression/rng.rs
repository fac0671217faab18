//! Randomness used to resolve raises.
//!
//! The engine never reaches for a global generator. Every call to
//! [`super::transition`] is handed a [`RandomSource`], so replays and tests can
//! supply their own draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Produces uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// ChaCha20-backed source; identical seeds give identical draw sequences.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha20Rng,
}

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
        }
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Whether `draw` wins against a win chance of `probability`.
///
/// A draw of exactly zero never wins at probability zero.
pub fn is_win(draw: f64, probability: f64) -> bool {
    draw >= 1.0 - probability
}
