//! Doubleup execution layer.
//!
//! This crate contains the progression engine: the pure transition function that moves a
//! [`Session`](doubleup_types::Session) from one state to the next, the parse-with-fallback
//! layer for raw player input, and the randomness sources that resolve raises.
//!
//! ## Determinism requirements
//! - Do not read randomness from a global generator; only draw from the provided [`RandomSource`].
//! - Never mutate the input session; [`transition`] returns a new one.
//!
//! ## Example
//! ```rust
//! use doubleup_execution::{transition, Command, GameRng};
//! use doubleup_types::{Amount, Session};
//!
//! let mut rng = GameRng::from_seed(7);
//! let session = Session::new(0.0);
//! let step = transition(&session, Command::Recharge(Amount::new(40.0).unwrap()), &mut rng);
//! let step = transition(&step.session, Command::SetDefaultBet("10".into()), &mut rng);
//! let step = transition(&step.session, Command::Raise, &mut rng);
//! assert_eq!(step.session.balance, 30.0);
//! assert_eq!(step.session.current.level, 1);
//! ```

pub mod progression;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use progression::{
    is_win, parse_bet, parse_number, parse_probability, transition, BetInput, Command, GameRng,
    Outcome, ProbabilityAdjustment, ProbabilityInput, RandomSource, Transition,
};
