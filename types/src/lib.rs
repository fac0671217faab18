//! Common types for doubleup.
//!
//! [`progression`] holds the session state the engine transitions; [`api`] holds the envelope
//! and DTOs spoken by the account service.

pub mod api;
pub mod progression;

pub use progression::{
    Amount, AmountError, Configuration, Gamble, GambleStatus, ProgressionError, Session,
    MAX_LEVEL, TOP_LEVEL,
};
