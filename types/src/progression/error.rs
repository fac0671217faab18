use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Recoverable validation failures.
///
/// None of these end a session. The failing command leaves balance, ladder
/// and history untouched and the error is held on the session until the next
/// successful command clears it.
#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressionError {
    #[error("insufficient funds: recharge your balance before starting")]
    InsufficientFunds,
    #[error("bet not set: configure a positive default bet")]
    BetNotSet,
    #[error("nothing to settle: no gamble is in progress")]
    NothingToSettle,
    #[error("top rung reached: settle to collect the payoff")]
    TopRungReached,
}
