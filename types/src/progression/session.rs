use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use super::{ProgressionError, DEFAULT_PROBABILITY, TOP_LEVEL};

#[derive(Debug, ThisError, PartialEq)]
pub enum AmountError {
    #[error("amount must be finite (got={0})")]
    NotFinite(f64),
    #[error("amount must not be negative (got={0})")]
    Negative(f64),
}

/// A non-negative, finite amount of money.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite(value));
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Player-controlled defaults that outlive individual gambles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub default_bet: f64,
    /// Win chance as a fraction in `[0, 1]`.
    pub default_probability: f64,
    pub stop_on_max_level: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            default_bet: 0.0,
            default_probability: DEFAULT_PROBABILITY,
            stop_on_max_level: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GambleStatus {
    Waiting,
    InProgress,
    Won,
    Lost,
}

impl GambleStatus {
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single climb up the ladder.
///
/// While `InProgress` the payoff is `bet * 2^(level - 1)`. Closed gambles
/// (`Won`/`Lost`) only ever live in [`Session::history`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gamble {
    pub bet: f64,
    pub level: u8,
    pub status: GambleStatus,
    pub payoff: f64,
    pub probability: f64,
}

impl Gamble {
    /// Fresh gamble seeded from the current configuration.
    pub fn waiting(config: &Configuration) -> Self {
        Self {
            bet: config.default_bet,
            level: 0,
            status: GambleStatus::Waiting,
            payoff: 0.0,
            probability: config.default_probability,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.status == GambleStatus::Waiting
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GambleStatus::InProgress
    }

    /// Payoff the ladder formula predicts for the current level.
    pub fn expected_payoff(&self) -> f64 {
        match self.level {
            0 => 0.0,
            level => self.bet * 2f64.powi(i32::from(level) - 1),
        }
    }

    pub fn at_top(&self) -> bool {
        self.level == TOP_LEVEL
    }
}

/// Everything the engine owns for one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub balance: f64,
    pub config: Configuration,
    /// Closed gambles in the order they closed.
    pub history: Vec<Gamble>,
    pub current: Gamble,
    /// Last validation failure, cleared by the next successful command.
    pub error: Option<ProgressionError>,
}

impl Session {
    pub fn new(balance: f64) -> Self {
        Self::with_config(balance, Configuration::default())
    }

    pub fn with_config(balance: f64, config: Configuration) -> Self {
        Self {
            balance,
            config,
            history: Vec::new(),
            current: Gamble::waiting(&config),
            error: None,
        }
    }

    /// Net result of every closed gamble (payoff collected minus bet staked).
    pub fn net_result(&self) -> f64 {
        self.history.iter().map(|gamble| gamble.payoff - gamble.bet).sum()
    }

    pub fn wins(&self) -> usize {
        self.history
            .iter()
            .filter(|gamble| gamble.status == GambleStatus::Won)
            .count()
    }

    pub fn losses(&self) -> usize {
        self.history
            .iter()
            .filter(|gamble| gamble.status == GambleStatus::Lost)
            .count()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(0.0)
    }
}
