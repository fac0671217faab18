//! Double-or-nothing progression engine.
//!
//! A session moves through gambles one rung at a time:
//!
//! ```text
//! WAITING --raise--> IN_PROGRESS(1) --raise(win)--> IN_PROGRESS(2) ... IN_PROGRESS(9)
//!                        |                               |
//!                        +--raise(loss)--> LOST          +--settle--> WON
//! ```
//!
//! Every command goes through [`transition`], which takes the current session by reference and
//! returns the next one together with an [`Outcome`]. The input session is never modified.
//!
//! At the top rung a raise never draws. With `stop_on_max_level` set it is a silent hold;
//! otherwise it is rejected with [`ProgressionError::TopRungReached`] so the player knows to
//! settle.

mod input;
mod rng;

pub use input::{
    parse_bet, parse_number, parse_probability, BetInput, ProbabilityAdjustment,
    ProbabilityInput,
};
pub use rng::{is_win, GameRng, RandomSource};

use doubleup_types::progression::{Amount, Gamble, GambleStatus, ProgressionError, Session};
use serde::Serialize;
use tracing::{debug, warn};

/// Player commands accepted by the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Recharge(Amount),
    SetDefaultBet(String),
    SetDefaultProbability(String),
    ToggleStopOnMaxLevel,
    Raise,
    Settle,
}

/// What a command did.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Recharged {
        amount: f64,
    },
    BetConfigured {
        bet: f64,
        fallback: bool,
    },
    ProbabilityConfigured {
        probability: f64,
        adjustment: Option<ProbabilityAdjustment>,
    },
    StopOnMaxLevelToggled {
        enabled: bool,
    },
    /// Bet staked, gamble moved to level 1.
    Started {
        bet: f64,
    },
    Doubled {
        level: u8,
        payoff: f64,
        draw: f64,
    },
    Lost {
        level: u8,
        draw: f64,
    },
    Won {
        payoff: f64,
    },
    /// Raise at the top rung with the stop flag set; nothing changed.
    Held,
    Rejected {
        error: ProgressionError,
    },
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Whether the command closed a gamble into history.
    pub fn closed_gamble(&self) -> bool {
        matches!(self, Self::Lost { .. } | Self::Won { .. })
    }
}

/// Result of applying one command.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub session: Session,
    pub outcome: Outcome,
}

/// Apply `command` to `session`.
///
/// Only [`Command::Raise`] on an in-progress gamble below the top rung consumes a draw from `rng`.
pub fn transition<R: RandomSource + ?Sized>(
    session: &Session,
    command: Command,
    rng: &mut R,
) -> Transition {
    let mut next = session.clone();
    let outcome = match command {
        Command::Recharge(amount) => {
            next.balance += amount.get();
            Outcome::Recharged {
                amount: amount.get(),
            }
        }
        Command::SetDefaultBet(raw) => set_default_bet(&mut next, &raw),
        Command::SetDefaultProbability(raw) => set_default_probability(&mut next, &raw),
        Command::ToggleStopOnMaxLevel => {
            next.config.stop_on_max_level = !next.config.stop_on_max_level;
            Outcome::StopOnMaxLevelToggled {
                enabled: next.config.stop_on_max_level,
            }
        }
        Command::Raise => raise(&mut next, rng),
        Command::Settle => settle(&mut next),
    };

    match &outcome {
        Outcome::Rejected { error } => next.error = Some(*error),
        Outcome::Held => {}
        _ => next.error = None,
    }

    debug!(
        ?outcome,
        balance = next.balance,
        level = next.current.level,
        payoff = next.current.payoff,
        "applied command"
    );

    Transition {
        session: next,
        outcome,
    }
}

fn set_default_bet(session: &mut Session, raw: &str) -> Outcome {
    let BetInput { bet, fallback } = parse_bet(raw, session.config.default_bet);
    if fallback {
        warn!(raw, kept = bet, "bet input is not a number; keeping previous bet");
    } else {
        session.config.default_bet = bet;
        if session.current.is_waiting() {
            session.current.bet = bet;
        }
    }
    Outcome::BetConfigured { bet, fallback }
}

fn set_default_probability(session: &mut Session, raw: &str) -> Outcome {
    let ProbabilityInput {
        probability,
        adjustment,
    } = parse_probability(raw);
    if let Some(adjustment) = adjustment {
        warn!(raw, ?adjustment, probability, "probability input adjusted");
    }
    session.config.default_probability = probability;
    if session.current.is_waiting() {
        session.current.probability = probability;
    }
    Outcome::ProbabilityConfigured {
        probability,
        adjustment,
    }
}

fn raise<R: RandomSource + ?Sized>(session: &mut Session, rng: &mut R) -> Outcome {
    let gamble = session.current;
    match gamble.status {
        GambleStatus::Waiting => {
            if session.balance <= 0.0 {
                return Outcome::Rejected {
                    error: ProgressionError::InsufficientFunds,
                };
            }
            if gamble.bet <= 0.0 {
                return Outcome::Rejected {
                    error: ProgressionError::BetNotSet,
                };
            }
            session.balance -= gamble.bet;
            session.current = Gamble {
                level: 1,
                status: GambleStatus::InProgress,
                payoff: gamble.bet,
                ..gamble
            };
            Outcome::Started { bet: gamble.bet }
        }
        GambleStatus::InProgress if gamble.at_top() => {
            if session.config.stop_on_max_level {
                Outcome::Held
            } else {
                Outcome::Rejected {
                    error: ProgressionError::TopRungReached,
                }
            }
        }
        GambleStatus::InProgress => {
            let draw = rng.next_unit();
            if is_win(draw, gamble.probability) {
                let level = gamble.level + 1;
                let payoff = gamble.payoff * 2.0;
                session.current = Gamble {
                    level,
                    payoff,
                    ..gamble
                };
                Outcome::Doubled {
                    level,
                    payoff,
                    draw,
                }
            } else {
                close(
                    session,
                    Gamble {
                        status: GambleStatus::Lost,
                        payoff: 0.0,
                        ..gamble
                    },
                );
                Outcome::Lost {
                    level: gamble.level,
                    draw,
                }
            }
        }
        // Closed gambles only live in history; leave a hand-built session alone.
        GambleStatus::Won | GambleStatus::Lost => Outcome::Held,
    }
}

fn settle(session: &mut Session) -> Outcome {
    let gamble = session.current;
    if !gamble.is_in_progress() {
        return Outcome::Rejected {
            error: ProgressionError::NothingToSettle,
        };
    }
    session.balance += gamble.payoff;
    close(
        session,
        Gamble {
            status: GambleStatus::Won,
            ..gamble
        },
    );
    Outcome::Won {
        payoff: gamble.payoff,
    }
}

/// Archive `closed` and start a fresh gamble from the configuration.
fn close(session: &mut Session, closed: Gamble) {
    session.history.push(closed);
    session.current = Gamble::waiting(&session.config);
}
