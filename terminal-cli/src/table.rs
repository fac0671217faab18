use doubleup_execution::{transition, Command, GameRng, Outcome, RandomSource};
use doubleup_types::progression::Session;
use tracing::info;

use crate::config::TableConfig;

/// One player's seat: the current session plus the generator that resolves raises.
pub struct Table<R = GameRng> {
    session: Session,
    rng: R,
}

impl<R: RandomSource> Table<R> {
    pub fn new(session: Session, rng: R) -> Self {
        Self { session, rng }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        let step = transition(&self.session, command, &mut self.rng);
        if step.outcome.closed_gamble() {
            info!(
                outcome = ?step.outcome,
                balance = step.session.balance,
                "gamble closed"
            );
        }
        self.session = step.session;
        step.outcome
    }

    /// Push the configured defaults through the engine so they get the same
    /// fallback handling as typed input.
    pub fn configure(&mut self, config: &TableConfig) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        if let Some(bet) = &config.default_bet {
            outcomes.push(self.apply(Command::SetDefaultBet(bet.clone())));
        }
        if let Some(probability) = &config.default_probability {
            outcomes.push(self.apply(Command::SetDefaultProbability(probability.clone())));
        }
        if config.stop_on_max_level != self.session.config.stop_on_max_level {
            outcomes.push(self.apply(Command::ToggleStopOnMaxLevel));
        }
        outcomes
    }
}
