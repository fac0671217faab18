//! Plain-text rendering of sessions and outcomes.

use doubleup_execution::{Outcome, ProbabilityAdjustment};
use doubleup_types::progression::{Gamble, GambleStatus, Session, TOP_LEVEL};

fn money(value: f64) -> String {
    format!("${value:.2}")
}

fn percent(probability: f64) -> String {
    format!("{:.0}%", probability * 100.0)
}

pub fn outcome_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Recharged { amount } => format!("recharged {}", money(*amount)),
        Outcome::BetConfigured { bet, fallback: false } => {
            format!("default bet set to {}", money(*bet))
        }
        Outcome::BetConfigured { bet, fallback: true } => {
            format!("not a number; default bet stays {}", money(*bet))
        }
        Outcome::ProbabilityConfigured {
            probability,
            adjustment,
        } => match adjustment {
            None => format!("win probability set to {}", percent(*probability)),
            Some(ProbabilityAdjustment::Fallback) => {
                format!("not a number; win probability set to {}", percent(*probability))
            }
            Some(ProbabilityAdjustment::Clamped { requested }) => format!(
                "{requested}% is out of range; win probability set to {}",
                percent(*probability)
            ),
        },
        Outcome::StopOnMaxLevelToggled { enabled } => {
            format!("stop on 10 {}", if *enabled { "on" } else { "off" })
        }
        Outcome::Started { bet } => format!("staked {}, climbing to level 1", money(*bet)),
        Outcome::Doubled { level, payoff, .. } => {
            format!("won the flip! level {level}, payoff {}", money(*payoff))
        }
        Outcome::Lost { level, .. } => format!("lost at level {level}"),
        Outcome::Won { payoff } => format!("settled, collected {}", money(*payoff)),
        Outcome::Held => "holding at the top rung".to_string(),
        Outcome::Rejected { error } => format!("rejected: {error}"),
    }
}

pub fn status_line(session: &Session) -> String {
    let current = &session.current;
    let mut line = format!(
        "balance {} | level {}/{} | payoff {} | bet {} | odds {} | stop-on-10 {}",
        money(session.balance),
        current.level,
        TOP_LEVEL,
        money(current.payoff),
        money(current.bet),
        percent(current.probability),
        if session.config.stop_on_max_level {
            "on"
        } else {
            "off"
        },
    );
    if let Some(error) = session.error {
        line.push_str(&format!(" | error: {error}"));
    }
    line
}

fn history_row(index: usize, gamble: &Gamble) -> String {
    let status = match gamble.status {
        GambleStatus::Won => "WON",
        GambleStatus::Lost => "LOST",
        GambleStatus::Waiting => "WAITING",
        GambleStatus::InProgress => "IN PROGRESS",
    };
    format!(
        "{:>4}  {:<5} bet {:>10}  level {}  payoff {:>10}",
        index + 1,
        status,
        money(gamble.bet),
        gamble.level,
        money(gamble.payoff)
    )
}

pub fn history(session: &Session) -> String {
    if session.history.is_empty() {
        return "no closed gambles yet".to_string();
    }
    let mut lines: Vec<String> = session
        .history
        .iter()
        .enumerate()
        .map(|(index, gamble)| history_row(index, gamble))
        .collect();
    lines.push(format!(
        "{} won, {} lost, net {}",
        session.wins(),
        session.losses(),
        money(session.net_result())
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use doubleup_types::progression::{Configuration, ProgressionError};

    #[test]
    fn test_status_line() {
        let mut session = Session::with_config(
            30.0,
            Configuration {
                default_bet: 10.0,
                default_probability: 0.75,
                stop_on_max_level: true,
            },
        );
        assert_eq!(
            status_line(&session),
            "balance $30.00 | level 0/9 | payoff $0.00 | bet $10.00 | odds 75% | stop-on-10 on"
        );

        session.error = Some(ProgressionError::BetNotSet);
        assert!(status_line(&session).ends_with(&format!("| error: {}", ProgressionError::BetNotSet)));
    }

    #[test]
    fn test_outcome_lines() {
        assert_eq!(
            outcome_line(&Outcome::Recharged { amount: 40.0 }),
            "recharged $40.00"
        );
        assert_eq!(
            outcome_line(&Outcome::ProbabilityConfigured {
                probability: 1.0,
                adjustment: Some(ProbabilityAdjustment::Clamped { requested: 150.0 }),
            }),
            "150% is out of range; win probability set to 100%"
        );
        assert_eq!(
            outcome_line(&Outcome::Doubled {
                level: 3,
                payoff: 40.0,
                draw: 0.9
            }),
            "won the flip! level 3, payoff $40.00"
        );
        assert!(outcome_line(&Outcome::Rejected {
            error: ProgressionError::NothingToSettle
        })
        .starts_with("rejected: nothing to settle"));
    }

    #[test]
    fn test_history_summary() {
        let mut session = Session::new(0.0);
        assert_eq!(history(&session), "no closed gambles yet");

        session.history.push(Gamble {
            bet: 10.0,
            level: 2,
            status: GambleStatus::Won,
            payoff: 20.0,
            probability: 0.5,
        });
        session.history.push(Gamble {
            bet: 10.0,
            level: 1,
            status: GambleStatus::Lost,
            payoff: 0.0,
            probability: 0.5,
        });
        let rendered = history(&session);
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains("WON"));
        assert!(rendered.contains("LOST"));
        assert!(rendered.ends_with("1 won, 1 lost, net $0.00"));
    }
}
