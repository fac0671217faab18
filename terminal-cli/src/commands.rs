//! Keyboard shortcuts and word commands.

use doubleup_execution::Command;
use doubleup_types::progression::{Amount, QUICK_BET, QUICK_RECHARGE, RECHARGE_DENOMINATIONS};

#[derive(Clone)]
pub struct CommandDef {
    pub usage: &'static str,
    pub desc: &'static str,
}

const fn cmd(usage: &'static str, desc: &'static str) -> CommandDef {
    CommandDef { usage, desc }
}

pub const COMMANDS: &[CommandDef] = &[
    cmd("r", "Recharge $40"),
    cmd("a", "Set default bet to $10"),
    cmd("z", "Raise (start, then double or nothing)"),
    cmd("x", "Settle and collect the payoff"),
    cmd("t", "Toggle stop on 10"),
    cmd("recharge <10|20|30|40>", "Recharge a fixed amount"),
    cmd("bet <amount>", "Set the default bet"),
    cmd("prob <percent>", "Set the default win probability (e.g. 50%)"),
    cmd("stop", "Toggle stop on 10"),
    cmd("raise", "Same as z"),
    cmd("settle", "Same as x"),
    cmd("status", "Show balance and ladder"),
    cmd("history", "List closed gambles"),
    cmd("help", "Show this list"),
    cmd("quit", "Exit"),
];

#[derive(Debug, PartialEq)]
pub enum Action {
    Engine(Command),
    Status,
    History,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

pub fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|c| format!("  {:<24} {}", c.usage, c.desc))
        .collect::<Vec<_>>()
        .join("\n")
}

fn recharge(value: f64) -> Result<Action, String> {
    Amount::new(value)
        .map(|amount| Action::Engine(Command::Recharge(amount)))
        .map_err(|err| err.to_string())
}

fn denominations() -> String {
    RECHARGE_DENOMINATIONS
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Map one input line to an action.
pub fn parse_line(line: &str) -> Result<Action, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word.to_lowercase().as_str() {
        "" => Ok(Action::Nothing),
        "r" => recharge(QUICK_RECHARGE),
        "a" => Ok(Action::Engine(Command::SetDefaultBet(QUICK_BET.to_string()))),
        "z" | "raise" => Ok(Action::Engine(Command::Raise)),
        "x" | "settle" => Ok(Action::Engine(Command::Settle)),
        "t" | "stop" => Ok(Action::Engine(Command::ToggleStopOnMaxLevel)),
        "recharge" => {
            let value = rest
                .parse::<f64>()
                .ok()
                .filter(|value| RECHARGE_DENOMINATIONS.contains(value))
                .ok_or_else(|| format!("recharge amount must be one of {}", denominations()))?;
            recharge(value)
        }
        "bet" => Ok(Action::Engine(Command::SetDefaultBet(rest.to_string()))),
        "prob" | "probability" => Ok(Action::Engine(Command::SetDefaultProbability(
            rest.to_string(),
        ))),
        "status" | "s" => Ok(Action::Status),
        "history" | "h" => Ok(Action::History),
        "help" | "?" => Ok(Action::Help),
        "quit" | "exit" | "q" => Ok(Action::Quit),
        other => Err(format!("unknown command: {other} (type help)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts() {
        assert_eq!(
            parse_line("r"),
            Ok(Action::Engine(Command::Recharge(Amount::new(40.0).unwrap())))
        );
        assert_eq!(
            parse_line("A"),
            Ok(Action::Engine(Command::SetDefaultBet("10".to_string())))
        );
        assert_eq!(parse_line("Z"), Ok(Action::Engine(Command::Raise)));
        assert_eq!(parse_line("x"), Ok(Action::Engine(Command::Settle)));
        assert_eq!(
            parse_line("t"),
            Ok(Action::Engine(Command::ToggleStopOnMaxLevel))
        );
    }

    #[test]
    fn test_recharge_denominations_only() {
        assert_eq!(
            parse_line("recharge 20"),
            Ok(Action::Engine(Command::Recharge(Amount::new(20.0).unwrap())))
        );
        let err = parse_line("recharge 25").unwrap_err();
        assert!(err.contains("10, 20, 30, 40"), "unexpected error: {err}");
        assert!(parse_line("recharge").is_err());
    }

    #[test]
    fn test_raw_input_passed_through() {
        assert_eq!(
            parse_line("bet abc"),
            Ok(Action::Engine(Command::SetDefaultBet("abc".to_string())))
        );
        assert_eq!(
            parse_line("prob  75% "),
            Ok(Action::Engine(Command::SetDefaultProbability(
                "75%".to_string()
            )))
        );
    }

    #[test]
    fn test_local_actions() {
        assert_eq!(parse_line(""), Ok(Action::Nothing));
        assert_eq!(parse_line("   "), Ok(Action::Nothing));
        assert_eq!(parse_line("status"), Ok(Action::Status));
        assert_eq!(parse_line("history"), Ok(Action::History));
        assert_eq!(parse_line("quit"), Ok(Action::Quit));
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for def in COMMANDS {
            assert!(help.contains(def.usage));
        }
    }
}
