use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use doubleup_client::Client;
use doubleup_execution::{GameRng, Outcome};
use doubleup_types::progression::{Configuration, Session};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

mod commands;
mod config;
mod render;
mod table;

use commands::{help_text, parse_line, Action};
use config::TableConfig;
use table::Table;

/// CLI flags (override the YAML config)
#[derive(Parser, Debug)]
#[command(name = "doubleup-terminal", about = "Double-or-nothing ladder in the terminal")]
struct Args {
    /// YAML table config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the draw generator (OS entropy when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting balance
    #[arg(long)]
    balance: Option<f64>,

    /// Start with stop-on-10 enabled
    #[arg(long)]
    stop_on_max_level: bool,

    /// Account service URL; with --user the balance comes from the account
    #[arg(long)]
    api: Option<String>,

    #[arg(long)]
    user: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// Print outcomes and sessions as JSON lines
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

impl Args {
    fn table_config(&self) -> Result<TableConfig> {
        let mut config = match &self.config {
            Some(path) => TableConfig::load(path)?,
            None => TableConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(balance) = self.balance {
            config.starting_balance = balance;
        }
        if self.stop_on_max_level {
            config.stop_on_max_level = true;
        }
        Ok(config)
    }
}

async fn opening_session(args: &Args, config: &TableConfig) -> Result<Session> {
    let (Some(api), Some(user)) = (&args.api, &args.user) else {
        if args.api.is_some() {
            warn!("--api given without --user; using the configured balance");
        }
        return Ok(Session::new(config.starting_balance));
    };
    let client = Client::new(api).context("invalid --api url")?;
    if let Some(password) = &args.password {
        let login = client
            .login(user, password)
            .await
            .context("login failed")?;
        info!(user_id = %login.user_id, "logged in");
    }
    let session = client
        .open_session(user, Configuration::default())
        .await
        .with_context(|| format!("failed to load account {user}"))?;
    info!(balance = session.balance, "balance loaded from account");
    Ok(session)
}

fn report(session: &Session, outcome: &Outcome, as_json: bool) -> Result<()> {
    if as_json {
        println!(
            "{}",
            serde_json::to_string(&json!({ "outcome": outcome, "session": session }))?
        );
    } else {
        println!("{}", render::outcome_line(outcome));
        println!("{}", render::status_line(session));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = args.table_config()?;
    let rng = match config.seed {
        Some(seed) => GameRng::from_seed(seed),
        None => GameRng::from_entropy(),
    };
    let session = opening_session(&args, &config).await?;
    let mut table = Table::new(session, rng);
    for outcome in table.configure(&config) {
        if args.json {
            report(table.session(), &outcome, true)?;
        }
    }

    if !args.json {
        println!("{}", render::status_line(table.session()));
        println!("type help for commands");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match parse_line(&line) {
            Ok(Action::Engine(command)) => {
                let outcome = table.apply(command);
                report(table.session(), &outcome, args.json)?;
            }
            Ok(Action::Status) => {
                if args.json {
                    println!("{}", serde_json::to_string(table.session())?);
                } else {
                    println!("{}", render::status_line(table.session()));
                }
            }
            Ok(Action::History) => {
                if args.json {
                    println!("{}", serde_json::to_string(&table.session().history)?);
                } else {
                    println!("{}", render::history(table.session()));
                }
            }
            Ok(Action::Help) => println!("{}", help_text()),
            Ok(Action::Quit) => break,
            Ok(Action::Nothing) => {}
            Err(message) => eprintln!("{message}"),
        }
    }

    let session = table.session();
    info!(
        balance = session.balance,
        wins = session.wins(),
        losses = session.losses(),
        "session ended"
    );
    Ok(())
}
