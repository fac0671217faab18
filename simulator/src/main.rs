use anyhow::{Context, Result};
use clap::Parser;
use doubleup_simulator::{Api, Simulator, UserRecord};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "doubleup-simulator", about = "Local mock account service")]
struct Args {
    /// Host interface to bind (default: localhost).
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Extra users as `id:name:balance` (repeatable).
    #[arg(long = "user", value_parser = parse_user)]
    users: Vec<UserRecord>,

    /// Skip seeding the default demo user.
    #[arg(long)]
    no_default_user: bool,

    /// Maximum log level.
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn parse_user(raw: &str) -> Result<UserRecord, String> {
    let mut parts = raw.splitn(3, ':');
    let (Some(user_id), Some(user_name), Some(balance)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected id:name:balance, got {raw:?}"));
    };
    if user_id.is_empty() {
        return Err("user id must not be empty".to_string());
    }
    let balance = balance
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("invalid balance {balance:?}"))?;
    Ok(UserRecord {
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        balance,
    })
}

fn build_simulator(args: &Args) -> Simulator {
    let simulator = if args.no_default_user {
        Simulator::new()
    } else {
        Simulator::with_default_users()
    };
    for user in &args.users {
        simulator.insert_user(user.clone());
    }
    simulator
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let simulator = Arc::new(build_simulator(&args));
    info!(users = simulator.user_count(), "user directory ready");
    let app = Api::new(simulator).router();

    // Start server
    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("axum server error")?;

    Ok(())
}
