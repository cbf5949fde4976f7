//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iw4m_client` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing each view as JSON
//!
//! All panel functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use iw4m_client::config::{DEFAULT_TOP_PLAYERS_COUNT, DEFAULT_USER_AGENT};
use iw4m_client::initialization::{init_logger_with, init_session};
use iw4m_client::{Config, HttpTransport, LogFormat, LogLevel, Session};

/// Read-only IW4MAdmin panel client.
#[derive(Debug, Parser)]
#[command(name = "iw4m", version, about)]
struct Cli {
    /// Panel base address
    #[arg(long, env = "IW4M_BASE_URL", default_value = "http://127.0.0.1:1624")]
    base_url: String,

    /// Identifier of the targeted game server
    #[arg(long, env = "IW4M_SERVER_ID", default_value = "")]
    server_id: String,

    /// Session cookie copied from a logged-in browser
    #[arg(long, env = "IW4M_COOKIE", hide_env_values = true, default_value = "")]
    cookie: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Status of every managed server
    Status,
    /// Aggregate client counters
    Info,
    /// Current map name
    Map,
    /// Current game mode
    GameMode,
    /// Panel version
    Version,
    /// User the cookie belongs to
    Whoami,
    /// Server rules
    Rules,
    /// Recent player reports
    Reports,
    /// Command reference
    Commands,
    /// Servers selectable from the console
    ServerIds,
    /// Live chat feed
    Chat,
    /// Connected players by role
    Players,
    /// Role names, highest first
    Roles {
        /// Print internal identifiers instead of display names
        #[arg(long)]
        stock: bool,
    },
    /// Recently connected clients
    RecentClients {
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    /// Audit log entries (0 uses the panel default of 15)
    AuditLog {
        #[arg(long, default_value_t = 0)]
        count: usize,
    },
    /// Privileged clients
    Admins {
        /// Role name, or "all"
        #[arg(long, default_value = "all")]
        role: String,
        /// Maximum number of admins (0 = no limit)
        #[arg(long, default_value_t = 0)]
        count: usize,
    },
    /// Best ranked players
    TopPlayers {
        #[arg(long, default_value_t = DEFAULT_TOP_PLAYERS_COUNT)]
        count: usize,
    },
    /// Statistics of one client
    Stats { client_id: String },
    /// Search clients by name or xuid
    Find {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        xuid: String,
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        offset: usize,
        #[arg(long, default_value_t = 0)]
        direction: i32,
    },
    /// Command prefix in use on the server
    Prefix,
    /// Compare two roles
    CompareRoles { a: String, b: String },
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            server_id: self.server_id.clone(),
            cookie: self.cookie.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

async fn run(session: &Session<HttpTransport>, command: Command) -> Result<()> {
    match command {
        Command::Status => print_json(&session.status().await?),
        Command::Info => print_json(&session.info().await?),
        Command::Map => print_json(&json!({ "map": session.map_name().await? })),
        Command::GameMode => print_json(&json!({ "gameMode": session.game_mode().await? })),
        Command::Version => print_json(&json!({ "version": session.iw4m_version().await? })),
        Command::Whoami => print_json(&json!({ "loggedInAs": session.logged_in_as().await? })),
        Command::Rules => print_json(&session.rules().await?),
        Command::Reports => print_json(&session.reports().await?),
        Command::Commands => print_json(&session.help().await?),
        Command::ServerIds => print_json(&session.server_ids().await?),
        Command::Chat => print_json(&session.read_chat().await?),
        Command::Players => print_json(&session.list_players().await?),
        Command::Roles { stock: false } => print_json(&session.roles().await?),
        Command::Roles { stock: true } => print_json(&session.stock_roles().await?),
        Command::RecentClients { offset } => print_json(&session.recent_clients(offset).await?),
        Command::AuditLog { count } => print_json(&session.audit_logs(count).await?),
        Command::Admins { role, count } => print_json(&session.admins(&role, count).await?),
        Command::TopPlayers { count } => print_json(&session.top_players(count).await?),
        Command::Stats { client_id } => print_json(&session.player_stats(&client_id).await?),
        Command::Find {
            name,
            xuid,
            count,
            offset,
            direction,
        } => print_json(
            &session
                .find_player(&name, &xuid, count, offset, direction)
                .await?,
        ),
        Command::Prefix => print_json(&json!({ "prefix": session.command_prefix().await? })),
        Command::CompareRoles { a, b } => {
            let table = session
                .role_table()
                .await
                .context("Failed to fetch role listing")?;
            print_json(&json!({
                "higher": table.is_higher(&a, &b),
                "lower": table.is_lower(&a, &b),
                "positionA": table.position(&a),
                "positionB": table.position(&b),
            }))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load IW4M_* variables from a .env file if one exists
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    config.validate().context("Invalid configuration")?;
    let session = init_session(&config).context("Failed to initialize panel session")?;

    if let Err(e) = run(&session, cli.command).await {
        eprintln!("iw4m error: {e:#}");
        process::exit(1);
    }
    Ok(())
}
