//! Entry point. Wires stdin commands -> session inputs -> risk report / trade ledger.

mod config;
mod error;
mod greeks;
mod ledger;
mod parser;
mod render;
mod report;
mod risk;
mod session;
mod types;
mod utils;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::parser::{parse_command, Command};
use crate::session::{SessionId, SessionRegistry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let cfg = match AppConfig::locate() {
        Some(path) => {
            info!("Config: {}", path.display());
            AppConfig::load(&path)?
        }
        None => {
            info!("No config file found, using built-in defaults");
            AppConfig::default()
        }
    };

    let mut sessions = SessionRegistry::new();
    let mut active = sessions.start(cfg.initial_inputs(Local::now().date_naive())?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    stdout.write_all(render::HELP.as_bytes()).await?;
    if let Some(s) = sessions.get(active) {
        stdout.write_all(render::inputs(&s.inputs).as_bytes()).await?;
    }

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else { break; };
                if line.trim().is_empty() {
                    continue;
                }
                let Some(cmd) = parse_command(&line) else {
                    warn!("Unrecognized command: {}", line.trim());
                    stdout.write_all(b"Unrecognized command, type `help`.\n").await?;
                    continue;
                };
                if cmd == Command::Quit {
                    break;
                }
                let today = Local::now().date_naive();
                let out = handle(&mut sessions, &mut active, &cfg, today, cmd);
                stdout.write_all(out.as_bytes()).await?;
            }

            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    sessions.end(active);
    info!("Open sessions at exit: {}", sessions.len());
    Ok(())
}

/// Runs one command against the active session and returns what to print.
fn handle(
    sessions: &mut SessionRegistry,
    active: &mut SessionId,
    cfg: &AppConfig,
    today: NaiveDate,
    cmd: Command,
) -> String {
    if cmd == Command::New {
        let inputs = match cfg.initial_inputs(today) {
            Ok(i) => i,
            Err(e) => {
                error!("cannot start session: {:#}", e);
                return format!("Cannot start a new session: {e:#}\n");
            }
        };
        sessions.end(*active);
        *active = sessions.start(inputs);
        return "Started a new session; history cleared.\n".into();
    }

    let Some(session) = sessions.get_mut(*active) else {
        error!("active session {} missing", active);
        return "No active session.\n".into();
    };
    session.advance_to(today);

    match cmd {
        Command::Set(setting) => {
            setting.apply(&mut session.inputs);
            render::inputs(&session.inputs)
        }
        Command::Show => render::inputs(&session.inputs),
        Command::Eval => match session.evaluate() {
            Ok(r) => render::report(&session.inputs, &r),
            Err(e) => {
                warn!("evaluation rejected: {}", e);
                format!("Cannot evaluate trade: {e}\n")
            }
        },
        Command::Save => match session.save_trade() {
            Ok((id, _)) => {
                info!(trade = %id, "Trade saved");
                match session.ledger.get(id) {
                    Some(rec) => format!(
                        "Trade saved! id={id} at {}\n",
                        rec.saved_at.format("%Y-%m-%d %H:%M:%S")
                    ),
                    None => format!("Trade saved! id={id}\n"),
                }
            }
            Err(e) => {
                warn!("save rejected: {}", e);
                format!("Trade not saved: {e}\n")
            }
        },
        Command::History { json: false } => render::history(session.ledger.list()),
        Command::History { json: true } => match render::history_json(session.ledger.list()) {
            Ok(s) => s + "\n",
            Err(e) => {
                error!("history serialization failed: {:#}", e);
                "Could not render history.\n".into()
            }
        },
        Command::Help => render::HELP.into(),
        Command::New | Command::Quit => String::new(),
    }
}
