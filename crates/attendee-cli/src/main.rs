//! `attendees`: drive an attendee selection engine from the terminal.
//!
//! Reads one command per line from stdin and prints a JSON object per
//! command with the outcome and the resulting form state.
//!
//! # Usage
//!
//! ```text
//! attendees --total 3331.20
//! echo "paste Jordan Alvarez, Bob Vance" | attendees --people staff.json
//! ```

mod app;
mod command;

use std::{
  io::{self, BufRead, Write},
  path::PathBuf,
};

use anyhow::{Context, Result};
use app::App;
use attendee_core::Directory;
use attendee_engine::{EngineSettings, SelectionEngine};
use clap::Parser;
use command::Command;
use serde::Deserialize;
use serde_json::json;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "attendees", version, about = "Expense attendee picker")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "attendees.toml")]
  config: PathBuf,

  /// JSON file with the people directory (defaults to the built-in roster).
  #[arg(long, value_name = "FILE")]
  people: Option<PathBuf>,

  /// Expense total used for the per-person helper.
  #[arg(long)]
  total: Option<String>,

  /// Pretty-print JSON output.
  #[arg(long)]
  pretty: bool,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional config file and `ATTENDEES_*` environment.
#[derive(Deserialize, Default)]
struct AppConfig {
  #[serde(default)]
  engine:       EngineSettings,
  #[serde(default)]
  people_file:  Option<PathBuf>,
  #[serde(default)]
  total_amount: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr; stdout carries only JSON.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(args.config.clone()).required(false))
    .add_source(
      config::Environment::with_prefix("ATTENDEES")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true),
    )
    .build()
    .context("failed to read config")?;
  let cfg: AppConfig = settings
    .try_deserialize()
    .context("failed to deserialise config")?;

  // CLI flags override the config file, which overrides defaults.
  let directory = match args.people.or(cfg.people_file) {
    Some(path) => {
      let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading people file {}", path.display()))?;
      Directory::from_json(&raw)
        .with_context(|| format!("loading people from {}", path.display()))?
    }
    None => Directory::new(),
  };
  let total = args.total.unwrap_or(cfg.total_amount);

  tracing::info!(people = directory.len(), "directory loaded");
  let engine = SelectionEngine::new(directory, cfg.engine)
    .context("failed to build selection engine")?;
  let mut app = App::new(engine, total);

  run(&mut app, args.pretty)
}

// ─── Command loop ─────────────────────────────────────────────────────────────

fn run(app: &mut App, pretty: bool) -> Result<()> {
  let stdin = io::stdin();
  let mut stdout = io::stdout().lock();

  for line in stdin.lock().lines() {
    let line = line.context("reading stdin")?;
    let output = match Command::parse(&line) {
      Ok(None) => continue,
      Ok(Some(cmd)) => match app.handle(cmd) {
        Some(output) => output,
        None => break,
      },
      Err(e) => {
        tracing::debug!(%line, "rejected command");
        json!({ "error": e.to_string() })
      }
    };

    let rendered = if pretty {
      serde_json::to_string_pretty(&output)
    } else {
      serde_json::to_string(&output)
    }
    .context("serialising output")?;
    writeln!(stdout, "{rendered}").context("writing stdout")?;
    stdout.flush().context("flushing stdout")?;
  }

  Ok(())
}
