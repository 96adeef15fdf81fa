//! `antialgo` — drop a song into the pool, or pull one out.
//!
//! # Usage
//!
//! ```text
//! antialgo --as alice drop --link https://youtu.be/abc --reason "rainy days"
//! antialgo pull
//! antialgo --config ~/.config/antialgo/config.toml pull
//! ```

mod client;

use anyhow::{Context, Result};
use antialgo_core::{
  embed::embed_url, identity::Identity, recommendation::Recommendation,
  session::Session,
};
use clap::{Parser, Subcommand};
use client::ApiClient;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "antialgo", about = "Music recommended by a stranger")]
struct Args {
  /// Path to a TOML config file (url, nickname).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the server (default: http://localhost:8080).
  #[arg(long, env = "ANTIALGO_URL")]
  url: Option<String>,

  /// Nickname to credit your drops to; anonymous if unset.
  #[arg(long = "as", env = "ANTIALGO_NICKNAME", value_name = "NICKNAME")]
  nickname: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Share a song with the pool.
  Drop {
    /// Link to the song (YouTube, Spotify, ...).
    #[arg(long)]
    link:   String,
    /// The story behind it.
    #[arg(long, default_value = "")]
    reason: String,
  },
  /// Get a song somebody else shared.
  Pull,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:      String,
  #[serde(default)]
  nickname: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let base_url = args
    .url
    .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
    .unwrap_or_else(|| "http://localhost:8080".to_string());
  let nickname = args
    .nickname
    .or_else(|| (!file_cfg.nickname.is_empty()).then(|| file_cfg.nickname.clone()));

  let client = ApiClient::new(base_url)?;
  let mut session = Session::new();
  if let Some(name) = nickname {
    session.sign_in(Identity::nickname(name));
  }

  match args.command {
    Command::Drop { link, reason } => {
      let draft = session.draft_mut();
      draft.link = link;
      draft.reason = reason;

      let input = session.prepare_drop()?;
      let rec = client.drop_song(&input).await?;
      session.drop_succeeded();
      tracing::debug!(id = %rec.recommendation_id, "dropped");
      println!("Dropped into the ocean.");
    }
    Command::Pull => {
      session.show(client.pull().await?);
      match session.current() {
        Some(rec) => print_recommendation(rec),
        None => println!("The ocean is empty. Be the first to drop a song."),
      }
    }
  }

  Ok(())
}

fn print_recommendation(rec: &Recommendation) {
  let from = rec.submitter.as_deref().unwrap_or("a stranger");
  println!("From {from}:");
  if !rec.reason.is_empty() {
    println!("  \"{}\"", rec.reason);
  }
  println!();
  println!("  {}", rec.link);
  if let Some(embed) = embed_url(&rec.link) {
    println!("  player: {embed}");
  }
}
