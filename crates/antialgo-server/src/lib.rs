//! HTTP server assembly for Anti-Algo.
//!
//! Mounts the JSON API from `antialgo-api` under `/api` and wraps it in
//! request tracing. The binary in `main.rs` only loads configuration, opens
//! the store and serves this router.

use std::{path::PathBuf, sync::Arc};

use antialgo_core::{sampling::KeySource, store::RecommendationStore};
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ANTIALGO_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("antialgo.db") }

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn router<S, K>(store: Arc<S>, keys: Arc<K>) -> Router
where
  S: RecommendationStore + 'static,
  K: KeySource + 'static,
{
  Router::new()
    .nest("/api", antialgo_api::api_router(store, keys))
    .layer(TraceLayer::new_for_http())
}
