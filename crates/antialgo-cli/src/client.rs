//! Async HTTP client wrapping the Anti-Algo JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use antialgo_core::{
  recommendation::{NewRecommendation, Recommendation},
  retrieval::Pull,
};
use reqwest::Client;
use serde_json::json;

/// Async HTTP client for the Anti-Algo JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url: base_url.into() })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
  }

  /// `POST /api/recommendations`
  pub async fn drop_song(&self, input: &NewRecommendation) -> Result<Recommendation> {
    let resp = self
      .client
      .post(self.url("/recommendations"))
      .json(&json!({
        "link":      input.link,
        "reason":    input.reason,
        "submitter": input.submitter,
      }))
      .send()
      .await
      .context("POST /recommendations failed")?;

    if !resp.status().is_success() {
      let status = resp.status();
      let body = resp.text().await.unwrap_or_default();
      return Err(anyhow!("POST /recommendations → {status}: {body}"));
    }
    resp.json().await.context("deserialising recommendation")
  }

  /// `GET /api/recommendations/random`
  pub async fn pull(&self) -> Result<Pull> {
    let resp = self
      .client
      .get(self.url("/recommendations/random"))
      .send()
      .await
      .context("GET /recommendations/random failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /recommendations/random → {}", resp.status()));
    }
    resp.json().await.context("deserialising pull")
  }
}
