//! Pulling a pseudo-random recommendation out of the pool.
//!
//! The store has no "random row" operation, so selection is done with the
//! sampling keys assigned at creation:
//!
//! 1. draw `r` uniformly from `[0, 1)`;
//! 2. forward scan: take the record with the smallest key `>= r`;
//! 3. if there is none, wrap around to the record with the smallest key.
//!
//! Treating the key space as a circle makes the landing zone of each record
//! the gap between its key and its predecessor's (the wrap gap belongs to the
//! minimum-key record). With independent uniform keys those gaps have equal
//! expected length, so every record is returned with probability close to
//! `1/N`, regardless of when it was inserted.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  recommendation::{Recommendation, SamplingKey},
  sampling::KeySource,
  store::RecommendationStore,
};

/// The outcome of a pull. An empty pool is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "recommendation", rename_all = "snake_case")]
pub enum Pull {
  Found(Recommendation),
  Empty,
}

impl Pull {
  pub fn into_option(self) -> Option<Recommendation> {
    match self {
      Self::Found(rec) => Some(rec),
      Self::Empty => None,
    }
  }
}

/// Selects recommendations by circular forward scan over sampling keys.
pub struct RandomRetrieval<S, K> {
  store: Arc<S>,
  keys:  Arc<K>,
}

impl<S, K> Clone for RandomRetrieval<S, K> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), keys: self.keys.clone() }
  }
}

impl<S, K> RandomRetrieval<S, K>
where
  S: RecommendationStore,
  K: KeySource,
{
  pub fn new(store: Arc<S>, keys: Arc<K>) -> Self { Self { store, keys } }

  /// Draw a fresh `r` and pull. Every call draws again, so repeated pulls
  /// are expected to land on different records.
  pub async fn pull(&self) -> Result<Pull> { self.pull_at(self.keys.draw()).await }

  /// Pull using a caller-supplied `r`. Deterministic for a fixed pool.
  pub async fn pull_at(&self, r: SamplingKey) -> Result<Pull> {
    let forward = self.store.first_at_or_above(r).await.map_err(|e| {
      tracing::warn!(error = %e, "forward scan failed");
      Error::store(e)
    })?;

    let found = match forward {
      Some(rec) => Some(rec),
      None => {
        tracing::debug!(r = %r, "forward scan empty, wrapping around");
        self.store.first().await.map_err(|e| {
          tracing::warn!(error = %e, "wrap-around query failed");
          Error::store(e)
        })?
      }
    };

    Ok(match found {
      Some(rec) => Pull::Found(rec),
      None => Pull::Empty,
    })
  }
}
