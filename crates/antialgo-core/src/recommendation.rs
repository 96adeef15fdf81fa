//! Recommendation types — the only entity in the Anti-Algo pool.
//!
//! A recommendation is immutable once written. The pool is append-only: no
//! operation in this crate updates or deletes a stored recommendation.

use std::{cmp::Ordering, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── SamplingKey ─────────────────────────────────────────────────────────────

/// A uniform value in `[0, 1)` assigned to a recommendation when it is
/// created. Retrieval orders and addresses the pool by this key alone.
///
/// NaN and values outside `[0, 1)` cannot be constructed, which makes the
/// key totally ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SamplingKey(f64);

impl SamplingKey {
  pub const MIN: Self = Self(0.0);

  /// `-0.0` is stored as `0.0`, so every zero key sorts the same way.
  pub fn new(value: f64) -> Result<Self> {
    let value = value + 0.0;
    if (0.0..1.0).contains(&value) {
      Ok(Self(value))
    } else {
      Err(Error::InvalidSamplingKey(value))
    }
  }

  /// Map 64 random bits onto `[0, 1)`. Only the top 53 bits are used so
  /// every result is exactly representable and strictly below 1.
  pub fn from_random_bits(bits: u64) -> Self {
    Self((bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64))
  }

  pub fn get(self) -> f64 { self.0 }
}

impl TryFrom<f64> for SamplingKey {
  type Error = Error;

  fn try_from(value: f64) -> Result<Self> { Self::new(value) }
}

impl From<SamplingKey> for f64 {
  fn from(key: SamplingKey) -> Self { key.0 }
}

impl PartialEq for SamplingKey {
  fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for SamplingKey {}

impl PartialOrd for SamplingKey {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for SamplingKey {
  fn cmp(&self, other: &Self) -> Ordering { self.0.total_cmp(&other.0) }
}

impl fmt::Display for SamplingKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

// ─── Recommendation ──────────────────────────────────────────────────────────

/// A song link somebody dropped into the pool, with their reason for sharing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
  pub recommendation_id: Uuid,
  /// Link to an external media resource. Never validated beyond non-empty.
  pub link:              String,
  /// Free-text rationale; may be empty.
  pub reason:            String,
  /// Display label of the author; `None` for anonymous drops.
  pub submitter:         Option<String>,
  /// Server-assigned timestamp; used for auditing only.
  pub created_at:        DateTime<Utc>,
  pub sampling_key:      SamplingKey,
}

// ─── NewRecommendation ───────────────────────────────────────────────────────

/// Input to [`crate::store::RecommendationStore::insert`].
///
/// `recommendation_id` and `created_at` are always assigned by the store and
/// the sampling key is drawn by [`crate::recorder::SubmissionRecorder`]; none
/// of them is accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecommendation {
  pub link:      String,
  pub reason:    String,
  pub submitter: Option<String>,
}

impl NewRecommendation {
  /// Build a submission from raw user input.
  ///
  /// The link is trimmed and must not be empty. The reason is kept as given.
  /// A blank submitter label is treated as anonymous.
  pub fn validated(
    link: &str,
    reason: impl Into<String>,
    submitter: Option<&str>,
  ) -> Result<Self> {
    let link = link.trim();
    if link.is_empty() {
      return Err(Error::EmptyLink);
    }

    let submitter = submitter
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .map(str::to_owned);

    Ok(Self {
      link: link.to_owned(),
      reason: reason.into(),
      submitter,
    })
  }
}
