//! Encoding and decoding helpers between domain types and the plain values
//! stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, UUIDs as hyphenated lowercase
//! strings and sampling keys as `REAL`.

use antialgo_core::recommendation::{Recommendation, SamplingKey};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Error, Result};

/// Column list shared by every `SELECT` so that [`RawRecommendation::from_row`]
/// can read by position.
pub const COLUMNS: &str =
  "recommendation_id, link, reason, submitter, created_at, sampling_key";

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `recommendations` row.
pub struct RawRecommendation {
  pub recommendation_id: String,
  pub link:              String,
  pub reason:            String,
  pub submitter:         Option<String>,
  pub created_at:        String,
  pub sampling_key:      f64,
}

impl RawRecommendation {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      recommendation_id: row.get(0)?,
      link:              row.get(1)?,
      reason:            row.get(2)?,
      submitter:         row.get(3)?,
      created_at:        row.get(4)?,
      sampling_key:      row.get(5)?,
    })
  }

  pub fn into_recommendation(self) -> Result<Recommendation> {
    Ok(Recommendation {
      recommendation_id: decode_uuid(&self.recommendation_id)?,
      link:              self.link,
      reason:            self.reason,
      submitter:         self.submitter,
      created_at:        decode_dt(&self.created_at)?,
      sampling_key:      SamplingKey::new(self.sampling_key)?,
    })
  }
}
