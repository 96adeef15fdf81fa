//! [`SqliteStore`] — the SQLite implementation of [`RecommendationStore`].

use std::path::Path;

use antialgo_core::{
  recommendation::{NewRecommendation, Recommendation, SamplingKey},
  store::RecommendationStore,
};
use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{COLUMNS, RawRecommendation, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A recommendation pool backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a query expected to yield at most one recommendation row.
  async fn query_one(
    &self,
    sql: String,
    key: Option<f64>,
  ) -> Result<Option<Recommendation>> {
    let raw: Option<RawRecommendation> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let row = match key {
          Some(k) => stmt
            .query_row(rusqlite::params![k], RawRecommendation::from_row)
            .optional()?,
          None => stmt.query_row([], RawRecommendation::from_row).optional()?,
        };
        Ok(row)
      })
      .await?;

    raw.map(RawRecommendation::into_recommendation).transpose()
  }
}

// ─── RecommendationStore impl ────────────────────────────────────────────────

impl RecommendationStore for SqliteStore {
  type Error = Error;

  async fn insert(
    &self,
    input:        NewRecommendation,
    sampling_key: SamplingKey,
  ) -> Result<Recommendation> {
    let rec = Recommendation {
      recommendation_id: Uuid::new_v4(),
      link:              input.link,
      reason:            input.reason,
      submitter:         input.submitter,
      created_at:        Utc::now(),
      sampling_key,
    };

    let id_str    = encode_uuid(rec.recommendation_id);
    let link      = rec.link.clone();
    let reason    = rec.reason.clone();
    let submitter = rec.submitter.clone();
    let at_str    = encode_dt(rec.created_at);
    let key       = rec.sampling_key.get();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO recommendations (
             recommendation_id, link, reason, submitter, created_at, sampling_key
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, link, reason, submitter, at_str, key],
        )?;
        Ok(())
      })
      .await?;

    Ok(rec)
  }

  async fn first_at_or_above(&self, key: SamplingKey) -> Result<Option<Recommendation>> {
    // Ties on the key fall back to the id so repeated reads are stable.
    let sql = format!(
      "SELECT {COLUMNS} FROM recommendations
       WHERE sampling_key >= ?1
       ORDER BY sampling_key ASC, recommendation_id ASC
       LIMIT 1"
    );
    self.query_one(sql, Some(key.get())).await
  }

  async fn first(&self) -> Result<Option<Recommendation>> {
    let sql = format!(
      "SELECT {COLUMNS} FROM recommendations
       ORDER BY sampling_key ASC, recommendation_id ASC
       LIMIT 1"
    );
    self.query_one(sql, None).await
  }

  async fn get(&self, id: Uuid) -> Result<Option<Recommendation>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawRecommendation> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {COLUMNS} FROM recommendations WHERE recommendation_id = ?1"
              ),
              rusqlite::params![id_str],
              RawRecommendation::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecommendation::into_recommendation).transpose()
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM recommendations", [], |r| r.get(0))?)
      })
      .await?;
    Ok(n as u64)
  }
}
