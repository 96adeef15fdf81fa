//! The `RecommendationStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `antialgo-store-sqlite`). It exposes only the primitives a sorted document
//! store offers natively: insert-one, a lower-bounded range query ordered by
//! the sampling key with a limit of one, and an unconditional ordered query
//! with a limit of one. There is no "random row" primitive; random selection
//! is built on top in [`crate::retrieval`].

use std::future::Future;

use uuid::Uuid;

use crate::recommendation::{NewRecommendation, Recommendation, SamplingKey};

/// Abstraction over an Anti-Algo storage backend.
///
/// The collection is append-only: there is no update or delete operation.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecommendationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new recommendation under `sampling_key` and return it.
  /// The id and `created_at` timestamp are assigned by the store.
  ///
  /// Either the whole record is written or nothing is.
  fn insert(
    &self,
    input: NewRecommendation,
    sampling_key: SamplingKey,
  ) -> impl Future<Output = Result<Recommendation, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// The recommendation with the smallest sampling key `>= key`, if any.
  fn first_at_or_above(
    &self,
    key: SamplingKey,
  ) -> impl Future<Output = Result<Option<Recommendation>, Self::Error>> + Send + '_;

  /// The recommendation with the smallest sampling key overall, or `None`
  /// if the collection is empty.
  fn first(
    &self,
  ) -> impl Future<Output = Result<Option<Recommendation>, Self::Error>> + Send + '_;

  /// Retrieve a recommendation by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Recommendation>, Self::Error>> + Send + '_;

  /// Number of recommendations in the pool.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
