//! Dropping recommendations into the pool.

use std::sync::Arc;

use crate::{
  Error, Result,
  recommendation::{NewRecommendation, Recommendation},
  sampling::KeySource,
  store::RecommendationStore,
};

/// Persists new recommendations, each under a freshly drawn sampling key.
pub struct SubmissionRecorder<S, K> {
  store: Arc<S>,
  keys:  Arc<K>,
}

impl<S, K> Clone for SubmissionRecorder<S, K> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), keys: self.keys.clone() }
  }
}

impl<S, K> SubmissionRecorder<S, K>
where
  S: RecommendationStore,
  K: KeySource,
{
  pub fn new(store: Arc<S>, keys: Arc<K>) -> Self { Self { store, keys } }

  /// Validate raw input and submit it. Validation failures never reach the
  /// store.
  pub async fn submit_raw(
    &self,
    link: &str,
    reason: &str,
    submitter: Option<&str>,
  ) -> Result<Recommendation> {
    let input = NewRecommendation::validated(link, reason, submitter)?;
    self.submit(input).await
  }

  /// Draw one sampling key and insert exactly one record. Store failures are
  /// reported, not retried.
  pub async fn submit(&self, input: NewRecommendation) -> Result<Recommendation> {
    let key = self.keys.draw();
    match self.store.insert(input, key).await {
      Ok(rec) => {
        tracing::debug!(
          id = %rec.recommendation_id,
          sampling_key = %rec.sampling_key,
          "recommendation dropped"
        );
        Ok(rec)
      }
      Err(e) => {
        tracing::warn!(error = %e, "failed to store recommendation");
        Err(Error::store(e))
      }
    }
  }
}
