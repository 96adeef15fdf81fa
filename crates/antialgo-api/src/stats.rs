//! Handler for `GET /stats`.

use antialgo_core::{sampling::KeySource, store::RecommendationStore};
use axum::{Json, extract::State};
use serde::Serialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct Stats {
  /// Number of recommendations in the pool.
  pub count: u64,
}

/// `GET /stats`
pub async fn handler<S, K>(
  State(state): State<AppState<S, K>>,
) -> Result<Json<Stats>, ApiError>
where
  S: RecommendationStore,
  K: KeySource,
{
  let count = state.store.count().await.map_err(ApiError::store)?;
  Ok(Json(Stats { count }))
}
