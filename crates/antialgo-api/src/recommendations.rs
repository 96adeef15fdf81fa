//! Handlers for `/recommendations` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/recommendations` | Body: [`DropBody`]; returns 201 + stored recommendation |
//! | `GET`  | `/recommendations/random` | Pseudo-random pull; `{"outcome":"found",...}` or `{"outcome":"empty"}` |
//! | `GET`  | `/recommendations/:id` | 404 if not found |

use antialgo_core::{
  recommendation::Recommendation, retrieval::Pull, sampling::KeySource,
  store::RecommendationStore,
};
use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

// ─── Drop ─────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /recommendations`.
#[derive(Debug, Deserialize)]
pub struct DropBody {
  pub link:      String,
  #[serde(default)]
  pub reason:    String,
  /// Nickname or account label; omitted or blank for anonymous drops.
  pub submitter: Option<String>,
}

/// `POST /recommendations` — returns 201 + the stored [`Recommendation`].
pub async fn create<S, K>(
  State(state): State<AppState<S, K>>,
  Json(body): Json<DropBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecommendationStore,
  K: KeySource,
{
  let rec = state
    .recorder
    .submit_raw(&body.link, &body.reason, body.submitter.as_deref())
    .await?;
  Ok((StatusCode::CREATED, Json(rec)))
}

// ─── Pull ─────────────────────────────────────────────────────────────────────

/// `GET /recommendations/random`
pub async fn random<S, K>(
  State(state): State<AppState<S, K>>,
) -> Result<Json<Pull>, ApiError>
where
  S: RecommendationStore,
  K: KeySource,
{
  let pull = state.retrieval.pull().await?;
  Ok(Json(pull))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /recommendations/:id`
pub async fn get_one<S, K>(
  State(state): State<AppState<S, K>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Recommendation>, ApiError>
where
  S: RecommendationStore,
  K: KeySource,
{
  let rec = state
    .store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("recommendation {id} not found")))?;
  Ok(Json(rec))
}
