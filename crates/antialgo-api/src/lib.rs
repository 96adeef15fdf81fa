//! JSON REST API for Anti-Algo.
//!
//! Exposes an axum [`Router`] backed by any
//! [`antialgo_core::store::RecommendationStore`]. Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", antialgo_api::api_router(store.clone(), Arc::new(OsKeySource)))
//! ```

pub mod error;
pub mod recommendations;
pub mod stats;


use std::sync::Arc;

use antialgo_core::{
  recorder::SubmissionRecorder, retrieval::RandomRetrieval, sampling::KeySource,
  store::RecommendationStore,
};
use axum::{
  Router,
  routing::{get, post},
};

pub use error::ApiError;

/// Shared state threaded through all handlers.
pub struct AppState<S, K> {
  pub store:     Arc<S>,
  pub recorder:  SubmissionRecorder<S, K>,
  pub retrieval: RandomRetrieval<S, K>,
}

impl<S, K> AppState<S, K>
where
  S: RecommendationStore,
  K: KeySource,
{
  pub fn new(store: Arc<S>, keys: Arc<K>) -> Self {
    Self {
      recorder: SubmissionRecorder::new(store.clone(), keys.clone()),
      retrieval: RandomRetrieval::new(store.clone(), keys),
      store,
    }
  }
}

impl<S, K> Clone for AppState<S, K> {
  fn clone(&self) -> Self {
    Self {
      store:     self.store.clone(),
      recorder:  self.recorder.clone(),
      retrieval: self.retrieval.clone(),
    }
  }
}

/// Build a fully-materialised API router for `store`, drawing sampling keys
/// from `keys`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, K>(store: Arc<S>, keys: Arc<K>) -> Router<()>
where
  S: RecommendationStore + 'static,
  K: KeySource + 'static,
{
  Router::new()
    .route("/recommendations", post(recommendations::create::<S, K>))
    .route("/recommendations/random", get(recommendations::random::<S, K>))
    .route("/recommendations/{id}", get(recommendations::get_one::<S, K>))
    .route("/stats", get(stats::handler::<S, K>))
    .with_state(AppState::new(store, keys))
}
