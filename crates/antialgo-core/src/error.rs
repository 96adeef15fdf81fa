//! Error types for `antialgo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("link must not be empty")]
  EmptyLink,

  #[error("sampling key {0} is outside [0, 1)")]
  InvalidSamplingKey(f64),

  /// Any failure reported by the backing store, boxed so that the service
  /// layer stays independent of the concrete backend.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// `true` for errors caused by the caller's input rather than the store.
  pub fn is_validation(&self) -> bool {
    matches!(self, Self::EmptyLink | Self::InvalidSamplingKey(_))
  }

  pub(crate) fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
