//! Sampling key generation.
//!
//! Every submission and every retrieval draws exactly one key. The source is
//! injected into [`crate::recorder::SubmissionRecorder`] and
//! [`crate::retrieval::RandomRetrieval`] so that tests can replace OS
//! randomness with a reproducible sequence.

use std::sync::{Mutex, PoisonError};

use rand::{RngCore as _, SeedableRng as _, rngs::StdRng};
use rand_core::{OsRng, RngCore as _};

use crate::{Result, recommendation::SamplingKey};

/// A source of independent, uniformly distributed sampling keys.
pub trait KeySource: Send + Sync {
  fn draw(&self) -> SamplingKey;
}

// ─── OsKeySource ─────────────────────────────────────────────────────────────

/// Draws keys from the operating system's RNG. No seed is persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsKeySource;

impl KeySource for OsKeySource {
  fn draw(&self) -> SamplingKey { SamplingKey::from_random_bits(OsRng.next_u64()) }
}

// ─── SeededKeySource ─────────────────────────────────────────────────────────

/// A deterministic stream from a seeded [`StdRng`]. The same seed always
/// yields the same keys, which makes statistical tests repeatable.
#[derive(Debug)]
pub struct SeededKeySource {
  rng: Mutex<StdRng>,
}

impl SeededKeySource {
  pub fn new(seed: u64) -> Self { Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) } }
}

impl KeySource for SeededKeySource {
  fn draw(&self) -> SamplingKey {
    let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
    SamplingKey::from_random_bits(rng.next_u64())
  }
}

// ─── ScriptedKeySource ───────────────────────────────────────────────────────

/// Replays a fixed list of keys in order, starting over when exhausted.
#[derive(Debug)]
pub struct ScriptedKeySource {
  keys: Vec<SamplingKey>,
  next: Mutex<usize>,
}

impl ScriptedKeySource {
  /// Fails if any value lies outside `[0, 1)`. An empty script replays
  /// [`SamplingKey::MIN`].
  pub fn new(values: impl IntoIterator<Item = f64>) -> Result<Self> {
    let keys = values
      .into_iter()
      .map(SamplingKey::new)
      .collect::<Result<Vec<_>>>()?;
    Ok(Self { keys, next: Mutex::new(0) })
  }
}

impl KeySource for ScriptedKeySource {
  fn draw(&self) -> SamplingKey {
    if self.keys.is_empty() {
      return SamplingKey::MIN;
    }
    let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
    let key = self.keys[*next % self.keys.len()];
    *next = next.wrapping_add(1);
    key
  }
}
