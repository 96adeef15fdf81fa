//! In-memory store used by the unit tests in this crate.

use std::sync::{
  Mutex,
  atomic::{AtomicBool, AtomicUsize, Ordering},
};

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::{
  recommendation::{NewRecommendation, Recommendation, SamplingKey},
  store::RecommendationStore,
};

#[derive(Debug, Error)]
#[error("store unavailable")]
pub struct Unavailable;

/// A vector-backed store. Setting `failing` makes every call error out.
#[derive(Default)]
pub struct MemoryStore {
  pub records: Mutex<Vec<Recommendation>>,
  pub failing: AtomicBool,
  pub inserts: AtomicUsize,
}

impl MemoryStore {
  pub fn with_keys(keys: &[f64]) -> Self {
    let store = Self::default();
    {
      let mut records = store.records.lock().unwrap();
      for (i, k) in keys.iter().enumerate() {
        records.push(Recommendation {
          recommendation_id: Uuid::new_v4(),
          link:              format!("https://example.com/{i}"),
          reason:            format!("reason {i}"),
          submitter:         None,
          created_at:        Utc::now(),
          sampling_key:      SamplingKey::new(*k).unwrap(),
        });
      }
    }
    store
  }

  pub fn set_failing(&self, failing: bool) { self.failing.store(failing, Ordering::SeqCst); }

  pub fn len(&self) -> usize { self.records.lock().unwrap().len() }

  fn check(&self) -> Result<(), Unavailable> {
    if self.failing.load(Ordering::SeqCst) { Err(Unavailable) } else { Ok(()) }
  }
}

impl RecommendationStore for MemoryStore {
  type Error = Unavailable;

  async fn insert(
    &self,
    input: NewRecommendation,
    sampling_key: SamplingKey,
  ) -> Result<Recommendation, Unavailable> {
    self.check()?;
    let rec = Recommendation {
      recommendation_id: Uuid::new_v4(),
      link: input.link,
      reason: input.reason,
      submitter: input.submitter,
      created_at: Utc::now(),
      sampling_key,
    };
    self.records.lock().unwrap().push(rec.clone());
    self.inserts.fetch_add(1, Ordering::SeqCst);
    Ok(rec)
  }

  async fn first_at_or_above(
    &self,
    key: SamplingKey,
  ) -> Result<Option<Recommendation>, Unavailable> {
    self.check()?;
    let records = self.records.lock().unwrap();
    Ok(
      records
        .iter()
        .filter(|r| r.sampling_key >= key)
        .min_by_key(|r| r.sampling_key)
        .cloned(),
    )
  }

  async fn first(&self) -> Result<Option<Recommendation>, Unavailable> {
    self.check()?;
    let records = self.records.lock().unwrap();
    Ok(records.iter().min_by_key(|r| r.sampling_key).cloned())
  }

  async fn get(&self, id: Uuid) -> Result<Option<Recommendation>, Unavailable> {
    self.check()?;
    let records = self.records.lock().unwrap();
    Ok(records.iter().find(|r| r.recommendation_id == id).cloned())
  }

  async fn count(&self) -> Result<u64, Unavailable> {
    self.check()?;
    Ok(self.records.lock().unwrap().len() as u64)
  }
}
