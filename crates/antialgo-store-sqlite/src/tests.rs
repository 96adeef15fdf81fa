//! Integration tests for `SqliteStore` against an in-memory database.

use std::sync::Arc;

use antialgo_core::{
  recommendation::{NewRecommendation, SamplingKey},
  recorder::SubmissionRecorder,
  retrieval::{Pull, RandomRetrieval},
  sampling::{ScriptedKeySource, SeededKeySource},
  store::RecommendationStore,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn key(v: f64) -> SamplingKey { SamplingKey::new(v).unwrap() }

fn input(link: &str) -> NewRecommendation {
  NewRecommendation::validated(link, "because", None).unwrap()
}

async fn seed(s: &SqliteStore, keys: &[f64]) {
  for (i, k) in keys.iter().enumerate() {
    s.insert(input(&format!("https://example.com/{i}")), key(*k))
      .await
      .unwrap();
  }
}

fn retrieval(s: SqliteStore) -> RandomRetrieval<SqliteStore, ScriptedKeySource> {
  RandomRetrieval::new(
    Arc::new(s),
    Arc::new(ScriptedKeySource::new(Vec::new()).unwrap()),
  )
}

fn found_key(pull: Pull) -> f64 {
  match pull {
    Pull::Found(rec) => rec.sampling_key.get(),
    Pull::Empty => panic!("expected a recommendation"),
  }
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get() {
  let s = store().await;

  let rec = s.insert(input("https://example.com/a"), key(0.5)).await.unwrap();
  let fetched = s.get(rec.recommendation_id).await.unwrap().unwrap();

  assert_eq!(fetched, rec);
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn anonymous_and_empty_reason_roundtrip() {
  let s = store().await;
  let new = NewRecommendation::validated("https://example.com/q", "", None).unwrap();

  let rec = s.insert(new, key(0.1)).await.unwrap();
  let fetched = s.get(rec.recommendation_id).await.unwrap().unwrap();

  assert_eq!(fetched.reason, "");
  assert_eq!(fetched.submitter, None);
}

#[tokio::test]
async fn duplicate_keys_are_allowed() {
  let s = store().await;
  seed(&s, &[0.4, 0.4]).await;
  assert_eq!(s.count().await.unwrap(), 2);
}

// ─── Ordered queries ─────────────────────────────────────────────────────────

#[tokio::test]
async fn first_at_or_above_uses_numeric_order() {
  let s = store().await;
  seed(&s, &[0.5, 0.05, 0.3]).await;

  let got = s.first_at_or_above(key(0.06)).await.unwrap().unwrap();
  assert_eq!(got.sampling_key.get(), 0.3);

  let got = s.first_at_or_above(key(0.3)).await.unwrap().unwrap();
  assert_eq!(got.sampling_key.get(), 0.3);

  assert!(s.first_at_or_above(key(0.6)).await.unwrap().is_none());
}

#[tokio::test]
async fn first_returns_minimum_key() {
  let s = store().await;
  assert!(s.first().await.unwrap().is_none());

  seed(&s, &[0.7, 0.2, 0.9]).await;
  assert_eq!(s.first().await.unwrap().unwrap().sampling_key.get(), 0.2);
}

#[tokio::test]
async fn ties_resolve_to_the_same_record() {
  let s = store().await;
  seed(&s, &[0.4, 0.4, 0.4]).await;

  let a = s.first_at_or_above(key(0.3)).await.unwrap().unwrap();
  let b = s.first_at_or_above(key(0.3)).await.unwrap().unwrap();
  assert_eq!(a.recommendation_id, b.recommendation_id);
}

// ─── Retrieval over SQLite ───────────────────────────────────────────────────

#[tokio::test]
async fn forward_scan_and_wrap_around() {
  let s = store().await;
  seed(&s, &[0.2, 0.5, 0.8]).await;
  let r = retrieval(s);

  assert_eq!(found_key(r.pull_at(key(0.21)).await.unwrap()), 0.5);
  assert_eq!(found_key(r.pull_at(key(0.8)).await.unwrap()), 0.8);
  assert_eq!(found_key(r.pull_at(key(0.81)).await.unwrap()), 0.2);
}

#[tokio::test]
async fn empty_pool_pulls_empty() {
  let r = retrieval(store().await);
  assert_eq!(r.pull_at(key(0.5)).await.unwrap(), Pull::Empty);
}

#[tokio::test]
async fn repeated_pull_with_same_r_is_stable() {
  let s = store().await;
  seed(&s, &[0.15, 0.45, 0.75]).await;
  let r = retrieval(s);

  let a = r.pull_at(key(0.5)).await.unwrap();
  let b = r.pull_at(key(0.5)).await.unwrap();
  assert_eq!(a, b);
}

#[tokio::test]
async fn submitted_record_is_retrievable_at_its_key() {
  let s = Arc::new(store().await);
  let keys = Arc::new(ScriptedKeySource::new([0.625]).unwrap());
  let recorder = SubmissionRecorder::new(s.clone(), keys.clone());
  let retrieval = RandomRetrieval::new(s.clone(), keys);

  let stored = recorder
    .submit_raw("https://example.com/a", "x", Some("alice"))
    .await
    .unwrap();

  let Pull::Found(rec) = retrieval.pull_at(stored.sampling_key).await.unwrap() else {
    panic!("expected the submitted record");
  };
  assert_eq!(rec.link, "https://example.com/a");
  assert_eq!(rec.reason, "x");
  assert_eq!(rec.submitter.as_deref(), Some("alice"));
  assert!((0.0..1.0).contains(&rec.sampling_key.get()));
}

#[tokio::test]
async fn empty_link_submission_leaves_pool_unchanged() {
  let s = Arc::new(store().await);
  let recorder =
    SubmissionRecorder::new(s.clone(), Arc::new(SeededKeySource::new(3)));

  let err = recorder.submit_raw("", "x", Some("alice")).await.unwrap_err();
  assert!(matches!(err, antialgo_core::Error::EmptyLink));
  assert_eq!(s.count().await.unwrap(), 0);
}

#[tokio::test]
async fn every_record_is_reachable() {
  let s = store().await;
  let keys = [0.05, 0.17, 0.3, 0.41, 0.55, 0.68, 0.8, 0.93];
  seed(&s, &keys).await;

  let r = RandomRetrieval::new(Arc::new(s), Arc::new(SeededKeySource::new(12)));
  let mut seen = std::collections::HashSet::new();
  for _ in 0..4_000 {
    let Pull::Found(rec) = r.pull().await.unwrap() else {
      panic!("pool is not empty");
    };
    seen.insert(rec.recommendation_id);
  }
  assert_eq!(seen.len(), keys.len());
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopen_keeps_records() {
  let path = std::env::temp_dir().join(format!("antialgo-{}.db", Uuid::new_v4()));

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(input("https://example.com/kept"), key(0.33))
      .await
      .unwrap()
      .recommendation_id
  };

  let s = SqliteStore::open(&path).await.unwrap();
  let rec = s.get(id).await.unwrap().unwrap();
  assert_eq!(rec.link, "https://example.com/kept");
  assert_eq!(rec.sampling_key.get(), 0.33);

  drop(s);
  let _ = std::fs::remove_file(&path);
}
