//! Per-user interaction state.
//!
//! A [`Session`] is the explicit context a front end threads through its
//! handlers: who is signed in, what they are typing, and which recommendation
//! is on screen. Failures never destroy state: a failed drop keeps the draft
//! for resubmission and a failed pull keeps the previous recommendation.

use crate::{
  Result,
  identity::Identity,
  recommendation::{NewRecommendation, Recommendation},
  recorder::SubmissionRecorder,
  retrieval::{Pull, RandomRetrieval},
  sampling::KeySource,
  store::RecommendationStore,
};

/// The in-progress submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
  pub link:   String,
  pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
  identity: Option<Identity>,
  draft:    Draft,
  current:  Option<Recommendation>,
}

impl Session {
  pub fn new() -> Self { Self::default() }

  // ── Identity ──────────────────────────────────────────────────────────

  pub fn sign_in(&mut self, identity: Identity) { self.identity = Some(identity); }

  /// Forget the identity. The draft and the displayed item are kept.
  pub fn sign_out(&mut self) { self.identity = None; }

  pub fn identity(&self) -> Option<&Identity> { self.identity.as_ref() }

  // ── Drop ──────────────────────────────────────────────────────────────

  pub fn draft(&self) -> &Draft { &self.draft }

  pub fn draft_mut(&mut self) -> &mut Draft { &mut self.draft }

  /// Validate the draft into a submission attributed to the current
  /// identity. Does not touch the draft.
  pub fn prepare_drop(&self) -> Result<NewRecommendation> {
    NewRecommendation::validated(
      &self.draft.link,
      self.draft.reason.as_str(),
      self.identity.as_ref().and_then(Identity::label),
    )
  }

  /// Clear the form after the pool accepted the submission.
  pub fn drop_succeeded(&mut self) { self.draft = Draft::default(); }

  /// Submit the draft through `recorder`; the draft is cleared only on
  /// success.
  pub async fn drop_song<S, K>(
    &mut self,
    recorder: &SubmissionRecorder<S, K>,
  ) -> Result<Recommendation>
  where
    S: RecommendationStore,
    K: KeySource,
  {
    let input = self.prepare_drop()?;
    let rec = recorder.submit(input).await?;
    self.drop_succeeded();
    Ok(rec)
  }

  // ── Pull ──────────────────────────────────────────────────────────────

  pub fn current(&self) -> Option<&Recommendation> { self.current.as_ref() }

  /// Display the outcome of a pull. An empty pool leaves the previous item
  /// in place.
  pub fn show(&mut self, pull: Pull) {
    if let Some(rec) = pull.into_option() {
      self.current = Some(rec);
    }
  }

  pub fn dismiss(&mut self) { self.current = None; }

  /// Pull through `retrieval` and display the result. On error the
  /// previously displayed item is kept.
  pub async fn pull<S, K>(
    &mut self,
    retrieval: &RandomRetrieval<S, K>,
  ) -> Result<Option<&Recommendation>>
  where
    S: RecommendationStore,
    K: KeySource,
  {
    let pull = retrieval.pull().await?;
    let found = matches!(pull, Pull::Found(_));
    self.show(pull);
    Ok(if found { self.current.as_ref() } else { None })
  }
}
