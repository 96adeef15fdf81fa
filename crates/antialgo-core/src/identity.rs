//! Who is dropping a recommendation.
//!
//! Two variants exist: a bare nickname typed by the user, and an account from
//! an external identity provider. Either way the only thing the pool records
//! is a display label.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
  Nickname { name: String },
  /// An account vouched for by an external identity provider.
  Account {
    uid:          String,
    display_name: Option<String>,
    email:        Option<String>,
  },
}

impl Identity {
  pub fn nickname(name: impl Into<String>) -> Self { Self::Nickname { name: name.into() } }

  /// The label stored as a recommendation's `submitter`. Accounts prefer the
  /// display name and fall back to the email address; the provider uid is
  /// never exposed.
  pub fn label(&self) -> Option<&str> {
    let label = match self {
      Self::Nickname { name } => Some(name.as_str()),
      Self::Account { display_name, email, .. } => display_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .or(email.as_deref()),
    };
    label.map(str::trim).filter(|l| !l.is_empty())
  }
}
