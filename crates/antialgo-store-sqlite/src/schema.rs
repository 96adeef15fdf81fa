//! SQL schema for the Anti-Algo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS recommendations (
    recommendation_id TEXT PRIMARY KEY,
    link              TEXT NOT NULL CHECK (length(trim(link)) > 0),
    reason            TEXT NOT NULL DEFAULT '',
    submitter         TEXT,            -- NULL for anonymous drops
    created_at        TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    sampling_key      REAL NOT NULL CHECK (sampling_key >= 0.0 AND sampling_key < 1.0)
);

-- Serves both the forward scan and the wrap-around query.
CREATE INDEX IF NOT EXISTS recommendations_sampling_key_idx
    ON recommendations(sampling_key, recommendation_id);

PRAGMA user_version = 1;
";
