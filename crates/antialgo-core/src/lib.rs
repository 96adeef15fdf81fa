//! Core types and trait definitions for Anti-Algo.
//!
//! Anti-Algo keeps a shared pool of song recommendations. Anyone can drop a
//! link with a short reason into the pool, and anyone can pull a
//! pseudo-random recommendation back out.
//!
//! This crate is free of HTTP and database dependencies. Storage backends
//! implement [`store::RecommendationStore`]; the submission and retrieval
//! logic in [`recorder`] and [`retrieval`] only talks to that trait.

// Native `async fn` in traits; the store trait spells out `Send` futures
// explicitly where it matters.
#![allow(async_fn_in_trait)]

pub mod embed;
pub mod error;
pub mod identity;
pub mod recommendation;
pub mod recorder;
pub mod retrieval;
pub mod sampling;
pub mod session;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod testing;
