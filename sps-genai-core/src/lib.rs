//! Bigram text generation and word-embedding lookup library.
//!
//! This crate provides the pieces behind the `sps-genai` service:
//! - Word-level bigram (order-1 Markov) model construction and sampling
//! - An explicit random source seam for reproducible generation
//! - Pretrained word-vector tables with a compact binary cache
//! - The default training corpus shipped with the service
//!
//! Only the high-level API is exposed publicly. File helpers are kept
//! internal.

/// Bigram model, tokenizer and random sources.
pub mod model;

/// Pretrained word vectors and embedding lookup.
pub mod embedding;

/// Default corpus and corpus file loading.
pub mod corpus;

/// Error type shared by the fallible (I/O bound) parts of the crate.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::GenAiError;
