//! Top-level module for the bigram generation system.
//!
//! - Word tokenization (`tokenizer`)
//! - The word-level bigram model (`BigramModel`)
//! - Internal successor distributions (`State`)
//! - The random source seam used by sampling (`RandomSource`)

/// Word-level bigram model.
///
/// Handles corpus ingestion, transition counting and
/// weighted next-word generation.
pub mod bigram_model;

/// Corpus tokenizer producing lowercase alphabetic words.
pub mod tokenizer;

/// Uniform integer sources used for weighted sampling.
pub mod random_source;

/// Internal representation of one word's successor distribution.
///
/// Tracks outgoing transitions in first-seen order and supports
/// weighted random sampling.
/// This module is not exposed publicly.
mod state;
