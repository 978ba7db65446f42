//! Pretrained word vectors.
//!
//! Vectors are loaded once from a GloVe / word2vec style text file and
//! looked up per request. No training happens here.

/// Word → vector table with binary caching and embedding lookup.
pub mod word_vectors;
