use thiserror::Error;

/// Errors raised while loading corpora and word vectors.
///
/// Building a `BigramModel` and generating text never fail; only the
/// plumbing that touches the filesystem does.
#[derive(Error, Debug)]
pub enum GenAiError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] postcard::Error),

	#[error("Invalid vector entry at line {line}: {reason}")]
	InvalidVectorLine { line: usize, reason: String },

	#[error("Vector dimension mismatch at line {line}: expected {expected}, found {found}")]
	DimensionMismatch { line: usize, expected: usize, found: usize },

	#[error("Vector file contains no entries")]
	EmptyVectors,
}
