use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::GenAiError;
use crate::io::{cache_path, read_lines};

/// Embedding returned for a lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct Embedding {
	/// Vector components, `dim()` long.
	pub vector: Vec<f32>,
	/// Whether `vector` was scaled to unit length.
	pub normalized: bool,
}

impl Embedding {
	/// Number of components.
	pub fn dim(&self) -> usize {
		self.vector.len()
	}
}

/// Pretrained word vectors of a single fixed dimension.
///
/// # Responsibilities
/// - Parse GloVe / word2vec text files (`word v1 v2 ... vD` per line)
/// - Cache the parsed table next to the source file with `postcard`
/// - Embed a word or short phrase, optionally normalized
///
/// # Invariants
/// - `dim >= 1` and every vector has exactly `dim` components
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WordVectors {
	dim: usize,
	vectors: HashMap<String, Vec<f32>>,
}

impl WordVectors {
	/// Loads word vectors from a text file, using a binary cache when present.
	///
	/// - `filepath` is the text vector file.
	/// - If `<file name>.bin` exists next to it, that cache is loaded instead
	///   of parsing the text.
	/// - Otherwise the text is parsed and the cache is written for next time.
	///
	/// # Errors
	/// Returns an error if the file cannot be read or is malformed.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self, GenAiError> {
		let binary_data_path = cache_path(&filepath, "bin")?;
		if binary_data_path.exists() {
			let bytes = std::fs::read(&binary_data_path)?;
			let vectors: Self = postcard::from_bytes(&bytes)?;
			info!(
				"Loaded {} word vectors (dim {}) from cache {}",
				vectors.len(),
				vectors.dim,
				binary_data_path.display()
			);
			return Ok(vectors);
		}

		let vectors = Self::parse(read_lines(&filepath)?)?;
		info!(
			"Loaded {} word vectors (dim {}) from {}",
			vectors.len(),
			vectors.dim,
			filepath.as_ref().display()
		);

		// A read-only data directory only costs the cache.
		let bytes = postcard::to_stdvec(&vectors)?;
		if let Err(e) = std::fs::write(&binary_data_path, bytes) {
			warn!("Could not write vector cache {}: {e}", binary_data_path.display());
		}

		Ok(vectors)
	}

	/// Parses vector lines in GloVe / word2vec text format.
	///
	/// # Behavior
	/// - Blank lines are skipped.
	/// - A first line made of exactly two integers (word2vec `count dim`
	///   header) is skipped.
	/// - The dimension is taken from the first entry.
	///
	/// # Errors
	/// - `InvalidVectorLine` for an entry without components or with a
	///   non-numeric component
	/// - `DimensionMismatch` when an entry's length differs from the first
	/// - `EmptyVectors` when nothing was parsed
	pub fn parse<I, S>(lines: I) -> Result<Self, GenAiError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut dim = 0;
		let mut vectors = HashMap::new();

		for (index, line) in lines.into_iter().enumerate() {
			let line_number = index + 1;
			let mut fields = line.as_ref().split_whitespace();
			let word = match fields.next() {
				Some(word) => word,
				None => continue,
			};
			let rest: Vec<&str> = fields.collect();

			if index == 0 && rest.len() == 1 && is_header(word, rest[0]) {
				continue;
			}
			if rest.is_empty() {
				return Err(GenAiError::InvalidVectorLine {
					line: line_number,
					reason: format!("no components for '{word}'"),
				});
			}

			let vector = rest
				.iter()
				.map(|field| field.parse::<f32>())
				.collect::<Result<Vec<f32>, _>>()
				.map_err(|e| GenAiError::InvalidVectorLine {
					line: line_number,
					reason: e.to_string(),
				})?;

			if dim == 0 {
				dim = vector.len();
			} else if vector.len() != dim {
				return Err(GenAiError::DimensionMismatch {
					line: line_number,
					expected: dim,
					found: vector.len(),
				});
			}

			vectors.insert(word.to_owned(), vector);
		}

		if vectors.is_empty() {
			return Err(GenAiError::EmptyVectors);
		}

		Ok(Self { dim, vectors })
	}

	/// Vector dimension.
	pub fn dim(&self) -> usize {
		self.dim
	}

	/// Number of words in the table.
	pub fn len(&self) -> usize {
		self.vectors.len()
	}

	/// Returns `true` if the table has no words.
	pub fn is_empty(&self) -> bool {
		self.vectors.is_empty()
	}

	/// Looks up a word as given, then lowercased.
	pub fn get(&self, word: &str) -> Option<&[f32]> {
		self.vectors
			.get(word)
			.or_else(|| self.vectors.get(&word.to_lowercase()))
			.map(Vec::as_slice)
	}

	/// Embeds a word or a short phrase.
	///
	/// # Behavior
	/// - Text is split on whitespace, then leading and trailing ASCII
	///   punctuation is split off one character per token (`"hello!"` is
	///   `hello` and `!`). Inner punctuation such as `don't` is kept.
	/// - One token: that token's vector.
	/// - Several tokens: element-wise mean of the token vectors.
	/// - Unknown tokens contribute a zero vector.
	/// - `normalize` scales the result to unit length; a zero vector stays zero.
	pub fn embed(&self, text: &str, normalize: bool) -> Embedding {
		let mut vector = vec![0.0_f32; self.dim];
		let mut count = 0;

		for token in split_tokens(text) {
			count += 1;
			if let Some(v) = self.get(token) {
				for (acc, value) in vector.iter_mut().zip(v) {
					*acc += value;
				}
			}
		}

		if count > 1 {
			let n = count as f32;
			for value in vector.iter_mut() {
				*value /= n;
			}
		}

		if normalize {
			normalize_vector(&mut vector);
		}

		Embedding { vector, normalized: normalize }
	}
}

/// Whitespace chunks with edge punctuation split off, one character per token.
///
/// `"(hello!)"` → `["(", "hello", "!", ")"]`
fn split_tokens(text: &str) -> Vec<&str> {
	let is_punctuation = |c: char| c.is_ascii_punctuation();
	let mut tokens = Vec::new();

	for chunk in text.split_whitespace() {
		let core_start = chunk.len() - chunk.trim_start_matches(is_punctuation).len();
		let core_end = chunk.trim_end_matches(is_punctuation).len().max(core_start);

		// Edge characters are ASCII, so byte slicing stays on char boundaries.
		tokens.extend((0..core_start).map(|i| &chunk[i..i + 1]));
		if core_end > core_start {
			tokens.push(&chunk[core_start..core_end]);
		}
		tokens.extend((core_end..chunk.len()).map(|i| &chunk[i..i + 1]));
	}

	tokens
}

/// word2vec header: `<count> <dim>`
fn is_header(first: &str, second: &str) -> bool {
	first.parse::<usize>().is_ok() && second.parse::<usize>().is_ok()
}

fn normalize_vector(vector: &mut [f32]) {
	let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
	let norm = if norm > 0.0 { norm } else { 1.0 };
	for value in vector.iter_mut() {
		*value /= norm;
	}
}
