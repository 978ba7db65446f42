use std::collections::HashMap;

use log::debug;

use super::random_source::RandomSource;
use super::state::State;
use super::tokenizer::tokenize_corpus;

/// Word-level bigram (order-1 Markov) model.
///
/// The `BigramModel` maps every word of its corpus to the distribution of
/// words observed immediately after it, and generates text by walking that
/// chain with weighted random sampling.
///
/// # Responsibilities
/// - Tokenize a corpus into a flat stream of lowercase words
/// - Accumulate adjacent-pair transition counts
/// - Sample successors proportionally to their counts
/// - Generate text from a start word up to a requested length
///
/// # Invariants
/// - Keys are exactly the words that appear as the first element of an adjacent pair
/// - Every state has at least one transition, and every count is >= 1
/// - The model is never mutated after construction, so it can be shared
///   between threads without locking
#[derive(Clone, Debug, Default)]
pub struct BigramModel {
	/// Mapping from a word to its successor distribution
	states: HashMap<String, State>,

	/// Number of tokens in the stream the model was built from
	token_count: usize,
}

impl BigramModel {
	/// Builds a model from an ordered corpus of documents.
	///
	/// Documents are tokenized and concatenated in order, so the last word of
	/// one document is followed by the first word of the next.
	///
	/// # Notes
	/// - Never fails. A corpus with fewer than two tokens yields an empty table.
	pub fn new<I, S>(corpus: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let tokens = tokenize_corpus(corpus);

		let mut states: HashMap<String, State> = HashMap::new();
		for pair in tokens.windows(2) {
			states.entry(pair[0].clone()).or_default().add_transition(&pair[1]);
		}

		debug!("Bigram model built: {} tokens, {} keys", tokens.len(), states.len());

		Self { states, token_count: tokens.len() }
	}

	/// Number of words having at least one successor.
	pub fn vocabulary_size(&self) -> usize {
		self.states.len()
	}

	/// Number of tokens in the corpus stream the model was built from.
	pub fn token_count(&self) -> usize {
		self.token_count
	}

	/// Returns `true` if no word has a successor.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns the successor distribution of `word` in first-seen order.
	///
	/// `word` must already be lowercase. Returns `None` if the word never
	/// appears as the first element of an adjacent pair.
	pub fn successors(&self, word: &str) -> Option<impl Iterator<Item = (&str, usize)>> {
		self.states.get(word).map(State::transitions)
	}

	/// Samples a successor of `word`, weighted by observed frequency.
	///
	/// `word` must already be lowercase. Returns `None` if the word has no
	/// recorded successor.
	pub fn sample_next<R: RandomSource + ?Sized>(&self, word: &str, rng: &mut R) -> Option<&str> {
		self.states.get(word)?.predict(rng)
	}

	/// Generates text starting at `start_word` using the thread-local RNG.
	///
	/// See [`BigramModel::generate_text_with`].
	pub fn generate_text(&self, start_word: &str, length: i64) -> String {
		self.generate_text_with(start_word, length, &mut rand::rng())
	}

	/// Generates up to `length` space-separated words starting at `start_word`.
	///
	/// # Behavior
	/// - `start_word` is lowercased and always emitted first.
	/// - `length <= 0` returns the lowercased start word alone.
	/// - Otherwise, successors are sampled one at a time from the last
	///   emitted word until `length` words are produced or a word without
	///   successor is reached.
	///
	/// # Notes
	/// - Never fails; an unknown start word simply yields a single word.
	/// - Identical draws from `rng` yield identical output.
	pub fn generate_text_with<R: RandomSource + ?Sized>(
		&self,
		start_word: &str,
		length: i64,
		rng: &mut R,
	) -> String {
		let start = start_word.to_lowercase();
		if length <= 0 {
			return start;
		}

		let mut output: Vec<&str> = vec![start.as_str()];
		let mut current: &str = start.as_str();
		for _ in 1..length {
			match self.sample_next(current, rng) {
				Some(next_word) => {
					output.push(next_word);
					current = next_word;
				}
				None => break,
			}
		}

		output.join(" ")
	}
}
