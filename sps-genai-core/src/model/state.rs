use super::random_source::RandomSource;

/// Successor distribution of a single word.
///
/// A `State` is a node of the word-level Markov chain: it stores every word
/// observed immediately after its owner, with the number of observations.
///
/// ## Invariants
/// - Transitions are kept in first-seen order
/// - Each transition occurrence count is strictly positive
/// - A word appears at most once
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
	/// Outgoing transitions as `(next_word, occurrence)`.
	/// Example: [("models", 2), ("probabilities", 1)]
	transitions: Vec<(String, usize)>,
}

impl State {
	/// Records an occurrence of a transition toward `next_word`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, it is appended with an initial count of 1.
	pub(crate) fn add_transition(&mut self, next_word: &str) {
		match self.transitions.iter_mut().find(|(word, _)| word == next_word) {
			Some((_, occurrence)) => *occurrence += 1,
			None => self.transitions.push((next_word.to_owned(), 1)),
		}
	}

	/// Sum of all occurrence counts.
	pub(crate) fn total(&self) -> usize {
		self.transitions.iter().map(|(_, occurrence)| occurrence).sum()
	}

	/// Iterates transitions in first-seen order.
	pub(crate) fn transitions(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions.iter().map(|(word, occurrence)| (word.as_str(), *occurrence))
	}

	/// Predicts the next word using weighted random sampling.
	///
	/// Draws `r` in `1..=total` and returns the first word whose cumulative
	/// count reaches `r`, so a word seen `c` times is chosen with
	/// probability `c / total`.
	///
	/// Returns `None` if the state has no transitions.
	pub(crate) fn predict<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let r = rng.uniform_inclusive(total);

		let mut cumulative = 0;
		for (next_word, occurrence) in &self.transitions {
			cumulative += occurrence;
			if r <= cumulative {
				return Some(next_word.as_str());
			}
		}

		// Only reachable if the draw exceeds `total`.
		self.transitions.first().map(|(word, _)| word.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Replays a fixed sequence of draws.
	struct Draws(Vec<usize>);

	impl RandomSource for Draws {
		fn uniform_inclusive(&mut self, total: usize) -> usize {
			let r = self.0.remove(0);
			assert!((1..=total).contains(&r));
			r
		}
	}

	fn state(words: &[&str]) -> State {
		let mut state = State::default();
		for word in words {
			state.add_transition(word);
		}
		state
	}

	#[test]
	fn counts_keep_first_seen_order() {
		let state = state(&["b", "c", "b"]);
		let transitions: Vec<_> = state.transitions().collect();
		assert_eq!(transitions, vec![("b", 2), ("c", 1)]);
		assert_eq!(state.total(), 3);
	}

	#[test]
	fn empty_state_predicts_nothing() {
		assert_eq!(State::default().predict(&mut rand::rng()), None);
	}

	#[test]
	fn cumulative_walk_selects_bucket() {
		// b covers draws 1..=2, c covers draw 3
		let state = state(&["b", "c", "b"]);
		let mut draws = Draws(vec![1, 2, 3]);
		assert_eq!(state.predict(&mut draws), Some("b"));
		assert_eq!(state.predict(&mut draws), Some("b"));
		assert_eq!(state.predict(&mut draws), Some("c"));
	}

	#[test]
	fn predictions_come_from_the_distribution() {
		let state = state(&["x", "y", "y", "z"]);
		let mut rng = rand::rng();
		for _ in 0..200 {
			let word = state.predict(&mut rng).unwrap();
			assert!(["x", "y", "z"].contains(&word));
		}
	}
}
