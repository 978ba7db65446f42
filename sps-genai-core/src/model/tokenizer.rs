use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of ASCII letters. Input is lowercased before matching.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new("[a-z]+").expect("Invalid word regex"));

/// Splits a document into lowercase alphabetic tokens.
///
/// Everything that is not an ASCII letter (digits, punctuation, whitespace,
/// accented letters) is dropped; it does not join or split neighbouring
/// letters differently from a plain separator.
///
/// Example: `"Bigram Models 2024!"` → `["bigram", "models"]`
pub fn tokenize(document: &str) -> Vec<String> {
	let lowered = document.to_lowercase();
	WORD.find_iter(&lowered).map(|m| m.as_str().to_owned()).collect()
}

/// Tokenizes every document and concatenates the results in corpus order.
pub fn tokenize_corpus<I, S>(corpus: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	corpus
		.into_iter()
		.flat_map(|document| tokenize(document.as_ref()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn drops_digits_and_folds_case() {
		assert_eq!(tokenize("Bigram Models 2024!"), vec!["bigram", "models"]);
	}

	#[test]
	fn punctuation_splits_words() {
		assert_eq!(tokenize("don't stop-now"), vec!["don", "t", "stop", "now"]);
	}

	#[test]
	fn non_ascii_letters_are_discarded() {
		// "Dantès" loses the accented letter, leaving two runs.
		assert_eq!(tokenize("Edmond Dantès"), vec!["edmond", "dant", "s"]);
	}

	#[test]
	fn tokens_are_lowercase_alphabetic() {
		let tokens = tokenize_corpus(["Hello, WORLD 42", "x_y-z ... Ünïcode", "  "]);
		assert!(!tokens.is_empty());
		for token in &tokens {
			assert!(!token.is_empty());
			assert!(token.chars().all(|c| c.is_ascii_lowercase()), "bad token {token:?}");
		}
	}

	#[test]
	fn corpus_order_is_preserved() {
		let tokens = tokenize_corpus(vec!["one two".to_owned(), "three".to_owned()]);
		assert_eq!(tokens, vec!["one", "two", "three"]);
	}

	#[test]
	fn empty_corpus_has_no_tokens() {
		let corpus: Vec<&str> = Vec::new();
		assert!(tokenize_corpus(corpus).is_empty());
		assert!(tokenize("123 !!! ...").is_empty());
	}
}
