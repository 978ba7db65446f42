use std::path::Path;

use crate::error::GenAiError;
use crate::io::read_lines;

/// Sentences the service is trained on when no corpus file is configured.
const DEFAULT_CORPUS: [&str; 4] = [
	"The Count of Monte Cristo is a novel written by Alexandre Dumas. \
	It tells the story of Edmond Dantès, who is falsely imprisoned and later seeks revenge.",
	"this is another example sentence",
	"we are generating text based on bigram probabilities",
	"bigram models are simple but effective",
];

/// Returns the built-in training corpus, one document per entry.
pub fn default_corpus() -> Vec<String> {
	DEFAULT_CORPUS.iter().map(|s| (*s).to_owned()).collect()
}

/// Reads a corpus file, one document per line.
pub fn read_corpus<P: AsRef<Path>>(filepath: P) -> Result<Vec<String>, GenAiError> {
	Ok(read_lines(filepath)?)
}
