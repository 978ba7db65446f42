use std::path::PathBuf;

use clap::Parser;

/// Server configuration, from command-line flags or environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "sps-genai-server")]
#[command(version)]
#[command(about = "Bigram text generation and word embeddings API")]
pub struct Config {
	/// Address to bind
	#[arg(long, env = "SPS_GENAI_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to bind
	#[arg(long, env = "SPS_GENAI_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Corpus file, one document per line (default: built-in corpus)
	#[arg(long, env = "SPS_GENAI_CORPUS")]
	pub corpus: Option<PathBuf>,

	/// Pretrained word vectors in GloVe / word2vec text format
	#[arg(long, env = "SPS_GENAI_VECTORS", default_value = "./data/vectors.txt")]
	pub vectors: PathBuf,

	/// Fixed seed for reproducible generation (default: thread RNG)
	#[arg(long, env = "SPS_GENAI_SEED")]
	pub seed: Option<u64>,

	/// Largest `length` accepted by `/generate`
	#[arg(long, env = "SPS_GENAI_MAX_LENGTH", default_value_t = 10_000)]
	pub max_length: i64,
}
