use rand::SeedableRng;
use rand::rngs::StdRng;

use sps_genai_core::corpus::default_corpus;
use sps_genai_core::embedding::word_vectors::WordVectors;
use sps_genai_core::model::bigram_model::BigramModel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    // Build the model from the built-in corpus
    let model = BigramModel::new(default_corpus());

    // Words seen after "bigram", in first-seen order
    if let Some(successors) = model.successors("bigram") {
        for (word, count) in successors {
            println!("bigram -> {}: {}", word, count);
        }
    }

    // Thread RNG: different output on every run
    for i in 0..5 {
        println!("Generated text {}: {}", i + 1, model.generate_text("The", 10));
    }

    // Seeded RNG: same output on every run
    let mut rng = StdRng::seed_from_u64(42);
    println!("Seeded: {}", model.generate_text_with("we", 8, &mut rng));

    // Unknown start word and zero length both return the start word alone
    println!("Unknown start word: {}", model.generate_text("Zebra", 5));
    println!("Zero length: {}", model.generate_text("Bigram", 0));

    // Optional: embed words with a GloVe / word2vec text file given as first argument
    // A .bin cache is written next to it on first load
    if let Some(path) = std::env::args().nth(1) {
        let vectors = WordVectors::new(&path)?;
        for word in ["king", "queen", "king queen"] {
            let embedding = vectors.embed(word, true);
            println!("{} ({} dims): {:?}", word, embedding.dim(), &embedding.vector[..embedding.dim().min(5)]);
        }
    }

    Ok(())
}
