use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use sps_genai_core::corpus::{default_corpus, read_corpus};
use sps_genai_core::embedding::word_vectors::WordVectors;
use sps_genai_core::model::bigram_model::BigramModel;
use sps_genai_core::GenAiError;

mod config;

use config::Config;

/// Body of `POST /generate`
#[derive(Deserialize)]
struct GenerateRequest {
	start_word: String,
	length: i64,
}

#[derive(Serialize)]
struct GenerateResponse {
	generated_text: String,
}

/// Body of `POST /embed`
#[derive(Deserialize)]
struct EmbedRequest {
	word: String,
	normalize: Option<bool>, // unit vector if true
}

#[derive(Serialize)]
struct EmbedResponse {
	word: String,
	dim: usize,
	vector: Vec<f32>,
	normalized: bool,
}

#[derive(Serialize)]
struct RootResponse {
	#[serde(rename = "Hello")]
	hello: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
	detail: &'a str,
}

/// State shared by every worker.
///
/// Model and vectors are read-only after startup. Only the seeded RNG,
/// when configured, needs a lock.
struct SharedData {
	model: BigramModel,
	vectors: WordVectors,
	seeded_rng: Option<Mutex<StdRng>>,
	max_length: i64,
}

impl SharedData {
	/// Builds the model and loads the vectors named by `config`.
	fn load(config: &Config) -> Result<Self, GenAiError> {
		let corpus = match &config.corpus {
			Some(path) => read_corpus(path)?,
			None => default_corpus(),
		};
		let model = BigramModel::new(&corpus);
		info!(
			"Bigram model ready: {} documents, {} tokens, {} keys",
			corpus.len(),
			model.token_count(),
			model.vocabulary_size()
		);

		let vectors = WordVectors::new(&config.vectors)?;

		Ok(Self {
			model,
			vectors,
			seeded_rng: config.seed.map(|seed| Mutex::new(StdRng::seed_from_u64(seed))),
			max_length: config.max_length,
		})
	}
}

fn bad_request(detail: &str) -> HttpResponse {
	HttpResponse::BadRequest().json(ErrorResponse { detail })
}

#[get("/")]
async fn get_root() -> impl Responder {
	HttpResponse::Ok().json(RootResponse { hello: "World" })
}

/// HTTP POST endpoint `/generate`
///
/// Generates up to `length` words from the bigram model, starting at
/// `start_word`. The start word is trimmed before use.
#[post("/generate")]
async fn post_generate(data: web::Data<SharedData>, request: web::Json<GenerateRequest>) -> impl Responder {
	let start = request.start_word.trim();
	if start.is_empty() {
		return bad_request("start_word must be non-empty");
	}
	if request.length < 0 {
		return bad_request("length must be >= 0");
	}
	if request.length > data.max_length {
		return bad_request(&format!("length must be <= {}", data.max_length));
	}

	let generated_text = match &data.seeded_rng {
		Some(rng) => match rng.lock() {
			Ok(mut rng) => data.model.generate_text_with(start, request.length, &mut *rng),
			Err(_) => {
				return HttpResponse::InternalServerError().json(ErrorResponse { detail: "Random source lock failed" });
			}
		},
		None => data.model.generate_text(start, request.length),
	};

	HttpResponse::Ok().json(GenerateResponse { generated_text })
}

/// HTTP POST endpoint `/embed`
///
/// Returns the pretrained vector of `word`, optionally normalized.
#[post("/embed")]
async fn post_embed(data: web::Data<SharedData>, request: web::Json<EmbedRequest>) -> impl Responder {
	let word = request.word.trim();
	if word.is_empty() {
		return bad_request("word must be non-empty");
	}

	let embedding = data.vectors.embed(word, request.normalize.unwrap_or(false));

	HttpResponse::Ok().json(EmbedResponse {
		word: word.to_owned(),
		dim: embedding.dim(),
		vector: embedding.vector,
		normalized: embedding.normalized,
	})
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_root)
		.service(post_generate)
		.service(post_embed);
}

/// Main entry point for the server.
///
/// Builds the bigram model and loads the word vectors once, then shares
/// them read-only with every actix worker.
///
/// # Notes
/// - Binds to `--host`/`--port` (127.0.0.1:5000 by default).
/// - Refuses to start if the word vectors cannot be loaded.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::parse();
	let shared_data = match SharedData::load(&config) {
		Ok(data) => web::Data::new(data),
		Err(e) => {
			error!("Startup failed (vectors: {}): {e}", config.vectors.display());
			return Err(std::io::Error::other(e));
		}
	};

	info!("Listening on {}:{}", config.host, config.port);

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
