mod config;
mod errors;
mod extraction;
mod matching;
mod routes;
mod state;
mod storage;
mod uploads;

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::extractor::PdfTextExtractor;
use crate::matching::skills::DEFAULT_SKILLS;
use crate::matching::vocabulary::CompiledVocabulary;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::S3DocumentStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillScan API v{}", env!("CARGO_PKG_VERSION"));

    // Compile the skill vocabulary once; read-only for the process lifetime.
    let vocabulary = Arc::new(load_vocabulary(&config)?);
    info!(
        "compiled {} skill phrases (longest: {} tokens)",
        vocabulary.len(),
        vocabulary.max_phrase_tokens()
    );
    if vocabulary.is_empty() {
        warn!("skill vocabulary is empty, no skills will ever match");
    }

    // Initialize S3 / MinIO
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    let store = Arc::new(S3DocumentStore::new(
        s3,
        config.s3_bucket.clone(),
        config.s3_endpoint.clone(),
        Duration::from_secs(config.storage_timeout_secs),
    ));

    // Build app state
    let state = AppState {
        vocabulary,
        store,
        extractor: Arc::new(PdfTextExtractor),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // mobile client posts from a different origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Loads the skill vocabulary from `SKILLS_FILE` when configured, otherwise
/// uses the built-in list.
fn load_vocabulary(config: &Config) -> Result<CompiledVocabulary> {
    match &config.skills_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read skills file '{path}'"))?;
            let phrases: Vec<&str> = raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            Ok(CompiledVocabulary::compile(phrases))
        }
        None => Ok(CompiledVocabulary::compile(DEFAULT_SKILLS.iter().copied())),
    }
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "skillscan-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
