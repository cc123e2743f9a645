// HTTP API server binary for flex-reviews
// Normalizes Hostaway review records and serves them to the dashboard

use anyhow::Result;
use flex_reviews::api::ApiServer;
use flex_reviews::reviews::ReviewService;
use flex_reviews::util::env as env_util;

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging
    flex_reviews::tracing::init_tracing("info")?;

    tracing::info!("Initializing flex-reviews API server");

    // Load dotenv/env once (safe to call multiple times)
    env_util::init_env();

    // Load configuration from environment
    let server = ApiServer::from_env()?;

    // Normalize and load the seed reviews into the in-memory store
    let service = ReviewService::with_seed_data();

    // Start HTTP server
    server.run(service).await?;

    Ok(())
}
