// API server implementation using actix-web

use std::env;

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};

use crate::api::{middleware, routes};
use crate::reviews::ReviewService;

pub struct ApiServer {
    pub host: String,
    pub port: u16,
    pub allowed_origins: String,
}

impl ApiServer {
    /// Create server from environment variables
    pub fn from_env() -> Result<Self> {
        crate::util::env::init_env();

        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("Invalid API_PORT")?;

        let allowed_origins = crate::util::env::env_opt("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }

    /// Start the HTTP server
    pub async fn run(self, service: ReviewService) -> Result<()> {
        let bind_addr = format!("{}:{}", self.host, self.port);

        tracing::info!(
            host = %self.host,
            port = %self.port,
            reviews = service.review_count(),
            "Starting flex-reviews API server"
        );

        let service_data = web::Data::new(service);
        let allowed_origins = self.allowed_origins.clone();

        HttpServer::new(move || {
            let (logger, compress) = middleware::setup_middleware();
            let cors = middleware::setup_cors(&allowed_origins);

            App::new()
                .app_data(service_data.clone())
                .wrap(logger)
                .wrap(compress)
                .wrap(cors)
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)
        .with_context(|| format!("Failed to bind to {}", bind_addr))?
        .run()
        .await
        .context("HTTP server error")?;

        Ok(())
    }
}
