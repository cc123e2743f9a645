// API route configuration

use actix_web::web;

use crate::api::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(handlers::health_check))
        .route("/", web::get().to(handlers::health_check))
        // Review dashboard API
        .service(
            web::scope("/api")
                .route(
                    "/reviews/hostaway",
                    web::get().to(handlers::get_reviews),
                )
                .route(
                    "/reviews/{id}/approve",
                    web::patch().to(handlers::approve_review),
                )
                .route("/properties", web::get().to(handlers::get_properties)),
        );
}
