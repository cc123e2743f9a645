// HTTP request handlers for API endpoints

use actix_web::{web, HttpResponse, Result};
use std::time::SystemTime;

use crate::api::models::*;
use crate::reviews::query::{ReviewQuery, SortBy};
use crate::reviews::ReviewService;

/// Health check endpoint
pub async fn health_check(service: web::Data<ReviewService>) -> Result<HttpResponse> {
    let uptime = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        reviews_loaded: service.review_count(),
        uptime_seconds: uptime,
    }))
}

/// List canonical reviews, optionally filtered and sorted
pub async fn get_reviews(
    params: web::Query<ReviewListParams>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    tracing::info!(
        property = %params.property,
        sort = %params.sort,
        rating = %params.rating,
        "review listing requested"
    );

    let query = ReviewQuery {
        property: params.property.clone(),
        sort: SortBy::from_param(&params.sort),
        min_rating: params.rating.clone(),
    };

    let reviews = service.list_reviews(&query);
    Ok(HttpResponse::Ok().json(ReviewsResponse { reviews }))
}

/// Toggle the approval flag on a review
pub async fn approve_review(
    path: web::Path<String>,
    payload: web::Json<ApproveRequest>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    let review_id = path.into_inner();

    tracing::info!(
        review_id = %review_id,
        approved = payload.is_approved,
        "approval update requested"
    );

    // An unknown id is a no-op; the response reports success either way so
    // the dashboard's optimistic toggle never sees an error.
    service.set_approval(&review_id, payload.is_approved);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Review updated".to_string(),
    }))
}

/// Per-property aggregates over the current store contents
pub async fn get_properties(service: web::Data<ReviewService>) -> Result<HttpResponse> {
    let properties = service.list_properties();
    Ok(HttpResponse::Ok().json(PropertiesResponse { properties }))
}
