pub mod analytics;
pub mod resources;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::openapi;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `/api/*` routes backed by the resource stores, plus the store-free endpoints
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(resources::list_users).post(resources::create_user))
        .route("/api/campaigns", get(resources::list_campaigns).post(resources::create_campaign))
        .route("/api/forum", get(resources::list_forum).post(resources::create_forum_post))
        .route("/api/talent", get(resources::list_talent).post(resources::create_talent))
        .route("/api/feedback", get(resources::list_feedback).post(resources::create_feedback))
        .route("/api/metrics", get(analytics::metrics))
        .route("/api/engagement", post(analytics::log_engagement))
        .route("/api/profile", post(analytics::update_profile))
        .route("/api/market-analytics", get(analytics::market_analytics))
        .route("/api/sentiment-analytics", get(analytics::sentiment_analytics))
        .route("/api/live/:platform", get(analytics::live_session))
        .route("/api/abtest", get(analytics::ab_test))
        .route("/api/legal", get(analytics::legal))
        .route("/api/language", get(analytics::get_language).post(analytics::set_language))
}

/// Build the full application router; anything unmatched falls through to the static frontend.
pub fn build_router(state: AppState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let index = format!("{}/index.html", frontend_dir.trim_end_matches('/'));
    let static_dir = ServeDir::new(frontend_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .merge(api_routes())
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
