//! Store-free endpoints: counters, fixed analytics payloads and echo acknowledgements.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::state::{AppState, DEFAULT_LANGUAGE};

#[derive(Debug, Serialize)]
pub struct Metrics {
    pub campaigns: usize,
    pub users: usize,
}

#[derive(Debug, Serialize)]
pub struct MarketAnalytics {
    pub labels: [&'static str; 3],
    pub values: [u32; 3],
}

#[utoipa::path(get, path = "/api/metrics", tag = "analytics", responses((status = 200, description = "Record counts")))]
pub async fn metrics(State(state): State<AppState>) -> Json<Metrics> {
    Json(Metrics {
        campaigns: state.stores.campaigns.len().await,
        users: state.stores.users.len().await,
    })
}

pub async fn market_analytics() -> Json<MarketAnalytics> {
    Json(MarketAnalytics { labels: ["Americas", "Europe", "Asia"], values: [120, 95, 110] })
}

/// Positive, neutral, negative.
pub async fn sentiment_analytics() -> Json<[u32; 3]> {
    Json([60, 25, 15])
}

pub async fn ab_test() -> Json<Value> {
    Json(json!({"summary": "A/B Test complete. Variant A: 52%, Variant B: 48%"}))
}

pub async fn legal() -> Json<Value> {
    Json(json!({
        "notice": "© 2024 Ken's Digital Hub. All rights reserved. EngageSphere is protected by copyright, trademark, and patent law."
    }))
}

pub async fn live_session(Path(platform): Path<String>) -> Json<Value> {
    info!(%platform, "simulated live session");
    Json(json!({"status": format!("Started {platform} session (simulated)")}))
}

/// Acknowledge an engagement event; the payload is not retained.
pub async fn log_engagement(Json(data): Json<Value>) -> Json<Value> {
    Json(json!({"status": "success", "data": data}))
}

pub async fn update_profile(Json(data): Json<Value>) -> Json<Value> {
    Json(json!({"status": "success", "data": data}))
}

pub async fn set_language(State(state): State<AppState>, Json(data): Json<Value>) -> Json<Value> {
    let lang = data.get("lang").and_then(Value::as_str).unwrap_or(DEFAULT_LANGUAGE).to_string();
    info!(%lang, "language preference set");
    *state.language.write().await = lang;
    Json(json!({"status": "success"}))
}

pub async fn get_language(State(state): State<AppState>) -> Json<Value> {
    let lang = state.language.read().await.clone();
    Json(json!({"lang": lang}))
}
