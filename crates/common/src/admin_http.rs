//! Lightweight admin HTTP server
//!
//! Exposes `/healthz` and `/metrics` endpoints, with metrics provided by caller.

use axum::http::StatusCode;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Metrics renderer supplied by the caller: Prometheus text or an error message.
pub type MetricsFn = fn() -> Result<String, String>;

async fn healthz() -> &'static str { "OK" }

async fn metrics_handler(f: MetricsFn) -> (StatusCode, String) {
    match f() {
        Ok(body) => (StatusCode::OK, body),
        Err(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
    }
}

pub fn admin_router(metrics_fn: MetricsFn) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(move || metrics_handler(metrics_fn)))
}

/// Bind `addr` and serve the admin router on a background task.
pub async fn spawn_admin_server(addr: &str, metrics_fn: MetricsFn) -> anyhow::Result<JoinHandle<()>> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("cannot bind admin listener {addr}: {e}"))?;
    let local = listener.local_addr()?;
    info!(addr = %local, "admin server listening");
    let router = admin_router(metrics_fn);
    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!(error = %e, "admin server stopped");
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_metrics() -> Result<String, String> { Ok("demo_metric 1\n".to_string()) }

    #[tokio::test]
    async fn serves_healthz_and_metrics() -> anyhow::Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, admin_router(fixed_metrics)).await;
        });

        let health = reqwest::get(format!("http://{addr}/healthz")).await?;
        assert_eq!(health.status(), reqwest::StatusCode::OK);
        assert_eq!(health.text().await?, "OK");

        let metrics = reqwest::get(format!("http://{addr}/metrics")).await?.text().await?;
        assert!(metrics.contains("demo_metric 1"));
        Ok(())
    }
}
