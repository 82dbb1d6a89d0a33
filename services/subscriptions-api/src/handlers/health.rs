//! Liveness and readiness probes

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub version: &'static str,
}

/// Pool snapshot reported by the readiness probe
#[derive(Debug, Serialize)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: usize,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub pool: PoolStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_ms: Option<u64>,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /ready
///
/// Ready only while the subscription store answers a trivial query.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let started = Instant::now();
    let ping = sqlx::query("SELECT 1").execute(&state.pool).await;

    let pool = PoolStatus {
        size: state.pool.size(),
        idle: state.pool.num_idle(),
    };

    match ping {
        Ok(_) => {
            let ping_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            (
                StatusCode::OK,
                Json(ReadyResponse {
                    ready: true,
                    pool,
                    ping_ms: Some(ping_ms),
                }),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "Readiness ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    ready: false,
                    pool,
                    ping_ms: None,
                }),
            )
        }
    }
}
