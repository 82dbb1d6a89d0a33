//! Subscriptions API
//!
//! REST service for recording users' paid subscriptions and totalling their
//! cost over a date window.
//!
//! ## REST Endpoints
//!
//! - `POST /api/v1/subscriptions` - Create a subscription
//! - `PUT /api/v1/subscriptions` - Replace a subscription (id in body)
//! - `GET /api/v1/subscriptions/sum` - Total price over a window
//! - `GET /api/v1/subscriptions/{id}` - Get a subscription
//! - `PUT /api/v1/subscriptions/{id}` - Replace a subscription
//! - `DELETE /api/v1/subscriptions/{id}` - Delete a subscription
//! - `GET /api/v1/users/{user_id}/subscriptions` - List a user's subscriptions
//!
//! ## Health Endpoints
//!
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{health, ready};

pub use crate::config::{Config, ConfigError, LogFormat};
pub use crate::state::AppState;

/// Build the HTTP router with the full middleware stack
pub fn build_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let request_timeout = state.request_timeout();

    let api_v1 = Router::new()
        .route(
            "/subscriptions",
            post(handlers::create_subscription).put(handlers::update_subscription_from_body),
        )
        .route("/subscriptions/sum", get(handlers::sum_subscriptions))
        .route(
            "/subscriptions/{id}",
            get(handlers::get_subscription)
                .put(handlers::update_subscription)
                .delete(handlers::delete_subscription),
        )
        .route(
            "/users/{user_id}/subscriptions",
            get(handlers::list_user_subscriptions),
        );

    // Health routes (no timeout - must always respond quickly)
    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    let metrics_route = match metrics_handle {
        Some(handle) => {
            Router::new().route("/metrics", get(move || async move { handle.render() }))
        }
        None => Router::new(),
    };

    // Outermost first
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .nest("/api/v1", api_v1)
        .layer(middleware)
        .merge(health_routes)
        .merge(metrics_route)
        .with_state(state)
}
