//! Subscription handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use subtrack_types::{Subscription, SubscriptionDraft, SubscriptionId};

use super::shared::{parse_subscription_id, parse_user_id, record_op_duration};
use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: SubscriptionId,
}

/// Update payload carrying the identity in the body
#[derive(Debug, Deserialize)]
pub struct UpdateSubscriptionRequest {
    pub id: String,
    #[serde(flatten)]
    pub draft: SubscriptionDraft,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/subscriptions
pub async fn create_subscription(
    State(state): State<AppState>,
    payload: Result<Json<SubscriptionDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let start = Instant::now();
    let Json(draft) = payload?;

    let result = state.subscriptions.create(&draft).await;
    record_op_duration("create", start, result.is_ok());
    let id = result?;

    metrics::counter!("subscriptions_created_total").increment(1);

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/v1/subscriptions/{id}
pub async fn get_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Subscription>> {
    let start = Instant::now();
    let id = parse_subscription_id(&id)?;

    let result = state.subscriptions.read(id).await;
    record_op_duration("read", start, result.is_ok());

    Ok(Json(result?))
}

/// GET /api/v1/users/{user_id}/subscriptions
pub async fn list_user_subscriptions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Subscription>>> {
    let start = Instant::now();
    let user_id = parse_user_id(&user_id)?;

    let result = state.subscriptions.list(user_id).await;
    record_op_duration("list", start, result.is_ok());

    Ok(Json(result?))
}

/// PUT /api/v1/subscriptions/{id}
pub async fn update_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SubscriptionDraft>, JsonRejection>,
) -> ApiResult<Json<Subscription>> {
    let id = parse_subscription_id(&id)?;
    let Json(draft) = payload?;

    replace(&state, id, &draft).await
}

/// PUT /api/v1/subscriptions
pub async fn update_subscription_from_body(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSubscriptionRequest>, JsonRejection>,
) -> ApiResult<Json<Subscription>> {
    let Json(req) = payload?;
    let id = parse_subscription_id(&req.id)?;

    replace(&state, id, &req.draft).await
}

async fn replace(
    state: &AppState,
    id: SubscriptionId,
    draft: &SubscriptionDraft,
) -> ApiResult<Json<Subscription>> {
    let start = Instant::now();

    let result = state.subscriptions.update(id, draft).await;
    record_op_duration("update", start, result.is_ok());

    Ok(Json(result?))
}

/// DELETE /api/v1/subscriptions/{id}
pub async fn delete_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let start = Instant::now();
    let id = parse_subscription_id(&id)?;

    let result = state.subscriptions.delete(id).await;
    record_op_duration("delete", start, result.is_ok());
    result?;

    metrics::counter!("subscriptions_deleted_total").increment(1);

    Ok(StatusCode::NO_CONTENT)
}
