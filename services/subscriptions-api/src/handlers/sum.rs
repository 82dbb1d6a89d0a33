//! Aggregation handler

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::time::Instant;

use subtrack_types::{parse_date, AggregationQuery, AggregationResult, ValidationError};

use super::shared::{parse_user_id, record_op_duration};
use crate::error::ApiResult;
use crate::state::AppState;

/// Raw query string for the sum endpoint.
///
/// Every field is optional at this layer so that a missing or malformed
/// value is reported as a field error rather than a generic rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SumParams {
    pub user_id: Option<String>,
    pub service_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/v1/subscriptions/sum
pub async fn sum_subscriptions(
    State(state): State<AppState>,
    params: Result<Query<SumParams>, QueryRejection>,
) -> ApiResult<Json<AggregationResult>> {
    let start = Instant::now();
    let Query(params) = params?;
    let query = parse_sum_params(params)?;

    let result = state.subscriptions.sum(&query).await;
    record_op_duration("sum", start, result.is_ok());

    Ok(Json(result?))
}

/// Turn raw query parameters into an [`AggregationQuery`].
///
/// An empty `end_date` means an open window.
pub fn parse_sum_params(params: SumParams) -> Result<AggregationQuery, ValidationError> {
    let user_id = params
        .user_id
        .ok_or(ValidationError::MissingField("user_id"))
        .and_then(|raw| parse_user_id(&raw))?;

    let start_date = match params.start_date.as_deref().map(str::trim) {
        None | Some("") => return Err(ValidationError::MissingField("start_date")),
        Some(raw) => parse_date("start_date", raw)?,
    };

    let end_date = match params.end_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(parse_date("end_date", raw)?),
    };

    Ok(AggregationQuery {
        user_id,
        service_name: params.service_name.unwrap_or_default(),
        start_date,
        end_date,
    })
}
