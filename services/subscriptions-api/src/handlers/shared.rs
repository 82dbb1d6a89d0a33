//! Shared handler utilities
//!
//! Identifier parsing and metrics helpers used across handlers.

use std::time::Instant;

use subtrack_types::{SubscriptionId, UserId, ValidationError};

// ============================================================================
// Input Parsing
// ============================================================================

/// Parse a subscription ID from a path or body value
pub fn parse_subscription_id(raw: &str) -> Result<SubscriptionId, ValidationError> {
    SubscriptionId::parse(raw.trim()).map_err(|_| ValidationError::MalformedField {
        field: "id",
        value: raw.to_string(),
    })
}

/// Parse a user ID from a path or query value
pub fn parse_user_id(raw: &str) -> Result<UserId, ValidationError> {
    UserId::parse(raw.trim()).map_err(|_| ValidationError::MalformedField {
        field: "user_id",
        value: raw.to_string(),
    })
}

// ============================================================================
// Metrics Helpers
// ============================================================================

/// Record HTTP operation duration with result label.
///
/// Labels: operation, result (ok/err)
#[inline]
pub fn record_op_duration(operation: &'static str, start: Instant, success: bool) {
    let result = if success { "ok" } else { "err" };
    metrics::histogram!(
        "subscriptions_operation_duration_seconds",
        "operation" => operation,
        "result" => result
    )
    .record(start.elapsed().as_secs_f64());
}

// ============================================================================
// Tests
// ============================================================================
