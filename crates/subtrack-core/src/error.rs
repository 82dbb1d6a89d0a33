//! Subscription errors

use subtrack_db::DbError;
use subtrack_types::{SubscriptionId, ValidationError};
use thiserror::Error;

/// Errors surfaced by the lifecycle service and aggregation engine
#[derive(Error, Debug)]
pub enum SubscriptionError {
    /// Payload or query failed validation; the store was not touched
    #[error("invalid field: {0}")]
    InvalidField(#[from] ValidationError),

    /// No subscription with this ID
    #[error("subscription not found: {0}")]
    NotFound(SubscriptionId),

    /// The store failed for a reason other than a missing record
    #[error("store unavailable: {operation} {target}")]
    StoreUnavailable {
        /// Operation that was running
        operation: &'static str,
        /// Subscription or user the operation targeted
        target: String,
        #[source]
        source: DbError,
    },
}

impl SubscriptionError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if the caller is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidField(_) | Self::NotFound(_))
    }

    /// Wrap a store failure with operation context
    pub(crate) fn store(
        operation: &'static str,
        target: impl std::fmt::Display,
    ) -> impl FnOnce(DbError) -> Self {
        let target = target.to_string();
        move |source| {
            tracing::error!(
                operation,
                subject = %target,
                error = %source,
                "Subscription store call failed"
            );
            Self::StoreUnavailable {
                operation,
                target,
                source,
            }
        }
    }
}
