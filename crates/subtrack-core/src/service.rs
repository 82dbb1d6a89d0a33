//! Subscription lifecycle service - ties together validation, the store, and aggregation

use std::sync::Arc;

use subtrack_db::{CreateSubscription, DbError, SubscriptionRepository, UpdateSubscription};
use subtrack_types::{
    validate_subscription, AggregationQuery, AggregationResult, Subscription, SubscriptionDraft,
    SubscriptionId, UserId,
};
use tracing::instrument;

use crate::{AggregationEngine, SubscriptionError};

/// Subscription service
///
/// Provides a unified interface for:
/// - Creating, reading, updating and deleting subscriptions
/// - Listing a user's subscriptions
/// - Summing spend over a date window
///
/// Holds no state of its own beyond the injected store, so one instance
/// serves any number of concurrent callers. Store failures are surfaced
/// immediately and never retried.
pub struct SubscriptionService<R: ?Sized> {
    repo: Arc<R>,
    aggregation: AggregationEngine<R>,
}

impl<R: SubscriptionRepository + ?Sized> SubscriptionService<R> {
    /// Create a new subscription service
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            aggregation: AggregationEngine::new(Arc::clone(&repo)),
            repo,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Validate and store a new subscription, returning its assigned ID
    #[instrument(skip(self, draft), fields(user_id = %draft.user_id))]
    pub async fn create(
        &self,
        draft: &SubscriptionDraft,
    ) -> Result<SubscriptionId, SubscriptionError> {
        let sub = validate_subscription(draft)?;

        let id = self
            .repo
            .create(CreateSubscription::from(sub))
            .await
            .map(SubscriptionId)
            .map_err(SubscriptionError::store("create", draft.user_id))?;

        tracing::info!(subscription_id = %id, "Subscription created");
        Ok(id)
    }

    /// Get a subscription by ID
    #[instrument(skip(self))]
    pub async fn read(&self, id: SubscriptionId) -> Result<Subscription, SubscriptionError> {
        self.repo
            .find_by_id(id.0)
            .await
            .map_err(SubscriptionError::store("read", id))?
            .map(Subscription::from)
            .ok_or(SubscriptionError::NotFound(id))
    }

    /// All subscriptions of a user; empty when the user has none
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Subscription>, SubscriptionError> {
        let rows = self
            .repo
            .find_by_user_id(user_id.0)
            .await
            .map_err(SubscriptionError::store("list", user_id))?;

        tracing::debug!(count = rows.len(), "Subscriptions listed");
        Ok(rows.into_iter().map(Subscription::from).collect())
    }

    /// Replace every attribute of an existing subscription.
    ///
    /// Validation runs first. The store's update is a single conditional
    /// statement, so a missing ID is reported by the write itself and there
    /// is no window between an existence check and the write.
    #[instrument(skip(self, draft), fields(user_id = %draft.user_id))]
    pub async fn update(
        &self,
        id: SubscriptionId,
        draft: &SubscriptionDraft,
    ) -> Result<Subscription, SubscriptionError> {
        let sub = validate_subscription(draft)?.with_id(id);

        let row = match self.repo.update(UpdateSubscription::from(sub)).await {
            Ok(row) => row,
            Err(DbError::NotFound) => return Err(SubscriptionError::NotFound(id)),
            Err(e) => return Err(SubscriptionError::store("update", id)(e)),
        };

        tracing::info!("Subscription updated");
        Ok(Subscription::from(row))
    }

    /// Delete a subscription. Deleting a missing ID succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: SubscriptionId) -> Result<(), SubscriptionError> {
        self.repo
            .delete(id.0)
            .await
            .map_err(SubscriptionError::store("delete", id))?;

        tracing::info!("Subscription deleted");
        Ok(())
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Total price of a user's subscriptions to one service within a window
    pub async fn sum(
        &self,
        query: &AggregationQuery,
    ) -> Result<AggregationResult, SubscriptionError> {
        self.aggregation.sum(query).await
    }
}
