//! Repository traits
//!
//! Async store interfaces for subscription records. The capability is split
//! so read-only consumers never see the mutating half.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use subtrack_types::{NewSubscription, Subscription};

use crate::error::DbResult;
use crate::models::SubscriptionRow;

/// Read access to subscription records
#[async_trait]
pub trait SubscriptionReader: Send + Sync {
    /// Find a subscription by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<SubscriptionRow>>;

    /// Find all subscriptions for a user, in no particular order
    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<SubscriptionRow>>;
}

/// Full subscription repository
///
/// Performs no business validation. Every method is a single statement, so
/// atomicity holds per call and nothing more.
#[async_trait]
pub trait SubscriptionRepository: SubscriptionReader {
    /// Insert a subscription under a freshly generated ID and return that ID
    async fn create(&self, sub: CreateSubscription) -> DbResult<Uuid>;

    /// Replace every attribute of an existing subscription.
    ///
    /// Returns [`DbError::NotFound`](crate::DbError::NotFound) when no row has
    /// the given ID.
    async fn update(&self, sub: UpdateSubscription) -> DbResult<SubscriptionRow>;

    /// Delete a subscription. Deleting a missing ID succeeds.
    async fn delete(&self, id: Uuid) -> DbResult<()>;
}

/// Create subscription input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSubscription {
    pub user_id: Uuid,
    pub service_name: String,
    pub price: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl From<NewSubscription> for CreateSubscription {
    fn from(sub: NewSubscription) -> Self {
        Self {
            user_id: sub.user_id.0,
            service_name: sub.service_name,
            price: sub.price,
            start_date: sub.start_date,
            end_date: sub.end_date,
        }
    }
}

/// Update subscription input (full replace by ID)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSubscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_name: String,
    pub price: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl From<Subscription> for UpdateSubscription {
    fn from(sub: Subscription) -> Self {
        Self {
            id: sub.id.0,
            user_id: sub.user_id.0,
            service_name: sub.service_name,
            price: sub.price,
            start_date: sub.start_date,
            end_date: sub.end_date,
        }
    }
}
